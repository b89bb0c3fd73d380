use serde::Serialize;

use crate::normalize::normalize_text;

/// Sentinel used in the source table when no occupation code applies.
pub const CBOS_NAO_APLICAVEL: &str = "-";

/// One row of the TUSS procedure table.
///
/// Codes are kept as strings: most are 8 digits but a few are shorter, and
/// they are NOT unique. One billing code can carry several
/// specialty-qualified descriptions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TussRecord {
    pub code: &'static str,        // e.g. "10101012"
    pub description: &'static str, // e.g. "CONSULTA REUMATOLOGISTA"
    pub cbos: &'static str,        // CBO occupation code, "-" or "" when absent
    pub category: &'static str,    // e.g. "Consultas"
}

impl TussRecord {
    /// Exact match against the stored code.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code == code
    }

    /// Raw substring match against the stored code, no normalization.
    pub fn code_contains(&self, fragment: &str) -> bool {
        self.code.contains(fragment)
    }

    /// Accent- and case-insensitive substring match against the description.
    pub fn description_contains(&self, search: &str) -> bool {
        normalize_text(self.description).contains(&normalize_text(search))
    }

    /// Exact, case-sensitive match against the category label.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Whether the row carries a usable CBO occupation code, as opposed to
    /// the "-" sentinel or an empty field.
    pub fn has_cbos(&self) -> bool {
        !self.cbos.is_empty() && self.cbos != CBOS_NAO_APLICAVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: TussRecord = TussRecord {
        code: "10101012",
        description: "CONSULTA REUMATOLOGISTA",
        cbos: "225136",
        category: "Consultas",
    };

    #[test]
    fn test_matches_code_is_exact() {
        assert!(RECORD.matches_code("10101012"));
        assert!(!RECORD.matches_code("1010101"));
        assert!(!RECORD.matches_code("10101012 "));
        assert!(!RECORD.matches_code(""));
    }

    #[test]
    fn test_code_contains_is_raw() {
        assert!(RECORD.code_contains("10101012"));
        assert!(RECORD.code_contains("0101"));
        assert!(RECORD.code_contains(""));
        assert!(!RECORD.code_contains("10.10"));
        assert!(!RECORD.code_contains("99"));
    }

    #[test]
    fn test_description_contains_folds_case_and_accents() {
        assert!(RECORD.description_contains("reumatologista"));
        assert!(RECORD.description_contains("REUMATOLOGISTA"));
        assert!(RECORD.description_contains("reumátológistà"));
        assert!(RECORD.description_contains("consulta reuma"));
        assert!(!RECORD.description_contains("cardiologista"));
    }

    #[test]
    fn test_matches_category_is_case_sensitive() {
        assert!(RECORD.matches_category("Consultas"));
        assert!(!RECORD.matches_category("consultas"));
        assert!(!RECORD.matches_category("Consultas "));
    }

    #[test]
    fn test_has_cbos_recognizes_sentinels() {
        assert!(RECORD.has_cbos());

        let sem_cbos = TussRecord { cbos: "-", ..RECORD };
        assert!(!sem_cbos.has_cbos());

        let vazio = TussRecord { cbos: "", ..RECORD };
        assert!(!vazio.has_cbos());

        // Small numeric and non-numeric markers do occur in the source
        // table; they still count as a present value.
        let marcador = TussRecord { cbos: "0", ..RECORD };
        assert!(marcador.has_cbos());
        let sp = TussRecord { cbos: "SP", ..RECORD };
        assert!(sp.has_cbos());
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_string(&RECORD).unwrap();
        assert!(json.contains("10101012"));
        assert!(json.contains("CONSULTA REUMATOLOGISTA"));
        assert!(json.contains("Consultas"));
    }
}
