/// The five coarse groupings used to partition the TUSS table.
///
/// Category matching is exact and case-sensitive everywhere in this crate,
/// in deliberate contrast to the accent-folded description search.
pub const CONSULTAS: &str = "Consultas";
pub const PROCEDIMENTOS_CLINICOS: &str = "Procedimentos Clínicos";
pub const PROCEDIMENTOS_CIRURGICOS: &str = "Procedimentos Cirúrgicos";
pub const EXAMES_E_DIAGNOSTICOS: &str = "Exames e Diagnósticos";
pub const OUTROS: &str = "Outros";

pub const CATEGORIAS: &[&str] = &[
    CONSULTAS,
    PROCEDIMENTOS_CLINICOS,
    PROCEDIMENTOS_CIRURGICOS,
    EXAMES_E_DIAGNOSTICOS,
    OUTROS,
];

pub fn is_valid_categoria(categoria: &str) -> bool {
    CATEGORIAS.contains(&categoria)
}

pub fn get_all_categorias() -> Vec<&'static str> {
    CATEGORIAS.to_vec()
}

/// Splits a batch of labels into (valid, invalid), preserving input order.
pub fn validate_categorias<'a>(categorias: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for categoria in categorias {
        if is_valid_categoria(categoria) {
            valid.push(*categoria);
        } else {
            invalid.push(*categoria);
        }
    }

    (valid, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorias_constant() {
        assert_eq!(CATEGORIAS.len(), 5);
        assert!(CATEGORIAS.contains(&"Consultas"));
        assert!(CATEGORIAS.contains(&"Procedimentos Clínicos"));
        assert!(CATEGORIAS.contains(&"Procedimentos Cirúrgicos"));
        assert!(CATEGORIAS.contains(&"Exames e Diagnósticos"));
        assert!(CATEGORIAS.contains(&"Outros"));
    }

    #[test]
    fn test_categorias_uniqueness() {
        let mut labels = CATEGORIAS.to_vec();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), CATEGORIAS.len());
    }

    #[test]
    fn test_is_valid_categoria_is_case_sensitive() {
        assert!(is_valid_categoria("Consultas"));
        assert!(!is_valid_categoria("consultas"));
        assert!(!is_valid_categoria("CONSULTAS"));
        assert!(!is_valid_categoria("Consultas "));
        assert!(!is_valid_categoria(""));
        assert!(!is_valid_categoria("Exames e Diagnosticos")); // missing accent
    }

    #[test]
    fn test_get_all_categorias() {
        let labels = get_all_categorias();
        assert_eq!(labels.len(), CATEGORIAS.len());
        assert_eq!(labels[0], CONSULTAS);
        assert_eq!(labels[4], OUTROS);
    }

    #[test]
    fn test_validate_categorias() {
        let (valid, invalid) = validate_categorias(&["Consultas", "Outros"]);
        assert_eq!(valid, vec!["Consultas", "Outros"]);
        assert!(invalid.is_empty());

        let (valid, invalid) = validate_categorias(&["consultas", "Exames", "Outros"]);
        assert_eq!(valid, vec!["Outros"]);
        assert_eq!(invalid, vec!["consultas", "Exames"]);

        let (valid, invalid) = validate_categorias(&[]);
        assert!(valid.is_empty());
        assert!(invalid.is_empty());
    }
}
