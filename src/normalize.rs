use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a string for accent- and case-insensitive comparison: lowercases,
/// decomposes to NFD and drops the combining marks, so "Médico" and
/// "medico" compare equal.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Removes the period characters used as visual separators in procedure
/// codes ("10.10.101.2" -> "10101012"). Everything else passes through.
pub fn strip_periods(code: &str) -> String {
    code.chars().filter(|c| *c != '.').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_lowercases() {
        assert_eq!(normalize_text("CONSULTA"), "consulta");
        assert_eq!(normalize_text("Consulta"), "consulta");
        assert_eq!(normalize_text("consulta"), "consulta");
    }

    #[test]
    fn test_normalize_text_strips_diacritics() {
        assert_eq!(normalize_text("médico"), "medico");
        assert_eq!(normalize_text("CIRÚRGICO"), "cirurgico");
        assert_eq!(normalize_text("coração"), "coracao");
        assert_eq!(normalize_text("reumátológistà"), "reumatologista");
        assert_eq!(normalize_text("Exames e Diagnósticos"), "exames e diagnosticos");
    }

    #[test]
    fn test_normalize_text_leaves_ascii_untouched() {
        assert_eq!(normalize_text("hemograma completo"), "hemograma completo");
        assert_eq!(normalize_text("10101012"), "10101012");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_normalize_text_preserves_punctuation_and_spacing() {
        assert_eq!(
            normalize_text("CONSULTA COM ALERGOLOGISTA/ IMUNOLOGISTA"),
            "consulta com alergologista/ imunologista"
        );
    }

    #[test]
    fn test_strip_periods() {
        assert_eq!(strip_periods("10.10.101.2"), "10101012");
        assert_eq!(strip_periods("1.0.1.0.1.0.1.2"), "10101012");
        assert_eq!(strip_periods("10101012"), "10101012");
        assert_eq!(strip_periods(""), "");
        assert_eq!(strip_periods("..."), "");
    }

    #[test]
    fn test_strip_periods_keeps_non_period_characters() {
        assert_eq!(strip_periods("4.03.02.04-0"), "4030204-0");
        assert_eq!(strip_periods("abc.def"), "abcdef");
    }
}
