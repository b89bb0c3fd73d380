use once_cell::sync::Lazy;

use crate::errors::{TussError, TussResult};
use crate::models::categorias::{CATEGORIAS, is_valid_categoria};
use crate::models::record::TussRecord;
use crate::normalize::{normalize_text, strip_periods};

pub mod consultas;
pub mod exames_diagnosticos;
pub mod outros;
pub mod procedimentos_cirurgicos;
pub mod procedimentos_clinicos;

pub use consultas::CONSULTAS_TUSS;
pub use exames_diagnosticos::EXAMES_E_DIAGNOSTICOS_TUSS;
pub use outros::OUTROS_TUSS;
pub use procedimentos_cirurgicos::PROCEDIMENTOS_CIRURGICOS_TUSS;
pub use procedimentos_clinicos::PROCEDIMENTOS_CLINICOS_TUSS;

/// The full procedure table, assembled once in source order: Consultas,
/// Procedimentos Clínicos, Procedimentos Cirúrgicos, Exames e
/// Diagnósticos, Outros. Read-only after assembly; every lookup borrows
/// from it for 'static.
pub static TABELA_TUSS: Lazy<Vec<TussRecord>> = Lazy::new(|| {
    [
        CONSULTAS_TUSS,
        PROCEDIMENTOS_CLINICOS_TUSS,
        PROCEDIMENTOS_CIRURGICOS_TUSS,
        EXAMES_E_DIAGNOSTICOS_TUSS,
        OUTROS_TUSS,
    ]
    .concat()
});

// Descriptions folded once (lowercase, accents stripped), parallel to
// TABELA_TUSS, so search does not re-normalize the table on every call.
static DESCRICOES_NORMALIZADAS: Lazy<Vec<String>> = Lazy::new(|| {
    TABELA_TUSS
        .iter()
        .map(|record| normalize_text(record.description))
        .collect()
});

/// Finds the first record (in table order) whose stored code equals the
/// input, before or after stripping "." separators ("10.10.101.2" and
/// "10101012" both resolve).
///
/// Codes are not unique; first-match-in-table-order is the contract here.
/// Use [`find_all_tuss_by_code`] when the other same-code rows matter.
pub fn find_tuss_by_code(code: &str) -> Option<&'static TussRecord> {
    let stripped = strip_periods(code);
    TABELA_TUSS
        .iter()
        .find(|record| record.code == code || record.code == stripped)
}

/// Every record sharing the given code, in table order. Accepts the same
/// "." separators as [`find_tuss_by_code`].
pub fn find_all_tuss_by_code(code: &str) -> Vec<&'static TussRecord> {
    let stripped = strip_periods(code);
    TABELA_TUSS
        .iter()
        .filter(|record| record.code == code || record.code == stripped)
        .collect()
}

/// Free-text search over the table, in table order. A record matches when
/// its description contains the query (case- and accent-insensitive on
/// both sides) OR its raw code contains the raw query. The two branches
/// are independent, so "10101012" finds every row sharing that code and
/// an empty query returns the whole table.
pub fn search_tuss(query: &str) -> Vec<&'static TussRecord> {
    let normalized_query = normalize_text(query);
    TABELA_TUSS
        .iter()
        .zip(DESCRICOES_NORMALIZADAS.iter())
        .filter(|(record, descricao)| {
            descricao.contains(&normalized_query) || record.code_contains(query)
        })
        .map(|(record, _)| record)
        .collect()
}

/// Filters the table by exact, case-sensitive category label. A label
/// that is not one of the canonical five (including case or whitespace
/// differences) silently yields an empty vec.
pub fn get_tuss_by_category(category: &str) -> Vec<&'static TussRecord> {
    TABELA_TUSS
        .iter()
        .filter(|record| record.matches_category(category))
        .collect()
}

pub fn is_valid_tuss_code(code: &str) -> bool {
    find_tuss_by_code(code).is_some()
}

/// Description of the first record carrying the code, if any.
pub fn get_tuss_description(code: &str) -> Option<&'static str> {
    find_tuss_by_code(code).map(|record| record.description)
}

/// All codes in table order, duplicates included.
pub fn get_all_tuss_codes() -> Vec<&'static str> {
    TABELA_TUSS.iter().map(|record| record.code).collect()
}

pub fn count_tuss() -> usize {
    TABELA_TUSS.len()
}

pub fn count_by_categoria(categoria: &str) -> usize {
    TABELA_TUSS
        .iter()
        .filter(|record| record.matches_category(categoria))
        .count()
}

/// Eager integrity check over the embedded table: non-empty code and
/// description, category among the canonical five. Queries stay
/// permissive regardless; this is for hosts that want to fail fast at
/// startup. Every offence is logged before the first error is returned.
pub fn validate_tabela() -> TussResult<()> {
    let mut first_error = None;

    for (position, record) in TABELA_TUSS.iter().enumerate() {
        let error = if record.code.is_empty() {
            Some(TussError::EmptyCode { position })
        } else if record.description.is_empty() {
            Some(TussError::EmptyDescription {
                position,
                code: record.code.to_string(),
            })
        } else if !is_valid_categoria(record.category) {
            Some(TussError::UnknownCategory {
                position,
                code: record.code.to_string(),
                category: record.category.to_string(),
            })
        } else {
            None
        };

        if let Some(error) = error {
            log::warn!("TUSS table: {}", error);
            first_error.get_or_insert(error);
        }
    }

    log::debug!(
        "TUSS table validated: {} records across {} categories",
        TABELA_TUSS.len(),
        CATEGORIAS.len()
    );

    match first_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::categorias;

    #[test]
    fn test_tabela_constant_exists() {
        assert!(!TABELA_TUSS.is_empty());
        assert_eq!(
            TABELA_TUSS.len(),
            CONSULTAS_TUSS.len()
                + PROCEDIMENTOS_CLINICOS_TUSS.len()
                + PROCEDIMENTOS_CIRURGICOS_TUSS.len()
                + EXAMES_E_DIAGNOSTICOS_TUSS.len()
                + OUTROS_TUSS.len()
        );
    }

    #[test]
    fn test_tabela_preserves_source_order() {
        assert_eq!(TABELA_TUSS[0], CONSULTAS_TUSS[0]);
        assert_eq!(
            TABELA_TUSS[CONSULTAS_TUSS.len()],
            PROCEDIMENTOS_CLINICOS_TUSS[0]
        );
        assert_eq!(*TABELA_TUSS.last().unwrap(), *OUTROS_TUSS.last().unwrap());
    }

    #[test]
    fn test_tabela_integrity() {
        for record in TABELA_TUSS.iter() {
            assert!(!record.code.is_empty(), "empty code in table");
            assert!(
                record.code.chars().all(|c| c.is_ascii_digit()),
                "non-numeric code: {}",
                record.code
            );
            assert!(
                !record.description.is_empty(),
                "empty description for {}",
                record.code
            );
            assert!(
                categorias::is_valid_categoria(record.category),
                "unknown category {} for {}",
                record.category,
                record.code
            );
        }
    }

    #[test]
    fn test_codes_are_not_unique() {
        // The source table carries one row per specialty under the same
        // billing code; that duplication is a domain fact, not a bug.
        let duplicates = find_all_tuss_by_code("10101012");
        assert!(duplicates.len() > 1);

        let descriptions: Vec<&str> = duplicates.iter().map(|r| r.description).collect();
        assert!(descriptions.contains(&"CONSULTA REUMATOLOGISTA"));
        assert!(descriptions.contains(&"CONSULTA COM ALERGOLOGISTA/ IMUNOLOGISTA"));
        assert!(descriptions.contains(&"CONSULTA COM CLÍNICO GERAL"));
    }

    #[test]
    fn test_find_tuss_by_code_exact() {
        let record = find_tuss_by_code("40302040").unwrap();
        assert_eq!(record.code, "40302040");
        assert!(record.description.starts_with("HEMOGRAMA"));

        let record = find_tuss_by_code("30801029").unwrap();
        assert_eq!(record.description, "CESARIANA");
    }

    #[test]
    fn test_find_tuss_by_code_strips_periods() {
        let dotted = find_tuss_by_code("10.10.101.2").unwrap();
        let plain = find_tuss_by_code("10101012").unwrap();
        assert_eq!(dotted, plain);

        // Periods may be inserted anywhere, not only at group boundaries.
        let scattered = find_tuss_by_code("1.0.1.0.1.0.1.2").unwrap();
        assert_eq!(scattered, plain);
    }

    #[test]
    fn test_find_tuss_by_code_first_match_wins() {
        // 10101012 has many rows; the first in table order is returned.
        let first = find_tuss_by_code("10101012").unwrap();
        assert_eq!(*first, CONSULTAS_TUSS[0]);
    }

    #[test]
    fn test_find_tuss_by_code_absent() {
        assert!(find_tuss_by_code("99999999").is_none());
        assert!(find_tuss_by_code("").is_none());
        assert!(find_tuss_by_code("abc").is_none());
        assert!(find_tuss_by_code("10101012 ").is_none());
    }

    #[test]
    fn test_find_all_tuss_by_code_accepts_periods() {
        assert_eq!(
            find_all_tuss_by_code("10.10.101.2"),
            find_all_tuss_by_code("10101012")
        );
        assert!(find_all_tuss_by_code("99999999").is_empty());
    }

    #[test]
    fn test_search_tuss_empty_query_returns_whole_table() {
        let results = search_tuss("");
        assert_eq!(results.len(), TABELA_TUSS.len());
        assert_eq!(*results[0], TABELA_TUSS[0]);
        assert_eq!(**results.last().unwrap(), *TABELA_TUSS.last().unwrap());
    }

    #[test]
    fn test_search_tuss_is_case_and_accent_insensitive() {
        let lower = search_tuss("reumatologista");
        let upper = search_tuss("REUMATOLOGISTA");
        let accented = search_tuss("reumátológistà");

        assert_eq!(lower, upper);
        assert_eq!(lower, accented);
        assert!(
            lower
                .iter()
                .any(|r| r.code == "10101012" && r.description == "CONSULTA REUMATOLOGISTA")
        );
    }

    #[test]
    fn test_search_tuss_folds_table_side_accents() {
        // "clínico" is stored with the accent; the plain query must hit it.
        let results = search_tuss("clinico geral");
        assert!(
            results
                .iter()
                .any(|r| r.description == "CONSULTA COM CLÍNICO GERAL")
        );

        let results = search_tuss("ultrassonografia de tireoide");
        assert!(results.iter().any(|r| r.code == "40602044"));
    }

    #[test]
    fn test_search_tuss_matches_raw_code_substring() {
        let results = search_tuss("10101012");
        let all = find_all_tuss_by_code("10101012");
        assert_eq!(results.len(), all.len());
        for record in &all {
            assert!(results.contains(record));
        }

        // Code branch is raw: a dotted query matches no code and, being
        // non-text, no description either.
        assert!(search_tuss("10.10.101.2").is_empty());
    }

    #[test]
    fn test_search_tuss_preserves_table_order() {
        let results = search_tuss("consulta");
        let positions: Vec<usize> = results
            .iter()
            .map(|record| {
                TABELA_TUSS
                    .iter()
                    .position(|r| std::ptr::eq(r, *record))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_tuss_no_match() {
        assert!(search_tuss("xyzzy").is_empty());
        assert!(search_tuss("🚀").is_empty());
    }

    #[test]
    fn test_search_tuss_is_idempotent() {
        let first = search_tuss("consulta");
        let second = search_tuss("consulta");
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_tuss_by_category_exact() {
        let consultas = get_tuss_by_category("Consultas");
        assert_eq!(consultas.len(), CONSULTAS_TUSS.len());
        for record in &consultas {
            assert_eq!(record.category, "Consultas");
        }
    }

    #[test]
    fn test_get_tuss_by_category_is_case_sensitive() {
        // Deliberate contrast with search_tuss: no normalization here.
        assert!(get_tuss_by_category("consultas").is_empty());
        assert!(get_tuss_by_category("CONSULTAS").is_empty());
        assert!(get_tuss_by_category("Consultas ").is_empty());
        assert!(get_tuss_by_category("").is_empty());
        assert!(get_tuss_by_category("Exames e Diagnosticos").is_empty());
    }

    #[test]
    fn test_get_tuss_by_category_covers_all_labels() {
        let mut total = 0;
        for categoria in categorias::CATEGORIAS {
            let records = get_tuss_by_category(categoria);
            assert!(!records.is_empty(), "category without records: {categoria}");
            total += records.len();
        }
        assert_eq!(total, TABELA_TUSS.len());
    }

    #[test]
    fn test_round_trip_every_code() {
        for record in TABELA_TUSS.iter() {
            let found = find_tuss_by_code(record.code).unwrap();
            // With duplicate codes the returned row may be an earlier one
            // sharing the code; only the code itself round-trips.
            assert_eq!(found.code, record.code);
        }
    }

    #[test]
    fn test_is_valid_tuss_code() {
        assert!(is_valid_tuss_code("10101012"));
        assert!(is_valid_tuss_code("10.10.101.2"));
        assert!(!is_valid_tuss_code("99999999"));
        assert!(!is_valid_tuss_code(""));
    }

    #[test]
    fn test_get_tuss_description() {
        assert_eq!(get_tuss_description("30801029"), Some("CESARIANA"));
        assert_eq!(get_tuss_description("99999999"), None);
    }

    #[test]
    fn test_get_all_tuss_codes_keeps_duplicates() {
        let codes = get_all_tuss_codes();
        assert_eq!(codes.len(), TABELA_TUSS.len());
        assert!(codes.iter().filter(|c| **c == "10101012").count() > 1);
    }

    #[test]
    fn test_count_helpers() {
        assert_eq!(count_tuss(), TABELA_TUSS.len());
        assert_eq!(count_by_categoria("Consultas"), CONSULTAS_TUSS.len());
        assert_eq!(count_by_categoria("consultas"), 0);

        let per_category: usize = categorias::CATEGORIAS
            .iter()
            .map(|c| count_by_categoria(c))
            .sum();
        assert_eq!(per_category, count_tuss());
    }

    #[test]
    fn test_short_codes_resolve_exactly() {
        // A few source rows carry codes shorter than 8 digits.
        let record = find_tuss_by_code("980010").unwrap();
        assert_eq!(record.code, "980010");
        assert_eq!(record.category, "Outros");
    }

    #[test]
    fn test_cbos_sentinels_present() {
        assert!(TABELA_TUSS.iter().any(|r| r.cbos == "-"));
        assert!(TABELA_TUSS.iter().any(|r| r.cbos.is_empty()));
        assert!(TABELA_TUSS.iter().any(|r| r.cbos == "SP"));
        assert!(TABELA_TUSS.iter().any(|r| r.has_cbos()));
    }

    #[test]
    fn test_validate_tabela_passes_on_embedded_data() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(validate_tabela(), Ok(()));
    }

    #[test]
    fn test_record_serialization() {
        let record = &TABELA_TUSS[0];
        let json = serde_json::to_string(record).unwrap();
        assert!(json.contains(record.code));
        assert!(json.contains(record.category));
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    assert!(find_tuss_by_code("10101012").is_some());
                    assert!(!search_tuss("consulta").is_empty());
                    assert!(!get_tuss_by_category("Outros").is_empty());
                    assert_eq!(search_tuss("").len(), count_tuss());
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
