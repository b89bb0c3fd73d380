use thiserror::Error;

/// Centralized error type for the tuss crate
///
/// Lookups never fail (absence is the not-found signal); only the opt-in
/// table validation can produce these.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TussError {
    #[error("record {position}: empty code")]
    EmptyCode { position: usize },

    #[error("record {position} ({code}): empty description")]
    EmptyDescription { position: usize, code: String },

    #[error("record {position} ({code}): unknown category \"{category}\"")]
    UnknownCategory {
        position: usize,
        code: String,
        category: String,
    },
}

/// Alias for fallible operations in the tuss crate
pub type TussResult<T> = Result<T, TussError>;
