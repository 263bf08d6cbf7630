use thiserror::Error;

/// Failures of the digestion and statistics core. None of them are retried: the
/// computation is deterministic, so a run that hits one of these is aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadError {
    #[error("No such enzyme available: {}", .0.join(", "))]
    UnknownEnzyme(Vec<String>),

    #[error("Invalid cut site {position} reported for {enzyme} in sequence '{sequence}' (length {length}): {reason}")]
    InvalidCutSite {
        enzyme: String,
        sequence: String,
        position: usize,
        length: usize,
        reason: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Cannot compute genome fraction: total genome length is zero")]
    DivisionByZero,
}
