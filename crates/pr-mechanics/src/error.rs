//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A stat mode string did not name a known base-roll method.
    #[error("invalid stat mode: {0} (expected 3d6 or 4d6)")]
    InvalidStatMode(String),

    /// An attribute abbreviation was not recognized.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
