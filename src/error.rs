use thiserror::Error;

/// Structural failures raised while reading an MRZ.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MrzError {
    /// A line is not exactly the TD3 width. Checked before any field is read.
    #[error("LengthError: line {line} must be {expected} characters (got {found})")]
    Length {
        line: u8,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, MrzError>;
