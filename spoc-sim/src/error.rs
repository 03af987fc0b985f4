use thiserror::Error;

/// Errors raised by the graph generators and the alignment search.
///
/// Every error is fatal to the call that raised it; no partial result
/// is returned.
#[derive(Debug, Error)]
pub enum SimError {
    /// Shape mismatch, index out of range, or an invalid count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Numerically degenerate input, e.g., a probability outside `[0, 1]`.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, SimError>;

macro_rules! invalid_arg {
    ($($arg:tt)*) => {
        return Err($crate::error::SimError::InvalidArgument(format!($($arg)*)))
    };
}

pub(crate) use invalid_arg;
