use thiserror::Error;

/// Errors raised by the loss and activation functions.
///
/// Every variant is produced before any partial result escapes, so a caller
/// never sees a NaN or infinite value from this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    /// A probability fell outside the open interval (0, 1), which would take
    /// the logarithm of zero or of a negative number.
    #[error("probability {value} at index {index} is outside the open interval (0, 1)")]
    Domain { index: usize, value: f64 },

    #[error("length mismatch: {labels} labels but {probabilities} probabilities")]
    LengthMismatch { labels: usize, probabilities: usize },

    #[error("softmax requires at least one logit")]
    EmptyInput,

    /// NaN or infinite label/logit.
    #[error("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    /// Finite inputs whose loss does not fit in an `f64`.
    #[error("loss overflowed to {value}")]
    Overflow { value: f64 },
}

pub type Result<T> = std::result::Result<T, NumericError>;
