pub mod error;
pub mod activation;
pub mod loss;

// Convenience re-exports
pub use error::{NumericError, Result};
pub use activation::softmax::{softmax, softmax_in_place};
pub use loss::cross_entropy::{cross_entropy, BinaryCrossEntropy};
pub use loss::options::{CrossEntropyOptions, LengthPolicy, Reduction};
