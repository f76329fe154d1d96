pub mod cross_entropy;
pub mod options;

pub use cross_entropy::{cross_entropy, BinaryCrossEntropy};
pub use options::{CrossEntropyOptions, LengthPolicy, Reduction};
