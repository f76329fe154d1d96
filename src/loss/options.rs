use serde::{Serialize, Deserialize};

/// How `BinaryCrossEntropy` treats label and probability sequences of
/// different lengths.
///
/// - `Strict`   — reject the call with `NumericError::LengthMismatch`.
/// - `Truncate` — pair elements up to the shorter sequence and ignore the
///   excess (zip semantics). A warning is logged with the dropped count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    #[default]
    Strict,
    Truncate,
}

/// How the per-element terms are combined into a single loss.
///
/// - `Sum`  — total loss, `-Σ [y·ln(p) + (1-y)·ln(1-p)]`.
/// - `Mean` — total loss divided by the number of evaluated pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

/// Options for a `BinaryCrossEntropy` instance.
///
/// Fields missing from a serialized form fall back to their defaults
/// (`Strict`, `Sum`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossEntropyOptions {
    pub length_policy: LengthPolicy,
    pub reduction: Reduction,
}

impl CrossEntropyOptions {
    pub fn new(length_policy: LengthPolicy, reduction: Reduction) -> Self {
        CrossEntropyOptions { length_policy, reduction }
    }
}
