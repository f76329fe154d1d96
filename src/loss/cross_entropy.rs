use crate::error::{NumericError, Result};
use crate::loss::options::{CrossEntropyOptions, LengthPolicy, Reduction};

/// Binary cross-entropy between ground-truth labels and predicted
/// probabilities.
///
/// Labels are conventionally 0 or 1; probabilities must lie strictly inside
/// (0, 1). The i-th label is paired with the i-th probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryCrossEntropy {
    options: CrossEntropyOptions,
}

impl BinaryCrossEntropy {
    /// Strict length checking, summed loss.
    pub fn new() -> Self {
        BinaryCrossEntropy::default()
    }

    pub fn with_options(options: CrossEntropyOptions) -> Self {
        BinaryCrossEntropy { options }
    }

    pub fn options(&self) -> CrossEntropyOptions {
        self.options
    }

    /// Scalar loss: -Σ [y·ln(p) + (1-y)·ln(1-p)], optionally divided by the
    /// number of evaluated pairs. Empty input yields `0.0`.
    pub fn loss(&self, labels: &[f64], probabilities: &[f64]) -> Result<f64> {
        let terms = self.per_sample(labels, probabilities)?;
        let total: f64 = terms.iter().sum();
        if !total.is_finite() {
            log::warn!("cross-entropy over {} pairs overflowed to {total}", terms.len());
            return Err(NumericError::Overflow { value: total });
        }

        let loss = match self.options.reduction {
            Reduction::Sum => total,
            Reduction::Mean if terms.is_empty() => 0.0,
            Reduction::Mean => total / terms.len() as f64,
        };
        log::debug!("binary cross-entropy over {} pairs: {loss}", terms.len());
        Ok(loss)
    }

    /// Per-pair terms -(y·ln(p) + (1-y)·ln(1-p)), in input order.
    pub fn per_sample(&self, labels: &[f64], probabilities: &[f64]) -> Result<Vec<f64>> {
        let n = self.paired_len(labels.len(), probabilities.len())?;

        labels[..n]
            .iter()
            .zip(probabilities[..n].iter())
            .enumerate()
            .map(|(index, (&y, &p))| pair_term(index, y, p))
            .collect()
    }

    /// Number of pairs to evaluate under the configured length policy.
    fn paired_len(&self, labels: usize, probabilities: usize) -> Result<usize> {
        if labels == probabilities {
            return Ok(labels);
        }
        match self.options.length_policy {
            LengthPolicy::Strict => {
                log::warn!(
                    "rejecting cross-entropy input: {labels} labels, {probabilities} probabilities"
                );
                Err(NumericError::LengthMismatch { labels, probabilities })
            }
            LengthPolicy::Truncate => {
                let n = labels.min(probabilities);
                log::warn!(
                    "truncating cross-entropy input to {n} pairs, ignoring {} trailing values",
                    labels.max(probabilities) - n
                );
                Ok(n)
            }
        }
    }
}

fn pair_term(index: usize, y: f64, p: f64) -> Result<f64> {
    if !y.is_finite() {
        log::warn!("non-finite label {y} at index {index}");
        return Err(NumericError::NonFinite { index, value: y });
    }
    // Written so that NaN also fails the check.
    if !(p > 0.0 && p < 1.0) {
        log::warn!("probability {p} at index {index} outside (0, 1)");
        return Err(NumericError::Domain { index, value: p });
    }
    let term = -(y * p.ln() + (1.0 - y) * (1.0 - p).ln());
    if !term.is_finite() {
        log::warn!("cross-entropy term at index {index} overflowed to {term} (label {y})");
        return Err(NumericError::Overflow { value: term });
    }
    Ok(term)
}

/// Total binary cross-entropy with strict length checking.
///
/// ```
/// let ce = ferrite_primitives::cross_entropy(&[1.0, 0.0], &[0.5, 0.5]).unwrap();
/// assert!((ce - 2.0 * std::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub fn cross_entropy(labels: &[f64], probabilities: &[f64]) -> Result<f64> {
    BinaryCrossEntropy::new().loss(labels, probabilities)
}
