//! Softmax over a sequence of logits.
//!
//! Both entry points subtract the largest logit before exponentiating, so
//! `exp()` never sees a positive argument and cannot overflow. The result is
//! the same as `exp(x_i) / Σ exp(x_j)` evaluated exactly.

use crate::error::{NumericError, Result};

/// Returns `exp(x_i - max) / Σ_j exp(x_j - max)` for every logit.
///
/// # Errors
/// `EmptyInput` for an empty slice, `NonFinite` if any logit is NaN or ±inf.
pub fn softmax(logits: &[f64]) -> Result<Vec<f64>> {
    let mut out = logits.to_vec();
    softmax_in_place(&mut out)?;
    Ok(out)
}

/// In-place variant of [`softmax`]. On error the buffer is left untouched.
pub fn softmax_in_place(values: &mut [f64]) -> Result<()> {
    if values.is_empty() {
        log::warn!("softmax called with no logits");
        return Err(NumericError::EmptyInput);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        log::warn!("softmax rejected non-finite logit {value} at index {index}");
        return Err(NumericError::NonFinite { index, value });
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut sum = 0.0;
    for x in values.iter_mut() {
        *x = (*x - max).exp();
        sum += *x;
    }

    // sum >= 1: the max element contributes exp(0).
    for x in values.iter_mut() {
        *x /= sum;
    }

    log::debug!("softmax over {} logits (max {max})", values.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!((a - e).abs() < tol, "index {i}: {a} vs {e}");
        }
    }

    #[test]
    fn uniform_logits_give_uniform_distribution() {
        let s = softmax(&[1.0, 1.0, 1.0]).unwrap();
        assert_close(&s, &[1.0 / 3.0; 3], 1e-12);
    }

    #[test]
    fn one_two_three() {
        let s = softmax(&[1.0, 2.0, 3.0]).unwrap();
        assert_close(&s, &[0.0900, 0.2447, 0.6652], 1e-4);
        assert_close(
            &s,
            &[0.09003057317038046, 0.24472847105479767, 0.6652409557748219],
            1e-12,
        );
    }

    #[test]
    fn single_logit_is_certain() {
        assert_eq!(softmax(&[-42.0]).unwrap(), vec![1.0]);
    }

    #[test]
    fn large_logits_do_not_overflow() {
        // exp(1000) overflows f64; the shifted form does not.
        let big = softmax(&[1000.0, 1001.0, 1002.0]).unwrap();
        let small = softmax(&[0.0, 1.0, 2.0]).unwrap();
        assert!(big.iter().all(|x| x.is_finite()));
        assert_close(&big, &small, 1e-12);
    }

    #[test]
    fn very_negative_logits_do_not_underflow_to_nan() {
        let s = softmax(&[-1000.0, -1000.0]).unwrap();
        assert_close(&s, &[0.5, 0.5], 1e-12);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(softmax(&[]), Err(NumericError::EmptyInput));
    }

    #[test]
    fn non_finite_logits_are_rejected() {
        assert_eq!(
            softmax(&[0.0, f64::INFINITY]),
            Err(NumericError::NonFinite { index: 1, value: f64::INFINITY })
        );
        assert!(matches!(
            softmax(&[f64::NAN, 1.0]),
            Err(NumericError::NonFinite { index: 0, value }) if value.is_nan()
        ));
    }

    #[test]
    fn in_place_leaves_buffer_untouched_on_error() {
        let mut buf = [1.0, f64::NEG_INFINITY, 3.0];
        assert!(softmax_in_place(&mut buf).is_err());
        assert_eq!(buf[0], 1.0);
        assert_eq!(buf[2], 3.0);
    }

    #[test]
    fn in_place_matches_allocating_version() {
        let logits = [0.3, -1.2, 4.0, 2.2];
        let mut buf = logits;
        softmax_in_place(&mut buf).unwrap();
        assert_eq!(buf.to_vec(), softmax(&logits).unwrap());
    }

    proptest! {
        #[test]
        fn prop_sums_to_one(logits in proptest::collection::vec(-500.0f64..500.0, 1..64)) {
            let s = softmax(&logits).unwrap();
            let sum: f64 = s.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        }

        #[test]
        fn prop_strictly_inside_unit_interval(
            logits in proptest::collection::vec(-10.0f64..10.0, 2..64),
        ) {
            let s = softmax(&logits).unwrap();
            for (i, &v) in s.iter().enumerate() {
                prop_assert!(v > 0.0 && v < 1.0, "softmax[{i}] = {v}");
            }
        }

        #[test]
        fn prop_shift_invariant(
            logits in proptest::collection::vec(-10.0f64..10.0, 1..32),
            c in -100.0f64..100.0,
        ) {
            let shifted: Vec<f64> = logits.iter().map(|x| x + c).collect();
            let a = softmax(&logits).unwrap();
            let b = softmax(&shifted).unwrap();
            for (x, y) in a.iter().zip(b.iter()) {
                prop_assert!((x - y).abs() < 1e-9, "{x} vs {y}");
            }
        }

        #[test]
        fn prop_preserves_order(logits in proptest::collection::vec(-50.0f64..50.0, 2..16)) {
            let s = softmax(&logits).unwrap();
            for i in 0..logits.len() {
                for j in 0..logits.len() {
                    if logits[i] < logits[j] {
                        prop_assert!(s[i] <= s[j]);
                    }
                }
            }
        }
    }
}
