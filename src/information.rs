// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Information-theoretic metrics: discrete entropy, KL divergence and its
//! novelty / transience / resonance derivatives, and mutual information.
//!
//! All functions are single-pass arithmetic over in-memory data. Log bases
//! are caller-chosen (2 for bits, e for nats, 10 for bans); distributions
//! are taken as given and never renormalized beyond what each formula
//! states.

use crate::error::{DistributionError, Result, SequenceError};
use ndarray::{Array2, ArrayView1};
use std::collections::HashMap;
use std::hash::Hash;

/// Shannon entropy of the empirical distribution of `values`.
///
/// Observations are tallied by exact equality; when `counts` is given, each
/// value contributes its paired count instead of 1 (pairs beyond the
/// shorter of the two inputs are ignored, as in a zip). The tally is
/// normalized before the entropy is taken, so inputs may be raw
/// observations or pre-counted categories.
///
/// ```
/// use rocs::discrete_entropy;
///
/// // A fair coin carries exactly one bit.
/// let h = discrete_entropy(["heads", "tails"], None, 2.0);
/// assert!((h - 1.0).abs() < 1e-12);
/// ```
pub fn discrete_entropy<I, T>(values: I, counts: Option<&[u64]>, base: f64) -> f64
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut tally: HashMap<T, u64> = HashMap::new();
    match counts {
        None => {
            for v in values {
                *tally.entry(v).or_insert(0) += 1;
            }
        }
        Some(counts) => {
            for (v, &c) in values.into_iter().zip(counts) {
                *tally.entry(v).or_insert(0) += c;
            }
        }
    }

    let total: u64 = tally.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    let nats: f64 = tally
        .values()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum();
    nats / base.ln()
}

/// Discrete Kullback-Leibler divergence D(p || q) = sum p_i log(p_i / q_i).
///
/// A zero ratio (category absent from the sample) is substituted with 1
/// before the log so it contributes nothing, following Jost (2021).
/// Categories present in `p` but absent from `q` produce an infinite
/// divergence through ordinary IEEE arithmetic; that is the answer, not a
/// fault.
///
/// # Errors
///
/// [`DistributionError::LengthMismatch`] when `p` and `q` differ in length.
pub fn kl_divergence(p: &[f64], q: &[f64], base: f64) -> Result<f64> {
    if p.len() != q.len() {
        return Err(DistributionError::LengthMismatch {
            left: p.len(),
            right: q.len(),
        }
        .into());
    }
    Ok(kl_pairs(p.iter().copied().zip(q.iter().copied()), base))
}

fn kl_pairs(pairs: impl Iterator<Item = (f64, f64)>, base: f64) -> f64 {
    let nats: f64 = pairs
        .map(|(pi, qi)| {
            let mut ratio = pi / qi;
            if ratio == 0.0 {
                ratio = 1.0;
            }
            pi * ratio.ln()
        })
        .sum();
    nats / base.ln()
}

fn kl_rows(p: ArrayView1<f64>, q: ArrayView1<f64>, base: f64) -> f64 {
    kl_pairs(p.iter().copied().zip(q.iter().copied()), base)
}

/// Novelty, transience, and resonance of a sequence of distributions.
///
/// Rows of `thetas` are distributions (e.g. topic mixtures) ordered in
/// time. For each center row `j` at least `window` rows from either end
/// (Barron et al. 2018):
///
/// - novelty  N_w(j) = mean over k in 1..=w of D(row[j-k] || row[j])
/// - transience T_w(j) = mean over k in 1..=w of D(row[j+k] || row[j])
/// - resonance R_w(j) = N_w(j) - T_w(j)
///
/// KL divergences use base 2. The three returned vectors each have
/// `rows - 2 * window` entries; they are empty when the sequence is too
/// short to host any center, which is not an error.
///
/// # Errors
///
/// [`SequenceError::ZeroWindow`] when `window` is 0.
#[allow(clippy::type_complexity)]
pub fn novelty_transience_resonance(
    thetas: &Array2<f64>,
    window: usize,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    if window == 0 {
        return Err(SequenceError::ZeroWindow.into());
    }

    let rows = thetas.nrows();
    let mut novelties = Vec::new();
    let mut transiences = Vec::new();
    let mut resonances = Vec::new();

    if rows <= 2 * window {
        return Ok((novelties, transiences, resonances));
    }

    for j in window..rows - window {
        let center = thetas.row(j);

        let novelty = (1..=window)
            .map(|k| kl_rows(thetas.row(j - k), center, 2.0))
            .sum::<f64>()
            / window as f64;
        let transience = (1..=window)
            .map(|k| kl_rows(thetas.row(j + k), center, 2.0))
            .sum::<f64>()
            / window as f64;

        novelties.push(novelty);
        transiences.push(transience);
        resonances.push(novelty - transience);
    }

    Ok((novelties, transiences, resonances))
}

/// Mutual information I(X;Y) = H(X) + H(Y) - H(X,Y).
///
/// Observations are paired positionally; `counts`, when given, weights each
/// pair the same way it weights the marginals. Ranges from 0 to
/// min(H(X), H(Y)).
///
/// # Errors
///
/// [`DistributionError::LengthMismatch`] when `x` and `y` differ in length.
pub fn mutual_info<X, Y>(x: &[X], y: &[Y], counts: Option<&[u64]>, base: f64) -> Result<f64>
where
    X: Eq + Hash,
    Y: Eq + Hash,
{
    if x.len() != y.len() {
        return Err(DistributionError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        }
        .into());
    }

    let h_x = discrete_entropy(x.iter(), counts, base);
    let h_y = discrete_entropy(y.iter(), counts, base);
    let h_xy = discrete_entropy(x.iter().zip(y.iter()), counts, base);
    Ok(h_x + h_y - h_xy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RocsError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_entropy_fair_coin() {
        let h = discrete_entropy([0, 1], None, 2.0);
        assert_relative_eq!(h, 1.0);
    }

    #[test]
    fn test_entropy_repeated_observations() {
        // a, b, c, c: probabilities 1/4, 1/4, 1/2.
        let h = discrete_entropy(['a', 'b', 'c', 'c'], None, 2.0);
        assert_relative_eq!(h, 1.5);
    }

    #[test]
    fn test_entropy_counts_equivalent_to_expansion() {
        let from_counts = discrete_entropy(['a', 'b', 'c'], Some(&[1, 1, 2]), 2.0);
        let expanded = discrete_entropy(['a', 'b', 'c', 'c'], None, 2.0);
        assert_relative_eq!(from_counts, expanded);
    }

    #[test]
    fn test_entropy_base_conversion() {
        let bits = discrete_entropy([0, 1, 2, 3], None, 2.0);
        let nats = discrete_entropy([0, 1, 2, 3], None, std::f64::consts::E);
        assert_relative_eq!(bits * 2f64.ln(), nats, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_empty_is_zero() {
        let h = discrete_entropy(std::iter::empty::<u8>(), None, 2.0);
        assert_relative_eq!(h, 0.0);
    }

    #[test]
    fn test_kl_reference_vector() {
        let p = [1.0, 2.0, 3.0, 4.0];
        let q = [4.0, 3.0, 2.0, 1.0];
        assert_relative_eq!(
            kl_divergence(&p, &q, 2.0).unwrap(),
            6.584962500721156,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kl_identical_is_zero() {
        let p = [0.25, 0.25, 0.5];
        assert_relative_eq!(kl_divergence(&p, &p, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_kl_zero_sample_category_contributes_nothing() {
        let p = [0.0, 1.0];
        let q = [0.5, 0.5];
        assert_relative_eq!(kl_divergence(&p, &q, 2.0).unwrap(), 1.0);
    }

    #[test]
    fn test_kl_length_mismatch() {
        let err = kl_divergence(&[0.5, 0.5], &[1.0], 2.0).unwrap_err();
        assert_eq!(
            err,
            RocsError::Distribution(DistributionError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_ntr_window_one() {
        let thetas = array![
            [0.5, 0.5],
            [0.6, 0.4],
            [0.7, 0.3],
            [0.4, 0.6],
            [0.5, 0.5]
        ];
        let (nov, tra, res) = novelty_transience_resonance(&thetas, 1).unwrap();
        assert_eq!(nov.len(), 3);
        assert_relative_eq!(nov[0], 0.029446844526784283, epsilon = 1e-12);
        assert_relative_eq!(tra[1], 0.2770580311769584, epsilon = 1e-12);
        assert_relative_eq!(res[2], 0.23570160091353845, epsilon = 1e-12);
        for i in 0..3 {
            assert_relative_eq!(res[i], nov[i] - tra[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ntr_too_short_yields_empty() {
        let thetas = array![[0.5, 0.5], [0.6, 0.4]];
        let (nov, tra, res) = novelty_transience_resonance(&thetas, 1).unwrap();
        assert!(nov.is_empty());
        assert!(tra.is_empty());
        assert!(res.is_empty());
    }

    #[test]
    fn test_ntr_zero_window_rejected() {
        let thetas = array![[0.5, 0.5], [0.6, 0.4], [0.7, 0.3]];
        let err = novelty_transience_resonance(&thetas, 0).unwrap_err();
        assert_eq!(err, RocsError::Sequence(SequenceError::ZeroWindow));
    }

    #[test]
    fn test_mutual_info_reference_vector() {
        let x = [0, 1, 1, 0, 0];
        let y = [1, 0, 0, 0, 1];
        assert_relative_eq!(
            mutual_info(&x, &y, None, 2.0).unwrap(),
            0.419973094021975,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mutual_info_symmetric() {
        let x = [0, 0, 1, 1, 2];
        let y = ['a', 'b', 'b', 'a', 'a'];
        assert_relative_eq!(
            mutual_info(&x, &y, None, 2.0).unwrap(),
            mutual_info(&y, &x, None, 2.0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mutual_info_independent_is_zero() {
        // y is constant: observing it says nothing about x.
        let x = [0, 1, 0, 1];
        let y = [7, 7, 7, 7];
        assert_relative_eq!(mutual_info(&x, &y, None, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_mutual_info_length_mismatch() {
        let err = mutual_info(&[0, 1], &[1], None, 2.0).unwrap_err();
        assert!(matches!(
            err,
            RocsError::Distribution(DistributionError::LengthMismatch { .. })
        ));
    }
}
