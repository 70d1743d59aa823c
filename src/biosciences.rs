// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Ecology-flavored metrics: affinity, Hill diversity numbers, and
//! functional redundancy.

use crate::error::{DistributionError, Result};
use ndarray::Array2;

/// Pairwise affinity between all columns of a binary presence/absence
/// table.
///
/// Affinity is the log odds ratio of co-occurrence (Mainali et al. 2022):
/// for columns 1 and 2,
///
/// ```text
/// alpha = ln((p1 / (1 - p1)) / (p2 / (1 - p2)))
/// ```
///
/// realized here from the four weighted co-occurrence counts per column
/// pair (both present, each alone, neither). Rows are sites or
/// observations; any nonzero entry is presence. `weights`, when given,
/// scales each row's contribution and must pair one-to-one with rows.
///
/// Degenerate counts (a column always or never present) yield infinite or
/// NaN entries through ordinary IEEE division; the formulation has no
/// finite answer there and the values are not special-cased. The diagonal
/// is typically +inf for a column that appears in some but not all rows.
pub fn affinity(data: &Array2<f64>, weights: Option<&[f64]>) -> Result<Array2<f64>> {
    let (rows, cols) = data.dim();
    if let Some(w) = weights {
        if w.len() != rows {
            return Err(DistributionError::WeightCountMismatch {
                rows,
                weights: w.len(),
            }
            .into());
        }
    }

    let mut result = Array2::<f64>::zeros((cols, cols));
    for i in 0..cols {
        for j in i..cols {
            // Weighted counts of the four presence combinations.
            let mut both = 0.0;
            let mut i_without_j = 0.0;
            let mut j_without_i = 0.0;
            let mut neither = 0.0;
            for r in 0..rows {
                let w = weights.map_or(1.0, |w| w[r]);
                let i_val = data[[r, i]] != 0.0;
                let j_val = data[[r, j]] != 0.0;
                match (i_val, j_val) {
                    (true, true) => both += w,
                    (true, false) => i_without_j += w,
                    (false, true) => j_without_i += w,
                    (false, false) => neither += w,
                }
            }

            let i_given_j = both / j_without_i;
            let i_given_not_j = i_without_j / neither;
            let alpha = (i_given_j / i_given_not_j).ln();
            result[[i, j]] = alpha;
            result[[j, i]] = alpha;
        }
    }
    Ok(result)
}

/// Hill diversity of order `q`: the effective number of species.
///
/// ```text
/// H_q = (sum p_i^q)^(1 / (1 - q))
/// ```
///
/// `q` sets the rarity scale: q = 0 is species richness (a plain nonzero
/// count), q = 1 the Hill-Shannon number, q = 2 the Hill-Simpson number.
/// Those three orders dispatch to their closed forms.
pub fn hill_diversity(p: &[f64], q: f64) -> f64 {
    if q == 2.0 {
        return hill_simpson(p);
    }
    if q == 1.0 {
        return hill_shannon(p);
    }
    if q == 0.0 {
        return p.iter().filter(|&&x| x != 0.0).count() as f64;
    }

    let sum: f64 = p.iter().map(|&x| x.powf(q)).sum();
    sum.powf(1.0 / (1.0 - q))
}

/// Hill-Shannon number (perplexity): exp of the Shannon entropy in nats.
///
/// The q -> 1 limit of [`hill_diversity`]; weighs common and rare species
/// evenly via the geometric mean. Zero-probability entries are skipped.
pub fn hill_shannon(p: &[f64]) -> f64 {
    let entropy: f64 = p
        .iter()
        .filter(|&&x| x > 0.0)
        .map(|&x| -x * x.ln())
        .sum();
    entropy.exp()
}

/// Hill-Simpson number (inverse Simpson index): 1 / sum p_i^2.
///
/// The q = 2 member of [`hill_diversity`]; emphasizes common species.
pub fn hill_simpson(p: &[f64]) -> f64 {
    1.0 / p.iter().map(|&x| x * x).sum::<f64>()
}

/// Functional redundancy R = 1 - Q / D (Ricotta et al. 2016).
///
/// `p` holds relative abundances of the species actually present; `delta`
/// is the symmetric matrix of pairwise functional dissimilarities. Q is
/// Rao's quadratic diversity pᵀ·Δ·p, and D = sum p_i (1 - p_i) is its
/// maximum given the abundances. R close to 1 means the community's
/// functions survive the loss of any one group.
///
/// # Errors
///
/// [`DistributionError::ShapeMismatch`] when `delta` is not
/// `len(p) x len(p)`.
pub fn functional_redundancy(p: &[f64], delta: &Array2<f64>) -> Result<f64> {
    let dim = p.len();
    let (rows, cols) = delta.dim();
    if (rows, cols) != (dim, dim) {
        return Err(DistributionError::ShapeMismatch {
            expected_rows: dim,
            expected_cols: dim,
            rows,
            cols,
        }
        .into());
    }

    let mut q = 0.0;
    for i in 0..dim {
        let mut inner = 0.0;
        for j in 0..dim {
            inner += p[j] * delta[[i, j]];
        }
        q += p[i] * inner;
    }

    let d: f64 = p.iter().map(|&x| x * (1.0 - x)).sum();
    Ok(1.0 - q / d)
}
