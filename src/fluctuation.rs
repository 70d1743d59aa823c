// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Fluctuation complexity of a symbol sequence.
//!
//! Extends discrete entropy to account for the ordering of states
//! (Parrott 2010): the metric is the mean squared log2 frequency ratio
//! between temporally adjacent symbols, optionally after grouping the
//! sequence into overlapping words of length L.

use crate::error::{Result, SequenceError};
use std::collections::HashMap;
use std::hash::Hash;

/// Fluctuation complexity of `seq`, grouped into words of `word_len`.
///
/// With `word_len == 1` the sequence is used as-is; with `word_len > 1` it
/// is replaced by its `len - word_len + 1` overlapping windows (stride 1)
/// before anything is counted. Frequencies use exact equality, the log base
/// is fixed at 2, and the squared ratio for each distinct ordered pair is
/// memoized in a map scoped to this call.
///
/// A balanced alternating sequence like `[0, 1, 0, 1]` scores 0.0: both
/// symbols occur equally often, so every adjacent log ratio vanishes.
///
/// # Errors
///
/// [`SequenceError::ZeroWindow`] for `word_len == 0`, and
/// [`SequenceError::TooShort`] when the grouped sequence has fewer than two
/// symbols (the N - 1 divisor would be zero or negative).
pub fn fluctuation_complexity<T>(seq: &[T], word_len: usize) -> Result<f64>
where
    T: Eq + Hash,
{
    if word_len == 0 {
        return Err(SequenceError::ZeroWindow.into());
    }

    // windows(1) is the ungrouped sequence, so both cases share one path.
    let words: Vec<&[T]> = seq.windows(word_len).collect();
    let n = words.len();
    if n <= 1 {
        return Err(SequenceError::TooShort { effective_len: n }.into());
    }

    let mut freqs: HashMap<&[T], u64> = HashMap::new();
    for &w in &words {
        *freqs.entry(w).or_insert(0) += 1;
    }

    let mut memo: HashMap<(&[T], &[T]), f64> = HashMap::new();
    let mut total = 0.0;
    for pair in words.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let value = *memo.entry((a, b)).or_insert_with(|| {
            let ratio = freqs[a] as f64 / freqs[b] as f64;
            let log_ratio = ratio.log2();
            log_ratio * log_ratio
        });
        total += value;
    }

    Ok(total / (n - 1) as f64)
}
