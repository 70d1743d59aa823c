// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Global reaching centrality: a flow-based hierarchy measure.
//!
//! Following Mones et al. (2012), the local reach centrality `C_R(i)` of a
//! node is the fraction of other nodes it can reach via directed paths, and
//!
//! ```text
//! GRC = sum_i [max_j C_R(j) - C_R(i)] / (N - 1)
//! ```
//!
//! Values range from 0 (flat) to 1 (star-like hierarchy).

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use ndarray::Array2;

/// Global reaching centrality of the graph described by `a`.
///
/// When `use_weights` is false, `C_R(i)` is the count of other nodes
/// reachable from `i` divided by `N - 1`. When true, each reachable node
/// contributes the mean edge weight along the minimum-total-weight
/// (Dijkstra) path from `i` instead of 1, which reduces to the unweighted
/// count when every weight is 1. Undirected graphs use symmetric
/// reachability.
///
/// A graph with zero edges has no flow to rank: the function returns 0.0
/// directly and emits a `log::warn!` advisory, since the formula would
/// degenerate. This is a defined answer, not an error.
///
/// # Errors
///
/// [`GraphError::TooSmall`] for a single-node graph with an edge (the
/// N - 1 normalization has nothing to divide by), and
/// [`GraphError::NegativeWeight`] when `use_weights` is set and the matrix
/// carries a negative entry, since minimum-weight paths are only defined
/// over nonnegative weights.
pub fn grc(a: &Array2<f64>, directed: bool, use_weights: bool) -> Result<f64> {
    let g = Graph::from_matrix(a, directed)?;
    let n = g.node_count();

    if g.edge_count() == 0 {
        log::warn!("graph has no edges; global reaching centrality defaults to 0.0");
        return Ok(0.0);
    }
    if n < 2 {
        return Err(GraphError::TooSmall { nodes: n }.into());
    }
    if use_weights {
        if let Some(((row, col), _)) = a.indexed_iter().find(|&(_, &w)| w < 0.0) {
            return Err(GraphError::NegativeWeight { row, col }.into());
        }
    }

    let denom = (n - 1) as f64;
    let local: Vec<f64> = (0..n)
        .map(|u| local_reach(&g, u, use_weights) / denom)
        .collect();

    let max = local.iter().fold(f64::MIN, |acc, &c| acc.max(c));
    Ok(local.iter().map(|&c| max - c).sum::<f64>() / denom)
}

/// Unnormalized local reach of `u`: reachable-node count, or the sum of
/// per-node path-weight contributions when weighted.
fn local_reach(g: &Graph, u: usize, use_weights: bool) -> f64 {
    if use_weights {
        g.shortest_path_costs(u)
            .iter()
            .flatten()
            .map(|pc| pc.cost / pc.hops as f64)
            .sum()
    } else {
        let reach = g.reachable_from(u);
        reach
            .iter()
            .enumerate()
            .filter(|&(v, &r)| r && v != u)
            .count() as f64
    }
}
