// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Causal structure metrics: cyclomatic complexity, feedback density, and
//! their composition into causal complexity.
//!
//! Cyclomatic complexity M = E - N + 2P counts linearly independent paths
//! (Ebert et al. 2016, as formulated by Naugle et al. 2021). Feedback
//! density D = (E_loop + N_loop) / (E + N) is the fraction of edges and
//! nodes involved in at least one feedback loop. Causal complexity
//! C = M * (1 + D) weights intricacy by cyclic potential.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Cyclomatic complexity M = E - N + 2P.
///
/// `E` counts each directed arc once when `directed` is true, each
/// unordered pair once otherwise. `P` is always the component count of the
/// undirected interpretation, whatever the flag says about edges. A
/// zero-edge graph of N isolated nodes yields M = N; that is the formula,
/// not a special case.
pub fn cyclomatic_complexity(a: &Array2<f64>, directed: bool) -> Result<f64> {
    let g = Graph::from_matrix(a, directed)?;
    let e = g.edge_count() as f64;
    let n = g.node_count() as f64;
    let p = g.component_count() as f64;
    Ok(e - n + 2.0 * p)
}

/// Feedback density D = (E_loop + N_loop) / (E + N).
///
/// The metric always operates on the digraph whose arcs are exactly the
/// nonzero entries of `a`; the `directed` flag never adds reverse arcs, so
/// callers must pass a correctly oriented matrix. An arc (u, v) is looping
/// when a directed path of length >= 1 leads from v back to u; a
/// reciprocal edge or a self-loop qualifies. A node is looping when it lies
/// on at least one directed cycle, i.e. it can reach itself.
///
/// All-pairs reachability is computed once and reused for both the edge and
/// the node pass. The table lives only for this call.
///
/// # Errors
///
/// [`GraphError::Empty`] when E + N = 0 (the density is undefined), and
/// [`GraphError::NonSquare`] for a non-square matrix.
pub fn feedback_density(a: &Array2<f64>, _directed: bool) -> Result<f64> {
    let g = Graph::from_matrix(a, true)?;
    let e_total = g.edge_count();
    let n_total = g.node_count();
    if e_total + n_total == 0 {
        return Err(GraphError::Empty.into());
    }

    let reach = g.all_reachability();

    let mut e_loop = 0;
    for u in 0..n_total {
        for edge in g.neighbors(u) {
            if reach[edge.to][u] {
                e_loop += 1;
            }
        }
    }

    let n_loop = (0..n_total).filter(|&v| reach[v][v]).count();

    Ok((e_loop + n_loop) as f64 / (e_total + n_total) as f64)
}

/// Causal complexity C = M * (1 + D).
///
/// Pure composition of [`cyclomatic_complexity`] and [`feedback_density`]
/// on the same input: feedback density always reads the matrix arc-wise,
/// while the `directed` flag controls the edge count inside M. Systems with
/// identical M but higher D score higher.
pub fn causal_complexity(a: &Array2<f64>, directed: bool) -> Result<f64> {
    let m = cyclomatic_complexity(a, directed)?;
    let d = feedback_density(a, directed)?;
    Ok(m * (1.0 + d))
}

/// Full breakdown of a causal-complexity computation.
///
/// Bundles the counts and the three derived scalars from a single matrix so
/// callers can log or persist the whole picture in one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalProfile {
    /// Node count, including isolated nodes.
    pub nodes: usize,
    /// Edge count under the requested directedness.
    pub edges: usize,
    /// Connected components of the symmetric closure.
    pub components: usize,
    /// Arcs that close a directed cycle.
    pub looping_edges: usize,
    /// Nodes lying on at least one directed cycle.
    pub looping_nodes: usize,
    /// Cyclomatic complexity M.
    pub cyclomatic: f64,
    /// Feedback density D.
    pub feedback: f64,
    /// Causal complexity C = M * (1 + D).
    pub causal: f64,
}

impl CausalProfile {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Compute the full [`CausalProfile`] for one matrix.
///
/// Same semantics as calling the three metric functions separately, with
/// the graph and reachability table built once.
pub fn causal_profile(a: &Array2<f64>, directed: bool) -> Result<CausalProfile> {
    let counting = Graph::from_matrix(a, directed)?;
    let nodes = counting.node_count();
    let edges = counting.edge_count();
    let components = counting.component_count();
    let cyclomatic = edges as f64 - nodes as f64 + 2.0 * components as f64;

    let arcs = Graph::from_matrix(a, true)?;
    if arcs.edge_count() + nodes == 0 {
        return Err(GraphError::Empty.into());
    }
    let reach = arcs.all_reachability();
    let mut looping_edges = 0;
    for u in 0..nodes {
        for edge in arcs.neighbors(u) {
            if reach[edge.to][u] {
                looping_edges += 1;
            }
        }
    }
    let looping_nodes = (0..nodes).filter(|&v| reach[v][v]).count();
    let feedback = (looping_edges + looping_nodes) as f64 / (arcs.edge_count() + nodes) as f64;

    Ok(CausalProfile {
        nodes,
        edges,
        components,
        looping_edges,
        looping_nodes,
        cyclomatic,
        feedback,
        causal: cyclomatic * (1.0 + feedback),
    })
}
