// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Minimal graph model over an adjacency matrix.
//!
//! The graph metrics in this crate need exactly five primitives: edge count,
//! node count, connected-component count, reachability, and weighted
//! shortest-path costs. This module implements them directly over adjacency
//! lists built from a square `ndarray` matrix, instead of pulling in a
//! general-purpose graph library.
//!
//! A nonzero entry `A[i][j]` is an edge `i -> j` (or `i -- j` when
//! undirected) with weight `A[i][j]`. Only the directedness flag controls
//! interpretation; the matrix is never checked for symmetry. A `Graph` is
//! immutable once built and lives only for the duration of a single metric
//! computation.

use crate::error::GraphError;
use ndarray::Array2;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A directed edge with its matrix weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Cost of a minimum-total-weight path, with the number of edges traversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCost {
    pub cost: f64,
    pub hops: usize,
}

/// Immutable graph view over a square adjacency matrix.
///
/// Parallel edges are collapsed: at most one recorded edge per ordered pair.
/// Self-loops are kept, since cycle detection must see them. Nodes with no
/// incident edges still count toward the node total.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    directed: bool,
    adj: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from a square matrix.
    ///
    /// For a directed graph every nonzero entry is one arc. For an
    /// undirected graph each unordered pair `{i, j}` contributes at most one
    /// edge, taken from whichever of `A[i][j]` / `A[j][i]` is nonzero
    /// (the upper-triangle entry wins when both are).
    pub fn from_matrix(a: &Array2<f64>, directed: bool) -> Result<Self, GraphError> {
        let (rows, cols) = a.dim();
        if rows != cols {
            return Err(GraphError::NonSquare { rows, cols });
        }
        let n = rows;
        let mut adj: Vec<Vec<Edge>> = vec![Vec::new(); n];
        let mut edge_count = 0;

        if directed {
            for i in 0..n {
                for j in 0..n {
                    let w = a[[i, j]];
                    if w != 0.0 {
                        adj[i].push(Edge { to: j, weight: w });
                        edge_count += 1;
                    }
                }
            }
        } else {
            for i in 0..n {
                for j in i..n {
                    let w = if a[[i, j]] != 0.0 {
                        a[[i, j]]
                    } else if a[[j, i]] != 0.0 {
                        a[[j, i]]
                    } else {
                        continue;
                    };
                    adj[i].push(Edge { to: j, weight: w });
                    if i != j {
                        adj[j].push(Edge { to: i, weight: w });
                    }
                    edge_count += 1;
                }
            }
        }

        Ok(Self {
            n,
            directed,
            adj,
            edge_count,
        })
    }

    /// Number of nodes, including isolated ones.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Number of edges: each arc once when directed, each unordered pair
    /// once when undirected.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the matrix was interpreted as directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Successors of `u` (neighbors, when undirected).
    pub fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adj[u]
    }

    /// Number of connected components of the symmetric closure.
    ///
    /// Connectivity is always undirected for this count, regardless of how
    /// the edges were interpreted.
    pub fn component_count(&self) -> usize {
        let sym = self.symmetric_adjacency();
        let mut seen = vec![false; self.n];
        let mut components = 0;
        let mut stack = Vec::new();

        for start in 0..self.n {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            stack.push(start);
            while let Some(u) = stack.pop() {
                for &v in &sym[u] {
                    if !seen[v] {
                        seen[v] = true;
                        stack.push(v);
                    }
                }
            }
        }
        components
    }

    /// Nodes reachable from `u` via directed paths of length >= 1.
    ///
    /// `u` itself appears in the result only when it lies on a cycle
    /// (including a self-loop).
    pub fn reachable_from(&self, u: usize) -> Vec<bool> {
        let mut seen = vec![false; self.n];
        let mut stack = Vec::new();
        // Seed with successors so the zero-length path is excluded.
        for e in &self.adj[u] {
            if !seen[e.to] {
                seen[e.to] = true;
                stack.push(e.to);
            }
        }
        while let Some(v) = stack.pop() {
            for e in &self.adj[v] {
                if !seen[e.to] {
                    seen[e.to] = true;
                    stack.push(e.to);
                }
            }
        }
        seen
    }

    /// True iff a directed path of length >= 1 leads from `u` to `v`.
    pub fn has_path(&self, u: usize, v: usize) -> bool {
        self.reachable_from(u)[v]
    }

    /// Reach sets for every node, computed in one pass per node.
    ///
    /// `result[u][v]` is true iff `v` is reachable from `u` via a path of
    /// length >= 1, so `result[v][v]` marks nodes that lie on a cycle. The
    /// table is local to the metric call that requested it.
    pub fn all_reachability(&self) -> Vec<Vec<bool>> {
        (0..self.n).map(|u| self.reachable_from(u)).collect()
    }

    /// Minimum-total-weight path costs from `u` (Dijkstra).
    ///
    /// Returns one entry per node: `None` when unreachable, otherwise the
    /// summed edge weight and the hop count of the cheapest path. The source
    /// itself is reported as unreachable, matching the length >= 1 path
    /// convention.
    pub fn shortest_path_costs(&self, u: usize) -> Vec<Option<PathCost>> {
        let mut best: Vec<Option<PathCost>> = vec![None; self.n];
        let mut settled = vec![false; self.n];
        let mut heap = BinaryHeap::new();

        // Relax out-edges of the source without recording the source.
        for e in &self.adj[u] {
            push_if_better(&mut best, &mut heap, e.to, e.weight, 1);
        }

        while let Some(entry) = heap.pop() {
            let v = entry.node;
            if settled[v] {
                continue;
            }
            settled[v] = true;
            for e in &self.adj[v] {
                push_if_better(&mut best, &mut heap, e.to, entry.cost + e.weight, entry.hops + 1);
            }
        }

        // A cycle can re-enter the source; reach centrality only looks at
        // other nodes, so report the source as unreachable.
        best[u] = None;
        best
    }

    fn symmetric_adjacency(&self) -> Vec<Vec<usize>> {
        let mut sym: Vec<Vec<usize>> = vec![Vec::new(); self.n];
        for (u, edges) in self.adj.iter().enumerate() {
            for e in edges {
                sym[u].push(e.to);
                if self.directed && e.to != u {
                    sym[e.to].push(u);
                }
            }
        }
        sym
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    cost: f64,
    hops: usize,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the cheapest first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn push_if_better(
    best: &mut [Option<PathCost>],
    heap: &mut BinaryHeap<HeapEntry>,
    node: usize,
    cost: f64,
    hops: usize,
) {
    let better = match best[node] {
        None => true,
        Some(prev) => cost < prev.cost,
    };
    if better {
        best[node] = Some(PathCost { cost, hops });
        heap.push(HeapEntry { cost, hops, node });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn chain() -> Array2<f64> {
        // 0 -> 1 -> 2
        array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]
    }

    fn triangle() -> Array2<f64> {
        // 0 -> 1 -> 2 -> 0
        array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]
    }

    #[test]
    fn test_non_square_rejected() {
        let a = Array2::<f64>::zeros((2, 3));
        let err = Graph::from_matrix(&a, true).unwrap_err();
        assert_eq!(err, GraphError::NonSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn test_directed_edge_count() {
        let g = Graph::from_matrix(&triangle(), true).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_undirected_edges_not_double_counted() {
        // Reciprocal arcs collapse into one undirected edge.
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let g = Graph::from_matrix(&a, false).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_undirected_ignores_asymmetry() {
        // Only the flag controls interpretation, not the matrix's symmetry.
        let g = Graph::from_matrix(&chain(), false).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.neighbors(1).iter().any(|e| e.to == 0));
    }

    #[test]
    fn test_self_loop_counts_once() {
        let a = array![[1.0]];
        let gd = Graph::from_matrix(&a, true).unwrap();
        let gu = Graph::from_matrix(&a, false).unwrap();
        assert_eq!(gd.edge_count(), 1);
        assert_eq!(gu.edge_count(), 1);
    }

    #[test]
    fn test_component_count_is_undirected() {
        let g = Graph::from_matrix(&chain(), true).unwrap();
        assert_eq!(g.component_count(), 1);

        let isolated = Array2::<f64>::zeros((4, 4));
        let g = Graph::from_matrix(&isolated, true).unwrap();
        assert_eq!(g.component_count(), 4);
    }

    #[test]
    fn test_reachability_excludes_trivial_path() {
        let g = Graph::from_matrix(&chain(), true).unwrap();
        let reach = g.reachable_from(0);
        assert!(!reach[0]);
        assert!(reach[1]);
        assert!(reach[2]);
        assert!(!g.has_path(2, 0));
    }

    #[test]
    fn test_cycle_node_reaches_itself() {
        let g = Graph::from_matrix(&triangle(), true).unwrap();
        for v in 0..3 {
            assert!(g.reachable_from(v)[v]);
        }
    }

    #[test]
    fn test_all_reachability_matches_single_queries() {
        let g = Graph::from_matrix(&triangle(), true).unwrap();
        let table = g.all_reachability();
        for u in 0..3 {
            for v in 0..3 {
                assert_eq!(table[u][v], g.has_path(u, v));
            }
        }
    }

    #[test]
    fn test_shortest_path_costs() {
        // 0 -(2.0)-> 1 -(4.0)-> 2
        let a = array![[0.0, 2.0, 0.0], [0.0, 0.0, 4.0], [0.0, 0.0, 0.0]];
        let g = Graph::from_matrix(&a, true).unwrap();
        let costs = g.shortest_path_costs(0);
        assert_eq!(costs[0], None);
        assert_eq!(costs[1], Some(PathCost { cost: 2.0, hops: 1 }));
        assert_eq!(costs[2], Some(PathCost { cost: 6.0, hops: 2 }));
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_longer_path() {
        // Direct 0 -> 2 costs 10, the detour through 1 costs 3.
        let a = array![[0.0, 1.0, 10.0], [0.0, 0.0, 2.0], [0.0, 0.0, 0.0]];
        let g = Graph::from_matrix(&a, true).unwrap();
        let costs = g.shortest_path_costs(0);
        assert_eq!(costs[2], Some(PathCost { cost: 3.0, hops: 2 }));
    }
}
