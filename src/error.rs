// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Error types for ROCS
//!
//! This module defines all error types used throughout the library.
//! Every error is a local input-validation failure scoped to a single
//! metric call; nothing is retried and no partial results are produced.

use thiserror::Error;

/// Result type alias for ROCS operations
pub type Result<T> = std::result::Result<T, RocsError>;

/// Main error type for ROCS operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RocsError {
    /// Graph construction or degenerate-graph error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Symbol-sequence error
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Distribution or table shape error
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}

/// Errors raised while building or analyzing a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Adjacency matrix is not square
    #[error("Adjacency matrix must be square, got {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },

    /// Graph with no nodes and no edges: feedback density is undefined
    #[error("Graph has no nodes and no edges; feedback density is undefined")]
    Empty,

    /// Reach centrality normalizes by N - 1, so one node is not enough
    #[error("Graph has {nodes} node(s); reach centrality requires at least 2")]
    TooSmall { nodes: usize },

    /// Negative edge weight on a shortest-path computation
    #[error("Negative edge weight at ({row}, {col}); weighted paths require nonnegative weights")]
    NegativeWeight { row: usize, col: usize },
}

/// Errors raised while analyzing a symbol sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Effective sequence length after grouping is too short
    #[error("Effective sequence length {effective_len} after grouping; need at least 2 symbols")]
    TooShort { effective_len: usize },

    /// Word length of zero produces no grouping
    #[error("Word length must be at least 1")]
    ZeroWindow,
}

/// Errors raised on malformed distributions or tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistributionError {
    /// Two paired distributions differ in length
    #[error("Distributions must have identical length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A matrix does not have the shape implied by its companion vector
    #[error("Expected a {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Row weights do not pair one-to-one with table rows
    #[error("Weight count {weights} does not match row count {rows}")]
    WeightCountMismatch { rows: usize, weights: usize },
}
