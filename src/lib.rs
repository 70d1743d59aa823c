// ROCS - Resilience of Complex Systems metrics
// Copyright (c) 2025 ROCS Contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! # ROCS - Resilience of Complex Systems
//!
//! Quantitative metrics for characterizing the resilience and structural
//! complexity of complex systems, drawing on information theory, network
//! science, and ecology.
//!
//! Every metric is an independent, stateless, pure function: it takes an
//! in-memory adjacency matrix, distribution, or symbol sequence and returns
//! a scalar (or small array). Nothing is cached across calls, nothing is
//! read from or written to disk, and calls may be parallelized freely by
//! the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use rocs::{causal_complexity, cyclomatic_complexity, feedback_density, grc};
//!
//! // A directed 3-cycle: maximally loopy.
//! let a = array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
//!
//! assert_eq!(cyclomatic_complexity(&a, true).unwrap(), 2.0);
//! assert_eq!(feedback_density(&a, true).unwrap(), 1.0);
//! assert_eq!(causal_complexity(&a, true).unwrap(), 4.0);
//! // Every node reaches every other: no hierarchy.
//! assert_eq!(grc(&a, true, false).unwrap(), 0.0);
//! ```
//!
//! Sequence and distribution metrics work the same way:
//!
//! ```rust
//! use rocs::{discrete_entropy, fluctuation_complexity};
//!
//! // A balanced alternating sequence has no fluctuation complexity.
//! let c = fluctuation_complexity(&[0, 1, 0, 1, 0, 1], 1).unwrap();
//! assert_eq!(c, 0.0);
//!
//! // A fair coin carries one bit.
//! let h = discrete_entropy([0, 1], None, 2.0);
//! assert!((h - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`causal`]: cyclomatic complexity, feedback density, causal complexity
//! - [`grc`]: global reaching centrality (hierarchy)
//! - [`fluctuation`]: fluctuation complexity of symbol sequences
//! - [`information`]: entropy, KL divergence, novelty/transience/resonance,
//!   mutual information
//! - [`biosciences`]: affinity, Hill diversity, functional redundancy
//! - [`graph`]: the minimal internal graph model the graph metrics share
//!
//! ## Error handling
//!
//! Degenerate inputs surface as [`RocsError`] values rather than being
//! silently substituted: a non-square matrix, an empty graph passed to
//! [`feedback_density`], or an effectively single-symbol sequence passed to
//! [`fluctuation_complexity`] all fail the call. The one graceful case is
//! [`grc`] on an edgeless graph, which returns 0.0 and emits a `log::warn!`
//! advisory.

// Modules
pub mod biosciences;
pub mod causal;
pub mod error;
pub mod fluctuation;
pub mod graph;
pub mod grc;
pub mod information;

// Re-exports for convenient access
pub use biosciences::{affinity, functional_redundancy, hill_diversity, hill_shannon, hill_simpson};
pub use causal::{
    causal_complexity, causal_profile, cyclomatic_complexity, feedback_density, CausalProfile,
};
pub use error::{DistributionError, GraphError, Result, RocsError, SequenceError};
pub use fluctuation::fluctuation_complexity;
pub use graph::Graph;
pub use grc::grc;
pub use information::{discrete_entropy, kl_divergence, mutual_info, novelty_transience_resonance};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
