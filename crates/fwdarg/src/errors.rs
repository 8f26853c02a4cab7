//! Error types for configuration and ancestry bookkeeping.
//!
//! Breakpoint partitioning and edge emission never fail; errors raised by a
//! [`GameteRecombiner`](crate::recombination::GameteRecombiner) are passed
//! through untouched as its associated error type.

use crate::Position;
use crate::ancestry::NodeId;
use thiserror::Error;

/// Errors produced while building or loading an [`AncestryConfig`](crate::config::AncestryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid genome range [{start}, {stop}) (start must be finite and below stop)")]
    InvalidRange { start: Position, stop: Position },
    #[error("Invalid garbage collection interval: {0} (must be > 0)")]
    InvalidGcInterval(u64),
    #[error("Invalid Poisson mean for crossover count: {0}")]
    InvalidCrossoverMean(f64),
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the [`AncestryTracker`](crate::ancestry::AncestryTracker).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AncestryError {
    /// Node ids must be recorded contiguously, starting from the first node.
    #[error("Node {found} recorded out of order (expected {expected})")]
    NodeOutOfOrder { expected: NodeId, found: NodeId },
    /// No id can follow the last recorded node.
    #[error("Node ids exhausted after {0}")]
    NodeIdOverflow(NodeId),
    /// An edge or sample refers to a node that was never recorded.
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),
}
