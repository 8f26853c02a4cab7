//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use fwdarg::prelude::*;
//!
//! let (p1, p2) = partition_breakpoints(&[0.3, 0.6], 0.0, 1.0);
//! assert_eq!(p1.len(), 2);
//! assert_eq!(p2, vec![Interval::new(0.3, 0.6)]);
//! ```

pub use crate::Position;
pub use crate::ancestry::{
    AncestrySink, AncestryTables, AncestryTracker, Edge, EdgeBuffer, Interval, IntervalSet, Node,
    NodeId, ParentPair,
};
pub use crate::config::{AncestryConfig, GenomeRange};
pub use crate::errors::{AncestryError, ConfigError};
pub use crate::population::{Gamete, GameteId, GameteTables, Mutation, Population, RecyclingBin};
pub use crate::recombination::{
    AncestryRecombination, GameteRecombiner, MatingEvent, PoissonCrossovers,
    partition_breakpoints,
};
