//! Ancestry records produced during mating.
//!
//! Each offspring chromosome is a node; each genomic interval it inherits
//! from a parental chromosome is an edge. Edges are written into an
//! [`AncestrySink`], either a private [`EdgeBuffer`] or the
//! [`AncestryTracker`] that holds them until the next simplification.

mod edge;
mod sink;
mod tracker;

pub use edge::{Edge, Interval, IntervalSet, Node, NodeId, ParentPair};
pub use sink::{AncestrySink, EdgeBuffer};
pub use tracker::{AncestryTables, AncestryTracker};
