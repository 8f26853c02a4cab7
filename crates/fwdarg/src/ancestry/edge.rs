use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node (one chromosome of one individual) in the ancestry.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(i32);

impl NodeId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    /// The id immediately following this one, or `None` at `i32::MAX`.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two parental chromosomes contributing to one offspring chromosome.
///
/// `first` is the chromosome the offspring starts copying from at the left
/// end of the genome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentPair {
    pub first: NodeId,
    pub second: NodeId,
}

impl ParentPair {
    pub fn new(first: impl Into<NodeId>, second: impl Into<NodeId>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// A half-open genomic interval `[left, right)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub left: Position,
    pub right: Position,
}

impl Interval {
    pub fn new(left: Position, right: Position) -> Self {
        Self { left, right }
    }

    /// Length of the interval.
    #[inline]
    pub fn span(&self) -> Position {
        self.right - self.left
    }
}

/// Ordered, non-overlapping intervals attributed to one parental chromosome.
pub type IntervalSet = Vec<Interval>;

/// States that `child` inherited `[left, right)` from `parent`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub left: Position,
    pub right: Position,
    pub parent: NodeId,
    pub child: NodeId,
}

impl Edge {
    pub fn new(left: Position, right: Position, parent: NodeId, child: NodeId) -> Self {
        Self {
            left,
            right,
            parent,
            child,
        }
    }

    /// Build an edge covering `interval`.
    pub fn from_interval(interval: Interval, parent: NodeId, child: NodeId) -> Self {
        Self::new(interval.left, interval.right, parent, child)
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.left, self.right)
    }
}

/// A node of the ancestry: one chromosome born in `generation`.
///
/// Generations count forwards in time; see
/// [`AncestryTracker::reverse_time`](super::AncestryTracker::reverse_time)
/// for conversion to the backwards convention of tree sequences.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub generation: f64,
    pub deme: i32,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, generation: f64, deme: i32) -> Self {
        Self {
            id: id.into(),
            generation,
            deme,
        }
    }
}
