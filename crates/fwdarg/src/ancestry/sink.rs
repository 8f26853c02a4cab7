use super::{Edge, Interval, NodeId};

/// Anything that accepts ancestry edges.
///
/// Implementations append in call order and perform no validation.
pub trait AncestrySink {
    fn record_edge(&mut self, edge: Edge);

    /// Record one edge per interval, all inherited by `child` from `parent`.
    fn add_edges(&mut self, intervals: &[Interval], parent: NodeId, child: NodeId) {
        for &interval in intervals {
            self.record_edge(Edge::from_interval(interval, parent, child));
        }
    }
}

impl<S: AncestrySink + ?Sized> AncestrySink for &mut S {
    fn record_edge(&mut self, edge: Edge) {
        (**self).record_edge(edge);
    }
}

/// An append-only edge buffer.
///
/// When mating is spread over several workers each worker owns one of
/// these; the buffers are merged afterwards with
/// [`AncestryTracker::absorb`](super::AncestryTracker::absorb).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeBuffer {
    edges: Vec<Edge>,
}

impl EdgeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl AncestrySink for EdgeBuffer {
    #[inline]
    fn record_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

impl AncestrySink for Vec<Edge> {
    #[inline]
    fn record_edge(&mut self, edge: Edge) {
        self.push(edge);
    }
}
