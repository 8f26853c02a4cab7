use super::{AncestrySink, Edge, EdgeBuffer, Node, NodeId};
use crate::config::AncestryConfig;
use crate::errors::AncestryError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nodes, edges and samples handed to an external simplifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AncestryTables {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub samples: Vec<NodeId>,
    /// Generations elapsed since the previous hand-off. Node times already
    /// held by the simplifier must be shifted by this amount.
    pub generations_since_last_gc: u64,
}

/// Accumulates ancestry between simplifications.
///
/// Edges recorded during a generation land in a pending buffer and are only
/// committed by [`finish_generation`](Self::finish_generation), so a
/// generation that is abandoned halfway leaves the committed table intact.
/// Node ids must be recorded contiguously, and the sequence continues across
/// [`take_tables`](Self::take_tables).
#[derive(Debug, Clone)]
pub struct AncestryTracker {
    nodes: Vec<Node>,
    /// Number of leading `nodes` belonging to finished generations.
    committed_nodes: usize,
    last_node_id: Option<NodeId>,
    edges: Vec<Edge>,
    pending: Vec<Edge>,
    samples: Vec<NodeId>,
    gc_interval: u64,
    last_gc_generation: u64,
}

impl AncestryTracker {
    pub fn new(config: &AncestryConfig) -> Self {
        Self {
            nodes: Vec::new(),
            committed_nodes: 0,
            last_node_id: None,
            edges: Vec::new(),
            pending: Vec::new(),
            samples: Vec::new(),
            gc_interval: config.gc_interval(),
            last_gc_generation: 0,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Committed edges, in the order they were recorded.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges recorded since the last call to `finish_generation`.
    pub fn pending_edges(&self) -> &[Edge] {
        &self.pending
    }

    pub fn samples(&self) -> &[NodeId] {
        &self.samples
    }

    pub fn gc_interval(&self) -> u64 {
        self.gc_interval
    }

    pub fn last_gc_generation(&self) -> u64 {
        self.last_gc_generation
    }

    /// Id the next recorded node must carry.
    ///
    /// `None` before the first node is recorded, or once ids are exhausted.
    pub fn next_node_id(&self) -> Option<NodeId> {
        self.last_node_id.and_then(NodeId::next)
    }

    fn contains_node(&self, id: NodeId) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => first.id <= id && id <= last.id,
            _ => false,
        }
    }

    /// Record a newly born chromosome.
    ///
    /// # Errors
    /// Returns [`AncestryError::NodeOutOfOrder`] if `node.id` does not follow
    /// the last recorded id, and [`AncestryError::NodeIdOverflow`] if no id
    /// can follow it.
    pub fn record_node(&mut self, node: Node) -> Result<(), AncestryError> {
        if let Some(last) = self.last_node_id {
            let expected = last.next().ok_or(AncestryError::NodeIdOverflow(last))?;
            if node.id != expected {
                return Err(AncestryError::NodeOutOfOrder {
                    expected,
                    found: node.id,
                });
            }
        }
        self.last_node_id = Some(node.id);
        self.nodes.push(node);
        Ok(())
    }

    /// Append a worker's private buffer to the pending edges.
    pub fn absorb(&mut self, buffer: EdgeBuffer) {
        debug!(edges = buffer.len(), "Absorbing worker edge buffer");
        self.pending.extend(buffer.into_edges());
    }

    /// Commit the pending edges and make `samples` the current generation.
    ///
    /// Returns the number of edges committed.
    ///
    /// # Errors
    /// Returns [`AncestryError::UnknownNode`] if a sample or the child of a
    /// pending edge is not held by the tracker. Nothing is committed in that
    /// case.
    pub fn finish_generation(&mut self, samples: Vec<NodeId>) -> Result<usize, AncestryError> {
        if let Some(&missing) = samples.iter().find(|&&id| !self.contains_node(id)) {
            return Err(AncestryError::UnknownNode(missing));
        }
        if let Some(edge) = self.pending.iter().find(|e| !self.contains_node(e.child)) {
            return Err(AncestryError::UnknownNode(edge.child));
        }

        let committed = self.pending.len();
        self.edges.append(&mut self.pending);
        self.committed_nodes = self.nodes.len();
        self.samples = samples;
        debug!(
            committed,
            total_edges = self.edges.len(),
            samples = self.samples.len(),
            "Finished generation"
        );
        Ok(committed)
    }

    /// Whether garbage collection (simplification) is scheduled at `generation`.
    pub fn gc_due(&self, generation: u64) -> bool {
        generation > 0 && generation % self.gc_interval == 0
    }

    /// Node times measured backwards from the most recent generation, in
    /// node order. Tree-sequence consumers expect parents to be older (larger
    /// time) than children.
    pub fn reverse_time(&self) -> Vec<f64> {
        let newest = self
            .nodes
            .iter()
            .map(|n| n.generation)
            .fold(f64::NEG_INFINITY, f64::max);
        debug!(nodes = self.nodes.len(), newest, "Reversing node times");
        self.nodes.iter().map(|n| newest - n.generation).collect()
    }

    /// Hand the finished generations to a simplifier.
    ///
    /// Nodes recorded since the last `finish_generation` stay in the tracker
    /// together with the pending edges that refer to them, so the open
    /// generation can still be finished. Node ids continue from the last
    /// recorded id.
    pub fn take_tables(&mut self, generation: u64) -> AncestryTables {
        let open = self.nodes.split_off(self.committed_nodes);
        let nodes = std::mem::replace(&mut self.nodes, open);
        self.committed_nodes = 0;

        let generations_since_last_gc = generation.saturating_sub(self.last_gc_generation);
        self.last_gc_generation = generation;
        debug!(
            generation,
            generations_since_last_gc,
            exported = nodes.len(),
            retained = self.nodes.len(),
            "Handing ancestry tables to simplifier"
        );

        AncestryTables {
            nodes,
            edges: std::mem::take(&mut self.edges),
            samples: std::mem::take(&mut self.samples),
            generations_since_last_gc,
        }
    }
}

impl Default for AncestryTracker {
    fn default() -> Self {
        Self::new(&AncestryConfig::default())
    }
}

impl AncestrySink for AncestryTracker {
    #[inline]
    fn record_edge(&mut self, edge: Edge) {
        self.pending.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ancestry::Interval;

    fn tracker_with_nodes(n: i32) -> AncestryTracker {
        let mut tracker = AncestryTracker::default();
        for id in 0..n {
            tracker.record_node(Node::new(id, 0.0, 0)).unwrap();
        }
        tracker
    }

    #[test]
    fn test_record_node_contiguous() {
        let mut tracker = AncestryTracker::default();
        tracker.record_node(Node::new(10, 0.0, 0)).unwrap();
        tracker.record_node(Node::new(11, 0.0, 0)).unwrap();
        assert_eq!(tracker.next_node_id(), Some(NodeId::new(12)));

        let err = tracker.record_node(Node::new(13, 1.0, 0)).unwrap_err();
        assert_eq!(
            err,
            AncestryError::NodeOutOfOrder {
                expected: NodeId::new(12),
                found: NodeId::new(13),
            }
        );
        assert_eq!(tracker.nodes().len(), 2);
    }

    #[test]
    fn test_pending_edges_commit_on_finish() {
        let mut tracker = tracker_with_nodes(3);
        tracker.record_edge(Edge::new(0.0, 1.0, NodeId::new(0), NodeId::new(2)));
        assert_eq!(tracker.pending_edges().len(), 1);
        assert!(tracker.edges().is_empty());

        let committed = tracker.finish_generation(vec![NodeId::new(2)]).unwrap();
        assert_eq!(committed, 1);
        assert!(tracker.pending_edges().is_empty());
        assert_eq!(tracker.edges().len(), 1);
        assert_eq!(tracker.samples(), &[NodeId::new(2)]);
    }

    #[test]
    fn test_finish_rejects_unknown_child() {
        let mut tracker = tracker_with_nodes(2);
        tracker.record_edge(Edge::new(0.0, 1.0, NodeId::new(0), NodeId::new(5)));

        let err = tracker.finish_generation(vec![NodeId::new(1)]).unwrap_err();
        assert_eq!(err, AncestryError::UnknownNode(NodeId::new(5)));
        assert!(tracker.edges().is_empty());
        assert_eq!(tracker.pending_edges().len(), 1);
    }

    #[test]
    fn test_finish_rejects_unknown_sample() {
        let mut tracker = tracker_with_nodes(2);
        let err = tracker.finish_generation(vec![NodeId::new(7)]).unwrap_err();
        assert_eq!(err, AncestryError::UnknownNode(NodeId::new(7)));
    }

    #[test]
    fn test_absorb_keeps_worker_order() {
        let mut tracker = tracker_with_nodes(4);
        let mut first = EdgeBuffer::new();
        first.add_edges(&[Interval::new(0.0, 1.0)], NodeId::new(0), NodeId::new(2));
        let mut second = EdgeBuffer::new();
        second.add_edges(&[Interval::new(0.0, 1.0)], NodeId::new(1), NodeId::new(3));

        tracker.absorb(first);
        tracker.absorb(second);

        let children: Vec<_> = tracker.pending_edges().iter().map(|e| e.child).collect();
        assert_eq!(children, vec![NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_gc_due() {
        let config = AncestryConfig::default().with_gc_interval(10).unwrap();
        let tracker = AncestryTracker::new(&config);
        assert!(!tracker.gc_due(0));
        assert!(!tracker.gc_due(5));
        assert!(tracker.gc_due(10));
        assert!(tracker.gc_due(30));
    }

    #[test]
    fn test_reverse_time() {
        let mut tracker = AncestryTracker::default();
        tracker.record_node(Node::new(0, 0.0, 0)).unwrap();
        tracker.record_node(Node::new(1, 1.0, 0)).unwrap();
        tracker.record_node(Node::new(2, 3.0, 0)).unwrap();

        assert_eq!(tracker.reverse_time(), vec![3.0, 2.0, 0.0]);
        assert!(AncestryTracker::default().reverse_time().is_empty());
    }

    #[test]
    fn test_take_tables_keeps_open_generation() {
        let mut tracker = tracker_with_nodes(2);
        tracker.record_edge(Edge::new(0.0, 1.0, NodeId::new(0), NodeId::new(1)));
        tracker.finish_generation(vec![NodeId::new(1)]).unwrap();

        tracker.record_node(Node::new(2, 1.0, 0)).unwrap();
        tracker.record_edge(Edge::new(0.0, 0.5, NodeId::new(1), NodeId::new(2)));

        let tables = tracker.take_tables(100);
        assert_eq!(tables.nodes.len(), 2);
        assert_eq!(tables.edges.len(), 1);
        assert_eq!(tables.samples, vec![NodeId::new(1)]);
        assert_eq!(tables.generations_since_last_gc, 100);

        assert_eq!(tracker.nodes(), &[Node::new(2, 1.0, 0)]);
        assert_eq!(tracker.pending_edges().len(), 1);
        assert_eq!(tracker.last_gc_generation(), 100);

        assert_eq!(tracker.finish_generation(vec![NodeId::new(2)]), Ok(1));
        assert_eq!(tracker.edges().len(), 1);
    }

    #[test]
    fn test_node_ids_continue_after_take_tables() {
        let mut tracker = tracker_with_nodes(3);
        tracker.finish_generation(vec![NodeId::new(2)]).unwrap();
        tracker.take_tables(10);

        assert!(tracker.nodes().is_empty());
        assert_eq!(tracker.next_node_id(), Some(NodeId::new(3)));
        let err = tracker.record_node(Node::new(0, 11.0, 0)).unwrap_err();
        assert_eq!(
            err,
            AncestryError::NodeOutOfOrder {
                expected: NodeId::new(3),
                found: NodeId::new(0),
            }
        );
        tracker.record_node(Node::new(3, 11.0, 0)).unwrap();
    }

    #[test]
    fn test_generations_since_last_gc() {
        let mut tracker = tracker_with_nodes(1);
        assert_eq!(tracker.take_tables(20).generations_since_last_gc, 20);
        assert_eq!(tracker.take_tables(50).generations_since_last_gc, 30);
    }

    #[test]
    fn test_node_id_overflow() {
        let mut tracker = AncestryTracker::default();
        tracker.record_node(Node::new(i32::MAX, 0.0, 0)).unwrap();
        assert_eq!(tracker.next_node_id(), None);

        let err = tracker.record_node(Node::new(0, 1.0, 0)).unwrap_err();
        assert_eq!(err, AncestryError::NodeIdOverflow(NodeId::new(i32::MAX)));
        assert_eq!(tracker.nodes().len(), 1);
    }
}
