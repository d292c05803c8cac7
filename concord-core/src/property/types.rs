//! Fixture and configuration types for the component property tests.

use crate::CscGraph;

/// Topology family used to generate a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Roughly `n` to `2n` random edges.
    Sparse,
    /// Edge probability between 0.3 and 0.8.
    Dense,
    /// Several dense blocks with no edges between them.
    Disconnected,
    /// No edges at all.
    Isolated,
    /// Long paths with shuffled node numbering, which need many relaxation
    /// passes.
    Chains,
    /// Random edges stored in one direction only.
    OneDirectional,
}

impl GraphShape {
    pub(super) const ALL: [Self; 6] = [
        Self::Sparse,
        Self::Dense,
        Self::Disconnected,
        Self::Isolated,
        Self::Chains,
        Self::OneDirectional,
    ];
}

/// Generated graph plus the context needed to diagnose a failure.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Topology family that produced the fixture.
    pub shape: GraphShape,
    /// Undirected edges as generated, before storage.
    pub edges: Vec<(usize, usize)>,
    /// Stored graph.
    pub graph: CscGraph,
}

impl GraphFixture {
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, nodes={}, stored_entries={}",
            self.shape,
            self.graph.node_count(),
            self.graph.nnz()
        )
    }
}
