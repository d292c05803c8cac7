//! Per-node component identities returned by [`crate::ComponentsEngine::labels`].

/// Canonical component identity for every node of a graph.
///
/// Each node maps to the minimum node index of its component, whichever
/// strategy or backend produced the labels.
///
/// # Examples
/// ```
/// use concord_core::{Backend, CscGraph, EngineBuilder, Strategy};
///
/// let graph = CscGraph::from_edges(4, &[(1, 3)])?;
/// let engine = EngineBuilder::new()
///     .with_strategy(Strategy::UnionFind)
///     .with_backend(Backend::Sequential)
///     .build()?;
/// let labels = engine.labels(&graph)?;
/// assert_eq!(labels.as_slice(), &[0, 1, 2, 1]);
/// assert_eq!(labels.component_count(), 3);
/// assert_eq!(labels.representatives(), vec![0, 1, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    component_count: usize,
}

impl ComponentLabels {
    /// Wraps canonical labels, where `labels[i] <= i` and roots label
    /// themselves.
    pub(crate) fn from_canonical(labels: Vec<usize>) -> Self {
        let component_count = labels
            .iter()
            .enumerate()
            .filter(|&(node, &label)| node == label)
            .count();
        Self {
            labels,
            component_count,
        }
    }

    /// Returns the representative of `node`, or `None` when `node` is not in
    /// the graph.
    #[must_use]
    pub fn representative(&self, node: usize) -> Option<usize> {
        self.labels.get(node).copied()
    }

    /// Returns every node's representative, indexed by node.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether no nodes are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of distinct components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns the distinct representatives in ascending order.
    #[must_use]
    pub fn representatives(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(node, &label)| (node == label).then_some(node))
            .collect()
    }

    /// Returns whether `left` and `right` lie in the same component.
    #[must_use]
    pub fn same_component(&self, left: usize, right: usize) -> bool {
        matches!(
            (self.representative(left), self.representative(right)),
            (Some(a), Some(b)) if a == b
        )
    }

    /// Consumes the labels and returns the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.labels
    }
}
