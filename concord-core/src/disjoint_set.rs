//! Lock-free disjoint-set forest shared by every union-find backend.
//!
//! Unions follow Rem's canonical policy: the root with the larger index is
//! attached beneath the root with the smaller index, so every component ends
//! up represented by its minimum node. Parent pointers only ever move towards
//! smaller nodes of the same set (`parent[x] <= x` holds at all times), which
//! keeps every chain strictly decreasing and every `find` terminating.

use std::{
    ops::Range,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{Result, strategy::try_atomic_vec};

/// Attempts made with compare-and-swap before falling back to the monotone
/// splice.
pub(crate) const CAS_RETRIES: usize = 10;

pub(crate) struct DisjointSet {
    parents: Vec<AtomicUsize>,
}

impl DisjointSet {
    /// Allocates parent storage for `len` nodes.
    ///
    /// Slots are zeroed; callers run [`Self::reset`] over every node before
    /// the first union.
    pub(crate) fn try_new(len: usize) -> Result<Self> {
        Ok(Self {
            parents: try_atomic_vec("parents", len)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn singletons(len: usize) -> Self {
        let parents = (0..len).map(AtomicUsize::new).collect();
        Self { parents }
    }

    pub(crate) fn len(&self) -> usize {
        self.parents.len()
    }

    /// Makes every node in `nodes` its own root.
    pub(crate) fn reset(&self, nodes: Range<usize>) {
        for node in nodes {
            self.parents[node].store(node, Ordering::Relaxed);
        }
    }

    pub(crate) fn parent(&self, node: usize) -> usize {
        self.parents[node].load(Ordering::Acquire)
    }

    pub(crate) fn is_root(&self, node: usize) -> bool {
        self.parent(node) == node
    }

    /// Resolves `node` to its current root, halving the path on the way.
    pub(crate) fn find(&self, node: usize) -> usize {
        let mut current = node;
        loop {
            let parent = self.parents[current].load(Ordering::Acquire);
            if parent == current {
                return current;
            }

            let grandparent = self.parents[parent].load(Ordering::Acquire);
            if grandparent != parent {
                self.parents[current].fetch_min(grandparent, Ordering::AcqRel);
            }

            current = grandparent;
        }
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when this call changed the forest and `false` when both
    /// nodes already shared a root.
    pub(crate) fn union(&self, left: usize, right: usize) -> bool {
        for _ in 0..CAS_RETRIES {
            let (lo, hi) = ordered(self.find(left), self.find(right));
            if lo == hi {
                return false;
            }

            if self.parents[hi]
                .compare_exchange(hi, lo, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return true;
            }
        }

        let (lo, hi) = ordered(self.find(left), self.find(right));
        if lo == hi {
            return false;
        }
        self.splice(lo, hi)
    }

    /// Links `hi` beneath `lo` without compare-and-swap.
    ///
    /// `fetch_min` never raises a parent, so a lost race only shortens the
    /// chain. Whatever `hi` pointed at before stays connected by linking it to
    /// `lo` in turn; `hi` strictly decreases every round.
    pub(crate) fn splice(&self, mut lo: usize, mut hi: usize) -> bool {
        let mut linked = false;
        loop {
            debug_assert!(lo < hi);
            let previous = self.parents[hi].fetch_min(lo, Ordering::AcqRel);
            if previous == hi {
                return true;
            }
            if previous == lo {
                return linked;
            }
            if previous < lo {
                (lo, hi) = (previous, lo);
            } else {
                linked = true;
                hi = previous;
            }
        }
    }

    /// Points every node in `nodes` directly at its root.
    pub(crate) fn compress(&self, nodes: Range<usize>) {
        for node in nodes {
            let root = self.find(node);
            self.parents[node].fetch_min(root, Ordering::AcqRel);
        }
    }

    /// Counts the roots among `nodes`.
    pub(crate) fn count_roots(&self, nodes: Range<usize>) -> usize {
        nodes.filter(|&node| self.is_root(node)).count()
    }

    pub(crate) fn parents(&self) -> &[AtomicUsize] {
        &self.parents
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
