//! Immutable compressed-sparse-column adjacency structure.
//!
//! A [`CscGraph`] stores a boolean adjacency matrix column by column. An entry
//! at `(row, col)` is read as an undirected edge between node `col` and node
//! `row`; storage does not need to be symmetric because every strategy scans
//! all columns and treats each entry in both directions.

use crate::error::GraphError;

/// Sparse boolean adjacency matrix in compressed-sparse-column form.
///
/// `nrows` is the authoritative node count. Columns at or beyond `nrows` are
/// tolerated by the constructor but never contribute edges.
///
/// # Examples
/// ```
/// use concord_core::CscGraph;
///
/// // 0 - 1, stored in both directions.
/// let graph = CscGraph::new(2, 2, vec![0, 1, 2], vec![1, 0])?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.nnz(), 2);
/// assert_eq!(graph.column(0), &[1]);
/// # Ok::<(), concord_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CscGraph {
    nrows: usize,
    ncols: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
}

impl CscGraph {
    /// Builds a graph from raw CSC arrays, validating the layout once.
    ///
    /// # Errors
    /// Returns [`GraphError`] when `col_ptr` does not hold `ncols + 1`
    /// non-decreasing offsets starting at zero and ending at `row_idx.len()`,
    /// or when a row index is not below `nrows`.
    pub fn new(
        nrows: usize,
        ncols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
    ) -> Result<Self, GraphError> {
        let expected = ncols.saturating_add(1);
        if col_ptr.len() != expected {
            return Err(GraphError::ColumnPointerLength {
                len: col_ptr.len(),
                ncols,
                expected,
            });
        }
        if let Some(&first) = col_ptr.first().filter(|&&first| first != 0) {
            return Err(GraphError::ColumnPointerStart { got: first });
        }
        for (column, window) in col_ptr.windows(2).enumerate() {
            if let [current, next] = *window {
                if current > next {
                    return Err(GraphError::ColumnPointerNotMonotonic {
                        column,
                        current,
                        next,
                    });
                }
            }
        }
        let last = col_ptr.last().copied().unwrap_or_default();
        if last != row_idx.len() {
            return Err(GraphError::ColumnPointerEnd {
                last,
                nnz: row_idx.len(),
            });
        }
        if let Some((entry, &row)) = row_idx.iter().enumerate().find(|(_, row)| **row >= nrows) {
            return Err(GraphError::RowIndexOutOfBounds { entry, row, nrows });
        }

        Ok(Self {
            nrows,
            ncols,
            col_ptr,
            row_idx,
        })
    }

    /// Builds an edgeless square graph with `node_count` isolated nodes.
    ///
    /// # Examples
    /// ```
    /// use concord_core::CscGraph;
    ///
    /// let graph = CscGraph::empty(5);
    /// assert_eq!(graph.node_count(), 5);
    /// assert_eq!(graph.nnz(), 0);
    /// ```
    #[must_use]
    pub fn empty(node_count: usize) -> Self {
        Self {
            nrows: node_count,
            ncols: node_count,
            col_ptr: vec![0; node_count.saturating_add(1)],
            row_idx: Vec::new(),
        }
    }

    /// Builds a square graph from an undirected edge list.
    ///
    /// Every edge is stored in both directions; rows within a column are
    /// sorted and duplicate entries are collapsed.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] when an endpoint is not below
    /// `node_count`.
    ///
    /// # Examples
    /// ```
    /// use concord_core::CscGraph;
    ///
    /// let graph = CscGraph::from_edges(3, &[(0, 1), (1, 2)])?;
    /// assert_eq!(graph.nnz(), 4);
    /// assert_eq!(graph.column(1), &[0, 2]);
    /// # Ok::<(), concord_core::GraphError>(())
    /// ```
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for &(left, right) in edges {
            if left >= node_count || right >= node_count {
                return Err(GraphError::EdgeOutOfBounds {
                    left,
                    right,
                    node_count,
                });
            }
            columns[left].push(right);
            if left != right {
                columns[right].push(left);
            }
        }

        let mut col_ptr = Vec::with_capacity(node_count.saturating_add(1));
        let mut row_idx = Vec::new();
        col_ptr.push(0);
        for mut rows in columns {
            rows.sort_unstable();
            rows.dedup();
            row_idx.extend(rows);
            col_ptr.push(row_idx.len());
        }

        Ok(Self {
            nrows: node_count,
            ncols: node_count,
            col_ptr,
            row_idx,
        })
    }

    /// Returns the number of rows, which is the node count.
    #[must_use]
    #[rustfmt::skip]
    pub fn nrows(&self) -> usize { self.nrows }

    /// Returns the number of stored columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn ncols(&self) -> usize { self.ncols }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.row_idx.len()
    }

    /// Returns the node count (`nrows`).
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nrows }

    /// Returns whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Returns the column offsets into [`Self::row_idx`].
    #[must_use]
    #[rustfmt::skip]
    pub fn col_ptr(&self) -> &[usize] { &self.col_ptr }

    /// Returns the row index of every stored entry, column by column.
    #[must_use]
    #[rustfmt::skip]
    pub fn row_idx(&self) -> &[usize] { &self.row_idx }

    /// Returns the row indices stored in `column`, or an empty slice when the
    /// column does not exist.
    #[must_use]
    pub fn column(&self, column: usize) -> &[usize] {
        let (Some(&start), Some(&end)) = (
            self.col_ptr.get(column),
            self.col_ptr.get(column.saturating_add(1)),
        ) else {
            return &[];
        };
        self.row_idx.get(start..end).unwrap_or_default()
    }

    /// Returns the number of columns that can carry edges, i.e. columns whose
    /// index is a valid node.
    pub(crate) fn edge_columns(&self) -> usize {
        self.ncols.min(self.nrows)
    }
}
