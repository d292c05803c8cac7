//! Matrix Market loader producing [`concord_core::CscGraph`] adjacency
//! matrices.
//!
//! Coordinate files of `pattern`, `integer` or `real` type are accepted with
//! `general`, `symmetric` or `skew-symmetric` storage. Values are ignored:
//! every stored entry is an edge.

mod errors;
mod header;
mod reader;

pub use crate::{
    errors::MatrixMarketError,
    header::{DataType, Header, Symmetry},
    reader::{load_matrix_market, read_matrix_market},
};

#[cfg(test)]
mod tests;
