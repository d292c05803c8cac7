use concord_core::GraphError;
use thiserror::Error;

/// Errors raised while reading a Matrix Market file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatrixMarketError {
    #[error("input is empty; expected a `%%MatrixMarket` header")]
    MissingHeader,
    #[error("invalid Matrix Market header `{line}`")]
    InvalidHeader { line: String },
    #[error("unsupported {field} `{value}`; only sparse real, integer or pattern matrices are read")]
    Unsupported { field: &'static str, value: String },
    #[error("input ended before the size line")]
    MissingSize,
    #[error("line {line_number}: invalid size line `{line}`")]
    InvalidSize { line_number: usize, line: String },
    #[error("line {line_number}: symmetric storage needs a square matrix, got {rows}x{cols}")]
    NonSquareSymmetric {
        line_number: usize,
        rows: usize,
        cols: usize,
    },
    #[error("line {line_number}: invalid entry `{line}`")]
    InvalidEntry { line_number: usize, line: String },
    #[error("line {line_number}: entry ({row}, {col}) is outside a {rows}x{cols} matrix")]
    IndexOutOfRange {
        line_number: usize,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("size line declares {declared} entries but {found} were read")]
    EntryCountMismatch { declared: usize, found: usize },
    #[error("matrix of {rows}x{cols} does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("assembled matrix is inconsistent: {0}")]
    Graph(#[from] GraphError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
