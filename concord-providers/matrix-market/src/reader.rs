//! Coordinate body parsing and CSC assembly.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use concord_core::CscGraph;
use tracing::{debug, instrument};

use crate::{
    errors::MatrixMarketError,
    header::{DataType, Header},
};

/// Loads the Matrix Market file at `path`.
///
/// # Errors
/// Returns [`MatrixMarketError::Io`] when the file cannot be read and any
/// error from [`read_matrix_market`].
#[instrument(name = "matrix_market.load", err, skip_all, fields(path = %path.as_ref().display()))]
pub fn load_matrix_market(path: impl AsRef<Path>) -> Result<CscGraph, MatrixMarketError> {
    let file = File::open(path.as_ref())?;
    read_matrix_market(file)
}

/// Reads a coordinate Matrix Market stream into a CSC adjacency matrix.
///
/// Indices are one-based in the file and zero-based in the result. Rows in
/// each column are sorted and duplicates collapsed. Symmetric storage adds
/// the transpose of every off-diagonal entry.
///
/// # Errors
/// Returns a [`MatrixMarketError`] describing the first malformed line.
///
/// # Examples
/// ```
/// use concord_providers_matrix_market::read_matrix_market;
///
/// let input = "%%MatrixMarket matrix coordinate pattern symmetric\n\
///              % path 1 - 2 - 3\n\
///              3 3 2\n\
///              2 1\n\
///              3 2\n";
/// let graph = read_matrix_market(input.as_bytes())?;
/// assert_eq!(graph.nrows(), 3);
/// assert_eq!(graph.nnz(), 4);
/// assert_eq!(graph.column(1), &[0, 2]);
/// # Ok::<(), concord_providers_matrix_market::MatrixMarketError>(())
/// ```
pub fn read_matrix_market(input: impl Read) -> Result<CscGraph, MatrixMarketError> {
    let mut lines = BufReader::new(input).lines().enumerate();

    let (_, banner) = lines.next().ok_or(MatrixMarketError::MissingHeader)?;
    let header = Header::parse(&banner?)?;

    let (line_number, size_line) = loop {
        let (index, line) = lines.next().ok_or(MatrixMarketError::MissingSize)?;
        let line = line?;
        if !is_skippable(&line) {
            break (index + 1, line);
        }
    };
    let (rows, cols, declared) = parse_size(line_number, &size_line)?;
    if header.symmetry.mirrors() && rows != cols {
        return Err(MatrixMarketError::NonSquareSymmetric {
            line_number,
            rows,
            cols,
        });
    }

    let mut entries: Vec<(usize, usize)> = Vec::new();
    let mut found = 0_usize;
    for (index, line) in lines {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }
        let line_number = index + 1;
        let (row, col) = parse_entry(line_number, &line, header.data_type)?;
        if row == 0 || col == 0 || row > rows || col > cols {
            return Err(MatrixMarketError::IndexOutOfRange {
                line_number,
                row,
                col,
                rows,
                cols,
            });
        }
        found += 1;

        let (row, col) = (row - 1, col - 1);
        entries.push((col, row));
        if header.symmetry.mirrors() && row != col {
            entries.push((row, col));
        }
    }
    if found != declared {
        return Err(MatrixMarketError::EntryCountMismatch { declared, found });
    }

    let graph = assemble(rows, cols, entries)?;
    debug!(
        rows = graph.nrows(),
        cols = graph.ncols(),
        nnz = graph.nnz(),
        symmetry = ?header.symmetry,
        "matrix market file parsed"
    );
    Ok(graph)
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('%')
}

fn parse_size(line_number: usize, line: &str) -> Result<(usize, usize, usize), MatrixMarketError> {
    let invalid = || MatrixMarketError::InvalidSize {
        line_number,
        line: line.trim().to_owned(),
    };
    let fields: Vec<usize> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;
    match fields.as_slice() {
        &[rows, cols, entries] => Ok((rows, cols, entries)),
        _ => Err(invalid()),
    }
}

fn parse_entry(
    line_number: usize,
    line: &str,
    data_type: DataType,
) -> Result<(usize, usize), MatrixMarketError> {
    let invalid = || MatrixMarketError::InvalidEntry {
        line_number,
        line: line.trim().to_owned(),
    };
    let mut fields = line.split_whitespace();
    let mut index = || -> Result<usize, MatrixMarketError> {
        fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or_else(invalid)
    };
    let row = index()?;
    let col = index()?;

    let values: Vec<&str> = fields.collect();
    let valid = match data_type {
        DataType::Pattern => values.is_empty(),
        DataType::Integer => matches!(values.as_slice(), [value] if value.parse::<i64>().is_ok()),
        DataType::Real => matches!(values.as_slice(), [value] if value.parse::<f64>().is_ok()),
    };
    if valid { Ok((row, col)) } else { Err(invalid()) }
}

/// Builds CSC arrays from `(col, row)` pairs, rejecting column counts that
/// cannot be allocated.
fn assemble(
    rows: usize,
    cols: usize,
    mut entries: Vec<(usize, usize)>,
) -> Result<CscGraph, MatrixMarketError> {
    let too_large = || MatrixMarketError::TooLarge { rows, cols };
    let ptr_len = cols.checked_add(1).ok_or_else(too_large)?;
    let mut col_ptr = Vec::new();
    col_ptr.try_reserve_exact(ptr_len).map_err(|_| too_large())?;

    entries.sort_unstable();
    entries.dedup();
    col_ptr.push(0);
    let mut offset = 0;
    for col in 0..cols {
        while entries.get(offset).is_some_and(|&(entry_col, _)| entry_col == col) {
            offset += 1;
        }
        col_ptr.push(offset);
    }
    let row_idx = entries.into_iter().map(|(_, row)| row).collect();
    Ok(CscGraph::new(rows, cols, col_ptr, row_idx)?)
}
