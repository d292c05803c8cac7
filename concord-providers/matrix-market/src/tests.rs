use rstest::rstest;

use crate::{DataType, Header, MatrixMarketError, Symmetry, read_matrix_market};

fn read(input: &str) -> Result<concord_core::CscGraph, MatrixMarketError> {
    read_matrix_market(input.as_bytes())
}

#[rstest]
#[case("%%MatrixMarket matrix coordinate pattern general", DataType::Pattern, Symmetry::General)]
#[case("%%MatrixMarket matrix coordinate integer symmetric", DataType::Integer, Symmetry::Symmetric)]
#[case("%%matrixmarket MATRIX Coordinate Real Skew-Symmetric", DataType::Real, Symmetry::SkewSymmetric)]
fn parses_supported_headers(
    #[case] line: &str,
    #[case] data_type: DataType,
    #[case] symmetry: Symmetry,
) {
    let header = Header::parse(line).expect("header should parse");
    assert_eq!(header.data_type, data_type);
    assert_eq!(header.symmetry, symmetry);
}

#[rstest]
#[case("%%MatrixMarket matrix array real general", "format")]
#[case("%%MatrixMarket matrix coordinate complex general", "data type")]
#[case("%%MatrixMarket matrix coordinate real hermitian", "symmetry")]
fn rejects_unsupported_headers(#[case] line: &str, #[case] expected: &str) {
    let err = Header::parse(line).expect_err("header must be rejected");
    assert!(
        matches!(err, MatrixMarketError::Unsupported { field, .. } if field == expected),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[case("%MatrixMarket matrix coordinate real general")]
#[case("%%MatrixMarket vector coordinate real general")]
#[case("%%MatrixMarket matrix coordinate real")]
#[case("%%MatrixMarket matrix sparse real general")]
#[case("%%MatrixMarket matrix coordinate real lower")]
fn rejects_malformed_headers(#[case] line: &str) {
    let err = Header::parse(line).expect_err("header must be rejected");
    assert!(matches!(err, MatrixMarketError::InvalidHeader { .. }));
}

#[test]
fn general_pattern_keeps_direction() {
    let graph = read(
        "%%MatrixMarket matrix coordinate pattern general\n\
         4 4 3\n\
         2 1\n\
         3 1\n\
         4 3\n",
    )
    .expect("valid input");
    assert_eq!(graph.col_ptr(), &[0, 2, 2, 3, 3]);
    assert_eq!(graph.row_idx(), &[1, 2, 3]);
}

#[test]
fn symmetric_entries_are_mirrored_once() {
    let graph = read(
        "%%MatrixMarket matrix coordinate real symmetric\n\
         % lower triangle only\n\
         3 3 3\n\
         1 1 4.0\n\
         2 1 -1.5\n\
         3 2 2e3\n",
    )
    .expect("valid input");
    assert_eq!(graph.column(0), &[0, 1]);
    assert_eq!(graph.column(1), &[0, 2]);
    assert_eq!(graph.column(2), &[1]);
    assert_eq!(graph.nnz(), 5);
}

#[test]
fn duplicates_collapse_and_rows_sort() {
    let graph = read(
        "%%MatrixMarket matrix coordinate integer general\n\
         3 2 4\n\
         3 1 7\n\
         1 1 2\n\
         3 1 9\n\
         2 2 0\n",
    )
    .expect("valid input");
    assert_eq!(graph.nrows(), 3);
    assert_eq!(graph.ncols(), 2);
    assert_eq!(graph.column(0), &[0, 2]);
    assert_eq!(graph.column(1), &[1]);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let graph = read(
        "%%MatrixMarket matrix coordinate pattern general\n\
         %\n\
         \n\
         % generated\n\
         2 2 1\n\
         \n\
         % trailing comment\n\
         1 2\n",
    )
    .expect("valid input");
    assert_eq!(graph.column(1), &[0]);
}

#[test]
fn empty_input_reports_missing_header() {
    assert!(matches!(read(""), Err(MatrixMarketError::MissingHeader)));
}

#[test]
fn header_only_reports_missing_size() {
    let err = read("%%MatrixMarket matrix coordinate pattern general\n% nothing else\n")
        .expect_err("size line is required");
    assert!(matches!(err, MatrixMarketError::MissingSize));
}

#[rstest]
#[case("3 3\n")]
#[case("3 3 1 1\n")]
#[case("3 x 1\n")]
#[case("-3 3 1\n")]
fn rejects_malformed_size_lines(#[case] size: &str) {
    let input = format!("%%MatrixMarket matrix coordinate pattern general\n{size}1 1\n");
    let err = read(&input).expect_err("size line must be rejected");
    assert!(
        matches!(err, MatrixMarketError::InvalidSize { line_number: 2, .. }),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[case("pattern", "1 2 1.0")]
#[case("real", "1 2")]
#[case("real", "1 2 abc")]
#[case("integer", "1 2 1.5")]
#[case("pattern", "1")]
#[case("pattern", "one 2")]
fn rejects_malformed_entries(#[case] data_type: &str, #[case] entry: &str) {
    let input = format!("%%MatrixMarket matrix coordinate {data_type} general\n2 2 1\n{entry}\n");
    let err = read(&input).expect_err("entry must be rejected");
    assert!(
        matches!(err, MatrixMarketError::InvalidEntry { line_number: 3, .. }),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[case("0 1")]
#[case("1 0")]
#[case("3 1")]
#[case("1 3")]
fn rejects_out_of_range_indices(#[case] entry: &str) {
    let input = format!("%%MatrixMarket matrix coordinate pattern general\n2 2 1\n{entry}\n");
    let err = read(&input).expect_err("entry must be rejected");
    assert!(matches!(err, MatrixMarketError::IndexOutOfRange { line_number: 3, rows: 2, cols: 2, .. }));
}

#[rstest]
#[case("2 2 3\n1 2\n2 1\n", 3, 2)]
#[case("2 2 1\n1 2\n2 1\n", 1, 2)]
#[case("2 2 1\n", 1, 0)]
fn reports_entry_count_mismatch(
    #[case] body: &str,
    #[case] declared: usize,
    #[case] found: usize,
) {
    let input = format!("%%MatrixMarket matrix coordinate pattern general\n{body}");
    let err = read(&input).expect_err("counts must agree");
    assert!(
        matches!(
            err,
            MatrixMarketError::EntryCountMismatch { declared: d, found: f } if d == declared && f == found
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn symmetric_storage_requires_square_matrix() {
    let err = read("%%MatrixMarket matrix coordinate pattern symmetric\n3 2 0\n")
        .expect_err("non-square symmetric must be rejected");
    assert!(matches!(
        err,
        MatrixMarketError::NonSquareSymmetric { rows: 3, cols: 2, .. }
    ));
}

#[test]
fn zero_entry_matrix_is_edgeless() {
    let graph = read("%%MatrixMarket matrix coordinate pattern general\n4 4 0\n")
        .expect("valid input");
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.nnz(), 0);
}

#[rstest]
#[case("1 4611686018427387904 0", 1, 4_611_686_018_427_387_904)]
#[case("1 18446744073709551615 0", 1, usize::MAX)]
fn oversized_column_count_is_an_error(
    #[case] size_line: &str,
    #[case] rows: usize,
    #[case] cols: usize,
) {
    let input = format!("%%MatrixMarket matrix coordinate pattern general\n{size_line}\n");
    let err = read(&input).expect_err("allocation must fail gracefully");
    assert!(
        matches!(
            err,
            MatrixMarketError::TooLarge { rows: r, cols: c } if r == rows && c == cols
        ),
        "unexpected error: {err:?}"
    );
}
