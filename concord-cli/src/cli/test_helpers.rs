//! Small helpers shared across CLI tests.

use std::{fs, io, path::PathBuf};

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

/// Two components: the path `0 - 1 - 2` and the edge `3 - 4`.
pub(super) const TWO_COMPONENTS: &str = "%%MatrixMarket matrix coordinate pattern symmetric\n\
                                         5 5 3\n\
                                         2 1\n\
                                         3 2\n\
                                         5 4\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_matrix_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
