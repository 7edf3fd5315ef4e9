//! Line-oriented loading of position-code files.
//!
//! Input files carry one code per line. Loading asks for an exact count up
//! front; an unreadable file or one with fewer lines than requested is a
//! hard failure, since a benchmark run over partial data would not be
//! comparable to anything.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{CodeError, Poscode};

/// Errors loading a code file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line could not be read.
    #[error("read error in {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file ended before the requested number of codes.
    #[error("{} holds {found} codes, expected {expected}", path.display())]
    TooFewLines {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    /// A line was not a well-formed code.
    #[error("{}:{line}: {source}", path.display())]
    BadCode {
        path: PathBuf,
        line: usize,
        #[source]
        source: CodeError,
    },
}

/// Reads exactly `n` codes, one per line, from the file at `path`.
///
/// Lines beyond the first `n` are ignored. A trailing carriage return on a
/// line is stripped, so files with Windows line endings load unchanged.
///
/// # Examples
///
/// ```no_run
/// use possort::Poscode;
/// use possort::io::read_codes;
///
/// let codes: Vec<Poscode<6>> = read_codes("codes_500K.txt", 500_000)?;
/// assert_eq!(codes.len(), 500_000);
/// # Ok::<(), possort::io::ReadError>(())
/// ```
pub fn read_codes<const N: usize>(
    path: impl AsRef<Path>,
    n: usize,
) -> Result<Vec<Poscode<N>>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines();

    let mut codes = Vec::with_capacity(n);
    for found in 0..n {
        let line = match lines.next() {
            Some(result) => result.map_err(|source| ReadError::Io {
                path: path.to_path_buf(),
                source,
            })?,
            None => {
                return Err(ReadError::TooFewLines {
                    path: path.to_path_buf(),
                    expected: n,
                    found,
                });
            }
        };

        let code =
            Poscode::try_from(line.trim_end_matches('\r')).map_err(|source| ReadError::BadCode {
                path: path.to_path_buf(),
                line: found + 1,
                source,
            })?;
        codes.push(code);
    }

    Ok(codes)
}
