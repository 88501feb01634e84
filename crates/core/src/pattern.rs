//! Plaintext `.cells` pattern files.
//!
//! Lines starting with `!` are comments. Every other line is read character
//! by character, top to bottom, left to right; `O` marks a live cell and any
//! other character a dead one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Character marking a live cell in the plaintext format.
const ALIVE: char = 'O';

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("failed to read pattern file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sparse set of live cells parsed from a pattern file.
///
/// Coordinates are relative to the pattern's own top-left corner; the grid
/// clips anything that falls outside the terminal on `reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Parses pattern text. Pure; never fails — unknown characters are dead.
    pub fn parse(text: &str) -> Self {
        let mut cells = Vec::new();
        for (y, line) in text
            .lines()
            .filter(|line| !line.starts_with('!'))
            .enumerate()
        {
            for (x, ch) in line.chars().enumerate() {
                if ch == ALIVE {
                    cells.push((x, y));
                }
            }
        }
        Self { cells }
    }

    /// Loads and parses a pattern file from disk.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                PatternError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PatternError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(Self::parse(&text))
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marks_only_o_alive() {
        let pattern = Pattern::parse(".O.\nOOO\n.x.");
        assert_eq!(pattern.cells(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_parse_skips_comment_lines() {
        let pattern = Pattern::parse("!Name: Blinker\n!\nOOO");
        assert_eq!(pattern.cells(), &[(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Pattern::parse("").is_empty());
        assert!(Pattern::parse("!only comments\n!here").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = Pattern::load(Path::new("/nonexistent/blinker.cells")).unwrap_err();
        assert!(matches!(err, PatternError::NotFound { .. }));
    }
}
