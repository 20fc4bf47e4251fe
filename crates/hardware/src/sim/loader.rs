//! Program Loader.
//!
//! This module reads programs in the plain hex-word text format. It performs:
//! 1. **Parsing:** Splits the text on whitespace; each token is one 32-bit word in
//!    hexadecimal, with or without a `0x`/`0X` prefix.
//! 2. **File Loading:** Reads a program file, mapping I/O and parse failures to `SimError`.
//!
//! Placing the words in memory is the simulator's job (`Simulator::load_program`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::SimError;

/// Parses whitespace-separated hexadecimal words.
///
/// # Errors
///
/// Returns `SimError::Parse` (with an empty path) for the first token that is
/// not a valid 32-bit hexadecimal number.
///
/// # Examples
///
/// ```
/// use mupipe_core::sim::loader::parse_program;
///
/// let words = parse_program("0x24080005\n2409000c 0X0000000C").unwrap();
/// assert_eq!(words, vec![0x2408_0005, 0x2409_000C, 0x0000_000C]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u32>, SimError> {
    parse_with_path(text, Path::new(""))
}

/// Reads and parses the program file at `path`.
///
/// # Errors
///
/// `SimError::Io` if the file cannot be read, `SimError::Parse` for a malformed token.
pub fn load_program_file(path: &Path) -> Result<Vec<u32>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_with_path(&text, path)?;
    debug!(path = %path.display(), words = words.len(), "program file parsed");
    Ok(words)
}

fn parse_with_path(text: &str, path: &Path) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let word = u32::from_str_radix(digits, 16).map_err(|_| SimError::Parse {
                path: PathBuf::from(path),
                line: idx + 1,
                token: token.to_string(),
            })?;
            words.push(word);
        }
    }
    Ok(words)
}
