//! Program Loader.
//!
//! This module reads LS-8 program sources. It performs:
//! 1. **Parsing:** One binary-literal byte per line; `#` starts a comment; blank lines and
//!    lines that are not valid bytes are skipped.
//! 2. **File loading:** Reads a source from disk, distinguishing a missing file from other
//!    I/O failures, and rejects programs that do not fit in memory.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::common::{LoadError, MEMORY_SIZE, MemoryError};

/// Parses one source line into a byte.
///
/// Everything from the first `#` on is ignored. The remainder is trimmed and parsed as
/// base 2; an optional `0b` prefix and `_` digit separators are accepted.
///
/// # Returns
///
/// `None` for blank, comment-only, and unparsable lines.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_line;
///
/// assert_eq!(parse_line("10000010 # LDI R0,8"), Some(0b1000_0010));
/// assert_eq!(parse_line("# just a comment"), None);
/// assert_eq!(parse_line("hello"), None);
/// ```
pub fn parse_line(line: &str) -> Option<u8> {
    let code = line.split('#').next().unwrap_or_default().trim();
    if code.is_empty() {
        return None;
    }
    let digits = code
        .strip_prefix("0b")
        .or_else(|| code.strip_prefix("0B"))
        .unwrap_or(code)
        .replace('_', "");
    u8::from_str_radix(&digits, 2).ok()
}

/// Parses a whole program source into its byte image, in line order.
pub fn parse_program(source: &str) -> Vec<u8> {
    source
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let byte = parse_line(line);
            if byte.is_none() && !is_blank_or_comment(line) {
                debug!(line = n + 1, text = line, "skipping unparsable line");
            }
            byte
        })
        .collect()
}

/// Whether a line carries no code at all.
fn is_blank_or_comment(line: &str) -> bool {
    line.split('#').next().unwrap_or_default().trim().is_empty()
}

/// Reads and parses a program file.
///
/// # Errors
///
/// * [`LoadError::NotFound`] if the file does not exist.
/// * [`LoadError::Io`] for any other read failure.
/// * [`LoadError::TooLarge`] if the program is longer than memory.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let image = parse_program(&source);
    if image.len() > MEMORY_SIZE {
        return Err(MemoryError::ProgramTooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        }
        .into());
    }
    debug!(path = %path.display(), bytes = image.len(), "program loaded");
    Ok(image)
}
