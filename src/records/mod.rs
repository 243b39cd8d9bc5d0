//! Line-oriented record files.
//!
//! One record per line, file order preserved, no parsing beyond stripping
//! line terminators. Writes go through a sibling temp file and a rename so a
//! failed run never leaves a truncated output behind.

mod placeholder;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use placeholder::Placeholder;

/// Error type for reading and writing record files.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Input file missing, unreadable or not UTF-8.
    #[error("failed to read records from {}: {source}", .path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Output could not be written or moved into place.
    #[error("failed to write records to {}: {source}", .path.display())]
    Write {
        /// Destination that was not produced.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Placeholder token spans more than one line.
    #[error("placeholder token {0:?} must not contain line breaks")]
    InvalidPlaceholder(String),
}

/// Whether `c` ends a record.
///
/// Besides `\n` and `\r`, the vertical tab, form feed, file/group/record
/// separators, NEL and the Unicode line/paragraph separators all break lines.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split file contents into records at every line break.
///
/// `\r\n` counts as a single break; a final break does not produce an
/// empty trailing record.
pub fn split_records(contents: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut rest = contents;

    while let Some(at) = rest.find(is_line_break) {
        records.push(rest[..at].to_owned());
        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        records.push(rest.to_owned());
    }

    records
}

/// Read every line of `path` as a record (see [`split_records`]).
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<String>, RecordError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_records(&contents))
}

/// Join `lines` into file contents, `\n` after each line.
pub fn render_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Write `lines` to `path`, one per line, replacing any existing file.
pub fn write_records<P, I, S>(path: P, lines: I) -> Result<(), RecordError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_atomic(path.as_ref(), render_lines(lines).as_bytes())
}

/// Write `bytes` to `path` via temp file + rename.
///
/// On failure the temp file is removed and `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RecordError> {
    let write_err = |source| RecordError::Write {
        path: path.to_path_buf(),
        source,
    };

    let tmp = temp_sibling(path).map_err(write_err)?;
    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let mut tmp_name = name.to_os_string();
    tmp_name.push(format!(".tmp.{}", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}
