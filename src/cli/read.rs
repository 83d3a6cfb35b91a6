use std::path::{Path, PathBuf};

use heron_fol::{parser::formula::parse_formula, structures::formula::Formula, types::err::ParseError};

pub(super) enum ReadError {
    /// The file could not be read.
    Io { path: PathBuf, kind: std::io::ErrorKind },

    /// The file holds no formula, so no query.
    Empty { path: PathBuf },

    /// A line failed to parse.
    Parse { line: usize, source: ParseError },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, kind } => write!(f, "Failed to read {path:?}: {kind}."),
            Self::Empty { path } => write!(f, "No formulas found in {path:?}."),
            Self::Parse { line, source } => write!(f, "Parse error on line {line}: {source}"),
        }
    }
}

/// The contents of a formula file: the raw text, the premises, and the query.
pub(super) struct Input {
    pub text: String,
    pub premises: Vec<Formula>,
    pub query: Formula,
}

/// Reads the formula file at `path`.
///
/// One formula per non-blank line; the last non-blank line is the query and the lines before
/// it are premises.
pub(super) fn read_input(path: &Path) -> Result<Input, ReadError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            return Err(ReadError::Io {
                path: path.to_owned(),
                kind: e.kind(),
            })
        }
    };

    let mut premises = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_formula(line) {
            Ok(formula) => premises.push(formula),
            Err(source) => {
                return Err(ReadError::Parse {
                    line: index + 1,
                    source,
                })
            }
        }
    }

    let Some(query) = premises.pop() else {
        return Err(ReadError::Empty {
            path: path.to_owned(),
        });
    };

    Ok(Input {
        text,
        premises,
        query,
    })
}
