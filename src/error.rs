//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    /// Corpora that should be line-aligned have different lengths.
    InputMismatch {
        what: String,
        expected: usize,
        got: usize,
    },
    /// An alignment token that is not `<int>-<int>`.
    MalformedAlignment { line: usize, token: String },
    /// An alignment edge pointing past the end of its target sentence.
    AlignmentOutOfRange {
        line: usize,
        src_pos: usize,
        tgt_pos: usize,
        src_len: usize,
        tgt_len: usize,
    },
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Serde(e) => write!(f, "serialization error: {e}"),
            Error::InputMismatch {
                what,
                expected,
                got,
            } => write!(
                f,
                "input length mismatch: {what} has {got} lines, expected {expected}"
            ),
            Error::MalformedAlignment { line, token } => {
                write!(f, "malformed alignment token {token:?} on line {line}")
            }
            Error::AlignmentOutOfRange {
                line,
                src_pos,
                tgt_pos,
                src_len,
                tgt_len,
            } => write!(
                f,
                "alignment {src_pos}-{tgt_pos} on line {line} is out of range (sentence lengths {src_len}/{tgt_len})"
            ),
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl Error {
    /// Attach a corpus line number to alignment errors.
    ///
    /// Other variants are returned untouched.
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            Error::MalformedAlignment { token, .. } => Error::MalformedAlignment {
                line: line_no,
                token,
            },
            Error::AlignmentOutOfRange {
                src_pos,
                tgt_pos,
                src_len,
                tgt_len,
                ..
            } => Error::AlignmentOutOfRange {
                line: line_no,
                src_pos,
                tgt_pos,
                src_len,
                tgt_len,
            },
            e => e,
        }
    }
}
