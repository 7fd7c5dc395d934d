use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty column name, bad delimiter, etc.).
    ConfigValidation(String),
    /// Winners line without a `|` separator. `line` is 1-based.
    WinnersLine { line: usize },
    /// Winners line whose amount field is not a valid number in `i64` range.
    WinnersAmount { line: usize, value: String },
    /// Reconciled table header lacks one of the required columns.
    MissingColumns { expected: [String; 3] },
    /// Malformed CSV stream (invalid UTF-8, etc.).
    Csv(String),
    /// IO error (file read/write).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::WinnersLine { line } => write!(f, "bad winners line {line}"),
            Self::WinnersAmount { line, value } => {
                write!(f, "bad amount at line {line}: '{value}'")
            }
            Self::MissingColumns { expected } => {
                write!(f, "reconciled table must have columns: {}", expected.join(","))
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}

impl From<csv::Error> for ReconError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            Self::Io(e.to_string())
        } else {
            Self::Csv(e.to_string())
        }
    }
}
