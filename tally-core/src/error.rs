//! Error types shared across the tally crates

use std::path::PathBuf;

use thiserror::Error;

/// Why a classified statement line could not become a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("not a date: {0:?}")]
    BadDate(String),

    #[error("unknown month abbreviation: {0:?}")]
    UnknownMonth(String),

    #[error("day out of range: {0:?} in {1}")]
    DayOutOfRange(String, i32),

    #[error("not an amount: {0:?}")]
    BadAmount(String),
}

/// A statement whose text could not be read at all
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot extract text from {}: {reason}", path.display())]
    Extract { path: PathBuf, reason: String },
}

/// Run-level failures that stop ingestion before anything is exported
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("no statements matching {pattern} in {} ({} other .pdf files)", dir.display(), candidates.len())]
    NoMatchingDocuments {
        dir: PathBuf,
        pattern: String,
        candidates: Vec<String>,
    },

    #[error("{0} statements processed but no transactions were extracted")]
    NoTransactionsExtracted(usize),

    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Writing one year's output failed; later years are not attempted
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error for {year}: {source}")]
    Csv {
        year: i32,
        #[source]
        source: csv::Error,
    },
}
