//! Find statement files by their naming convention:
//!   `2024 Jan CreditCardStatement.pdf`
//! The leading four digits are the statement year used for every row in it.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tally_core::IngestError;

pub const STATEMENT_PATTERN: &str =
    r"^[0-9]{4} (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) CreditCardStatement\.pdf$";

/// A statement file and the year taken from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFile {
    pub path: PathBuf,
    pub year: i32,
}

impl StatementFile {
    /// Build from a file name that already matched [`STATEMENT_PATTERN`].
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let year = name.get(..4)?.parse().ok()?;
        Some(Self { path, year })
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List matching statements in `dir`, sorted by file name.
///
/// When nothing matches, the error carries every `.pdf` name found so the
/// user can see what was skipped.
pub fn discover_statements(dir: &Path) -> Result<Vec<StatementFile>, IngestError> {
    let pattern = Regex::new(STATEMENT_PATTERN)?;

    let entries = fs::read_dir(dir).map_err(|source| IngestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pdf_names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "pdf") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            pdf_names.push(name.to_string());
        }
    }
    pdf_names.sort();

    let statements: Vec<StatementFile> = pdf_names
        .iter()
        .filter(|name| pattern.is_match(name))
        .filter_map(|name| StatementFile::from_path(dir.join(name)))
        .collect();

    if statements.is_empty() {
        return Err(IngestError::NoMatchingDocuments {
            dir: dir.to_path_buf(),
            pattern: STATEMENT_PATTERN.to_string(),
            candidates: pdf_names,
        });
    }

    tracing::debug!(dir = %dir.display(), count = statements.len(), "discovered statements");
    Ok(statements)
}
