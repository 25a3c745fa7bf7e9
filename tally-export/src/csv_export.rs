//! Write each year of the ledger to `<year>_transactions.csv`.
//!
//! Columns: Transaction Date,Post Date,Description,Amount
//! Rows end in CRLF, like spreadsheet-oriented CSV writers.
//! Rows are ordered by transaction date; same-day rows keep statement order.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tally_core::{ExportError, TransactionRecord, YearLedger};

pub const HEADER: [&str; 4] = ["Transaction Date", "Post Date", "Description", "Amount"];

/// One year that made it to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedYear {
    pub year: i32,
    pub path: PathBuf,
    pub rows: usize,
}

pub fn output_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("{year:04}_transactions.csv"))
}

/// Stable sort on the parsed transaction date.
pub fn sorted_by_trans_date(records: &[TransactionRecord]) -> Vec<&TransactionRecord> {
    let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.trans_date);
    sorted
}

/// Render one year as CSV into `out`. Returns the number of data rows.
pub fn write_year<W: Write>(out: W, year: i32, records: &[TransactionRecord]) -> Result<usize, ExportError> {
    let csv_err = |source: csv::Error| ExportError::Csv { year, source };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);
    wtr.write_record(HEADER).map_err(csv_err)?;

    let sorted = sorted_by_trans_date(records);
    for r in &sorted {
        wtr.write_record([
            r.trans_date_iso(),
            r.post_date_iso(),
            r.description.clone(),
            r.amount.to_string(),
        ])
        .map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| csv_err(e.into()))?;

    Ok(sorted.len())
}

/// Write every year in the ledger under `dir`, years ascending.
///
/// Stops at the first year that fails; files already written are left as they
/// are. `on_saved` is called after each year lands on disk.
pub fn export_ledger(
    ledger: &YearLedger,
    dir: &Path,
    mut on_saved: impl FnMut(&ExportedYear),
) -> Result<Vec<ExportedYear>, ExportError> {
    let mut written = Vec::new();

    for (year, records) in ledger.iter() {
        let path = output_path(dir, year);
        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        let rows = match write_year(file, year, records) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(year, path = %path.display(), error = %e, "export halted");
                return Err(e);
            }
        };
        tracing::debug!(year, rows, path = %path.display(), "wrote year");

        let exported = ExportedYear { year, path, rows };
        on_saved(&exported);
        written.push(exported);
    }

    Ok(written)
}
