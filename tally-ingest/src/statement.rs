//! Drive classification and extraction over whole statements.
//!
//! Lines that fail are collected, never propagated: one bad row does not stop
//! the rest of its statement, and one unreadable statement does not stop the
//! run.

use tally_core::{DocumentError, IngestError, LineError, TransactionRecord, YearLedger};

use crate::classifier::LineClassifier;
use crate::discovery::StatementFile;
use crate::extractor::extract;
use crate::source::TextSource;

/// A transaction-shaped line whose fields did not parse
#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    /// 1-based page number
    pub page: usize,
    /// 1-based position among the page's non-blank lines
    pub line_no: usize,
    pub line: String,
    pub error: LineError,
}

/// Outcome of scanning the pages of one statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementScan {
    pub records: Vec<TransactionRecord>,
    pub failures: Vec<LineFailure>,
    /// Non-blank lines seen
    pub lines_read: usize,
    /// Non-blank lines that were not transaction lines
    pub lines_skipped: usize,
}

/// What one statement contributed to the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    pub file: StatementFile,
    pub extracted: usize,
    pub failures: Vec<LineFailure>,
    pub lines_read: usize,
    pub lines_skipped: usize,
}

/// A statement that was skipped because its text could not be read
#[derive(Debug)]
pub struct DocumentFailure {
    pub file: StatementFile,
    pub error: DocumentError,
}

/// Per-document successes and failures for a whole run
#[derive(Debug, Default)]
pub struct RunReport {
    pub documents: Vec<DocumentReport>,
    pub failures: Vec<DocumentFailure>,
}

impl RunReport {
    pub fn push(&mut self, file: &StatementFile, result: Result<DocumentReport, DocumentError>) {
        match result {
            Ok(report) => self.documents.push(report),
            Err(error) => self.failures.push(DocumentFailure {
                file: file.clone(),
                error,
            }),
        }
    }

    /// Records extracted across all statements
    pub fn extracted(&self) -> usize {
        self.documents.iter().map(|d| d.extracted).sum()
    }

    pub fn line_failures(&self) -> usize {
        self.documents.iter().map(|d| d.failures.len()).sum()
    }

    /// Fail the run when statements were found but nothing came out of them.
    pub fn ensure_extracted(self, ledger: &YearLedger) -> Result<Self, IngestError> {
        if ledger.is_empty() {
            return Err(IngestError::NoTransactionsExtracted(
                self.documents.len() + self.failures.len(),
            ));
        }
        Ok(self)
    }
}

/// Classifies and extracts statement lines into a [`YearLedger`].
#[derive(Debug, Clone)]
pub struct StatementParser {
    classifier: LineClassifier,
}

impl StatementParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            classifier: LineClassifier::new()?,
        })
    }

    /// `None` when the line is not a transaction line at all.
    pub fn parse_line(&self, line: &str, year: i32) -> Option<Result<TransactionRecord, LineError>> {
        let classified = self.classifier.classify(line)?;
        Some(extract(&classified, year))
    }

    /// Scan pages in order, lines in order.
    pub fn parse_pages<S: AsRef<str>>(&self, pages: &[S], year: i32) -> StatementScan {
        let mut scan = StatementScan::default();

        for (page_idx, page) in pages.iter().enumerate() {
            let lines = page.as_ref().lines().filter(|l| !l.trim().is_empty());
            for (line_idx, line) in lines.enumerate() {
                scan.lines_read += 1;

                match self.parse_line(line, year) {
                    Some(Ok(record)) => scan.records.push(record),
                    Some(Err(error)) => scan.failures.push(LineFailure {
                        page: page_idx + 1,
                        line_no: line_idx + 1,
                        line: line.to_string(),
                        error,
                    }),
                    None => scan.lines_skipped += 1,
                }
            }
        }

        scan
    }

    /// Read one statement and append its records under the statement's year.
    ///
    /// The statement's text is fully read (and its file closed) before any
    /// line is parsed.
    pub fn ingest_statement(
        &self,
        source: &dyn TextSource,
        file: &StatementFile,
        ledger: &mut YearLedger,
    ) -> Result<DocumentReport, DocumentError> {
        let pages = source.pages(&file.path).inspect_err(|e| {
            tracing::error!(file = %file.name(), error = %e, "skipping statement");
        })?;

        let scan = self.parse_pages(&pages, file.year);
        for failure in &scan.failures {
            tracing::warn!(
                file = %file.name(),
                page = failure.page,
                line = failure.line_no,
                error = %failure.error,
                "couldn't parse line: {}",
                failure.line.trim()
            );
        }
        tracing::debug!(
            file = %file.name(),
            read = scan.lines_read,
            skipped = scan.lines_skipped,
            extracted = scan.records.len(),
            "scanned statement"
        );

        let extracted = scan.records.len();
        ledger.append(file.year, scan.records);

        Ok(DocumentReport {
            file: file.clone(),
            extracted,
            failures: scan.failures,
            lines_read: scan.lines_read,
            lines_skipped: scan.lines_skipped,
        })
    }

    /// Ingest every statement in order.
    pub fn ingest_all(
        &self,
        source: &dyn TextSource,
        files: &[StatementFile],
        ledger: &mut YearLedger,
    ) -> RunReport {
        let mut report = RunReport::default();
        for file in files {
            let result = self.ingest_statement(source, file, ledger);
            report.push(file, result);
        }
        report
    }
}
