use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use tally_core::{IngestError, YearLedger};
use tally_export::export_ledger;
use tally_ingest::{PdfTextSource, RunReport, StatementFile, StatementParser, TextSource, discover_statements};

use crate::config::Config;
use crate::prompt::prompt_directory;

/// Discover, parse, and export every statement under `dir`.
pub fn run_extract(dir: Option<PathBuf>, out: Option<PathBuf>, cfg: &Config) -> Result<()> {
    let dir = match dir.or_else(|| cfg.statements.directory.clone()) {
        Some(d) => d,
        None => prompt_directory()?,
    };
    if !dir.is_dir() {
        bail!("Directory '{}' not found.", dir.display());
    }
    let out_dir = out
        .or_else(|| cfg.export.output_dir.clone())
        .unwrap_or_else(|| dir.clone());
    tracing::debug!(dir = %dir.display(), out = %out_dir.display(), "resolved directories");

    println!("\nProcessing statements in {}...", dir.display());

    let files = find_statements(&dir)?;
    let parser = StatementParser::new().context("compile line patterns")?;
    let mut ledger = YearLedger::new();

    let report = ingest_with_progress(&parser, &PdfTextSource, &files, &mut ledger);
    let report = report.ensure_extracted(&ledger).context("No transactions were processed.")?;

    fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    export_ledger(&ledger, &out_dir, |saved| {
        println!(
            "Saved {} transactions for {} to {}",
            saved.rows,
            saved.year,
            saved.path.display()
        );
    })
    .context("Failed to save some transactions.")?;

    println!("\nProcessing complete!");
    print_summary(&ledger, &report);
    Ok(())
}

fn find_statements(dir: &Path) -> Result<Vec<StatementFile>> {
    match discover_statements(dir) {
        Ok(files) => {
            println!("\nFound {} PDF files to process:", files.len());
            for f in &files {
                println!("  - {}", f.name());
            }
            Ok(files)
        }
        Err(IngestError::NoMatchingDocuments { dir, pattern, candidates }) => {
            println!("\nDebugging information:");
            println!("All PDF files found in directory:");
            for name in &candidates {
                println!("  - {}", name);
            }
            println!("Pattern used: {}", pattern);
            bail!("No matching PDF files found in {}", dir.display())
        }
        Err(e) => Err(e.into()),
    }
}

fn ingest_with_progress(
    parser: &StatementParser,
    source: &dyn TextSource,
    files: &[StatementFile],
    ledger: &mut YearLedger,
) -> RunReport {
    println!("\nStarting processing...");

    let mut report = RunReport::default();
    for file in files {
        println!("\nProcessing {}...", file.name());
        let result = parser.ingest_statement(source, file, ledger);
        match &result {
            Ok(doc) if doc.extracted > 0 => {
                println!("Added {} transactions for {}", doc.extracted, file.year);
            }
            Ok(_) => println!("No transactions found in {}", file.name()),
            Err(e) => println!("Error processing PDF {}: {}", file.name(), e),
        }
        report.push(file, result);
    }
    report
}

fn print_summary(ledger: &YearLedger, report: &RunReport) {
    println!("\nSummary:");
    println!("Total transactions processed: {}", ledger.len());
    for (year, records) in ledger.iter() {
        println!("  {}: {} transactions", year, records.len());
    }

    let bad_lines = report.line_failures();
    if bad_lines > 0 {
        println!("\n{} transaction-like lines could not be parsed (see warnings above)", bad_lines);
    }
    if !report.failures.is_empty() {
        println!("{} statements were skipped:", report.failures.len());
        for f in &report.failures {
            println!("  - {}: {}", f.file.name(), f.error);
        }
    }
}
