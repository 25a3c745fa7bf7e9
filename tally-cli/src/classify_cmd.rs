use anyhow::{Context, Result};
use std::path::Path;

use tally_ingest::{PdfTextSource, PlainTextSource, StatementParser, TextSource};

/// Show how each line of one statement is read, for layouts that come out empty.
pub fn run_classify(file: &Path, year: i32) -> Result<()> {
    let source: &dyn TextSource = if file.extension().is_some_and(|ext| ext == "pdf") {
        &PdfTextSource
    } else {
        &PlainTextSource
    };
    let pages = source
        .pages(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let parser = StatementParser::new().context("compile line patterns")?;
    let scan = parser.parse_pages(&pages, year);

    for r in &scan.records {
        println!(
            "{}  {}  {:<40}  {:>10}",
            r.trans_date_iso(),
            r.post_date_iso(),
            r.description,
            r.amount.to_string()
        );
    }
    for f in &scan.failures {
        println!("! page {} line {}: {} | {}", f.page, f.line_no, f.error, f.line.trim());
    }

    println!(
        "\n{} lines read, {} transactions, {} unparsed, {} not transactions",
        scan.lines_read,
        scan.records.len(),
        scan.failures.len(),
        scan.lines_skipped
    );
    Ok(())
}
