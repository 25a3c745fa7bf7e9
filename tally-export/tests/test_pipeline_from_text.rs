use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tally_core::{DocumentError, YearLedger};
use tally_export::{export_ledger, output_path};
use tally_ingest::{StatementParser, TextSource, discover_statements};

/// Statement text keyed by file name, standing in for PDF extraction.
struct FixtureSource(HashMap<String, Vec<String>>);

impl TextSource for FixtureSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        self.0.get(&name).cloned().ok_or_else(|| DocumentError::Extract {
            path: path.to_path_buf(),
            reason: "unreadable fixture".to_string(),
        })
    }
}

fn statement_page(month: &str, count: u32) -> String {
    let mut page = String::from("Trans Date Post Date Description Amount\n");
    for day in (1..=count).rev() {
        page.push_str(&format!("{month} {day} {month} {} MERCHANT {day} ${day}.25\n", day + 1));
    }
    page.push_str("New Balance $1,000.00\n");
    page
}

fn fixture_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

fn run(dir: &Path, source: &FixtureSource, out: &Path) -> (YearLedger, Vec<PathBuf>) {
    let files = discover_statements(dir).unwrap();
    let parser = StatementParser::new().unwrap();
    let mut ledger = YearLedger::new();
    let report = parser.ingest_all(source, &files, &mut ledger);
    report.ensure_extracted(&ledger).unwrap();

    let written = export_ledger(&ledger, out, |_| {}).unwrap();
    (ledger, written.into_iter().map(|w| w.path).collect())
}

#[test]
fn test_two_statements_same_year_merge() {
    let dir = fixture_dir(&[
        "2023 Mar CreditCardStatement.pdf",
        "2023 Jan CreditCardStatement.pdf",
        "notes.pdf",
    ]);
    let source = FixtureSource(HashMap::from([
        ("2023 Jan CreditCardStatement.pdf".to_string(), vec![statement_page("Jan", 5)]),
        ("2023 Mar CreditCardStatement.pdf".to_string(), vec![statement_page("Mar", 7)]),
    ]));

    let out = tempfile::tempdir().unwrap();
    let (ledger, written) = run(dir.path(), &source, out.path());

    assert_eq!(ledger.records(2023).unwrap().len(), 12);
    assert_eq!(written, vec![output_path(out.path(), 2023)]);

    let csv = fs::read_to_string(&written[0]).unwrap();
    assert!(csv.starts_with("Transaction Date,Post Date,Description,Amount\r\n"));
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Transaction Date,Post Date,Description,Amount");
    assert_eq!(lines[1], "2023-01-01,2023-01-02,MERCHANT 1,1.25");
    assert_eq!(lines[12], "2023-03-07,2023-03-08,MERCHANT 7,7.25");
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = fixture_dir(&[
        "2023 Dec CreditCardStatement.pdf",
        "2024 Jan CreditCardStatement.pdf",
    ]);
    let source = FixtureSource(HashMap::from([
        ("2023 Dec CreditCardStatement.pdf".to_string(), vec![statement_page("Dec", 3)]),
        (
            "2024 Jan CreditCardStatement.pdf".to_string(),
            vec![statement_page("Jan", 2), "Jan 1 Jan 2 \"QUOTED, CO\" $3.00\n".to_string()],
        ),
    ]));

    let out = tempfile::tempdir().unwrap();
    let (_, first) = run(dir.path(), &source, out.path());
    let first_bytes: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let (_, second) = run(dir.path(), &source, out.path());
    let second_bytes: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_unreadable_statement_does_not_stop_run() {
    let dir = fixture_dir(&[
        "2022 Feb CreditCardStatement.pdf",
        "2022 Mar CreditCardStatement.pdf",
    ]);
    let source = FixtureSource(HashMap::from([(
        "2022 Mar CreditCardStatement.pdf".to_string(),
        vec![statement_page("Mar", 2)],
    )]));

    let files = discover_statements(dir.path()).unwrap();
    let parser = StatementParser::new().unwrap();
    let mut ledger = YearLedger::new();
    let report = parser.ingest_all(&source, &files, &mut ledger);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file.name(), "2022 Feb CreditCardStatement.pdf");
    assert_eq!(report.extracted(), 2);
    assert_eq!(ledger.records(2022).unwrap().len(), 2);
}
