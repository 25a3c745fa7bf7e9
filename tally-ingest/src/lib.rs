//! tally-ingest: statement discovery, text sources, and the line
//! classification / extraction engine.

pub mod amount;
pub mod classifier;
pub mod discovery;
pub mod extractor;
pub mod source;
pub mod statement;

pub use amount::parse_amount;
pub use classifier::{ClassifiedLine, LineClassifier};
pub use discovery::{STATEMENT_PATTERN, StatementFile, discover_statements};
pub use extractor::extract;
pub use source::{PdfTextSource, PlainTextSource, TextSource};
pub use statement::{DocumentFailure, DocumentReport, LineFailure, RunReport, StatementParser, StatementScan};
