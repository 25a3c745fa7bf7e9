//! tally-core: transaction records, the per-year ledger, and shared error types

pub mod error;
pub mod ledger;
pub mod record;

pub use error::{DocumentError, ExportError, IngestError, LineError};
pub use ledger::YearLedger;
pub use record::TransactionRecord;
