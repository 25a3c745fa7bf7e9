//! tally-export: per-year CSV output of the transaction ledger

pub mod csv_export;

pub use csv_export::{ExportedYear, HEADER, export_ledger, output_path, sorted_by_trans_date, write_year};
