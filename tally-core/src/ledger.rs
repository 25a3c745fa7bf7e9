//! Per-year accumulation of extracted transactions across statements

use std::collections::BTreeMap;

use crate::record::TransactionRecord;

/// Year label to records, in the order statements contributed them.
///
/// Owned by whoever drives a run and handed to ingestion by `&mut`. Appends for
/// the same year concatenate; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearLedger {
    years: BTreeMap<i32, Vec<TransactionRecord>>,
}

impl YearLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch under `year`, keeping the batch's order.
    /// An empty batch does not create an entry for the year.
    pub fn append(&mut self, year: i32, records: impl IntoIterator<Item = TransactionRecord>) {
        let mut records = records.into_iter().peekable();
        if records.peek().is_none() {
            return;
        }
        self.years.entry(year).or_default().extend(records);
    }

    /// Records for one year, if any statement contributed to it
    pub fn records(&self, year: i32) -> Option<&[TransactionRecord]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// All (year, records) pairs, years ascending
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[TransactionRecord])> {
        self.years.iter().map(|(year, recs)| (*year, recs.as_slice()))
    }

    /// Total records across all years
    pub fn len(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
