//! Transaction record types produced by statement extraction

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single card transaction pulled from a statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// Date the purchase happened
    pub trans_date: NaiveDate,
    /// Date the charge settled
    pub post_date: NaiveDate,
    /// Merchant text between the dates and the amount (may be empty)
    pub description: String,
    /// Amount as printed, scale preserved (`$4.50` stays `4.50`)
    pub amount: Decimal,
}

impl TransactionRecord {
    /// Create a new TransactionRecord
    pub fn new(
        trans_date: NaiveDate,
        post_date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            trans_date,
            post_date,
            description: description.into(),
            amount,
        }
    }

    /// Transaction date in `YYYY-MM-DD` form
    pub fn trans_date_iso(&self) -> String {
        self.trans_date.format("%Y-%m-%d").to_string()
    }

    /// Post date in `YYYY-MM-DD` form
    pub fn post_date_iso(&self) -> String {
        self.post_date.format("%Y-%m-%d").to_string()
    }
}
