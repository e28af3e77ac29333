use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A transaction with typed fields, ready for categorization.
///
/// Statement rows carry no year, so `date` sits at a placeholder year; only
/// day and month are meaningful. The amount is always finite — rows that
/// fail to normalize are dropped rather than kept with a hole in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTransaction {
    pub date: NaiveDate,
    /// At most three whitespace-separated tokens.
    pub description: String,
    /// Positive = spend, negative = credit/refund.
    pub amount: f64,
}

/// A normalized transaction plus its category assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    /// Initial assignment from the keyword table. A presentation layer may
    /// overwrite this per record; date, description, and amount stay fixed.
    pub category: String,
}
