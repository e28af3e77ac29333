use serde::{Deserialize, Serialize};

/// Statement layout dialect used by one issuing institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementFormat {
    #[serde(rename = "credit-card")]
    CreditCard,
    #[serde(rename = "debit-card")]
    DebitCard,
    #[serde(rename = "commonwealth-bank")]
    CommonwealthBank,
}

impl StatementFormat {
    pub fn label(&self) -> &'static str {
        match self {
            StatementFormat::CreditCard => "credit card",
            StatementFormat::DebitCard => "debit card",
            StatementFormat::CommonwealthBank => "Commonwealth Bank",
        }
    }
}

/// Result of format detection over a full document.
///
/// `fallback` is true when no marker matched and the credit-card default was
/// used; callers may surface that as a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub format: StatementFormat,
    pub fallback: bool,
}

/// One transaction as captured from the statement text, fields still raw.
///
/// The description may span several physical lines; continuation lines are
/// joined with single spaces. Duplicate records are legal and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub date_text: String,
    pub description: String,
    pub amount_text: String,
}
