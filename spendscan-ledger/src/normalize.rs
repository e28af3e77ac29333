//! Normalization: raw text records to typed transactions.
//!
//! Amounts are parsed after stripping thousands separators, dates with the
//! format's day/month shape at a placeholder year, then the format's
//! exclusion rules and the three-token description cap are applied. A row
//! whose amount or date fails to parse is dropped silently; best-effort at
//! the row level is the contract.

use chrono::NaiveDate;

use spendscan_ingest::types::{RawTransaction, StatementFormat};

use crate::types::NormalizedTransaction;

/// Statement rows carry no year. 2000 is a leap year, so a "29 Feb" row
/// still parses.
const PLACEHOLDER_YEAR: i32 = 2000;

const DESCRIPTION_TOKEN_LIMIT: usize = 3;

/// Non-expense rows excluded per format, matched case-insensitively against
/// the full multi-line description before truncation.
const DEBIT_CARD_EXCLUSIONS: [&str; 4] = [
    "openingbalance",
    "closingbalance",
    "deposit",
    "creditcard/locpayment",
];
const CREDIT_CARD_EXCLUSIONS: [&str; 1] = ["payment from"];
const COMMONWEALTH_EXCLUSIONS: [&str; 2] = ["opening balance", "debit interest"];

/// Debit-card noise token stripped out of surviving descriptions.
const POINT_OF_SALE_TOKEN: &str = "pointofsalepurchase";

/// Convert raw records into typed transactions, dropping rows that fail to
/// parse or that match `format`'s exclusion rules. Relative order of the
/// surviving rows is preserved.
pub fn normalize(
    records: Vec<RawTransaction>,
    format: StatementFormat,
) -> Vec<NormalizedTransaction> {
    records
        .into_iter()
        .filter_map(|record| {
            let amount = parse_amount(&record.amount_text)?;
            let date = parse_date(&record.date_text, format)?;
            if is_excluded(&record.description, format) {
                return None;
            }
            let description = match format {
                StatementFormat::DebitCard => {
                    strip_ascii_ci(&record.description, POINT_OF_SALE_TOKEN)
                        .trim()
                        .to_string()
                }
                _ => record.description,
            };
            Some(NormalizedTransaction {
                date,
                description: truncate_tokens(&description, DESCRIPTION_TOKEN_LIMIT),
                amount,
            })
        })
        .collect()
}

fn parse_amount(text: &str) -> Option<f64> {
    let amount: f64 = text.replace(",", "").trim().parse().ok()?;
    amount.is_finite().then_some(amount)
}

fn parse_date(text: &str, format: StatementFormat) -> Option<NaiveDate> {
    match format {
        StatementFormat::CommonwealthBank => parse_day_first(text),
        StatementFormat::CreditCard | StatementFormat::DebitCard => parse_month_first(text),
    }
}

/// "5 Jan" — day, whitespace, month abbreviation.
fn parse_day_first(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month = month_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, month, day)
}

/// "Jan 5" or the fused "Jan5" — month abbreviation first, day after.
fn parse_month_first(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    let split = s.find(|c: char| !c.is_ascii_alphabetic())?;
    let month = month_number(&s[..split])?;
    let day: u32 = s[split..].trim().parse().ok()?;
    NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, month, day)
}

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn is_excluded(description: &str, format: StatementFormat) -> bool {
    let needles: &[&str] = match format {
        StatementFormat::DebitCard => &DEBIT_CARD_EXCLUSIONS,
        StatementFormat::CreditCard => &CREDIT_CARD_EXCLUSIONS,
        StatementFormat::CommonwealthBank => &COMMONWEALTH_EXCLUSIONS,
    };
    let lowered = description.to_ascii_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

/// Remove every occurrence of `needle` (lowercase ASCII) from `text`,
/// ignoring ASCII case.
fn strip_ascii_ci(text: &str, needle: &str) -> String {
    let lowered = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut at = 0;
    while let Some(pos) = lowered[at..].find(needle) {
        out.push_str(&text[at..at + pos]);
        at += pos + needle.len();
    }
    out.push_str(&text[at..]);
    out
}

fn truncate_tokens(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
