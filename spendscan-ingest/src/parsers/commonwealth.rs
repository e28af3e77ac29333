//! Commonwealth Bank statement parser (text)
//!
//! Expected extracted-text rows (day-first date, debit column then balance):
//!   4 Jan WOOLWORTHS METRO SYDNEY 45.67 1,234.56
//!   7 Jan TRANSFER RECEIVED J CITIZEN 250.00
//!
//! A row carrying its debit column ends with two decimals (debit, balance).
//! A credit row flattens to a single trailing decimal; its amount is emitted
//! with a leading minus so the sign convention survives into normalization.

use anyhow::Result;
use regex::Regex;

use super::scan_lines;
use crate::types::RawTransaction;

pub fn parse_commonwealth_lines(lines: &[&str]) -> Result<Vec<RawTransaction>> {
    // DATE DESCRIPTION [DEBIT] CREDIT
    let row_re = Regex::new(concat!(
        r"^(?P<date>\d{1,2} [A-Za-z]{3})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?:(?P<debit>[\d,]+\.\d{2})\s+)?",
        r"(?P<credit>[\d,]+\.\d{2})$"
    ))?;

    Ok(scan_lines(lines.iter().copied(), |line| {
        row_re.captures(line).map(|caps| {
            let amount_text = match caps.name("debit") {
                Some(debit) => debit.as_str().to_string(),
                None => format!("-{}", &caps["credit"]),
            };
            RawTransaction {
                date_text: caps["date"].to_string(),
                description: caps["desc"].trim().to_string(),
                amount_text,
            }
        })
    }))
}
