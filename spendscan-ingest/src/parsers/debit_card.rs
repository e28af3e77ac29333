//! Debit card statement parser (text)
//!
//! Expected extracted-text rows (fused date token, amount then running balance):
//!   Jan5 Pointofsalepurchase COFFEE SHOP 4.50 995.50
//!   Jan9 Deposit 1,000.00 1,995.50
//!
//! The running balance is captured but not kept.

use anyhow::Result;
use regex::Regex;

use super::scan_lines;
use crate::types::RawTransaction;

pub fn parse_debit_card_lines(lines: &[&str]) -> Result<Vec<RawTransaction>> {
    // DATE DESCRIPTION AMOUNT BALANCE
    let row_re = Regex::new(concat!(
        r"^(?P<date>[A-Za-z]{3}\d{1,2})\s+",
        r"(?P<desc>.*?)\s+",
        r"(?P<amount>[\d,]+\.\d{2})\s+",
        r"(?P<balance>[\d,]+\.\d{2})$"
    ))?;

    Ok(scan_lines(lines.iter().copied(), |line| {
        row_re.captures(line).map(|caps| RawTransaction {
            date_text: caps["date"].to_string(),
            description: caps["desc"].trim().to_string(),
            amount_text: caps["amount"].to_string(),
        })
    }))
}
