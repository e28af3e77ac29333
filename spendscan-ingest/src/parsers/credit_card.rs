//! Credit card statement parser (text)
//!
//! Expected extracted-text rows ("TRANS. POST" layout):
//!   001 JAN 05 JAN 07 NETFLIX.COM 15.99
//!   002 JAN 09 JAN 10 WOOLWORTHS METRO
//!       SYDNEY NSW 42.80
//!
//! The three-digit reference and the posting date are captured but not kept;
//! the transaction date is the first of the two.

use anyhow::Result;
use regex::Regex;

use super::scan_lines;
use crate::types::RawTransaction;

pub fn parse_credit_card_lines(lines: &[&str]) -> Result<Vec<RawTransaction>> {
    // REF TRANS-DATE POST-DATE DESCRIPTION AMOUNT
    let row_re = Regex::new(concat!(
        r"^(?P<reference>\d{3})\s+",
        r"(?P<trans>[A-Za-z]{3} \d{1,2})\s+",
        r"(?P<post>[A-Za-z]{3} \d{1,2})\s+",
        r"(?P<desc>.*?)\s+",
        r"(?P<amount>[\d,]+\.\d{2})$"
    ))?;

    Ok(scan_lines(lines.iter().copied(), |line| {
        row_re.captures(line).map(|caps| RawTransaction {
            date_text: caps["trans"].to_string(),
            description: caps["desc"].trim().to_string(),
            amount_text: caps["amount"].to_string(),
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_line_rows_in_order() {
        let lines = [
            "001 JAN 05 JAN 07 NETFLIX.COM 15.99",
            "002 JAN 06 JAN 08 UBER *TRIP 23.40",
        ];
        let records = parse_credit_card_lines(&lines).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date_text, "JAN 05");
        assert_eq!(records[0].description, "NETFLIX.COM");
        assert_eq!(records[0].amount_text, "15.99");
        assert_eq!(records[1].description, "UBER *TRIP");
    }

    #[test]
    fn test_continuation_lines_extend_description() {
        let lines = [
            "001 JAN 09 JAN 10 WOOLWORTHS METRO 42.80",
            "  SYDNEY NSW",
            "  AU",
            "002 JAN 11 JAN 12 SPOTIFY 11.99",
        ];
        let records = parse_credit_card_lines(&lines).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "WOOLWORTHS METRO SYDNEY NSW AU");
        assert_eq!(records[1].description, "SPOTIFY");
    }

    #[test]
    fn test_lines_before_first_row_are_discarded() {
        let lines = [
            "STATEMENT OF ACCOUNT",
            "REF  TRANS. POST  DETAILS  AMOUNT",
            "001 JAN 05 JAN 07 NETFLIX.COM 15.99",
        ];
        let records = parse_credit_card_lines(&lines).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "NETFLIX.COM");
    }

    #[test]
    fn test_last_row_is_flushed_after_trailing_continuations() {
        let lines = [
            "001 JAN 05 JAN 07 PAYMENT FROM 4315 250.00",
            "  RECEIVED - THANK YOU",
        ];
        let records = parse_credit_card_lines(&lines).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "PAYMENT FROM 4315 RECEIVED - THANK YOU");
        assert_eq!(records[0].amount_text, "250.00");
    }

    #[test]
    fn test_amount_keeps_thousands_separator_text() {
        let lines = ["001 FEB 01 FEB 02 HARVEY NORMAN 1,299.00"];
        let records = parse_credit_card_lines(&lines).unwrap();
        assert_eq!(records[0].amount_text, "1,299.00");
    }

    #[test]
    fn test_row_must_end_with_decimal_amount() {
        // No trailing decimal, so nothing ever starts accumulating.
        let lines = ["001 JAN 05 JAN 07 NETFLIX.COM"];
        let records = parse_credit_card_lines(&lines).unwrap();
        assert!(records.is_empty());
    }
}
