//! Bank-specific line parsers sharing one continuation-line state machine.
//!
//! Every format owns a row pattern end-anchored on a decimal amount. A line
//! that matches starts a new record; a line that doesn't is treated as a
//! wrapped continuation of the current record's description, or discarded if
//! no record has started yet.

pub mod commonwealth;
pub mod credit_card;
pub mod debit_card;

use anyhow::Result;

use crate::types::{RawTransaction, StatementFormat};

pub use commonwealth::parse_commonwealth_lines;
pub use credit_card::parse_credit_card_lines;
pub use debit_card::parse_debit_card_lines;

/// Parse `lines` with the parser variant for `format`.
pub fn parse_lines(lines: &[&str], format: StatementFormat) -> Result<Vec<RawTransaction>> {
    match format {
        StatementFormat::CreditCard => parse_credit_card_lines(lines),
        StatementFormat::DebitCard => parse_debit_card_lines(lines),
        StatementFormat::CommonwealthBank => parse_commonwealth_lines(lines),
    }
}

/// Accumulation state while scanning statement lines.
#[derive(Debug, PartialEq)]
enum ScanState {
    Idle,
    Accumulating(RawTransaction),
}

impl ScanState {
    /// A row matched: emit any record in flight and start accumulating the new one.
    fn on_match(self, next: RawTransaction) -> (ScanState, Option<RawTransaction>) {
        match self {
            ScanState::Idle => (ScanState::Accumulating(next), None),
            ScanState::Accumulating(done) => (ScanState::Accumulating(next), Some(done)),
        }
    }

    /// A non-row line: append it to the in-flight description, or discard it.
    fn on_continuation(self, line: &str) -> (ScanState, Option<RawTransaction>) {
        match self {
            ScanState::Idle => (ScanState::Idle, None),
            ScanState::Accumulating(mut current) => {
                current.description.push(' ');
                current.description.push_str(line.trim());
                (ScanState::Accumulating(current), None)
            }
        }
    }

    /// End of input: flush whatever is still accumulating.
    fn finish(self) -> Option<RawTransaction> {
        match self {
            ScanState::Idle => None,
            ScanState::Accumulating(current) => Some(current),
        }
    }
}

/// Fold `lines` through the scan machine, classifying each line with `matcher`.
///
/// Emitted order equals the input order of each record's starting line.
fn scan_lines<'a, M>(lines: impl IntoIterator<Item = &'a str>, matcher: M) -> Vec<RawTransaction>
where
    M: Fn(&str) -> Option<RawTransaction>,
{
    let mut state = ScanState::Idle;
    let mut records = Vec::new();

    for line in lines {
        let (next, emitted) = match matcher(line) {
            Some(record) => state.on_match(record),
            None => state.on_continuation(line),
        };
        if let Some(done) = emitted {
            records.push(done);
        }
        state = next;
    }

    if let Some(done) = state.finish() {
        records.push(done);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(desc: &str) -> RawTransaction {
        RawTransaction {
            date_text: "Jan 1".to_string(),
            description: desc.to_string(),
            amount_text: "1.00".to_string(),
        }
    }

    #[test]
    fn test_match_while_idle_starts_accumulating() {
        let (state, emitted) = ScanState::Idle.on_match(record("COFFEE"));
        assert_eq!(state, ScanState::Accumulating(record("COFFEE")));
        assert!(emitted.is_none());
    }

    #[test]
    fn test_match_while_accumulating_emits_previous() {
        let state = ScanState::Accumulating(record("COFFEE"));
        let (state, emitted) = state.on_match(record("GROCER"));
        assert_eq!(emitted, Some(record("COFFEE")));
        assert_eq!(state, ScanState::Accumulating(record("GROCER")));
    }

    #[test]
    fn test_continuation_appends_trimmed_text() {
        let state = ScanState::Accumulating(record("COFFEE"));
        let (state, emitted) = state.on_continuation("  SHOP PTY LTD  ");
        assert!(emitted.is_none());
        match state {
            ScanState::Accumulating(current) => {
                assert_eq!(current.description, "COFFEE SHOP PTY LTD");
            }
            ScanState::Idle => panic!("should still be accumulating"),
        }
    }

    #[test]
    fn test_continuation_while_idle_discards_line() {
        let (state, emitted) = ScanState::Idle.on_continuation("page header");
        assert_eq!(state, ScanState::Idle);
        assert!(emitted.is_none());
    }

    #[test]
    fn test_finish_flushes_in_flight_record() {
        assert_eq!(ScanState::Idle.finish(), None);
        assert_eq!(
            ScanState::Accumulating(record("COFFEE")).finish(),
            Some(record("COFFEE"))
        );
    }

    #[test]
    fn test_scan_collects_records_in_starting_line_order() {
        let matcher = |line: &str| {
            line.strip_prefix("ROW ").map(|desc| record(desc))
        };
        let lines = ["noise", "ROW A", "wrapped", "ROW B", "ROW C"];
        let records = scan_lines(lines, matcher);
        let descriptions: Vec<_> = records.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, ["A wrapped", "B", "C"]);
    }
}
