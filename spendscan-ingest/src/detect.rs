//! Statement format detection.
//!
//! Each institution's extracted text carries a distinguishing literal; the
//! whole document is scanned and the first marker in priority order wins.

use crate::types::{Detection, StatementFormat};

const COMMONWEALTH_MARKER: &str = "Commonwealth Bank of Australia";
const CREDIT_CARD_MARKER: &str = "TRANS. POST";
const DEBIT_CARD_MARKER: &str = "OpeningBalance";

/// Detect which statement layout produced `lines`.
///
/// Priority: Commonwealth Bank, then credit card, then debit card. A document
/// with no marker at all falls back to the credit-card layout with
/// `fallback` set, preserved for compatibility with statements that omit
/// their header page.
pub fn detect(lines: &[&str]) -> Detection {
    if lines.iter().any(|line| line.contains(COMMONWEALTH_MARKER)) {
        return Detection {
            format: StatementFormat::CommonwealthBank,
            fallback: false,
        };
    }
    if lines.iter().any(|line| line.contains(CREDIT_CARD_MARKER)) {
        return Detection {
            format: StatementFormat::CreditCard,
            fallback: false,
        };
    }
    if lines.iter().any(|line| line.contains(DEBIT_CARD_MARKER)) {
        return Detection {
            format: StatementFormat::DebitCard,
            fallback: false,
        };
    }
    Detection {
        format: StatementFormat::CreditCard,
        fallback: true,
    }
}
