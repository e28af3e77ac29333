//! End-to-end wiring: lines in, categorized table and summary out.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use spendscan_ingest::types::StatementFormat;
use spendscan_ingest::{detect, parse_lines};

use crate::categorize::Categorizer;
use crate::normalize::normalize;
use crate::summary::{Summary, summarize};
use crate::types::CategorizedTransaction;

/// Everything one document analysis produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub format: StatementFormat,
    /// True when format detection fell back to the credit-card default.
    pub fallback: bool,
    pub transactions: Vec<CategorizedTransaction>,
    pub summary: Summary,
}

/// Run the full pipeline over extracted statement lines:
/// detect, parse, normalize, categorize, summarize. Each stage consumes the
/// previous stage's whole output; empty input flows through to an empty
/// analysis rather than an error.
pub fn analyze_lines(lines: &[&str], categorizer: &Categorizer) -> Result<Analysis> {
    let detection = detect(lines);
    let records = parse_lines(lines, detection.format)?;
    let rows = normalize(records, detection.format);
    let transactions = categorizer.categorize(rows);
    let summary = summarize(categorizer.table(), &transactions);

    Ok(Analysis {
        format: detection.format,
        fallback: detection.fallback,
        transactions,
        summary,
    })
}
