//! Expense summary: total spend and per-category subtotals.

use serde::{Deserialize, Serialize};

use crate::category_table::CategoryTable;
use crate::types::CategorizedTransaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: f64,
    pub by_category: Vec<CategoryTotal>,
}

/// Fold categorized rows into a summary.
///
/// Categories appear in table order, skipping those with no rows. Rows whose
/// category was reassigned to a name outside the table are appended after,
/// in first-appearance order, so a post-hoc override never loses money from
/// the breakdown. Empty input yields a zero total and no rows.
pub fn summarize(table: &CategoryTable, rows: &[CategorizedTransaction]) -> Summary {
    let mut by_category: Vec<CategoryTotal> = Vec::new();

    for name in table.names() {
        if let Some(entry) = fold_category(rows, name) {
            by_category.push(entry);
        }
    }
    for row in rows {
        let known = by_category.iter().any(|entry| entry.category == row.category);
        if !known {
            // First appearance of an off-table category.
            if let Some(entry) = fold_category(rows, &row.category) {
                by_category.push(entry);
            }
        }
    }

    Summary {
        total: rows.iter().map(|row| row.amount).sum(),
        by_category,
    }
}

fn fold_category(rows: &[CategorizedTransaction], name: &str) -> Option<CategoryTotal> {
    let mut total = 0.0;
    let mut count = 0;
    for row in rows.iter().filter(|row| row.category == name) {
        total += row.amount;
        count += 1;
    }
    (count > 0).then(|| CategoryTotal {
        category: name.to_string(),
        total,
        count,
    })
}
