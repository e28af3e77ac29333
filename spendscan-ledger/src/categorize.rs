//! Keyword categorization over normalized transactions.

use crate::category_table::{CategoryTable, FALLBACK_CATEGORY};
use crate::types::{CategorizedTransaction, NormalizedTransaction};

/// Assigns categories by first-matching-keyword lookup against an owned
/// table. Construct one per document or share it immutably; there is no
/// process-wide table.
#[derive(Debug, Clone)]
pub struct Categorizer {
    table: CategoryTable,
}

impl Categorizer {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Category for a single description: entries in table order, keywords in
    /// declared order, first substring hit wins. Falls through to "Other".
    pub fn category_for(&self, description: &str) -> &str {
        let lowered = description.to_ascii_lowercase();
        for rule in self.table.rules() {
            for keyword in &rule.keywords {
                if lowered.contains(keyword.as_str()) {
                    return &rule.name;
                }
            }
        }
        FALLBACK_CATEGORY
    }

    /// Assign a category to every row, preserving order.
    pub fn categorize(&self, rows: Vec<NormalizedTransaction>) -> Vec<CategorizedTransaction> {
        rows.into_iter()
            .map(|row| {
                let category = self.category_for(&row.description).to_string();
                CategorizedTransaction {
                    date: row.date,
                    description: row.description,
                    amount: row.amount,
                    category,
                }
            })
            .collect()
    }
}
