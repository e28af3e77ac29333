//! Category-table file loading.
//!
//! The table is the one tunable surface: an ordered TOML array of tables,
//! one `[[category]]` per entry. Entry order is matching order. A trailing
//! "Other" fallback is appended when the file leaves it out.
//!
//! ```toml
//! [[category]]
//! name = "Groceries"
//! keywords = ["woolworths", "iga"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use spendscan_ledger::{CategoryRule, CategoryTable};

#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default, rename = "category")]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Load the table from `path`, or the built-in table when no file is given.
pub fn load_category_table(path: Option<&Path>) -> Result<CategoryTable> {
    let Some(path) = path else {
        return Ok(CategoryTable::default());
    };

    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let file: CategoryFile =
        toml::from_str(&text).with_context(|| format!("parse {}", path.display()))?;

    let rules = file
        .categories
        .into_iter()
        .map(|entry| CategoryRule {
            name: entry.name,
            keywords: entry.keywords,
        })
        .collect();

    CategoryTable::new(rules).with_context(|| format!("invalid category table {}", path.display()))
}
