//! The ordered category-to-keywords table.
//!
//! Entry order is a contract: categorization checks entries first to last and
//! the first keyword hit wins, so an earlier entry shadows a later one. The
//! table always ends with the keywordless "Other" fallback.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Name of the distinguished fallback category.
pub const FALLBACK_CATEGORY: &str = "Other";

/// One category and the lowercase substrings that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered category table with a guaranteed trailing "Other" fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    /// Build a table from ordered rules.
    ///
    /// Keywords are lowercased so matching stays case-insensitive no matter
    /// how the rules were written. "Other" is appended if missing; if
    /// present it must be last and carry no keywords. Names must be
    /// non-empty and unique.
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self> {
        let mut rules = rules;
        for rule in &mut rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_ascii_lowercase();
            }
        }

        for (index, rule) in rules.iter().enumerate() {
            if rule.name.is_empty() {
                bail!("category at position {} has an empty name", index + 1);
            }
            if rules[..index].iter().any(|earlier| earlier.name == rule.name) {
                bail!("duplicate category '{}'", rule.name);
            }
            if rule.name == FALLBACK_CATEGORY {
                if index + 1 != rules.len() {
                    bail!("'{FALLBACK_CATEGORY}' must be the last category");
                }
                if !rule.keywords.is_empty() {
                    bail!("'{FALLBACK_CATEGORY}' cannot have keywords");
                }
            }
        }

        if rules.last().map(|rule| rule.name.as_str()) != Some(FALLBACK_CATEGORY) {
            rules.push(CategoryRule {
                name: FALLBACK_CATEGORY.to_string(),
                keywords: Vec::new(),
            });
        }

        Ok(Self { rules })
    }

    /// Rules in matching order, fallback last.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in matching order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }
}

impl Default for CategoryTable {
    /// The built-in table. Extend it through a category file rather than
    /// editing code; the categorizer takes whatever table it is given.
    fn default() -> Self {
        let stock: [(&str, &[&str]); 8] = [
            (
                "Groceries",
                &[
                    "woolworths",
                    "iga",
                    "supermarket",
                    "freshco",
                    "dhesi meat shop",
                    "7eleven",
                    "dollarama",
                ],
            ),
            (
                "Dining/Takeout",
                &["restaurant", "cafe", "tim hortons", "popeyes", "banter ice cream"],
            ),
            (
                "Utilities",
                &["virgin plus", "adobe inc", "internet", "electricity", "water"],
            ),
            ("Subscriptions", &["canva", "nayax", "netflix", "spotify"]),
            (
                "Transportation",
                &["uber", "lyft", "gas station", "public transit"],
            ),
            ("Entertainment", &["movie", "concert", "theme park", "music"]),
            ("Shopping", &["petstock", "clothing", "electronics", "amazon"]),
            ("Health", &["pharmacy", "hospital", "gym"]),
        ];

        let rules = stock
            .into_iter()
            .map(|(name, keywords)| CategoryRule {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        // Stock rules are well-formed; new() only appends the fallback.
        Self::new(rules).unwrap()
    }
}
