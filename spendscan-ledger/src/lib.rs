//! spendscan-ledger: normalization, keyword categorization, and expense summaries.

pub mod category_table;
pub mod categorize;
pub mod normalize;
pub mod pipeline;
pub mod summary;
pub mod types;

pub use category_table::{CategoryRule, CategoryTable, FALLBACK_CATEGORY};
pub use categorize::Categorizer;
pub use normalize::normalize;
pub use pipeline::{Analysis, analyze_lines};
pub use summary::{CategoryTotal, Summary, summarize};
pub use types::{CategorizedTransaction, NormalizedTransaction};
