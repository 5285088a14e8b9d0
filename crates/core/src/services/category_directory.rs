use std::collections::HashMap;

use crate::models::category::Category;

/// Display name used when an id has no matching category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Read-only id -> name lookup over a snapshot of categories.
///
/// Unknown ids are a display fallback, not an error.
#[derive(Debug, Clone, Default)]
pub struct CategoryDirectory<'a> {
    names: HashMap<i64, &'a str>,
}

impl<'a> CategoryDirectory<'a> {
    /// Index the given categories. If an id repeats, the first entry wins.
    pub fn new(categories: &'a [Category]) -> Self {
        let mut names = HashMap::with_capacity(categories.len());
        for category in categories {
            names.entry(category.id).or_insert(category.name.as_str());
        }
        Self { names }
    }

    /// Name of the category, or `"Unknown"`.
    #[must_use]
    pub fn name_of(&self, category_id: i64) -> &'a str {
        self.names.get(&category_id).copied().unwrap_or(UNKNOWN_CATEGORY)
    }
}
