use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single dated spending transaction against one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,

    pub category_id: i64,

    /// Amount spent (expected `>= 0`)
    pub amount: Decimal,

    #[serde(default)]
    pub description: String,

    /// Format: "YYYY-MM-DD". Kept as the provider sent it; day and month
    /// matching is done by string prefix, so a trailing time component
    /// (e.g. "2024-03-01T10:15:00") still lands on the right day.
    pub date: String,

    #[serde(default)]
    pub user_id: i64,
}

impl Expense {
    pub fn new(id: i64, category_id: i64, amount: Decimal, date: impl Into<String>) -> Self {
        Self {
            id,
            category_id,
            amount,
            description: String::new(),
            date: date.into(),
            user_id: 0,
        }
    }

    /// Create an expense with a description attached.
    pub fn with_description(
        id: i64,
        category_id: i64,
        amount: Decimal,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            ..Self::new(id, category_id, amount, date)
        }
    }

    /// Whether this expense falls on the given day or month key
    /// ("YYYY-MM-DD" or "YYYY-MM").
    pub fn falls_on(&self, key: &str) -> bool {
        self.date.starts_with(key)
    }
}
