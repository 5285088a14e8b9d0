use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monthly spending ceiling for one category.
///
/// Several budgets may exist for the same category (different months, or
/// duplicates the provider failed to reject); each one is treated on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,

    pub category_id: i64,

    /// Ceiling for the month (expected `>= 0`)
    pub amount: Decimal,

    /// Format: "YYYY-MM"
    pub month: String,

    #[serde(default)]
    pub user_id: i64,
}

impl Budget {
    pub fn new(id: i64, category_id: i64, amount: Decimal, month: impl Into<String>) -> Self {
        Self {
            id,
            category_id,
            amount,
            month: month.into(),
            user_id: 0,
        }
    }
}
