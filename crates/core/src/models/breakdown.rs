use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One category's budget-vs-spent comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownRow {
    /// Category display name ("Unknown" when the id is not in the directory)
    pub category: String,

    /// Amount spent
    pub amount: Decimal,

    pub budget: Decimal,

    /// `amount / budget * 100`, or 0 when the budget is 0
    pub percentage: Decimal,
}
