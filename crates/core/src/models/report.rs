use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spending overview for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Format: "YYYY-MM"
    pub month: String,

    /// Number of expenses in the month
    pub total_expenses: usize,

    pub total_spent: Decimal,

    pub monthly_income: Decimal,

    /// `monthly_income - total_spent` (negative when overspent)
    pub savings: Decimal,

    /// `savings / monthly_income * 100`, or 0 without income
    pub savings_percentage: Decimal,

    /// Category name -> amount spent in the month
    pub by_category: BTreeMap<String, Decimal>,
}
