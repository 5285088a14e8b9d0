use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total spending for a single day of the trend window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Short weekday name ("Mon", "Tue", ...)
    pub label: String,

    /// Sum of that day's expenses, 0 on days without any
    pub amount: Decimal,

    /// The calendar day this point covers
    pub date: NaiveDate,
}
