use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How close a monthly budget is to its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    /// Below the warning threshold, or exactly at the ceiling
    OnTrack,
    /// At or above the warning threshold but under 100%
    Warning,
    /// Spent more than the budget
    Exceeded,
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::OnTrack => write!(f, "On track"),
            AlertLevel::Warning => write!(f, "Warning"),
            AlertLevel::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Alert status of one budget within its month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub budget_id: i64,

    pub category: String,

    pub budget: Decimal,

    /// Spent in the budget's category during the evaluated month
    pub spent: Decimal,

    pub percentage: Decimal,

    pub level: AlertLevel,
}
