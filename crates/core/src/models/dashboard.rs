use serde::{Deserialize, Serialize};

use super::breakdown::CategoryBreakdownRow;
use super::expense::Expense;
use super::summary::BudgetSummary;
use super::trend::TrendPoint;

/// All derived dashboard data for one refresh.
///
/// The core computes the numbers; the presentation layer only formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Headline totals
    pub summary: BudgetSummary,

    /// Per-category budget utilization
    pub breakdown: Vec<CategoryBreakdownRow>,

    /// Daily spending over the trailing window, oldest first
    pub trend: Vec<TrendPoint>,

    /// Most recent expenses, newest first
    pub recent: Vec<Expense>,
}
