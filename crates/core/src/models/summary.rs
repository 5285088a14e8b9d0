use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One category's rollup as already computed by the resource provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreAggregatedSummaryRow {
    /// Category display name
    pub category: String,

    pub budget: Decimal,

    pub spent: Decimal,

    /// Expected to equal `budget - spent`; summed as given, never recomputed
    pub remaining: Decimal,
}

/// Where the dashboard's headline numbers come from.
///
/// Decided once per snapshot, then matched by every builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SummarySource {
    /// Use the provider's pre-aggregated rows as-is
    Provided(Vec<PreAggregatedSummaryRow>),
    /// Derive everything from raw budgets and expenses
    Derive,
}

impl SummarySource {
    /// Resolve the source from an optional provider payload.
    /// A missing or empty payload falls back to `Derive`.
    pub fn from_rows(rows: Option<Vec<PreAggregatedSummaryRow>>) -> Self {
        match rows {
            Some(rows) if !rows.is_empty() => SummarySource::Provided(rows),
            _ => SummarySource::Derive,
        }
    }

    #[must_use]
    pub fn is_provided(&self) -> bool {
        matches!(self, SummarySource::Provided(_))
    }
}

/// Headline totals shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_budget: Decimal,

    pub total_spent: Decimal,

    /// `total_budget - total_spent` for well-formed input
    pub remaining: Decimal,

    /// Number of budgets (or provided rows) the totals cover
    pub budget_count: usize,
}

impl BudgetSummary {
    /// `false` means "no data yet" for the presentation layer.
    #[must_use]
    pub fn has_budgets(&self) -> bool {
        self.budget_count > 0
    }
}
