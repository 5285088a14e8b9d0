use rust_decimal::Decimal;

use crate::models::budget::Budget;
use crate::models::expense::Expense;
use crate::models::summary::{BudgetSummary, PreAggregatedSummaryRow, SummarySource};
use crate::services::spending_aggregator::SpendingAggregator;

/// Produces the dashboard's headline totals.
///
/// Two paths, picked by the caller through `SummarySource`:
/// - `Provided`: sum the provider's rows field by field. `remaining` is the
///   sum of the rows' own `remaining`, not recomputed.
/// - `Derive`: total every budget and every expense (expenses are not
///   filtered to budgeted categories), and compute `remaining` from those.
pub struct BudgetSummaryResolver {
    aggregator: SpendingAggregator,
}

impl BudgetSummaryResolver {
    pub fn new() -> Self {
        Self {
            aggregator: SpendingAggregator::new(),
        }
    }

    pub fn resolve(
        &self,
        source: &SummarySource,
        budgets: &[Budget],
        expenses: &[Expense],
    ) -> BudgetSummary {
        match source {
            SummarySource::Provided(rows) => {
                tracing::debug!(rows = rows.len(), "budget summary from provided rollup");
                let sum = |field: fn(&PreAggregatedSummaryRow) -> Decimal| {
                    SpendingAggregator::saturating_total(rows.iter().map(field))
                };
                BudgetSummary {
                    total_budget: sum(|r| r.budget),
                    total_spent: sum(|r| r.spent),
                    remaining: sum(|r| r.remaining),
                    budget_count: rows.len(),
                }
            }
            SummarySource::Derive => {
                tracing::debug!(
                    budgets = budgets.len(),
                    expenses = expenses.len(),
                    "budget summary derived from raw records"
                );
                let total_budget =
                    SpendingAggregator::saturating_total(budgets.iter().map(|b| b.amount));
                let total_spent = self.aggregator.total_spent(expenses);
                BudgetSummary {
                    total_budget,
                    total_spent,
                    remaining: total_budget.saturating_sub(total_spent),
                    budget_count: budgets.len(),
                }
            }
        }
    }
}

impl Default for BudgetSummaryResolver {
    fn default() -> Self {
        Self::new()
    }
}
