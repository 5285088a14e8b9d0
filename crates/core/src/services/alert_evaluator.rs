use rust_decimal::Decimal;

use crate::models::alert::{AlertLevel, BudgetAlert};
use crate::models::budget::Budget;
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::services::category_directory::CategoryDirectory;
use crate::services::spending_aggregator::SpendingAggregator;

/// Classifies monthly budgets as on track, close to the ceiling, or over it.
///
/// Only the classification lives here; delivering notifications is up to the caller.
pub struct BudgetAlertEvaluator {
    aggregator: SpendingAggregator,
}

impl BudgetAlertEvaluator {
    pub fn new() -> Self {
        Self {
            aggregator: SpendingAggregator::new(),
        }
    }

    /// Evaluate every budget set for `month` ("YYYY-MM"), in input order.
    /// Spending is limited to the same month.
    pub fn evaluate(
        &self,
        budgets: &[Budget],
        categories: &[Category],
        expenses: &[Expense],
        month: &str,
        warning_threshold_pct: Decimal,
    ) -> Vec<BudgetAlert> {
        let directory = CategoryDirectory::new(categories);
        let spent = self.aggregator.spent_by_category_in_month(expenses, month);

        let alerts: Vec<BudgetAlert> = budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|budget| {
                let spent = spent
                    .get(&budget.category_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let percentage = SpendingAggregator::utilization_pct(spent, budget.amount);
                BudgetAlert {
                    budget_id: budget.id,
                    category: directory.name_of(budget.category_id).to_string(),
                    budget: budget.amount,
                    spent,
                    percentage,
                    level: Self::classify(spent, budget.amount, percentage, warning_threshold_pct),
                }
            })
            .collect();

        tracing::debug!(
            month,
            evaluated = alerts.len(),
            exceeded = alerts.iter().filter(|a| a.level == AlertLevel::Exceeded).count(),
            "evaluated budget alerts"
        );
        alerts
    }

    /// Exceeded wins over Warning; a budget spent to exactly 100% is on track.
    pub fn classify(
        spent: Decimal,
        budget: Decimal,
        percentage: Decimal,
        warning_threshold_pct: Decimal,
    ) -> AlertLevel {
        if spent > budget {
            AlertLevel::Exceeded
        } else if percentage >= warning_threshold_pct && percentage < Decimal::ONE_HUNDRED {
            AlertLevel::Warning
        } else {
            AlertLevel::OnTrack
        }
    }
}

impl Default for BudgetAlertEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
