use rust_decimal::Decimal;

use crate::models::breakdown::CategoryBreakdownRow;
use crate::models::budget::Budget;
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::models::summary::SummarySource;
use crate::services::category_directory::CategoryDirectory;
use crate::services::spending_aggregator::SpendingAggregator;

/// Builds the per-category rows behind the comparison and proportion charts.
///
/// Rows are never deduplicated: two budgets for the same category give two rows.
pub struct CategoryBreakdownBuilder {
    aggregator: SpendingAggregator,
}

impl CategoryBreakdownBuilder {
    pub fn new() -> Self {
        Self {
            aggregator: SpendingAggregator::new(),
        }
    }

    /// One row per provided summary row, or one row per budget when deriving,
    /// in input order either way.
    pub fn build(
        &self,
        source: &SummarySource,
        budgets: &[Budget],
        categories: &[Category],
        expenses: &[Expense],
    ) -> Vec<CategoryBreakdownRow> {
        match source {
            SummarySource::Provided(rows) => rows
                .iter()
                .map(|row| CategoryBreakdownRow {
                    category: row.category.clone(),
                    amount: row.spent,
                    budget: row.budget,
                    percentage: SpendingAggregator::utilization_pct(row.spent, row.budget),
                })
                .collect(),
            SummarySource::Derive => {
                let directory = CategoryDirectory::new(categories);
                let spent = self.aggregator.spent_by_category(expenses);

                budgets
                    .iter()
                    .map(|budget| {
                        let amount = spent
                            .get(&budget.category_id)
                            .copied()
                            .unwrap_or(Decimal::ZERO);
                        CategoryBreakdownRow {
                            category: directory.name_of(budget.category_id).to_string(),
                            amount,
                            budget: budget.amount,
                            percentage: SpendingAggregator::utilization_pct(amount, budget.amount),
                        }
                    })
                    .collect()
            }
        }
    }
}

impl Default for CategoryBreakdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}
