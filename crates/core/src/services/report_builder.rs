use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::models::report::MonthlyReport;
use crate::services::category_directory::CategoryDirectory;
use crate::services::spending_aggregator::SpendingAggregator;

/// Builds the per-month spending report (totals, savings, per-category split).
pub struct MonthlyReportBuilder;

impl MonthlyReportBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        expenses: &[Expense],
        categories: &[Category],
        year: i32,
        month: u32,
        monthly_income: Decimal,
    ) -> Result<MonthlyReport, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidMonth(format!(
                "{month} is not a calendar month (expected 1-12)"
            )));
        }

        let month_key = format!("{year:04}-{month:02}");
        let directory = CategoryDirectory::new(categories);

        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut total_expenses = 0;
        for expense in expenses.iter().filter(|e| e.falls_on(&month_key)) {
            total_expenses += 1;
            let total = by_category
                .entry(directory.name_of(expense.category_id).to_string())
                .or_insert(Decimal::ZERO);
            *total = total.saturating_add(expense.amount);
        }

        let total_spent = SpendingAggregator::saturating_total(by_category.values().copied());
        let savings = monthly_income.saturating_sub(total_spent);
        let savings_percentage = if monthly_income > Decimal::ZERO {
            SpendingAggregator::saturating_ratio_pct(savings, monthly_income)
        } else {
            Decimal::ZERO
        };

        Ok(MonthlyReport {
            month: month_key,
            total_expenses,
            total_spent,
            monthly_income,
            savings,
            savings_percentage,
            by_category,
        })
    }
}

impl Default for MonthlyReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
