use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::expense::Expense;

/// Folds raw expenses into per-category spending.
///
/// Pure business logic — no I/O. Amounts are `Decimal`, so the sums are exact
/// no matter how many small transactions are folded or in which order.
///
/// Arithmetic saturates at `Decimal::MAX` / `Decimal::MIN` instead of
/// panicking; results past that range are clamped, not exact.
pub struct SpendingAggregator;

impl SpendingAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Sum expense amounts keyed by category id.
    ///
    /// Categories without expenses are absent from the map; callers read a
    /// missing key as zero.
    pub fn spent_by_category(&self, expenses: &[Expense]) -> HashMap<i64, Decimal> {
        Self::fold(expenses.iter())
    }

    /// Same as `spent_by_category`, restricted to expenses dated within
    /// `month` ("YYYY-MM").
    pub fn spent_by_category_in_month(
        &self,
        expenses: &[Expense],
        month: &str,
    ) -> HashMap<i64, Decimal> {
        Self::fold(expenses.iter().filter(|e| e.falls_on(month)))
    }

    /// Total of all expense amounts.
    pub fn total_spent(&self, expenses: &[Expense]) -> Decimal {
        Self::saturating_total(expenses.iter().map(|e| e.amount))
    }

    /// Sum that clamps at the `Decimal` range instead of overflowing.
    pub fn saturating_total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
        amounts
            .into_iter()
            .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
    }

    /// Budget utilization: `spent / budget * 100`, or exactly 0 when the
    /// budget is not positive.
    pub fn utilization_pct(spent: Decimal, budget: Decimal) -> Decimal {
        if budget > Decimal::ZERO {
            Self::saturating_ratio_pct(spent, budget)
        } else {
            Decimal::ZERO
        }
    }

    /// `numerator / denominator * 100` for a positive denominator, clamped
    /// to the `Decimal` range when the quotient does not fit.
    pub(crate) fn saturating_ratio_pct(numerator: Decimal, denominator: Decimal) -> Decimal {
        let clamped = if numerator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        };
        numerator
            .checked_div(denominator)
            .map_or(clamped, |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
    }

    fn fold<'a>(expenses: impl Iterator<Item = &'a Expense>) -> HashMap<i64, Decimal> {
        let mut spent: HashMap<i64, Decimal> = HashMap::new();
        for expense in expenses {
            let total = spent.entry(expense.category_id).or_insert(Decimal::ZERO);
            *total = total.saturating_add(expense.amount);
        }
        spent
    }
}

impl Default for SpendingAggregator {
    fn default() -> Self {
        Self::new()
    }
}
