use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::expense::Expense;
use crate::models::trend::TrendPoint;

/// Default trend length ("last 7 days").
pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 7;

/// Longest trend window settings accept (one leap year of days).
pub const MAX_TREND_WINDOW_DAYS: u32 = 366;

/// Length of a "YYYY-MM-DD" day key.
const DAY_KEY_LEN: usize = 10;

/// Generates the gap-filled daily spending series for the trend chart.
pub struct TrendWindowBuilder;

impl TrendWindowBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build `window_days` points covering
    /// `[reference_date - (window_days - 1), reference_date]`, oldest first.
    ///
    /// An expense counts towards a day when its date string starts with that
    /// day's "YYYY-MM-DD". Days without expenses get a zero point, so the
    /// series never shrinks on sparse data.
    ///
    /// A window reaching before `NaiveDate::MIN` starts at `NaiveDate::MIN`
    /// and is shorter than `window_days`.
    pub fn build(
        &self,
        expenses: &[Expense],
        window_days: u32,
        reference_date: NaiveDate,
    ) -> Vec<TrendPoint> {
        if window_days == 0 {
            return Vec::new();
        }

        // Index spending by day key for O(1) lookup per day
        let mut spent_by_day: HashMap<&str, Decimal> = HashMap::new();
        for expense in expenses {
            if let Some(day) = expense.date.get(..DAY_KEY_LEN) {
                let total = spent_by_day.entry(day).or_insert(Decimal::ZERO);
                *total = total.saturating_add(expense.amount);
            }
        }

        let mut current_date = reference_date
            .checked_sub_days(Days::new(u64::from(window_days - 1)))
            .unwrap_or(NaiveDate::MIN);
        let mut points = Vec::with_capacity(window_days.min(MAX_TREND_WINDOW_DAYS) as usize);

        while current_date <= reference_date {
            let key = current_date.format("%Y-%m-%d").to_string();
            points.push(TrendPoint {
                label: current_date.format("%a").to_string(),
                amount: spent_by_day
                    .get(key.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO),
                date: current_date,
            });

            current_date = match current_date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        tracing::debug!(points = points.len(), %reference_date, "built spending trend");
        points
    }
}

impl Default for TrendWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
