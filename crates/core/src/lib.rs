pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use errors::CoreError;
use models::{
    alert::BudgetAlert,
    breakdown::CategoryBreakdownRow,
    dashboard::DashboardView,
    expense::Expense,
    report::MonthlyReport,
    settings::DashboardSettings,
    snapshot::DashboardSnapshot,
    summary::{BudgetSummary, SummarySource},
    trend::TrendPoint,
};
use services::{
    alert_evaluator::BudgetAlertEvaluator, breakdown_builder::CategoryBreakdownBuilder,
    category_directory::CategoryDirectory, recent_activity::RecentActivityRanker,
    report_builder::MonthlyReportBuilder, spending_aggregator::SpendingAggregator,
    summary_resolver::BudgetSummaryResolver, trend_builder::TrendWindowBuilder,
};

/// Main entry point for the dashboard aggregation engine.
///
/// Wraps one immutable snapshot of budgets, expenses and categories. Every
/// query recomputes from that snapshot; nothing is cached, so a refresh means
/// building a new `SpendingDashboard`.
#[must_use]
pub struct SpendingDashboard {
    snapshot: DashboardSnapshot,
    settings: DashboardSettings,
    source: SummarySource,
    aggregator: SpendingAggregator,
    summary_resolver: BudgetSummaryResolver,
    breakdown_builder: CategoryBreakdownBuilder,
    trend_builder: TrendWindowBuilder,
    recent_ranker: RecentActivityRanker,
    alert_evaluator: BudgetAlertEvaluator,
    report_builder: MonthlyReportBuilder,
}

impl std::fmt::Debug for SpendingDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpendingDashboard")
            .field("categories", &self.snapshot.categories.len())
            .field("budgets", &self.snapshot.budgets.len())
            .field("expenses", &self.snapshot.expenses.len())
            .field("provided_summary", &self.source.is_provided())
            .field("settings", &self.settings)
            .finish()
    }
}

impl SpendingDashboard {
    /// Wrap a snapshot using default settings.
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self::build(snapshot, DashboardSettings::default())
    }

    /// Wrap a snapshot with custom settings. Settings are validated first.
    pub fn with_settings(
        snapshot: DashboardSnapshot,
        settings: DashboardSettings,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(snapshot, settings))
    }

    /// Decode a snapshot from JSON and wrap it using default settings.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(Self::new(DashboardSnapshot::from_json(json)?))
    }

    /// Load a JSON snapshot from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, settings: DashboardSettings) -> Result<Self, CoreError> {
        let snapshot = DashboardSnapshot::load_from_file(path)?;
        Self::with_settings(snapshot, settings)
    }

    // ── Inputs ──────────────────────────────────────────────────────

    #[must_use]
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Which path the summary and breakdown take for this snapshot.
    #[must_use]
    pub fn summary_source(&self) -> &SummarySource {
        &self.source
    }

    // ── Dashboard Queries ───────────────────────────────────────────

    /// Headline totals (provided rollup when present, else derived).
    #[must_use]
    pub fn budget_summary(&self) -> BudgetSummary {
        self.summary_resolver.resolve(
            &self.source,
            &self.snapshot.budgets,
            &self.snapshot.expenses,
        )
    }

    /// Per-category utilization rows.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryBreakdownRow> {
        self.breakdown_builder.build(
            &self.source,
            &self.snapshot.budgets,
            &self.snapshot.categories,
            &self.snapshot.expenses,
        )
    }

    /// Daily spending over the configured window, ending at `reference_date`.
    #[must_use]
    pub fn spending_trend(&self, reference_date: NaiveDate) -> Vec<TrendPoint> {
        self.trend_builder.build(
            &self.snapshot.expenses,
            self.settings.trend_window_days,
            reference_date,
        )
    }

    /// Same as `spending_trend`, with the reference date given as "YYYY-MM-DD".
    pub fn spending_trend_from_str(
        &self,
        reference_date: &str,
    ) -> Result<Vec<TrendPoint>, CoreError> {
        let date = NaiveDate::parse_from_str(reference_date, "%Y-%m-%d")?;
        Ok(self.spending_trend(date))
    }

    /// Most recent expenses, newest first, capped at the configured limit.
    #[must_use]
    pub fn recent_expenses(&self) -> Vec<&Expense> {
        self.recent_ranker
            .top_recent(&self.snapshot.expenses, self.settings.recent_limit)
    }

    /// Display name for a category id ("Unknown" when absent).
    #[must_use]
    pub fn category_name(&self, category_id: i64) -> &str {
        CategoryDirectory::new(&self.snapshot.categories).name_of(category_id)
    }

    /// Spending per category id across all expenses.
    #[must_use]
    pub fn spent_by_category(&self) -> HashMap<i64, Decimal> {
        self.aggregator.spent_by_category(&self.snapshot.expenses)
    }

    /// Everything the dashboard shows, computed in one call.
    #[must_use]
    pub fn build_view(&self, reference_date: NaiveDate) -> DashboardView {
        let view = DashboardView {
            summary: self.budget_summary(),
            breakdown: self.category_breakdown(),
            trend: self.spending_trend(reference_date),
            recent: self.recent_expenses().into_iter().cloned().collect(),
        };
        tracing::debug!(
            provided_summary = self.source.is_provided(),
            breakdown_rows = view.breakdown.len(),
            recent = view.recent.len(),
            "built dashboard view"
        );
        view
    }

    /// `build_view` encoded as pretty JSON for the presentation layer.
    pub fn view_to_json(&self, reference_date: NaiveDate) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.build_view(reference_date)).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize dashboard view: {e}"))
        })
    }

    // ── Budget Monitoring ───────────────────────────────────────────

    /// Alert status of every budget set for `month` ("YYYY-MM").
    #[must_use]
    pub fn budget_alerts(&self, month: &str) -> Vec<BudgetAlert> {
        self.alert_evaluator.evaluate(
            &self.snapshot.budgets,
            &self.snapshot.categories,
            &self.snapshot.expenses,
            month,
            self.settings.warning_threshold_pct,
        )
    }

    /// Spending report for one calendar month.
    pub fn monthly_report(
        &self,
        year: i32,
        month: u32,
        monthly_income: Decimal,
    ) -> Result<MonthlyReport, CoreError> {
        self.report_builder.build(
            &self.snapshot.expenses,
            &self.snapshot.categories,
            year,
            month,
            monthly_income,
        )
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(snapshot: DashboardSnapshot, settings: DashboardSettings) -> Self {
        let source = snapshot.summary_source();

        Self {
            snapshot,
            settings,
            source,
            aggregator: SpendingAggregator::new(),
            summary_resolver: BudgetSummaryResolver::new(),
            breakdown_builder: CategoryBreakdownBuilder::new(),
            trend_builder: TrendWindowBuilder::new(),
            recent_ranker: RecentActivityRanker::new(),
            alert_evaluator: BudgetAlertEvaluator::new(),
            report_builder: MonthlyReportBuilder::new(),
        }
    }
}
