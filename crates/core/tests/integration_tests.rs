use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use spending_dashboard_core::errors::CoreError;
use spending_dashboard_core::logging;
use spending_dashboard_core::models::alert::AlertLevel;
use spending_dashboard_core::models::budget::Budget;
use spending_dashboard_core::models::category::Category;
use spending_dashboard_core::models::expense::Expense;
use spending_dashboard_core::models::settings::DashboardSettings;
use spending_dashboard_core::models::snapshot::DashboardSnapshot;
use spending_dashboard_core::models::summary::{PreAggregatedSummaryRow, SummarySource};
use spending_dashboard_core::SpendingDashboard;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════════════

fn groceries_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        categories: vec![Category::new(1, "Groceries")],
        budgets: vec![Budget::new(1, 1, dec!(500), "2024-03")],
        expenses: vec![
            Expense::with_description(1, 1, dec!(120), "2024-03-01", "Weekly shop"),
            Expense::with_description(2, 1, dec!(80), "2024-03-02", "Farmers market"),
        ],
        summary: None,
    }
}

fn household_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        categories: vec![
            Category::new(1, "Groceries"),
            Category::new(2, "Rent"),
            Category::new(3, "Transport"),
        ],
        budgets: vec![
            Budget::new(1, 1, dec!(400), "2024-03"),
            Budget::new(2, 2, dec!(1200), "2024-03"),
            Budget::new(3, 3, dec!(0), "2024-03"),
        ],
        expenses: vec![
            Expense::new(1, 2, dec!(1200), "2024-03-01"),
            Expense::new(2, 1, dec!(64.30), "2024-03-02"),
            Expense::new(3, 3, dec!(2.90), "2024-03-04"),
            Expense::new(4, 1, dec!(41.15), "2024-03-04"),
            Expense::new(5, 3, dec!(2.90), "2024-03-06"),
            Expense::new(6, 1, dec!(230.55), "2024-03-07"),
            Expense::new(7, 4, dec!(19.99), "2024-03-07"),
        ],
        summary: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
// Derived path (no pre-aggregated summary)
// ═══════════════════════════════════════════════════════════════════

mod derived_path {
    use super::*;

    #[test]
    fn groceries_scenario() {
        let dashboard = SpendingDashboard::new(groceries_snapshot());
        assert_eq!(dashboard.summary_source(), &SummarySource::Derive);

        let summary = dashboard.budget_summary();
        assert_eq!(summary.total_budget, dec!(500));
        assert_eq!(summary.total_spent, dec!(200));
        assert_eq!(summary.remaining, dec!(300));
        assert_eq!(summary.budget_count, 1);

        let rows = dashboard.category_breakdown();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Groceries");
        assert_eq!(rows[0].amount, dec!(200));
        assert_eq!(rows[0].budget, dec!(500));
        assert_eq!(rows[0].percentage, dec!(40));
    }

    #[test]
    fn household_view() {
        let dashboard = SpendingDashboard::new(household_snapshot());
        let view = dashboard.build_view(d(2024, 3, 7));

        assert_eq!(view.summary.total_budget, dec!(1600));
        assert_eq!(view.summary.total_spent, dec!(1561.79));
        assert_eq!(view.summary.remaining, dec!(38.21));
        assert_eq!(view.summary.budget_count, 3);

        assert_eq!(view.breakdown.len(), 3);
        assert_eq!(view.breakdown[0].amount, dec!(336.00));
        assert_eq!(view.breakdown[0].percentage, dec!(84));
        assert_eq!(view.breakdown[1].percentage, dec!(100));
        // zero budget never divides
        assert_eq!(view.breakdown[2].amount, dec!(5.80));
        assert_eq!(view.breakdown[2].percentage, Decimal::ZERO);

        assert_eq!(view.trend.len(), 7);
        assert_eq!(view.trend[0].amount, dec!(1200));
        assert_eq!(view.trend[6].amount, dec!(250.54));
        let trend_total: Decimal = view.trend.iter().map(|p| p.amount).sum();
        assert_eq!(trend_total, view.summary.total_spent);

        let recent_ids: Vec<i64> = view.recent.iter().map(|e| e.id).collect();
        assert_eq!(recent_ids, vec![6, 7, 5, 3, 4]);
    }

    #[test]
    fn empty_snapshot_still_renders_full_window() {
        let dashboard = SpendingDashboard::new(DashboardSnapshot::default());
        let view = dashboard.build_view(d(2024, 3, 7));
        assert!(!view.summary.has_budgets());
        assert!(view.breakdown.is_empty());
        assert_eq!(view.trend.len(), 7);
        assert!(view.recent.is_empty());
    }

    #[test]
    fn category_lookups() {
        let dashboard = SpendingDashboard::new(household_snapshot());
        assert_eq!(dashboard.category_name(2), "Rent");
        assert_eq!(dashboard.category_name(4), "Unknown");
        let spent = dashboard.spent_by_category();
        assert_eq!(spent[&4], dec!(19.99));
        assert_eq!(spent.get(&5), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Provided path (pre-aggregated summary present)
// ═══════════════════════════════════════════════════════════════════

mod provided_path {
    use super::*;

    #[test]
    fn provided_summary_wins_over_raw_records() {
        let mut snapshot = household_snapshot();
        snapshot.summary = Some(vec![PreAggregatedSummaryRow {
            category: "Rent".into(),
            budget: dec!(1000),
            spent: dec!(1000),
            remaining: dec!(0),
        }]);
        let dashboard = SpendingDashboard::new(snapshot);
        assert!(dashboard.summary_source().is_provided());

        let summary = dashboard.budget_summary();
        assert_eq!(summary.total_budget, dec!(1000));
        assert_eq!(summary.total_spent, dec!(1000));
        assert_eq!(summary.remaining, dec!(0));
        assert_eq!(summary.budget_count, 1);

        let rows = dashboard.category_breakdown();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Rent");
        assert_eq!(rows[0].percentage, dec!(100));
    }

    #[test]
    fn provided_summary_does_not_affect_trend_or_recent() {
        let mut snapshot = household_snapshot();
        snapshot.summary = Some(vec![PreAggregatedSummaryRow {
            category: "Rent".into(),
            budget: dec!(1),
            spent: dec!(1),
            remaining: dec!(0),
        }]);
        let with_summary = SpendingDashboard::new(snapshot).build_view(d(2024, 3, 7));
        let without = SpendingDashboard::new(household_snapshot()).build_view(d(2024, 3, 7));
        assert_eq!(with_summary.trend, without.trend);
        assert_eq!(with_summary.recent, without.recent);
    }

    #[test]
    fn empty_provided_summary_falls_back() {
        let mut snapshot = groceries_snapshot();
        snapshot.summary = Some(Vec::new());
        let dashboard = SpendingDashboard::new(snapshot);
        assert_eq!(dashboard.summary_source(), &SummarySource::Derive);
        assert_eq!(dashboard.budget_summary().total_spent, dec!(200));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings, alerts and reports through the facade
// ═══════════════════════════════════════════════════════════════════

mod configured {
    use super::*;

    #[test]
    fn custom_window_and_limit() {
        let settings = DashboardSettings {
            trend_window_days: 14,
            recent_limit: 2,
            ..DashboardSettings::default()
        };
        let dashboard = SpendingDashboard::with_settings(household_snapshot(), settings).unwrap();
        let view = dashboard.build_view(d(2024, 3, 7));
        assert_eq!(view.trend.len(), 14);
        assert_eq!(view.trend[0].date, d(2024, 2, 23));
        assert_eq!(view.recent.len(), 2);
    }

    #[test]
    fn invalid_settings_rejected() {
        let settings = DashboardSettings {
            recent_limit: 0,
            ..DashboardSettings::default()
        };
        let err = SpendingDashboard::with_settings(household_snapshot(), settings).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn trend_from_date_string() {
        let dashboard = SpendingDashboard::new(household_snapshot());
        let points = dashboard.spending_trend_from_str("2024-03-07").unwrap();
        assert_eq!(points, dashboard.spending_trend(d(2024, 3, 7)));
        assert!(matches!(
            dashboard.spending_trend_from_str("yesterday"),
            Err(CoreError::InvalidDate(_))
        ));
    }

    #[test]
    fn budget_alerts_for_month() {
        let dashboard = SpendingDashboard::new(household_snapshot());
        let alerts = dashboard.budget_alerts("2024-03");
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].level, AlertLevel::Warning); // 84%
        assert_eq!(alerts[1].level, AlertLevel::OnTrack); // exactly 100%
        assert_eq!(alerts[2].level, AlertLevel::Exceeded); // zero budget, 5.80 spent
        assert!(dashboard.budget_alerts("2024-04").is_empty());
    }

    #[test]
    fn lower_threshold_raises_more_warnings() {
        let settings = DashboardSettings {
            warning_threshold_pct: dec!(90),
            ..DashboardSettings::default()
        };
        let dashboard = SpendingDashboard::with_settings(household_snapshot(), settings).unwrap();
        assert_eq!(dashboard.budget_alerts("2024-03")[0].level, AlertLevel::OnTrack);
    }

    #[test]
    fn monthly_report() {
        let dashboard = SpendingDashboard::new(household_snapshot());
        let report = dashboard.monthly_report(2024, 3, dec!(2500)).unwrap();
        assert_eq!(report.total_expenses, 7);
        assert_eq!(report.total_spent, dec!(1561.79));
        assert_eq!(report.by_category["Unknown"], dec!(19.99));
        assert_eq!(report.savings, dec!(938.21));
        assert!(dashboard.monthly_report(2024, 0, dec!(2500)).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// JSON in / JSON out
// ═══════════════════════════════════════════════════════════════════

mod json_boundary {
    use super::*;

    const PAYLOAD: &str = r#"{
        "categories": [{"id": 1, "name": "Groceries"}],
        "budgets": [{"id": 1, "category_id": 1, "amount": 500, "month": "2024-03", "user_id": 1}],
        "expenses": [
            {"id": 1, "category_id": 1, "amount": 120.0, "description": "Weekly shop", "date": "2024-03-01", "user_id": 1},
            {"id": 2, "category_id": 1, "amount": 80.0, "description": "Farmers market", "date": "2024-03-02", "user_id": 1}
        ]
    }"#;

    #[test]
    fn from_json_matches_fixture() {
        let dashboard = SpendingDashboard::from_json(PAYLOAD).unwrap();
        assert_eq!(dashboard.snapshot(), &groceries_snapshot_with_user());
        assert_eq!(dashboard.budget_summary().remaining, dec!(300));
    }

    fn groceries_snapshot_with_user() -> DashboardSnapshot {
        let mut snapshot = groceries_snapshot();
        for b in &mut snapshot.budgets {
            b.user_id = 1;
        }
        for e in &mut snapshot.expenses {
            e.user_id = 1;
        }
        snapshot
    }

    #[test]
    fn view_serializes_numbers_not_strings() {
        let dashboard = SpendingDashboard::from_json(PAYLOAD).unwrap();
        let json = dashboard.view_to_json(d(2024, 3, 7)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["total_budget"].as_f64(), Some(500.0));
        assert_eq!(value["summary"]["remaining"].as_f64(), Some(300.0));
        assert_eq!(value["summary"]["budget_count"].as_u64(), Some(1));
        assert_eq!(value["breakdown"][0]["percentage"].as_f64(), Some(40.0));
        assert_eq!(value["trend"].as_array().map(|a| a.len()), Some(7));
        assert_eq!(value["trend"][0]["label"], "Fri");
        assert_eq!(value["trend"][0]["date"], "2024-03-01");
        assert_eq!(value["recent"][0]["id"].as_i64(), Some(2));
    }

    #[test]
    fn invalid_payload() {
        let err = SpendingDashboard::from_json("[]").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn load_from_file() {
        logging::init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, PAYLOAD).unwrap();

        let dashboard =
            SpendingDashboard::load_from_file(path.to_str().unwrap(), DashboardSettings::default());
        let dashboard = dashboard.unwrap();
        assert_eq!(dashboard.budget_summary().total_spent, dec!(200));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err =
            SpendingDashboard::load_from_file(path.to_str().unwrap(), DashboardSettings::default())
                .unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    const EXTREME_PAYLOAD: &str = r#"{
        "categories": [{"id": 1, "name": "Rent"}, {"id": 2, "name": "Fun"}],
        "budgets": [
            {"id": 1, "category_id": 1, "amount": 5e28, "month": "2024-03"},
            {"id": 2, "category_id": 2, "amount": 5e28, "month": "2024-03"},
            {"id": 3, "category_id": 2, "amount": 0.001, "month": "2024-03"}
        ],
        "expenses": [
            {"id": 1, "category_id": 2, "amount": 1e27, "date": "2024-03-07"},
            {"id": 2, "category_id": 2, "amount": 1e27, "date": "2024-03-07"}
        ]
    }"#;

    #[test]
    fn extreme_amounts_saturate_instead_of_panicking() {
        let dashboard = SpendingDashboard::from_json(EXTREME_PAYLOAD).unwrap();

        assert_eq!(dashboard.budget_summary().total_budget, Decimal::MAX);
        assert_eq!(dashboard.category_breakdown()[2].percentage, Decimal::MAX);

        let alerts = dashboard.budget_alerts("2024-03");
        assert_eq!(alerts[2].level, AlertLevel::Exceeded);
        assert!(dashboard.view_to_json(d(2024, 3, 7)).is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Logging
// ═══════════════════════════════════════════════════════════════════

mod logging_setup {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        logging::init_tracing();
        logging::init_tracing();
        let dashboard = SpendingDashboard::new(groceries_snapshot());
        assert_eq!(dashboard.budget_summary().budget_count, 1);
    }

    #[test]
    fn debug_output_lists_sizes() {
        let dashboard = SpendingDashboard::new(household_snapshot());
        let debug = format!("{dashboard:?}");
        assert!(debug.contains("SpendingDashboard"));
        assert!(debug.contains("expenses: 7"));
        assert!(debug.contains("provided_summary: false"));
    }
}
