pub mod alert_evaluator;
pub mod breakdown_builder;
pub mod category_directory;
pub mod recent_activity;
pub mod report_builder;
pub mod spending_aggregator;
pub mod summary_resolver;
pub mod trend_builder;
