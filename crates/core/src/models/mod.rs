pub mod alert;
pub mod breakdown;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod report;
pub mod settings;
pub mod snapshot;
pub mod summary;
pub mod trend;
