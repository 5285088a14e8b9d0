use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::budget::Budget;
use super::category::Category;
use super::expense::Expense;
use super::summary::{PreAggregatedSummaryRow, SummarySource};

/// Everything the resource provider fetched for one dashboard refresh.
///
/// Collections arrive already decoded; missing collections default to empty
/// and a missing `summary` means no pre-aggregated rollup was available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Pre-aggregated per-category rollup, when the provider has one
    #[serde(default)]
    pub summary: Option<Vec<PreAggregatedSummaryRow>>,
}

impl DashboardSnapshot {
    /// Decode a snapshot from the provider's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to decode snapshot: {e}")))
    }

    /// Read and decode a snapshot stored as JSON on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        tracing::info!(
            path,
            categories = snapshot.categories.len(),
            budgets = snapshot.budgets.len(),
            expenses = snapshot.expenses.len(),
            "loaded dashboard snapshot"
        );
        Ok(snapshot)
    }

    /// Resolve which summary path this snapshot takes.
    pub fn summary_source(&self) -> SummarySource {
        SummarySource::from_rows(self.summary.clone())
    }
}
