use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::services::recent_activity::DEFAULT_RECENT_LIMIT;
use crate::services::trend_builder::DEFAULT_TREND_WINDOW_DAYS;

pub use crate::services::trend_builder::MAX_TREND_WINDOW_DAYS;

/// Tunables for the dashboard computations.
///
/// Every field has a default, so `{}` is a valid settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Number of days in the spending trend, ending at the reference date.
    pub trend_window_days: u32,

    /// Maximum number of expenses in the recent-activity feed.
    pub recent_limit: usize,

    /// Utilization percentage at which a budget alert turns into a warning.
    pub warning_threshold_pct: Decimal,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            warning_threshold_pct: Decimal::from(80),
        }
    }
}

impl DashboardSettings {
    /// Decode settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: DashboardSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.trend_window_days == 0 {
            return Err(CoreError::InvalidSettings(
                "trend_window_days must be at least 1".into(),
            ));
        }
        if self.trend_window_days > MAX_TREND_WINDOW_DAYS {
            return Err(CoreError::InvalidSettings(format!(
                "trend_window_days must be at most {MAX_TREND_WINDOW_DAYS}, got {}",
                self.trend_window_days
            )));
        }
        if self.recent_limit == 0 {
            return Err(CoreError::InvalidSettings(
                "recent_limit must be at least 1".into(),
            ));
        }
        if self.warning_threshold_pct <= Decimal::ZERO
            || self.warning_threshold_pct > Decimal::ONE_HUNDRED
        {
            return Err(CoreError::InvalidSettings(format!(
                "warning_threshold_pct must be in (0, 100], got {}",
                self.warning_threshold_pct
            )));
        }
        Ok(())
    }
}
