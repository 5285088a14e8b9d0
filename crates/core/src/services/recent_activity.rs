use crate::models::expense::Expense;

/// Default size of the recent-activity feed.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Picks the most recent expenses for the activity feed.
pub struct RecentActivityRanker;

impl RecentActivityRanker {
    pub fn new() -> Self {
        Self
    }

    /// Newest first, at most `limit` entries. Same-day expenses keep their
    /// input order. The input slice is left untouched.
    ///
    /// Dates compare as strings, which matches calendar order for
    /// "YYYY-MM-DD" values.
    pub fn top_recent<'a>(&self, expenses: &'a [Expense], limit: usize) -> Vec<&'a Expense> {
        let mut ranked: Vec<&Expense> = expenses.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.date.cmp(&a.date));
        ranked.truncate(limit);
        ranked
    }
}

impl Default for RecentActivityRanker {
    fn default() -> Self {
        Self::new()
    }
}
