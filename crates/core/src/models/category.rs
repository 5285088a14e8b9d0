use serde::{Deserialize, Serialize};

/// A user-defined spending category (e.g., "Groceries", "Rent").
///
/// Owned by the resource provider; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: i64,

    /// Display name
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
