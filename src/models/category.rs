//! Category model
//!
//! Categories label expenses for filtering and summaries. Names are unique
//! across the dataset (exact, case-sensitive match).

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// When the category was created
    pub created_at: NaiveDate,
}

impl Category {
    /// Create a new category dated today (UTC)
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now().date_naive(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new(CategoryId::new(1), "Groceries");
        assert_eq!(category.id.value(), 1);
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.created_at, Utc::now().date_naive());
    }

    #[test]
    fn test_display() {
        let category = Category::new(CategoryId::new(2), "Transport");
        assert_eq!(format!("{}", category), "Transport");
    }

    #[test]
    fn test_serialization_keys() {
        let category = Category {
            id: CategoryId::new(3),
            name: "Utilities".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("\"createdAt\":\"2024-03-15\""));
        assert!(json.contains("\"id\":3"));

        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, category.id);
        assert_eq!(deserialized.name, category.name);
        assert_eq!(deserialized.created_at, category.created_at);
    }
}
