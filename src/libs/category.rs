//! Ordered list of user-defined category labels.
//!
//! The list lives in the settings area under [`KEY_CATEGORIES`] as a JSON
//! array of strings. Order is insertion order and is what the selector
//! shows. Log records copy the category text, so removing a category never
//! touches history.

use super::error::Result;
use super::messages::Message;
use super::settings::{Settings, KEY_CATEGORIES};
use crate::msg_warning;

/// Longest category label that is stored, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Result of [`Categories::append`]. The rejections are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Added(String),
    Empty,
    Duplicate(String),
}

/// Trims and cuts user input to the stored form.
pub fn normalize(value: &str) -> String {
    value.trim().chars().take(MAX_CATEGORY_LEN).collect()
}

#[derive(Debug, Clone)]
pub struct Categories {
    settings: Settings,
}

impl Categories {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Current list; a missing or unreadable value yields an empty list.
    pub fn list(&self) -> Vec<String> {
        let Some(json) = self.settings.get(KEY_CATEGORIES) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&json) {
            Ok(categories) => categories,
            Err(e) => {
                msg_warning!(Message::CategoriesMalformed(e.to_string()));
                Vec::new()
            }
        }
    }

    pub fn append(&self, value: &str) -> Result<AppendOutcome> {
        let value = normalize(value);
        if value.is_empty() {
            return Ok(AppendOutcome::Empty);
        }

        let mut categories = self.list();
        if categories.contains(&value) {
            return Ok(AppendOutcome::Duplicate(value));
        }

        categories.push(value.clone());
        self.save(&categories)?;
        Ok(AppendOutcome::Added(value))
    }

    /// Removes every occurrence of `value`; returns whether anything changed.
    pub fn remove(&self, value: &str) -> Result<bool> {
        let categories = self.list();
        let remaining: Vec<String> = categories.iter().filter(|c| c.as_str() != value).cloned().collect();
        let removed = remaining.len() != categories.len();
        self.save(&remaining)?;
        Ok(removed)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.list().iter().any(|c| c == value)
    }

    fn save(&self, categories: &[String]) -> Result<()> {
        self.settings.set(KEY_CATEGORIES, &serde_json::to_string(categories)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_then_cuts() {
        assert_eq!(normalize("  Design  "), "Design");
        let long = format!("  {}  ", "あ".repeat(60));
        assert_eq!(normalize(&long).chars().count(), MAX_CATEGORY_LEN);
        assert_eq!(normalize("   "), "");
    }
}
