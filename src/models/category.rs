//! Spending categories
//!
//! Transactions carry their category as free text. The engine only knows the
//! eight categories below; anything else is counted as `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A spending category recognized by the analysis engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpendingCategory {
    Food,
    Transport,
    Entertainment,
    Bills,
    Shopping,
    Healthcare,
    Education,
    Other,
}

impl SpendingCategory {
    /// All categories in canonical order
    pub const ALL: [SpendingCategory; 8] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Bills,
        Self::Shopping,
        Self::Healthcare,
        Self::Education,
        Self::Other,
    ];

    /// Display name of the category
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Map free-text category to a known category
    ///
    /// Only the exact display name matches. Anything else, including a
    /// differently cased name, maps to `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == label)
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for SpendingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(SpendingCategory::from_label("Food"), SpendingCategory::Food);
        assert_eq!(
            SpendingCategory::from_label("Healthcare"),
            SpendingCategory::Healthcare
        );
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(
            SpendingCategory::from_label("transport"),
            SpendingCategory::Other
        );
        assert_eq!(
            SpendingCategory::from_label(" Food "),
            SpendingCategory::Other
        );
        assert_eq!(
            SpendingCategory::from_label("ENTERTAINMENT"),
            SpendingCategory::Other
        );
    }

    #[test]
    fn test_unknown_folds_into_other() {
        assert_eq!(SpendingCategory::from_label("Pets"), SpendingCategory::Other);
        assert_eq!(SpendingCategory::from_label(""), SpendingCategory::Other);
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = SpendingCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Food",
                "Transport",
                "Entertainment",
                "Bills",
                "Shopping",
                "Healthcare",
                "Education",
                "Other"
            ]
        );
    }
}
