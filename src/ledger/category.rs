//! The fixed set of categories that donations and distributions are bucketed into.

use std::fmt::Display;

use serde::Serialize;

/// A reporting category shared by donations and distributions.
///
/// Records store their category as free text. Text that does not name one of
/// these categories is kept as-is but left out of the per-category totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Healthcare,
    Food,
    Shelter,
    Emergency,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Education,
        Category::Healthcare,
        Category::Food,
        Category::Shelter,
        Category::Emergency,
    ];

    /// The key used in forms and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Healthcare => "healthcare",
            Category::Food => "food",
            Category::Shelter => "shelter",
            Category::Emergency => "emergency",
        }
    }

    /// The human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Healthcare => "Healthcare",
            Category::Food => "Food",
            Category::Shelter => "Shelter",
            Category::Emergency => "Emergency",
        }
    }

    /// Look up the category named by `key`.
    ///
    /// Matching is exact, so "Food" or " food" are not recognised.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
