//! View filter and derived list statistics.

use crate::model::todo::TodoItem;

/// Which items a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every item.
    #[default]
    All,
    /// Items not yet completed.
    Active,
    /// Completed items only.
    Completed,
}

impl FilterMode {
    /// Stable label used by presentation layers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Maps a label to a mode. Labels match exactly; anything else is `All`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

impl From<&str> for FilterMode {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

/// Counters shown above the list.
///
/// `completed + pending == total` holds for every value built by
/// [`TodoStats::from_items`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TodoStats {
    pub fn from_items(items: &[TodoItem]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|item| item.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterMode;

    #[test]
    fn from_label_matches_exact_labels_only() {
        assert_eq!(FilterMode::from_label("active"), FilterMode::Active);
        assert_eq!(FilterMode::from_label("completed"), FilterMode::Completed);
        assert_eq!(FilterMode::from_label("all"), FilterMode::All);
        assert_eq!(FilterMode::from_label("Active"), FilterMode::All);
        assert_eq!(FilterMode::from_label(" completed "), FilterMode::All);
        assert_eq!(FilterMode::from_label("archived"), FilterMode::All);
        assert_eq!(FilterMode::from_label(""), FilterMode::All);
    }

    #[test]
    fn labels_roundtrip() {
        for mode in [FilterMode::All, FilterMode::Active, FilterMode::Completed] {
            assert_eq!(FilterMode::from_label(mode.as_str()), mode);
        }
    }
}
