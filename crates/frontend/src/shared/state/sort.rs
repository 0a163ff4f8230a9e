//! Client-side sort state: `{column, order}` plus the header toggle rule.

use contracts::domain::common::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<&'static str>,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: None,
            order: SortOrder::Asc,
        }
    }
}

impl SortState {
    pub fn by(field: &'static str) -> Self {
        Self {
            field: Some(field),
            order: SortOrder::Asc,
        }
    }

    /// Clicking the active column reverses the order; clicking a new
    /// column sorts it ascending.
    pub fn toggled(self, field: &'static str) -> Self {
        if self.field == Some(field) {
            Self {
                order: self.order.reversed(),
                ..self
            }
        } else {
            Self::by(field)
        }
    }

    /// Header indicator for a column: arrow on the active column, nothing
    /// elsewhere.
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field != Some(field) {
            return "";
        }
        match self.order {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }

    pub fn indicator_class(&self, field: &str) -> &'static str {
        if self.field == Some(field) {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_column_reverses() {
        let state = SortState::by("name");
        let flipped = state.toggled("name");
        assert_eq!(flipped.field, Some("name"));
        assert_eq!(flipped.order, SortOrder::Desc);
        assert_eq!(flipped.toggled("name").order, SortOrder::Asc);
    }

    #[test]
    fn toggling_new_column_starts_ascending() {
        let state = SortState::by("name").toggled("name");
        assert_eq!(state.order, SortOrder::Desc);
        let other = state.toggled("created_at");
        assert_eq!(other.field, Some("created_at"));
        assert_eq!(other.order, SortOrder::Asc);
    }

    #[test]
    fn indicator_only_on_active_column() {
        let state = SortState::by("name");
        assert_eq!(state.indicator("name"), "▲");
        assert_eq!(state.indicator("email"), "");
        assert_eq!(state.toggled("name").indicator("name"), "▼");
    }
}
