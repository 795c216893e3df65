//! Entity kinds selectable from the navigation sidebar.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the two tables the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Contacts,
    Goals,
}

impl EntityKind {
    /// Navigation order; the first entry is the default selection.
    pub const ALL: [EntityKind; 2] = [EntityKind::Contacts, EntityKind::Goals];

    /// Source table name.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Goals => "goals",
        }
    }

    /// Fixed select-all query for this entity. Never parameterized.
    pub fn select_sql(self) -> &'static str {
        match self {
            Self::Contacts => "SELECT * FROM contacts",
            Self::Goals => "SELECT * FROM goals",
        }
    }

    /// User-facing navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contacts => "Contacts",
            Self::Goals => "Goals",
        }
    }

    /// Resolves a navigation label back to its entity kind.
    ///
    /// Matching is exact; labels are produced by the sidebar itself.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl Default for EntityKind {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::EntityKind;

    #[test]
    fn labels_round_trip_through_from_label() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(EntityKind::from_label("contacts"), None);
        assert_eq!(EntityKind::from_label("Tasks"), None);
    }

    #[test]
    fn default_selection_is_contacts() {
        assert_eq!(EntityKind::default(), EntityKind::Contacts);
    }

    #[test]
    fn select_sql_targets_entity_table() {
        for kind in EntityKind::ALL {
            assert!(kind.select_sql().ends_with(kind.table_name()));
        }
    }
}
