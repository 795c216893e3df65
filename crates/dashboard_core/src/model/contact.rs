//! Contact record.

use super::dataset::Record;
use super::entity::EntityKind;
use super::table::Cell;
use serde::Serialize;

/// One row of the `contacts` table, reduced to what the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// `None` when the stored name is NULL.
    pub name: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// First character of the name, exactly as stored (no case folding).
    ///
    /// Returns `None` for NULL or empty names.
    pub fn initial(&self) -> Option<char> {
        self.name.as_deref().and_then(|name| name.chars().next())
    }
}

impl Record for Contact {
    const ENTITY: EntityKind = EntityKind::Contacts;
    const REQUIRED_COLUMN: &'static str = "name";

    fn from_cell(cell: &Cell) -> Self {
        let name = match cell {
            Cell::Null => None,
            other => Some(other.to_string()),
        };
        Self { name }
    }
}

#[cfg(test)]
mod tests {
    use super::Contact;
    use crate::model::dataset::Record;
    use crate::model::table::Cell;

    #[test]
    fn initial_preserves_case_and_unicode() {
        assert_eq!(Contact::new("amy").initial(), Some('a'));
        assert_eq!(Contact::new("Émile").initial(), Some('É'));
        assert_eq!(Contact::new("").initial(), None);
        assert_eq!(Contact::from_cell(&Cell::Null).initial(), None);
    }

    #[test]
    fn non_text_names_use_display_form() {
        assert_eq!(Contact::from_cell(&Cell::Integer(42)).initial(), Some('4'));
    }
}
