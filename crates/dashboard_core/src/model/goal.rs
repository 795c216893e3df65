//! Goal record and its achieved/pending status.

use super::dataset::Record;
use super::entity::EntityKind;
use super::table::Cell;
use serde::Serialize;

/// Display bucket for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GoalStatus {
    Achieved,
    Pending,
}

impl GoalStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Achieved => "Achieved",
            Self::Pending => "Pending",
        }
    }
}

/// One row of the `goals` table, reduced to what the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub achieved: bool,
}

impl Goal {
    pub fn status(self) -> GoalStatus {
        if self.achieved {
            GoalStatus::Achieved
        } else {
            GoalStatus::Pending
        }
    }
}

impl Record for Goal {
    const ENTITY: EntityKind = EntityKind::Goals;
    const REQUIRED_COLUMN: &'static str = "achieved";

    fn from_cell(cell: &Cell) -> Self {
        Self {
            achieved: is_truthy(cell),
        }
    }
}

/// Boolean reading of a boolean-like cell.
///
/// NULL, zero, empty text and the usual false spellings are false; every
/// other value is true.
fn is_truthy(cell: &Cell) -> bool {
    match cell {
        Cell::Null => false,
        Cell::Integer(value) => *value != 0,
        Cell::Real(value) => *value != 0.0,
        Cell::Text(value) => !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "f" | "no" | "n" | "off"
        ),
        Cell::Blob(bytes) => !bytes.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_truthy, Goal, GoalStatus};
    use crate::model::table::Cell;

    #[test]
    fn truthiness_covers_common_boolean_encodings() {
        assert!(is_truthy(&Cell::Integer(1)));
        assert!(is_truthy(&Cell::Integer(-3)));
        assert!(is_truthy(&Cell::from("TRUE")));
        assert!(is_truthy(&Cell::from("yes")));
        assert!(is_truthy(&Cell::Real(0.5)));

        assert!(!is_truthy(&Cell::Null));
        assert!(!is_truthy(&Cell::Integer(0)));
        assert!(!is_truthy(&Cell::from(" False ")));
        assert!(!is_truthy(&Cell::from("0")));
        assert!(!is_truthy(&Cell::from("")));
    }

    #[test]
    fn status_maps_to_labels() {
        assert_eq!(Goal { achieved: true }.status(), GoalStatus::Achieved);
        assert_eq!(Goal { achieved: false }.status().label(), "Pending");
    }
}
