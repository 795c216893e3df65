//! Read-only domain model for dashboard snapshots.
//!
//! # Responsibility
//! - Define the tabular shape returned by data access.
//! - Define nominal records (`Contact`, `Goal`) projected from that shape.
//!
//! # Invariants
//! - Snapshots are never written back; the database owns the source of truth.
//! - A `Dataset<T>` holds exactly one record per table row, in row order.

pub mod contact;
pub mod dataset;
pub mod entity;
pub mod goal;
pub mod table;

pub use contact::Contact;
pub use dataset::{Dataset, Record, SchemaError};
pub use entity::EntityKind;
pub use goal::{Goal, GoalStatus};
pub use table::{Cell, Table};
