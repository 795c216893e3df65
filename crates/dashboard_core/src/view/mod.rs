//! Presentation of fetched snapshots.
//!
//! # Responsibility
//! - Render the full table as a grid on every cycle.
//! - Derive one summary chart when there is at least one record.
//!
//! # Invariants
//! - An empty dataset yields a grid and no chart.
//! - Rendering never touches the database.

pub mod chart;
pub mod grid;
pub mod html;
pub mod page;

use crate::model::{Contact, Dataset, EntityKind, Goal};
use chart::{BarChart, Chart, ProportionChart};
use grid::render_grid;
use page::Page;

/// Renders contacts with a count-by-initial bar chart.
pub fn render_contacts(dataset: &Dataset<Contact>) -> Page {
    let chart = if dataset.is_empty() {
        None
    } else {
        Some(Chart::Bar(BarChart::by_initial(dataset.records())))
    };
    Page::new(EntityKind::Contacts, render_grid(dataset.table()), chart)
}

/// Renders goals with an achieved/pending proportion chart.
pub fn render_goals(dataset: &Dataset<Goal>) -> Page {
    let chart = ProportionChart::achievement(dataset.records()).map(Chart::Proportion);
    Page::new(EntityKind::Goals, render_grid(dataset.table()), chart)
}
