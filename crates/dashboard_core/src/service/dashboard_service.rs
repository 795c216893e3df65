//! Dashboard controller.
//!
//! # Responsibility
//! - Dispatch a selection to the matching fetch and render operations.
//!
//! # Invariants
//! - Every call is evaluated from scratch; no state survives between calls.
//! - Errors from data access are returned unchanged.

use crate::db::Connector;
use crate::model::EntityKind;
use crate::repo::dashboard_repo::{DashboardRepository, RepoResult};
use crate::view::page::Page;
use crate::view::{render_contacts, render_goals};
use log::{error, info};
use std::time::Instant;

/// Entry point invoked once per navigation event.
pub struct DashboardService<C: Connector> {
    repo: DashboardRepository<C>,
}

impl<C: Connector> DashboardService<C> {
    pub fn new(connector: C) -> Self {
        Self {
            repo: DashboardRepository::new(connector),
        }
    }

    pub fn repository(&self) -> &DashboardRepository<C> {
        &self.repo
    }

    /// Fetches and renders the page for `selection`.
    ///
    /// # Side effects
    /// - One database round trip.
    /// - Emits `dashboard_render` logging events.
    pub fn render(&self, selection: EntityKind) -> RepoResult<Page> {
        let started_at = Instant::now();
        let page = match selection {
            EntityKind::Contacts => self.repo.fetch_contacts().map(|data| render_contacts(&data)),
            EntityKind::Goals => self.repo.fetch_goals().map(|data| render_goals(&data)),
        };

        match &page {
            Ok(page) => info!(
                "event=dashboard_render module=service status=ok entity={selection} chart={} duration_ms={}",
                page.chart().is_some(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=dashboard_render module=service status=error entity={selection} error_kind={} duration_ms={}",
                err.kind().as_str(),
                started_at.elapsed().as_millis()
            ),
        }
        page
    }
}
