//! Core logic for the contacts/goals dashboard.
//! Data access, presentation and the navigation controller live here; the
//! HTTP driver is a separate crate.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{AppConfig, ConfigError};
pub use db::{Connector, DbConfig, DbError, DbResult, Session, SqliteConnector};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Cell, Contact, Dataset, EntityKind, Goal, GoalStatus, SchemaError, Table};
pub use repo::dashboard_repo::{DashboardRepository, ErrorKind, RepoError, RepoResult};
pub use service::dashboard_service::DashboardService;
pub use view::chart::{Bar, BarChart, Chart, ProportionChart, Slice};
pub use view::page::{error_page, Page};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
