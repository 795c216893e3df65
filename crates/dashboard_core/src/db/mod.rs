//! Database connection contracts and the SQLite implementation.
//!
//! # Responsibility
//! - Turn injected configuration into scoped, read-only connections.
//! - Run the fixed select-all query for one entity and materialize it.
//!
//! # Invariants
//! - A session owns exactly one connection and releases it on drop.
//! - Errors are classified as connection or query failures, never retried.

use crate::model::{EntityKind, Table};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{SqliteConnector, SqliteSession};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// No connection string was configured.
    NotConfigured,
    /// Endpoint unreachable, unreadable or not a database.
    Connection(rusqlite::Error),
    /// The database rejected the query (for example a missing table).
    Query {
        entity: EntityKind,
        source: rusqlite::Error,
    },
}

impl DbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::NotConfigured | Self::Connection(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. })
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "database connection string is not configured"),
            Self::Connection(err) => write!(f, "database connection failed: {err}"),
            Self::Query { entity, source } => write!(f, "query on `{entity}` failed: {source}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotConfigured => None,
            Self::Connection(err) => Some(err),
            Self::Query { source, .. } => Some(source),
        }
    }
}

/// Connection settings, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    /// SQLite file path or `file:` URI. `None` fails at connect time.
    pub conn_str: Option<String>,
}

impl DbConfig {
    pub fn new(conn_str: impl Into<String>) -> Self {
        Self {
            conn_str: Some(conn_str.into()),
        }
    }
}

/// Opens one session per call.
pub trait Connector {
    type Session: Session;

    fn connect(&self) -> DbResult<Self::Session>;
}

/// A live connection. Dropping it releases the connection.
pub trait Session {
    /// Runs `kind.select_sql()` and returns every row.
    fn select_all(&self, kind: EntityKind) -> DbResult<Table>;
}
