//! Snapshot repository over a `Connector`.
//!
//! # Responsibility
//! - Provide fetch-contacts and fetch-goals for the controller.
//! - Keep connection lifetime scoped to a single fetch.
//!
//! # Invariants
//! - At most one session is open per call and it is dropped before returning.
//! - Schema validation happens here, not in presentation.

use crate::db::{Connector, DbError, Session};
use crate::model::{Contact, Dataset, EntityKind, Goal, Record, SchemaError, Table};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Coarse failure class, for callers that report rather than match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Query,
    Schema,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Query => "query",
            Self::Schema => "schema",
        }
    }
}

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Schema(SchemaError),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(err) if err.is_connection() => ErrorKind::Connection,
            Self::Db(_) => ErrorKind::Query,
            Self::Schema(_) => ErrorKind::Schema,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Schema(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Schema(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<SchemaError> for RepoError {
    fn from(value: SchemaError) -> Self {
        Self::Schema(value)
    }
}

/// Repository that opens a fresh session for every fetch.
pub struct DashboardRepository<C: Connector> {
    connector: C,
}

impl<C: Connector> DashboardRepository<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Fetches every row of the table behind `kind`.
    ///
    /// # Side effects
    /// - Opens and closes one connection.
    /// - Emits `db_fetch` logging events with row count and duration.
    pub fn fetch(&self, kind: EntityKind) -> RepoResult<Table> {
        let started_at = Instant::now();
        info!("event=db_fetch module=repo status=start entity={kind}");

        let result = self.connector.connect().and_then(|session| {
            let table = session.select_all(kind);
            drop(session);
            table
        });

        match result {
            Ok(table) => {
                info!(
                    "event=db_fetch module=repo status=ok entity={kind} rows={} duration_ms={}",
                    table.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(table)
            }
            Err(err) => {
                error!(
                    "event=db_fetch module=repo status=error entity={kind} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Fetches `contacts` and validates the `name` column.
    pub fn fetch_contacts(&self) -> RepoResult<Dataset<Contact>> {
        self.fetch_dataset()
    }

    /// Fetches `goals` and validates the `achieved` column.
    pub fn fetch_goals(&self) -> RepoResult<Dataset<Goal>> {
        self.fetch_dataset()
    }

    fn fetch_dataset<T: Record>(&self) -> RepoResult<Dataset<T>> {
        let table = self.fetch(T::ENTITY)?;
        Dataset::from_table(table).map_err(|err| {
            error!(
                "event=schema_check module=repo status=error entity={} error={}",
                T::ENTITY,
                err
            );
            RepoError::from(err)
        })
    }
}
