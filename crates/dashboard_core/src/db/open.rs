//! SQLite connector and session.
//!
//! # Responsibility
//! - Open read-only SQLite connections from the configured connection string.
//! - Materialize select-all results into `Table`.
//!
//! # Invariants
//! - Connections are opened with `SQLITE_OPEN_READ_ONLY`.
//! - Connection release happens in `Drop`, so every exit path closes it.

use super::{Connector, DbConfig, DbError, DbResult, Session};
use crate::model::{Cell, EntityKind, Table};
use log::{debug, error, info};
use rusqlite::{Connection, ErrorCode, OpenFlags};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connector bound to one immutable `DbConfig`.
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    config: DbConfig,
}

impl SqliteConnector {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }
}

impl Connector for SqliteConnector {
    type Session = SqliteSession;

    /// Opens a read-only connection.
    ///
    /// # Side effects
    /// - Emits `db_open` logging events with duration and status.
    fn connect(&self) -> DbResult<SqliteSession> {
        let started_at = Instant::now();
        info!("event=db_open module=db status=start");

        let conn_str = match self.config.conn_str.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => {
                error!(
                    "event=db_open module=db status=error duration_ms={} error_code=db_not_configured",
                    started_at.elapsed().as_millis()
                );
                return Err(DbError::NotConfigured);
            }
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(conn_str, flags)
            .and_then(|conn| conn.busy_timeout(BUSY_TIMEOUT).map(|()| conn));

        match conn {
            Ok(conn) => {
                info!(
                    "event=db_open module=db status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(SqliteSession {
                    conn,
                    opened_at: Instant::now(),
                })
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(DbError::Connection(err))
            }
        }
    }
}

/// One open SQLite connection.
pub struct SqliteSession {
    conn: Connection,
    opened_at: Instant,
}

impl Session for SqliteSession {
    fn select_all(&self, kind: EntityKind) -> DbResult<Table> {
        let classify = |err| classify_error(kind, err);

        let mut stmt = self.conn.prepare(kind.select_sql()).map_err(classify)?;
        let columns = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let column_count = columns.len();
        let mut table = Table::new(columns);

        let mut rows = stmt.query([]).map_err(classify)?;
        while let Some(row) = rows.next().map_err(classify)? {
            let mut cells = Vec::with_capacity(column_count);
            for index in 0..column_count {
                cells.push(Cell::from(row.get_ref(index).map_err(classify)?));
            }
            table.push_row(cells);
        }

        Ok(table)
    }
}

impl Drop for SqliteSession {
    fn drop(&mut self) {
        debug!(
            "event=db_close module=db status=ok held_ms={}",
            self.opened_at.elapsed().as_millis()
        );
    }
}

// A file that opens lazily can still turn out unreadable on first use.
fn classify_error(kind: EntityKind, err: rusqlite::Error) -> DbError {
    match err.sqlite_error_code() {
        Some(
            ErrorCode::NotADatabase
            | ErrorCode::CannotOpen
            | ErrorCode::PermissionDenied
            | ErrorCode::SystemIoFailure,
        ) => DbError::Connection(err),
        _ => DbError::Query {
            entity: kind,
            source: err,
        },
    }
}
