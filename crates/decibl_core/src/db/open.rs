//! Connection opening with timing and status logs.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens (or creates) the store file at `path` and migrates it.
///
/// # Side effects
/// - Emits `db_open` start/ok/error events with `duration_ms`.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_logged("file", path.display().to_string(), || Connection::open(path))
}

/// Opens a private in-memory store, used when no `db_path` is configured.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_logged("memory", ":memory:".to_string(), Connection::open_in_memory)
}

fn open_logged(
    mode: &'static str,
    location: String,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result: DbResult<Connection> = open()
        .map_err(|source| DbError::Open { location, source })
        .and_then(|mut conn| prepare(&mut conn).map(|()| conn));

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn prepare(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)
}
