//! SQLite connection management for the document store.
//!
//! The pool is built once at startup and handed to the store explicitly;
//! there is no process-wide global. The pool handles its own thread safety.

use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use super::DatabaseError;

/// Connection pool for the SQLite-backed document store
pub type DatabasePool = r2d2::Pool<SqliteConnectionManager>;

/// Open (or create) the SQLite database at `path` and prepare the collection
/// tables.
pub fn connect(path: &str) -> Result<DatabasePool, DatabaseError> {
    info!("Opening SQLite document store at {}", path);

    let manager = SqliteConnectionManager::file(path);
    let pool = r2d2::Pool::new(manager).map_err(|e| DatabaseError::Connection(e.to_string()))?;

    let conn = pool
        .get()
        .map_err(|e| DatabaseError::Connection(e.to_string()))?;
    init_schema(&conn)?;

    Ok(pool)
}

/// One table per collection; each row holds a serialized JSON document.
fn init_schema(conn: &rusqlite::Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS blood_pressure (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
         CREATE TABLE IF NOT EXISTS weight (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
         CREATE TABLE IF NOT EXISTS expenses (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
         CREATE TABLE IF NOT EXISTS api_keys (key TEXT PRIMARY KEY, doc TEXT NOT NULL);",
    )
    .map_err(|e| DatabaseError::Schema(e.to_string()))
}
