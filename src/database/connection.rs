use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::Result;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

/// Pool over a single shared in-memory database. Every pooled connection
/// of a plain `memory()` manager would get its own database, so the pool
/// is capped at one connection.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(enable_foreign_keys);
    let pool = r2d2::Pool::builder().max_size(1).build(manager)?;
    Ok(pool)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path).with_init(enable_foreign_keys)
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    let pool = r2d2::Pool::builder().build(manager)?;
    Ok(pool)
}

// Off by default in SQLite; without it the matches table would accept
// ids of players that were never registered.
fn enable_foreign_keys(conn: &mut rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    let conn = pool.get()?;
    Ok(conn)
}
