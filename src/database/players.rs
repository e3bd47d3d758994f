use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;
use crate::errors::Result;

pub fn register_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    let player = conn.query_row(sql, params![name], parse_player_row)?;
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    let player = conn
        .query_row(sql, params![id], parse_player_row)
        .optional()?;
    Ok(player)
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Bulk delete. Fails with a constraint violation while matches still
/// reference any player; clear matches first.
pub fn clear_players(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM players", [])?;
    Ok(())
}

pub fn count_players(conn: &mut DbConn) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
    Ok(count)
}
