use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::errors::Result;

/// Records the outcome of a single match, storing the winner as player1.
/// Unknown ids, self-matches and winners outside the pair are rejected by
/// the schema constraints before any row is created.
pub fn report_match(conn: &mut DbConn, winner_id: i64, loser_id: i64) -> Result<Match> {
    let sql = "INSERT INTO matches (player1_id, player2_id, winner_id) VALUES (?1, ?2, ?3) RETURNING id, player1_id, player2_id, winner_id, created_at";

    let record = conn.query_row(sql, params![winner_id, loser_id, winner_id], parse_match_row)?;
    Ok(record)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        player1_id: row.get(1)?,
        player2_id: row.get(2)?,
        winner_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, player1_id, player2_id, winner_id, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn clear_matches(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM matches", [])?;
    Ok(())
}

pub fn count_matches(conn: &mut DbConn) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
    Ok(count)
}
