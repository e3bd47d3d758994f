use super::connection::DbConn;
use super::models::StandingEntry;
use crate::errors::Result;

/// Current standings: every registered player exactly once, most wins
/// first. Ties keep registration (id) order so repeated reads of the
/// same state agree.
pub fn player_standings(conn: &mut DbConn) -> Result<Vec<StandingEntry>> {
    let sql = "SELECT player_id, name, wins, matches_played FROM player_standings ORDER BY wins DESC, player_id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_standing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<StandingEntry> {
    Ok(StandingEntry {
        player_id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches_played: row.get(3)?,
    })
}
