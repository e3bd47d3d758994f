use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i64,
    pub player1_id: i64,
    pub player2_id: i64,
    pub winner_id: i64,
    pub created_at: Option<NaiveDateTime>,
}

/// One row of the standings view. Derived from match history on every
/// read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingEntry {
    pub player_id: i64,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
}
