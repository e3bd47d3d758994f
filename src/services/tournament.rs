use log::info;

use crate::database::{self, DbConn, DbPool, Match, Player, StandingEntry};
use crate::errors::Result;
use crate::pairing::{self, Pairing};

/// All tournament operations behind one handle. Each call checks a
/// connection out of the pool, performs a single unit of work and
/// releases the connection on every exit path.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(database_path: &str) -> Result<Self> {
        let pool = database::create_pool(database_path)?;
        Ok(Self::new(pool))
    }

    pub fn reset(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::setup::reset_database(&mut conn)
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let mut conn = self.connection()?;
        let player = database::players::register_player(&mut conn, name)?;
        info!("Registered player '{}' with id {}", player.name, player.id);
        Ok(player)
    }

    pub fn report_match(&self, winner_id: i64, loser_id: i64) -> Result<Match> {
        let mut conn = self.connection()?;
        let record = database::matches::report_match(&mut conn, winner_id, loser_id)?;
        info!(
            "Recorded match {}: player {} beat player {}",
            record.id, winner_id, loser_id
        );
        Ok(record)
    }

    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        let mut conn = self.connection()?;
        database::standings::player_standings(&mut conn)
    }

    /// Next-round pairings: one standings read, then adjacency pairing.
    /// A standings failure propagates as-is; there are no retries.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.standings()?;
        pairing::pair_adjacent(&standings)
    }

    pub fn clear_matches(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::matches::clear_matches(&mut conn)?;
        info!("Cleared all match records");
        Ok(())
    }

    pub fn clear_players(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::players::clear_players(&mut conn)?;
        info!("Cleared all player records");
        Ok(())
    }

    pub fn count_players(&self) -> Result<i64> {
        let mut conn = self.connection()?;
        database::players::count_players(&mut conn)
    }

    pub fn count_matches(&self) -> Result<i64> {
        let mut conn = self.connection()?;
        database::matches::count_matches(&mut conn)
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}
