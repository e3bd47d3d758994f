use super::types::Pairing;
use crate::database::StandingEntry;
use crate::errors::{Result, TournamentError};

/// Walks a standings list sorted by wins and pairs adjacent entries, so
/// each player meets an opponent with an equal or nearly-equal record.
///
/// An empty list pairs to an empty list. An odd number of entries is an
/// invalid-state error: there is no bye system, and dropping the last
/// player silently would lose them from the round.
pub fn pair_adjacent(standings: &[StandingEntry]) -> Result<Vec<Pairing>> {
    ensure_even_count(standings.len())?;

    let pairs = standings
        .chunks_exact(2)
        .map(|adjacent| build_pairing(&adjacent[0], &adjacent[1]))
        .collect();

    Ok(pairs)
}

fn ensure_even_count(count: usize) -> Result<()> {
    if count % 2 != 0 {
        return Err(TournamentError::invalid_state(format!(
            "cannot pair an odd number of players ({count})"
        )));
    }
    Ok(())
}

fn build_pairing(first: &StandingEntry, second: &StandingEntry) -> Pairing {
    Pairing {
        player1_id: first.player_id,
        player1_name: first.name.clone(),
        player2_id: second.player_id,
        player2_name: second.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player_id: i64, name: &str, wins: i64) -> StandingEntry {
        StandingEntry {
            player_id,
            name: name.to_string(),
            wins,
            matches_played: wins,
        }
    }

    #[test]
    fn pairs_adjacent_entries_in_order() {
        let standings = vec![
            entry(3, "Carol", 2),
            entry(1, "Alice", 2),
            entry(4, "Dave", 1),
            entry(2, "Bob", 0),
        ];

        let pairs = pair_adjacent(&standings).unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].player1_id, pairs[0].player2_id), (3, 1));
        assert_eq!((pairs[1].player1_id, pairs[1].player2_id), (4, 2));
        assert_eq!(pairs[0].player1_name, "Carol");
        assert_eq!(pairs[1].player2_name, "Bob");
    }

    #[test]
    fn empty_standings_pair_to_empty_list() {
        let pairs = pair_adjacent(&[]).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn odd_count_is_an_invalid_state() {
        let standings = vec![
            entry(1, "Alice", 1),
            entry(2, "Bob", 0),
            entry(3, "Carol", 0),
        ];

        let err = pair_adjacent(&standings).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidState { .. }));
    }

    #[test]
    fn every_player_appears_exactly_once() {
        let standings: Vec<_> = (1..=8).map(|id| entry(id, "P", 8 - id)).collect();

        let pairs = pair_adjacent(&standings).unwrap();

        let mut seen: Vec<i64> = pairs
            .iter()
            .flat_map(|p| [p.player1_id, p.player2_id])
            .collect();
        seen.sort_unstable();

        assert_eq!(seen, (1..=8).collect::<Vec<_>>());
    }
}
