use game_types::{GameError, MAX_PLAYERS, MIN_PLAYERS, Player};

/// Build the turn-ordered roster from the raw setup name list. Blank
/// entries are skipped; surviving names are trimmed and keep their order.
pub fn build_players(names: &[String]) -> Result<Vec<Player>, GameError> {
    let named: Vec<&str> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();

    if named.len() < MIN_PLAYERS {
        return Err(GameError::NotEnoughPlayers { got: named.len() });
    }
    if named.len() > MAX_PLAYERS {
        return Err(GameError::TooManyPlayers { got: named.len() });
    }

    Ok(named.into_iter().map(Player::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::STARTING_POWERUPS;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let players = build_players(&names(&["Alice", "", "   ", "Bob"])).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Alice");
        assert_eq!(players[1].name, "Bob");
    }

    #[test]
    fn test_names_are_trimmed_and_order_preserved() {
        let players = build_players(&names(&["  Carol  ", "Dave", " Erin"])).unwrap();

        let collected: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(collected, vec!["Carol", "Dave", "Erin"]);
    }

    #[test]
    fn test_fewer_than_two_named_players_is_rejected() {
        let err = build_players(&names(&["Alice", "  "])).unwrap_err();
        assert_eq!(err, GameError::NotEnoughPlayers { got: 1 });

        let err = build_players(&[]).unwrap_err();
        assert_eq!(err, GameError::NotEnoughPlayers { got: 0 });
    }

    #[test]
    fn test_more_than_eight_players_is_rejected() {
        let raw: Vec<String> = (0..9).map(|i| format!("Player {i}")).collect();
        let err = build_players(&raw).unwrap_err();

        assert_eq!(err, GameError::TooManyPlayers { got: 9 });
    }

    #[test]
    fn test_new_players_start_fresh() {
        let players = build_players(&names(&["Alice", "Bob"])).unwrap();

        for player in &players {
            assert_eq!(player.score, 0);
            assert_eq!(player.powerups, STARTING_POWERUPS);
        }
        assert_ne!(players[0].id, players[1].id);
    }
}
