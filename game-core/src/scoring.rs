use game_types::Player;

/// Points for a correct answer with no hint taken.
pub const FULL_POINTS: u32 = 10;
/// Points for a correct answer after the hint was revealed.
pub const HINTED_POINTS: u32 = 5;

/// Award for the turn that just ended with a correct answer. Timeouts award
/// nothing and never reach this.
pub fn turn_points(hint_used: bool) -> u32 {
    if hint_used { HINTED_POINTS } else { FULL_POINTS }
}

/// Standings sorted by descending score. The sort is stable, so equal
/// scores keep roster (turn) order.
pub fn standings(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}

/// The current leader, ties going to the earlier roster position.
pub fn winner(players: &[Player]) -> Option<Player> {
    standings(players).into_iter().next()
}
