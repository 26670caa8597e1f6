use crate::battle::state::TurnRng;
use crate::creature::KnownMove;

/// Percent chance to escape a wild creature on the given attempt, or `None`
/// when the wild speed term is zero and escape cannot fail.
///
/// `(fighter_speed * 32) / ((wild_speed / 4) mod 256) + 30 * attempt`
pub fn flee_odds(fighter_speed: u32, wild_speed: u32, attempt: u32) -> Option<u32> {
    let divisor = (wild_speed / 4) % 256;
    (fighter_speed * 32)
        .checked_div(divisor)
        .map(|odds| odds + 30 * attempt)
}

/// Roll an escape attempt. A guaranteed escape draws nothing.
pub fn flee_succeeds(fighter_speed: u32, wild_speed: u32, attempt: u32, rng: &mut TurnRng) -> bool {
    match flee_odds(fighter_speed, wild_speed, attempt) {
        None => true,
        Some(odds) => rng.roll(100, "flee attempt") < odds,
    }
}

/// The player acts first only with strictly higher move priority; ties and
/// everything else go to the opponent.
pub fn player_moves_first(player_move: &KnownMove, opponent_move: &KnownMove) -> bool {
    player_move.priority > opponent_move.priority
}
