use crate::battle::state::TurnRng;
use crate::config::GameConfig;
use crate::creature::Creature;

/// Exclusive upper bound of the capture draw.
pub const CAPTURE_DRAW_BOUND: u32 = 255;

/// Roll for a capture of `target`.
///
/// Only a fainted creature can be caught, and only when the draw falls below
/// the configured threshold. Draws at or above the threshold always fail,
/// whatever the species capture rate.
pub fn is_caught(target: &Creature, config: &GameConfig, rng: &mut TurnRng) -> bool {
    let draw = rng.roll(CAPTURE_DRAW_BOUND, "capture draw");
    draw < config.capture_threshold && target.hp == 0
}
