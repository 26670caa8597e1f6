use crate::battle::state::TurnRng;
use crate::creature::Creature;
use crate::dex::Dex;
use serde::{Deserialize, Serialize};

/// Result of one move use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub hit: bool,
    pub damage: u32,
    pub critical: bool,
    pub stab: bool,
    /// Effectiveness percent of the move type against the defender. Reported
    /// to the player; it does not scale damage.
    pub effectiveness: u16,
}

impl DamageOutcome {
    fn miss(effectiveness: u16) -> Self {
        Self {
            hit: false,
            damage: 0,
            critical: false,
            stab: false,
            effectiveness,
        }
    }
}

/// The defender type an attack is matched against: the slot paired with the
/// defender's chosen move, falling back to slot 1.
fn defending_type(defender: &Creature, defender_move: usize) -> Option<schema::TypeId> {
    defender
        .types
        .get(defender_move)
        .copied()
        .flatten()
        .or(defender.types[0])
}

/// Resolve `attacker` using its move `attacker_move` on `defender`.
///
/// Draws accuracy (skipped entirely after a miss), then critical, then the
/// random factor. Uses the attacker's own attack and defense, with integer
/// division, and floors once after all multipliers.
pub fn resolve(
    attacker: &Creature,
    defender: &Creature,
    attacker_move: usize,
    defender_move: usize,
    dex: &Dex,
    rng: &mut TurnRng,
) -> DamageOutcome {
    let used = &attacker.moves[attacker_move.min(1)];
    let effectiveness = defending_type(defender, defender_move)
        .map(|defend| dex.type_effectiveness(used.move_type, defend))
        .unwrap_or(crate::dex::NEUTRAL_EFFECTIVENESS);

    if rng.roll(100, "accuracy") >= u32::from(used.accuracy) {
        return DamageOutcome::miss(effectiveness);
    }

    let critical = rng.roll(255, "critical hit") < attacker.base_speed / 2;
    let factor = 85 + rng.roll(16, "damage factor");
    let stab = attacker.declared_type() == defender.declared_type();

    let ratio = attacker.stats.attack / attacker.stats.defense.max(1);
    let base = ((2 * attacker.level / 5) + 2) * used.power * ratio / 50 + 2;

    let (crit_num, crit_den) = if critical { (3, 2) } else { (1, 1) };
    let (stab_num, stab_den) = if stab { (3, 2) } else { (1, 1) };
    let damage = base * crit_num * factor * stab_num / (crit_den * 100 * stab_den);

    DamageOutcome {
        hit: true,
        damage,
        critical,
        stab,
        effectiveness,
    }
}
