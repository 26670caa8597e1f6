//! Synthesizes creature instances from the reference tables.

use crate::battle::state::TurnRng;
use crate::config::GameConfig;
use crate::creature::{Creature, Gender, Ivs, KnownMove, Stats};
use crate::dex::Dex;
use crate::errors::{DexError, DexResult};
use schema::{MoveId, SpeciesId, StatKind};

/// Moves without a usable base power get a random one below this.
const PLACEHOLDER_POWER_BOUND: u32 = 100;
const IV_BOUND: u32 = 16;

/// No creature is generated above this level.
pub const MAX_LEVEL: u32 = 100;

/// Highest level a creature may be generated at for a given distance.
///
/// The band restarts past 200, so distance 201 yields weaker creatures than 200.
/// Far distances are held at [`MAX_LEVEL`].
pub fn level_cap_for_distance(distance: u32) -> u32 {
    let cap = if distance <= 200 {
        distance / 2
    } else {
        (distance - 200) / 2
    };
    cap.clamp(1, MAX_LEVEL)
}

pub struct CreatureFactory<'a> {
    dex: &'a Dex,
    config: &'a GameConfig,
}

impl<'a> CreatureFactory<'a> {
    pub fn new(dex: &'a Dex, config: &'a GameConfig) -> Self {
        Self { dex, config }
    }

    /// Generate from every species in the tables.
    pub fn generate_any(&self, distance: u32, rng: &mut TurnRng) -> DexResult<Creature> {
        self.generate(self.dex.species_ids(), distance, rng)
    }

    /// Generate one creature from `pool` at a level derived from `distance`.
    ///
    /// Randomness is consumed in a fixed order: species, level, shiny, the six
    /// IVs, move picks, placeholder powers, gender.
    pub fn generate(
        &self,
        pool: &[SpeciesId],
        distance: u32,
        rng: &mut TurnRng,
    ) -> DexResult<Creature> {
        if pool.is_empty() {
            return Err(DexError::EmptySpeciesPool);
        }
        let species_id = pool[rng.roll(pool.len() as u32, "species pick") as usize];
        let species = self.dex.species_by_id(species_id)?;

        let level = rng.roll(level_cap_for_distance(distance), "level") + 1;

        let shiny = rng.roll(self.config.shiny_odds, "shiny") == 0;
        let rolled = Ivs {
            hp: rng.roll(IV_BOUND, "hp iv") as u8,
            attack: rng.roll(IV_BOUND, "attack iv") as u8,
            defense: rng.roll(IV_BOUND, "defense iv") as u8,
            speed: rng.roll(IV_BOUND, "speed iv") as u8,
            sp_attack: rng.roll(IV_BOUND, "special attack iv") as u8,
            sp_defense: rng.roll(IV_BOUND, "special defense iv") as u8,
        };
        let ivs = if shiny { Ivs::SHINY } else { rolled };

        let base = |kind| u32::from(self.dex.base_stat(species_id, kind).unwrap_or(0));
        let stat = |kind| Creature::derive_stat(kind, base(kind), ivs.get(kind), level);
        let max_hp = stat(StatKind::Hp);
        let stats = Stats {
            attack: stat(StatKind::Attack),
            defense: stat(StatKind::Defense),
            speed: stat(StatKind::Speed),
            sp_attack: stat(StatKind::SpecialAttack),
            sp_defense: stat(StatKind::SpecialDefense),
        };

        let moves = self.pick_moves(species_id, level, rng)?;

        let gender = if rng.roll(2, "gender") == 0 {
            Gender::Male
        } else {
            Gender::Female
        };

        let creature = Creature {
            name: species.identifier.clone(),
            species_id,
            level,
            hp: max_hp,
            max_hp,
            stats,
            base_speed: base(StatKind::Speed),
            types: [
                self.dex.type_slot(species_id, 1),
                self.dex.type_slot(species_id, 2),
            ],
            capture_rate: species.capture_rate,
            moves,
            ivs,
            shiny,
            gender,
        };
        log::debug!("Generated {} (distance {})", creature, distance);
        Ok(creature)
    }

    fn pick_moves(
        &self,
        species_id: SpeciesId,
        level: u32,
        rng: &mut TurnRng,
    ) -> DexResult<[KnownMove; 2]> {
        let learnable = self.dex.moves_learnable_at_or_below(species_id, level);
        let picks: [Option<MoveId>; 2] = if learnable.is_empty() {
            [None, None]
        } else {
            let bound = learnable.len() as u32;
            let first = rng.roll(bound, "first move");
            let mut second = rng.roll(bound, "second move");
            if second == first {
                second = rng.roll(bound, "second move reroll");
            }
            [
                Some(learnable[first as usize]),
                Some(learnable[second as usize]),
            ]
        };

        let first = self.known_move(picks[0], rng)?;
        let second = self.known_move(picks[1], rng)?;
        Ok([first, second])
    }

    fn known_move(&self, pick: Option<MoveId>, rng: &mut TurnRng) -> DexResult<KnownMove> {
        let Some(move_id) = pick else {
            let power = rng.roll(PLACEHOLDER_POWER_BOUND, "placeholder power");
            return Ok(KnownMove::placeholder(power));
        };
        let row = self.dex.move_by_id(move_id)?;
        let power = match row.power {
            Some(power) if power > 0 => u32::from(power),
            _ => rng.roll(PLACEHOLDER_POWER_BOUND, "placeholder power"),
        };
        Ok(KnownMove {
            name: row.identifier.clone(),
            power,
            accuracy: row.accuracy.unwrap_or(100),
            priority: row.priority,
            move_type: row.type_id,
        })
    }
}
