use crate::config::GameConfig;
use crate::creature::{Creature, Gender, Ivs, KnownMove, Stats};
use crate::dex::Dex;
use crate::frontend::{Frontend, Prompt};
use crate::profile::Profile;
use crate::trainer::{Movement, Position, Trainer};
use schema::TypeId;
use std::collections::VecDeque;

/// A builder for creating test creatures with predictable defaults: level 1,
/// 20 HP, every stat at 5, no base speed (so no critical hits), normal type,
/// and two 40-power normal moves that never miss.
///
/// # Example
/// ```ignore
/// let creature = CreatureBuilder::new("pikachu")
///     .with_level(10)
///     .with_move(0, "thunder-shock", 40, 100, 0, 13)
///     .build();
/// ```
pub struct CreatureBuilder {
    creature: Creature,
}

impl CreatureBuilder {
    pub fn new(name: &str) -> Self {
        let normal_move = |name: &str| KnownMove {
            name: name.to_string(),
            power: 40,
            accuracy: 100,
            priority: 0,
            move_type: 1,
        };
        Self {
            creature: Creature {
                name: name.to_string(),
                species_id: 0,
                level: 1,
                hp: 20,
                max_hp: 20,
                stats: Stats {
                    attack: 5,
                    defense: 5,
                    speed: 5,
                    sp_attack: 5,
                    sp_defense: 5,
                },
                base_speed: 0,
                types: [Some(1), None],
                capture_rate: 255,
                moves: [normal_move("tackle"), normal_move("scratch")],
                ivs: Ivs::default(),
                shiny: false,
                gender: Gender::Male,
            },
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.creature.level = level;
        self
    }

    /// Sets current HP, raising the maximum if needed.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.creature.hp = hp;
        self.creature.max_hp = self.creature.max_hp.max(hp);
        self
    }

    /// Sets both current and maximum HP.
    pub fn with_max_hp(mut self, max_hp: u32) -> Self {
        self.creature.hp = max_hp;
        self.creature.max_hp = max_hp;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.creature.stats.speed = speed;
        self
    }

    pub fn with_base_speed(mut self, base_speed: u32) -> Self {
        self.creature.base_speed = base_speed;
        self
    }

    pub fn with_attack_defense(mut self, attack: u32, defense: u32) -> Self {
        self.creature.stats.attack = attack;
        self.creature.stats.defense = defense;
        self
    }

    pub fn with_types(mut self, first: Option<TypeId>, second: Option<TypeId>) -> Self {
        self.creature.types = [first, second];
        self
    }

    pub fn with_capture_rate(mut self, capture_rate: u8) -> Self {
        self.creature.capture_rate = capture_rate;
        self
    }

    /// Replaces the move in `slot` (0 or 1).
    pub fn with_move(
        mut self,
        slot: usize,
        name: &str,
        power: u32,
        accuracy: u8,
        priority: i8,
        move_type: TypeId,
    ) -> Self {
        self.creature.moves[slot] = KnownMove {
            name: name.to_string(),
            power,
            accuracy,
            priority,
            move_type,
        };
        self
    }

    pub fn build(self) -> Creature {
        self.creature
    }
}

/// A frontend that replays a fixed string of keys and records every line shown.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    keys: VecDeque<char>,
    pub lines: Vec<String>,
    pub prompts: Vec<Prompt>,
}

impl ScriptedFrontend {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
            ..Default::default()
        }
    }

    /// True if any shown line contains `fragment`.
    pub fn saw(&self, fragment: &str) -> bool {
        self.lines.iter().any(|line| line.contains(fragment))
    }

    pub fn count_lines(&self, fragment: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(fragment)).count()
    }

    pub fn keys_left(&self) -> usize {
        self.keys.len()
    }
}

impl Frontend for ScriptedFrontend {
    fn notify(&mut self, line: &str) {
        println!("[UI] {}", line);
        self.lines.push(line.to_string());
    }

    fn read_key(&mut self, prompt: &Prompt) -> Option<char> {
        self.prompts.push(prompt.clone());
        self.keys.pop_front()
    }
}

pub fn test_dex() -> Dex {
    Dex::bundled().expect("bundled tables decode")
}

/// A profile holding the default starting kit and `party`.
pub fn profile_with(party: Vec<Creature>) -> Profile {
    let mut profile = Profile::with_starting_kit(&GameConfig::default());
    for creature in party {
        profile.add_to_party(creature);
    }
    profile
}

/// A config with every random side effect outside the exchange of blows turned off.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        trainer_growth_chance: 0,
        wild_flee_chance: 0,
        ..Default::default()
    }
}

pub fn trainer_with(creatures: Vec<Creature>, movement: Movement) -> Trainer {
    let mut creatures = creatures.into_iter();
    let first = creatures
        .next()
        .unwrap_or_else(|| CreatureBuilder::new("rattata").build());
    let mut trainer = Trainer::new("Youngster", first, Position { x: 1, y: 1 }, movement);
    for creature in creatures {
        trainer.recruit(creature);
    }
    trainer
}
