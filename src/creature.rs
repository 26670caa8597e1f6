use schema::{SpeciesId, StatKind, TypeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental type given to the placeholder move.
pub const NORMAL_TYPE: TypeId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Individual variation values, each in [0, 15].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ivs {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
}

impl Ivs {
    /// The value shiny creatures carry in every slot.
    pub const SHINY: Ivs = Ivs {
        hp: 10,
        attack: 10,
        defense: 10,
        speed: 10,
        sp_attack: 10,
        sp_defense: 10,
    };

    pub fn get(&self, kind: StatKind) -> u8 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::SpecialAttack => self.sp_attack,
            StatKind::SpecialDefense => self.sp_defense,
        }
    }
}

/// Derived (non-HP) stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
}

/// One of the two moves a creature knows, with everything battle needs copied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownMove {
    pub name: String,
    pub power: u32,
    /// Percent, 0-100.
    pub accuracy: u8,
    pub priority: i8,
    pub move_type: TypeId,
}

impl KnownMove {
    /// Filler for species that learn nothing at their level.
    pub fn placeholder(power: u32) -> Self {
        Self {
            name: "struggle".to_string(),
            power,
            accuracy: 100,
            priority: 0,
            move_type: NORMAL_TYPE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub species_id: SpeciesId,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub stats: Stats,
    /// Species base speed, before level and IV derivation.
    pub base_speed: u32,
    /// Slot 1 and slot 2 types; a single-typed species leaves slot 2 empty.
    pub types: [Option<TypeId>; 2],
    pub capture_rate: u8,
    pub moves: [KnownMove; 2],
    pub ivs: Ivs,
    pub shiny: bool,
    pub gender: Gender,
}

impl Creature {
    /// `floor((base + iv) * 2 * level / 100) + offset`, where the offset is
    /// `level + 10` for HP and 5 for everything else.
    pub fn derive_stat(kind: StatKind, base: u32, iv: u8, level: u32) -> u32 {
        let scaled = (base + u32::from(iv)) * 2 * level / 100;
        match kind {
            StatKind::Hp => scaled + level + 10,
            _ => scaled + 5,
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Subtract damage, flooring at zero. Returns true if this knocked the creature out.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_standing = !self.is_fainted();
        self.hp = self.hp.saturating_sub(damage);
        was_standing && self.is_fainted()
    }

    /// Restore HP, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// The type the same-type bonus compares: that of the first known move.
    pub fn declared_type(&self) -> TypeId {
        self.moves[0].move_type
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.shiny { "*" } else { "" };
        write!(
            f,
            "{}{} Lv.{} HP {}/{}",
            self.name, marker, self.level, self.hp, self.max_hp
        )
    }
}
