use crate::{MoveId, SpeciesId, TypeId};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The six stat kinds a species carries a base value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum StatKind {
    #[strum(to_string = "HP")]
    Hp,
    Attack,
    Defense,
    #[strum(to_string = "Special Attack")]
    SpecialAttack,
    #[strum(to_string = "Special Defense")]
    SpecialDefense,
    Speed,
}

/// How a species acquires a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LearnMethod {
    LevelUp,
    Egg,
    Tutor,
    Machine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRow {
    pub id: SpeciesId,
    pub identifier: String,
    pub capture_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    pub species_id: SpeciesId,
    pub stat: StatKind,
    pub base_stat: u16,
}

/// One of the (at most two) elemental type slots of a species. Slots are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlotRow {
    pub species_id: SpeciesId,
    pub type_id: TypeId,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnableMoveRow {
    pub species_id: SpeciesId,
    pub move_id: MoveId,
    pub level: u16,
    pub method: LearnMethod,
}
