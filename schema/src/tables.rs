use crate::{LearnableMoveRow, MoveRow, SpeciesRow, StatRow, TypeEfficacyRow, TypeRow, TypeSlotRow};
use serde::{Deserialize, Serialize};

/// The complete reference database as flat tables, in the shape it is authored
/// (`data/dex.ron`) and embedded (postcard).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub species: Vec<SpeciesRow>,
    pub stats: Vec<StatRow>,
    pub type_slots: Vec<TypeSlotRow>,
    pub learnable_moves: Vec<LearnableMoveRow>,
    pub moves: Vec<MoveRow>,
    pub types: Vec<TypeRow>,
    pub type_efficacy: Vec<TypeEfficacyRow>,
}

impl ReferenceTables {
    /// Encode the tables into the compact postcard form embedded by the build script.
    pub fn to_postcard(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    /// Decode tables previously produced by [`ReferenceTables::to_postcard`].
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
