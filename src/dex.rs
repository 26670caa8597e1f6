//! Read-only lookups over the reference tables.
//!
//! The tables are authored in `data/dex.ron`, compiled into postcard by the
//! build script and embedded in the library; [`Dex::bundled`] decodes that blob.
//! [`Dex::load_ron`] reads an alternative data file at runtime instead.

use crate::errors::{DexError, DexResult};
use schema::{
    LearnMethod, LearnableMoveRow, MoveId, MoveRow, ReferenceTables, SpeciesId, SpeciesRow,
    StatKind, TypeId,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

static BUNDLED_TABLES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/dex.postcard"));

/// Effectiveness used when the matrix has no entry for a type pair.
pub const NEUTRAL_EFFECTIVENESS: u16 = 100;

#[derive(Debug, Clone)]
pub struct Dex {
    species: HashMap<SpeciesId, SpeciesRow>,
    species_order: Vec<SpeciesId>,
    base_stats: HashMap<(SpeciesId, StatKind), u16>,
    type_slots: HashMap<(SpeciesId, u8), TypeId>,
    learnsets: HashMap<SpeciesId, Vec<LearnableMoveRow>>,
    moves: HashMap<MoveId, MoveRow>,
    type_names: HashMap<TypeId, String>,
    efficacy: HashMap<(TypeId, TypeId), u16>,
}

impl Dex {
    /// Index a set of flat tables. Later duplicate rows win.
    pub fn new(tables: ReferenceTables) -> Self {
        let species_order = tables.species.iter().map(|row| row.id).collect();
        let species = tables
            .species
            .into_iter()
            .map(|row| (row.id, row))
            .collect();

        let base_stats = tables
            .stats
            .into_iter()
            .map(|row| ((row.species_id, row.stat), row.base_stat))
            .collect();

        let type_slots = tables
            .type_slots
            .into_iter()
            .map(|row| ((row.species_id, row.slot), row.type_id))
            .collect();

        let mut learnsets: HashMap<SpeciesId, Vec<LearnableMoveRow>> = HashMap::new();
        for row in tables.learnable_moves {
            learnsets.entry(row.species_id).or_default().push(row);
        }

        let moves = tables.moves.into_iter().map(|row| (row.id, row)).collect();
        let type_names = tables
            .types
            .into_iter()
            .map(|row| (row.id, row.identifier))
            .collect();
        let efficacy = tables
            .type_efficacy
            .into_iter()
            .map(|row| ((row.damage_type_id, row.target_type_id), row.damage_factor))
            .collect();

        Self {
            species,
            species_order,
            base_stats,
            type_slots,
            learnsets,
            moves,
            type_names,
            efficacy,
        }
    }

    /// The tables compiled into the binary.
    pub fn bundled() -> DexResult<Self> {
        let tables = ReferenceTables::from_postcard(BUNDLED_TABLES)
            .map_err(|e| DexError::MalformedData(e.to_string()))?;
        Ok(Self::new(tables))
    }

    /// Load tables from a RON file with the same layout as `data/dex.ron`.
    pub fn load_ron(path: &Path) -> DexResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DexError::Io(format!("{}: {}", path.display(), e)))?;
        let tables: ReferenceTables =
            ron::from_str(&content).map_err(|e| DexError::MalformedData(e.to_string()))?;
        Ok(Self::new(tables))
    }

    pub fn species_by_id(&self, id: SpeciesId) -> DexResult<&SpeciesRow> {
        self.species.get(&id).ok_or(DexError::SpeciesNotFound(id))
    }

    /// All species ids in table order; the default encounter pool.
    pub fn species_ids(&self) -> &[SpeciesId] {
        &self.species_order
    }

    /// Base value of one stat, or `None` when the tables lack the row.
    pub fn base_stat(&self, species: SpeciesId, kind: StatKind) -> Option<u16> {
        self.base_stats.get(&(species, kind)).copied()
    }

    /// Type in a 1-based slot.
    pub fn type_slot(&self, species: SpeciesId, slot: u8) -> Option<TypeId> {
        self.type_slots.get(&(species, slot)).copied()
    }

    /// Moves a species learns by level-up at or below `level`, in table order.
    pub fn moves_learnable_at_or_below(&self, species: SpeciesId, level: u32) -> Vec<MoveId> {
        self.learnsets
            .get(&species)
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.method == LearnMethod::LevelUp && u32::from(row.level) <= level)
                    .map(|row| row.move_id)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn move_by_id(&self, id: MoveId) -> DexResult<&MoveRow> {
        self.moves.get(&id).ok_or(DexError::MoveNotFound(id))
    }

    /// Damage factor in percent of `attack` hitting `defend`.
    pub fn type_effectiveness(&self, attack: TypeId, defend: TypeId) -> u16 {
        self.efficacy
            .get(&(attack, defend))
            .copied()
            .unwrap_or(NEUTRAL_EFFECTIVENESS)
    }

    pub fn type_name(&self, id: TypeId) -> Option<&str> {
        self.type_names.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dex() -> Dex {
        Dex::bundled().unwrap()
    }

    #[test]
    fn test_bundled_tables_decode() {
        let dex = dex();
        assert_eq!(dex.species_ids().len(), 10);
        assert_eq!(dex.species_by_id(25).unwrap().identifier, "pikachu");
        assert_eq!(dex.species_by_id(25).unwrap().capture_rate, 190);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let dex = dex();
        assert_eq!(dex.species_by_id(999).unwrap_err(), DexError::SpeciesNotFound(999));
        assert_eq!(dex.move_by_id(999).unwrap_err(), DexError::MoveNotFound(999));
    }

    #[rstest]
    #[case(1, StatKind::Hp, Some(45))]
    #[case(4, StatKind::Speed, Some(65))]
    #[case(50, StatKind::Hp, Some(10))]
    #[case(999, StatKind::Attack, None)]
    fn test_base_stat_lookup(
        #[case] species: SpeciesId,
        #[case] kind: StatKind,
        #[case] expected: Option<u16>,
    ) {
        assert_eq!(dex().base_stat(species, kind), expected);
    }

    #[test]
    fn test_type_slots_are_one_based() {
        let dex = dex();
        assert_eq!(dex.type_slot(1, 1), Some(12));
        assert_eq!(dex.type_slot(1, 2), Some(4));
        assert_eq!(dex.type_slot(4, 2), None);
        assert_eq!(dex.type_name(12), Some("grass"));
    }

    #[test]
    fn test_learnable_moves_respect_level_and_method() {
        let dex = dex();
        // Charmander: scratch and growl at 1, ember at 4, dig only as an egg move.
        assert_eq!(dex.moves_learnable_at_or_below(4, 1), vec![10, 45]);
        assert_eq!(dex.moves_learnable_at_or_below(4, 50), vec![10, 45, 52]);
        // Pikachu's counter is a machine move.
        assert!(!dex.moves_learnable_at_or_below(25, 100).contains(&68));
        assert!(dex.moves_learnable_at_or_below(999, 100).is_empty());
    }

    #[rstest]
    #[case(10, 12, 200)]
    #[case(13, 5, 0)]
    #[case(11, 11, 50)]
    #[case(1, 1, 100)]
    fn test_type_effectiveness(#[case] attack: TypeId, #[case] defend: TypeId, #[case] expected: u16) {
        assert_eq!(dex().type_effectiveness(attack, defend), expected);
    }

    #[test]
    fn test_load_ron_matches_bundled() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/dex.ron");
        let loaded = Dex::load_ron(&path).unwrap();
        assert_eq!(loaded.species_ids(), dex().species_ids());
        assert_eq!(loaded.move_by_id(98).unwrap().priority, 1);
    }

    #[test]
    fn test_missing_tables_file_is_an_io_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/no-such-dex.ron");
        assert!(matches!(Dex::load_ron(&path), Err(DexError::Io(_))));
    }

    #[test]
    fn test_unparsable_tables_file_is_malformed() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/game.ron");
        assert!(matches!(
            Dex::load_ron(&path),
            Err(DexError::MalformedData(_))
        ));
    }
}
