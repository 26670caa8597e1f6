// Tallgrass Schema - Reference table definitions
// This crate contains the row types of the static reference database that are
// shared between the tallgrass engine and its build script, enabling the use of
// postcard for compact embedding of the bundled tables.

// Re-export the main types
pub use battle_data::*;
pub use species_data::*;
pub use tables::*;

pub mod battle_data;
pub mod species_data;
pub mod tables;

/// Integer key of a species row.
pub type SpeciesId = u16;
/// Integer key of a move row.
pub type MoveId = u16;
/// Integer key of an elemental type.
pub type TypeId = u16;
