//! Tallgrass Creature Engine
//!
//! Creature generation and battle resolution for a terminal creature-collection
//! game. Reference tables are compiled into the binary at build time; all
//! randomness flows through [`TurnRng`] so every battle can be replayed from a
//! script of draws.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod dex;
pub mod errors;
pub mod facilities;
pub mod factory;
pub mod frontend;
pub mod profile;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---

// Reference table rows from the `schema` crate.
pub use schema::{
    LearnMethod, MoveId, MoveRow, ReferenceTables, SpeciesId, SpeciesRow, StatKind, TypeId,
};

// Battle engine.
pub use battle::engine::{Battle, Opponent};
pub use battle::runner::BattleRunner;
pub use battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, CaptureDestination, EventBus, PlayerAction, Side,
    TurnRng,
};

// Creatures and the people who own them.
pub use creature::{Creature, Gender, KnownMove};
pub use dex::Dex;
pub use factory::{level_cap_for_distance, CreatureFactory};
pub use profile::{Item, Profile};
pub use trainer::{CreatureHolder, Movement, Position, Trainer};

pub use config::GameConfig;
pub use frontend::{Frontend, Prompt};

// Crate-specific error and result types.
pub use errors::{
    ActionError, ActionResult, ConfigError, DexError, DexResult, EngineError, EngineResult,
    PartyError, PartyResult,
};
