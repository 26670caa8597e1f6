use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of creatures the player can carry.
pub const PARTY_CAPACITY: usize = 6;
/// Maximum size a trainer's inventory grows to.
pub const TRAINER_CAPACITY: usize = 6;
/// Storage only accepts captured creatures while it holds fewer than this.
pub const CAPTURE_STORAGE_CAP: usize = 6;

/// Every tunable number of the game, loadable from RON.
///
/// Missing fields fall back to [`GameConfig::default`], so a config file only
/// needs to list the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Percent chance a trainer below capacity gains a creature before battle.
    pub trainer_growth_chance: u32,
    /// Percent chance per round that a wild creature runs away.
    pub wild_flee_chance: u32,
    /// One-in-N chance of a shiny creature.
    pub shiny_odds: u32,
    pub potion_heal: u32,
    /// A fainted creature is captured when a [0, 255) draw falls below this.
    pub capture_threshold: u32,
    pub prices: Prices,
    pub starting_kit: StartingKit,
    pub starter_rounds: u32,
    pub starter_choices: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prices {
    pub potion: u32,
    pub ball: u32,
    pub revive: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingKit {
    pub balls: u32,
    pub potions: u32,
    pub revives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            trainer_growth_chance: 60,
            wild_flee_chance: 2,
            shiny_odds: 8192,
            potion_heal: 20,
            capture_threshold: 25,
            prices: Prices::default(),
            starting_kit: StartingKit::default(),
            starter_rounds: 3,
            starter_choices: 3,
        }
    }
}

impl Default for Prices {
    fn default() -> Self {
        Self {
            potion: 10,
            ball: 20,
            revive: 30,
        }
    }
}

impl Default for StartingKit {
    fn default() -> Self {
        Self {
            balls: 6,
            potions: 6,
            revives: 3,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
