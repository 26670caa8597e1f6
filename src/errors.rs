use schema::{MoveId, SpeciesId};
use std::fmt;

/// Main error type for the tallgrass engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to reference data lookup or loading
    Dex(DexError),
    /// A party, storage or item operation was rejected
    Party(PartyError),
    /// A battle input was rejected
    Action(ActionError),
    /// Configuration could not be loaded
    Config(ConfigError),
    /// The frontend has no more input to give
    InputClosed,
}

/// Errors related to the reference tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    /// The species pool handed to the factory was empty
    EmptySpeciesPool,
    /// The specified species was not found in the tables
    SpeciesNotFound(SpeciesId),
    /// The specified move was not found in the tables
    MoveNotFound(MoveId),
    /// The bundled or on-disk tables could not be decoded
    MalformedData(String),
    /// A tables file could not be read
    Io(String),
}

/// Rejected party/storage/item operations. The `Display` text is the message
/// shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    /// A 1-based party slot that does not exist
    NoSuchPartySlot(usize),
    /// A 1-based storage slot that does not exist
    NoSuchStorageSlot(usize),
    /// The party already holds six creatures
    PartyFull,
    /// Storage holds nothing to take out
    StorageEmpty,
    /// The potion target is fainted
    TargetFainted,
    /// The potion target is already at full health
    AlreadyHealthy,
    /// The revive target has not fainted
    NotFainted,
    NoPotions,
    NoRevives,
    /// Not enough currency for a purchase
    InsufficientFunds { price: u32, balance: u32 },
}

/// Errors related to battle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Move index is not 0 or 1
    InvalidMoveIndex(usize),
    /// Party index is out of bounds
    InvalidPartyIndex(usize),
    /// The chosen creature has fainted and cannot fight
    FighterFainted(usize),
    /// Fleeing is only possible from wild creatures
    CannotFleeTrainer,
    /// Action is not valid in the current battle phase
    InvalidAction(String),
}

/// Errors related to loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Dex(err) => write!(f, "Reference data error: {}", err),
            EngineError::Party(err) => write!(f, "{}", err),
            EngineError::Action(err) => write!(f, "Action error: {}", err),
            EngineError::Config(err) => write!(f, "Configuration error: {}", err),
            EngineError::InputClosed => write!(f, "Input closed"),
        }
    }
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexError::EmptySpeciesPool => write!(f, "Species pool is empty"),
            DexError::SpeciesNotFound(id) => write!(f, "Species not found: #{}", id),
            DexError::MoveNotFound(id) => write!(f, "Move not found: #{}", id),
            DexError::MalformedData(details) => write!(f, "Malformed reference data: {}", details),
            DexError::Io(details) => write!(f, "Could not read reference data: {}", details),
        }
    }
}

impl fmt::Display for PartyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyError::NoSuchPartySlot(_) => write!(f, "Pokemon not found!"),
            PartyError::NoSuchStorageSlot(_) => write!(f, "There is no Pokemon in that storage slot!"),
            PartyError::PartyFull => write!(f, "You can't have more than 6 Pokemon!"),
            PartyError::StorageEmpty => write!(f, "There are no Pokemon to load!"),
            PartyError::TargetFainted => write!(f, "That Pokemon has fainted, use a revive instead."),
            PartyError::AlreadyHealthy => write!(f, "That Pokemon is already at full health."),
            PartyError::NotFainted => write!(f, "That Pokemon has not fainted."),
            PartyError::NoPotions => write!(f, "You have no potions left!"),
            PartyError::NoRevives => write!(f, "You have no revives left!"),
            PartyError::InsufficientFunds { .. } => write!(f, "You don't have enough PokeBux!"),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidMoveIndex(index) => write!(f, "Invalid move index: {}", index),
            ActionError::InvalidPartyIndex(index) => write!(f, "Not in bag: slot {}", index + 1),
            ActionError::FighterFainted(index) => {
                write!(f, "The Pokemon in slot {} is sleeping", index + 1)
            }
            ActionError::CannotFleeTrainer => write!(f, "You can't run from a trainer battle!"),
            ActionError::InvalidAction(details) => write!(f, "Invalid action: {}", details),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "could not read config: {}", details),
            ConfigError::Parse(details) => write!(f, "could not parse config: {}", details),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for DexError {}
impl std::error::Error for PartyError {}
impl std::error::Error for ActionError {}
impl std::error::Error for ConfigError {}

impl From<DexError> for EngineError {
    fn from(err: DexError) -> Self {
        EngineError::Dex(err)
    }
}

impl From<PartyError> for EngineError {
    fn from(err: PartyError) -> Self {
        EngineError::Party(err)
    }
}

impl From<ActionError> for EngineError {
    fn from(err: ActionError) -> Self {
        EngineError::Action(err)
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using DexError
pub type DexResult<T> = Result<T, DexError>;

/// Type alias for Results using PartyError
pub type PartyResult<T> = Result<T, PartyError>;

/// Type alias for Results using ActionError
pub type ActionResult<T> = Result<T, ActionError>;
