use crate::config::TRAINER_CAPACITY;
use crate::creature::Creature;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Overworld movement behaviour of a trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    /// Chases the player (hikers and rivals).
    Pursue,
    Wander,
    Pace,
    Sentry,
    Explore,
}

/// Anything on the map that owns creatures and can be beaten.
pub trait CreatureHolder {
    fn inventory(&self) -> &[Creature];
    fn position(&self) -> Position;
    fn is_defeated(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    inventory: Vec<Creature>,
    pub position: Position,
    pub movement: Movement,
    defeated: bool,
}

impl Trainer {
    pub fn new(
        name: impl Into<String>,
        first: Creature,
        position: Position,
        movement: Movement,
    ) -> Self {
        Self {
            name: name.into(),
            inventory: vec![first],
            position,
            movement,
            defeated: false,
        }
    }

    pub fn can_recruit(&self) -> bool {
        self.inventory.len() < TRAINER_CAPACITY
    }

    /// Add a creature unless the trainer is already at capacity.
    pub fn recruit(&mut self, creature: Creature) -> bool {
        if !self.can_recruit() {
            return false;
        }
        self.inventory.push(creature);
        true
    }

    pub fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.inventory.get_mut(index)
    }

    /// Index of the first creature at or after `from` that can still fight.
    pub fn next_able(&self, from: usize) -> Option<usize> {
        self.inventory
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, c)| !c.is_fainted())
            .map(|(i, _)| i)
    }

    /// Record the end of a battle with this trainer, won or lost.
    /// A pursuing trainer gives up the chase.
    pub fn mark_defeated(&mut self) {
        self.defeated = true;
        if self.movement == Movement::Pursue {
            self.movement = Movement::Wander;
        }
    }
}

impl CreatureHolder for Trainer {
    fn inventory(&self) -> &[Creature] {
        &self.inventory
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_defeated(&self) -> bool {
        self.defeated
    }
}
