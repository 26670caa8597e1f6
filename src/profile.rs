//! The player's party, storage, currency and items.
//!
//! Slot arguments of the public operations are 1-based, as typed by the player.

use crate::config::{GameConfig, Prices, PARTY_CAPACITY};
use crate::creature::Creature;
use crate::errors::{PartyError, PartyResult};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Item {
    Potion,
    #[strum(to_string = "Pokeball")]
    Ball,
    Revive,
}

impl Item {
    pub fn price(&self, prices: &Prices) -> u32 {
        match self {
            Item::Potion => prices.potion,
            Item::Ball => prices.ball,
            Item::Revive => prices.revive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    party: Vec<Creature>,
    storage: Vec<Creature>,
    pub currency: u32,
    pub potions: u32,
    pub revives: u32,
    pub balls: u32,
}

impl Profile {
    /// An empty profile holding the configured starting items.
    pub fn with_starting_kit(config: &GameConfig) -> Self {
        Self {
            balls: config.starting_kit.balls,
            potions: config.starting_kit.potions,
            revives: config.starting_kit.revives,
            ..Default::default()
        }
    }

    pub fn party(&self) -> &[Creature] {
        &self.party
    }

    pub fn storage(&self) -> &[Creature] {
        &self.storage
    }

    /// Party member by 0-based index.
    pub fn party_member(&self, index: usize) -> Option<&Creature> {
        self.party.get(index)
    }

    pub fn party_member_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.party.get_mut(index)
    }

    pub fn is_party_full(&self) -> bool {
        self.party.len() >= PARTY_CAPACITY
    }

    /// 0-based index of the first party member that can still fight.
    pub fn first_able(&self) -> Option<usize> {
        self.party.iter().position(|c| !c.is_fainted())
    }

    pub fn has_able(&self) -> bool {
        self.first_able().is_some()
    }

    /// Append to the party. A full party silently ignores the creature;
    /// the return value says whether it was added.
    pub fn add_to_party(&mut self, creature: Creature) -> bool {
        if self.is_party_full() {
            return false;
        }
        self.party.push(creature);
        true
    }

    pub fn add_to_storage(&mut self, creature: Creature) {
        self.storage.push(creature);
    }

    fn party_slot(&self, slot: usize) -> PartyResult<usize> {
        if slot == 0 || slot > self.party.len() {
            return Err(PartyError::NoSuchPartySlot(slot));
        }
        Ok(slot - 1)
    }

    /// Restore a party member to full HP, fainted or not.
    pub fn heal_full(&mut self, slot: usize) -> PartyResult<()> {
        let index = self.party_slot(slot)?;
        self.party[index].restore_full();
        Ok(())
    }

    pub fn heal_all(&mut self) {
        self.party.iter_mut().for_each(Creature::restore_full);
    }

    /// Heal a standing, injured party member by `amount`. Returns the HP restored.
    pub fn apply_potion(&mut self, slot: usize, amount: u32) -> PartyResult<u32> {
        let index = self.party_slot(slot)?;
        if self.potions == 0 {
            return Err(PartyError::NoPotions);
        }
        let creature = &mut self.party[index];
        if creature.is_fainted() {
            return Err(PartyError::TargetFainted);
        }
        if creature.hp >= creature.max_hp {
            return Err(PartyError::AlreadyHealthy);
        }
        let before = creature.hp;
        creature.heal(amount);
        self.potions -= 1;
        Ok(creature.hp - before)
    }

    /// Bring a fainted party member back at half its maximum HP.
    pub fn apply_revive(&mut self, slot: usize) -> PartyResult<()> {
        let index = self.party_slot(slot)?;
        if self.revives == 0 {
            return Err(PartyError::NoRevives);
        }
        let creature = &mut self.party[index];
        if !creature.is_fainted() {
            return Err(PartyError::NotFainted);
        }
        creature.hp = creature.max_hp / 2;
        self.revives -= 1;
        Ok(())
    }

    pub fn move_to_storage(&mut self, slot: usize) -> PartyResult<()> {
        let index = self.party_slot(slot)?;
        let creature = self.party.remove(index);
        self.storage.push(creature);
        Ok(())
    }

    pub fn move_to_party(&mut self, slot: usize) -> PartyResult<()> {
        if self.is_party_full() {
            return Err(PartyError::PartyFull);
        }
        if self.storage.is_empty() {
            return Err(PartyError::StorageEmpty);
        }
        if slot == 0 || slot > self.storage.len() {
            return Err(PartyError::NoSuchStorageSlot(slot));
        }
        let creature = self.storage.remove(slot - 1);
        self.party.push(creature);
        Ok(())
    }

    /// Buy one `item` at the configured price.
    pub fn buy(&mut self, item: Item, prices: &Prices) -> PartyResult<()> {
        let price = item.price(prices);
        if self.currency < price {
            return Err(PartyError::InsufficientFunds {
                price,
                balance: self.currency,
            });
        }
        self.currency -= price;
        match item {
            Item::Potion => self.potions += 1,
            Item::Ball => self.balls += 1,
            Item::Revive => self.revives += 1,
        }
        Ok(())
    }
}
