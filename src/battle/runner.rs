use crate::battle::engine::Battle;
use crate::battle::state::{BattleOutcome, BattlePhase, EventBus, PlayerAction, TurnRng};
use crate::config::GameConfig;
use crate::dex::Dex;
use crate::errors::{EngineError, EngineResult};
use crate::factory::CreatureFactory;
use crate::frontend::{key_to_slot, Frontend, Prompt};
use crate::profile::Profile;
use crate::trainer::Trainer;

/// Drives battles to completion, translating keys from a [`Frontend`] into
/// battle actions and battle events back into lines of text.
pub struct BattleRunner<'a, F: Frontend> {
    dex: &'a Dex,
    config: &'a GameConfig,
    frontend: &'a mut F,
    rng: &'a mut TurnRng,
}

impl<'a, F: Frontend> BattleRunner<'a, F> {
    pub fn new(
        dex: &'a Dex,
        config: &'a GameConfig,
        frontend: &'a mut F,
        rng: &'a mut TurnRng,
    ) -> Self {
        Self {
            dex,
            config,
            frontend,
            rng,
        }
    }

    /// Fight a creature generated on the spot for `distance`.
    pub fn wild_encounter(
        &mut self,
        profile: &mut Profile,
        distance: u32,
    ) -> EngineResult<BattleOutcome> {
        let factory = CreatureFactory::new(self.dex, self.config);
        let creature = factory.generate_any(distance, self.rng)?;
        let battle = Battle::wild(profile, creature, self.dex, self.config);
        let outcome = self.drive(battle, distance)?;
        log::info!("Wild encounter at distance {} ended: {:?}", distance, outcome);
        Ok(outcome)
    }

    /// Fight `trainer`, who is marked defeated if the battle is won or lost.
    pub fn trainer_encounter(
        &mut self,
        profile: &mut Profile,
        trainer: &mut Trainer,
        distance: u32,
    ) -> EngineResult<BattleOutcome> {
        let name = trainer.name.clone();
        let battle = Battle::trainer(profile, trainer, self.dex, self.config);
        let outcome = self.drive(battle, distance)?;
        log::info!("Battle with {} ended: {:?}", name, outcome);
        Ok(outcome)
    }

    fn drive(&mut self, mut battle: Battle<'_>, distance: u32) -> EngineResult<BattleOutcome> {
        loop {
            match battle.phase().clone() {
                BattlePhase::Intro => {
                    let bus = battle.begin(distance, self.rng)?;
                    self.show(&bus);
                }
                BattlePhase::SelectFighter => {
                    self.show_party(battle.profile());
                    let key = self.key(&Prompt::ChooseFighter)?;
                    let Some(slot) = key_to_slot(key) else {
                        self.frontend.notify("Invalid input");
                        continue;
                    };
                    match battle.send_out(slot - 1) {
                        Ok(bus) => self.show(&bus),
                        Err(err) => self.frontend.notify(&err.to_string()),
                    }
                }
                BattlePhase::TurnLoop => {
                    self.show_status(&battle);
                    let Some(action) = self.choose_action(&battle)? else {
                        self.frontend.notify("Invalid input");
                        continue;
                    };
                    match battle.resolve_round(action, self.rng) {
                        Ok(bus) => self.show(&bus),
                        Err(err) => self.frontend.notify(&err.to_string()),
                    }
                }
                BattlePhase::Finished(outcome) => {
                    // Input running out here does not change the result.
                    let _ = self.frontend.read_key(&Prompt::Continue);
                    return Ok(outcome);
                }
            }
        }
    }

    /// Read one battle action. `Ok(None)` for a key that maps to nothing.
    fn choose_action(&mut self, battle: &Battle<'_>) -> EngineResult<Option<PlayerAction>> {
        let can_flee = battle.is_wild();
        let action = match self.key(&Prompt::BattleAction { can_flee })? {
            '1' => Some(PlayerAction::UseMove { move_index: 0 }),
            '2' => Some(PlayerAction::UseMove { move_index: 1 }),
            'f' if can_flee => Some(PlayerAction::Flee),
            's' => {
                self.show_party(battle.profile());
                key_to_slot(self.key(&Prompt::ChooseFighter)?)
                    .map(|slot| PlayerAction::Switch { party_index: slot - 1 })
            }
            _ => None,
        };
        Ok(action)
    }

    fn key(&mut self, prompt: &Prompt) -> EngineResult<char> {
        self.frontend
            .read_key(prompt)
            .ok_or(EngineError::InputClosed)
    }

    fn show(&mut self, bus: &EventBus) {
        for line in bus.formatted_lines() {
            self.frontend.notify(&line);
        }
    }

    fn show_party(&mut self, profile: &Profile) {
        for (i, creature) in profile.party().iter().enumerate() {
            let state = if creature.is_fainted() { " (fainted)" } else { "" };
            self.frontend.notify(&format!("{}. {}{}", i + 1, creature, state));
        }
    }

    fn show_status(&mut self, battle: &Battle<'_>) {
        let (Some(fighter), Some(foe)) = (battle.fighter(), battle.opponent_creature()) else {
            return;
        };
        let line = format!("{}  vs  {}", fighter, foe);
        let [first, second] = &fighter.moves;
        let moves = format!(
            "1. {} ({})  2. {} ({})",
            first.name, first.power, second.name, second.power
        );
        self.frontend.notify(&line);
        self.frontend.notify(&moves);
    }
}
