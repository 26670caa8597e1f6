use crate::battle::calculators::{flee_succeeds, player_moves_first};
use crate::battle::catch::{can_attempt_capture, capture_destination, is_caught};
use crate::battle::damage;
use crate::battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, CaptureDestination, EventBus, PlayerAction, Side,
    TurnRng,
};
use crate::config::GameConfig;
use crate::creature::Creature;
use crate::dex::Dex;
use crate::errors::{ActionError, ActionResult, DexResult};
use crate::factory::CreatureFactory;
use crate::profile::Profile;
use crate::trainer::{CreatureHolder, Trainer};

/// The hostile side of a battle.
#[derive(Debug)]
pub enum Opponent<'a> {
    Wild(Creature),
    Trainer(&'a mut Trainer),
}

/// One encounter between the player's party and a wild creature or a trainer.
///
/// Created in `Intro`; [`Battle::begin`] moves it to `SelectFighter`, after
/// which the caller alternates [`Battle::send_out`] and [`Battle::resolve_round`]
/// as the phase demands until it reaches `Finished`.
#[derive(Debug)]
pub struct Battle<'a> {
    profile: &'a mut Profile,
    opponent: Opponent<'a>,
    opponent_index: usize,
    fighter: Option<usize>,
    /// Escape attempt counter; starts at 1 and grows every round.
    attempt: u32,
    turn_number: u32,
    phase: BattlePhase,
    dex: &'a Dex,
    config: &'a GameConfig,
}

impl<'a> Battle<'a> {
    pub fn wild(
        profile: &'a mut Profile,
        creature: Creature,
        dex: &'a Dex,
        config: &'a GameConfig,
    ) -> Self {
        Self::new(profile, Opponent::Wild(creature), dex, config)
    }

    pub fn trainer(
        profile: &'a mut Profile,
        trainer: &'a mut Trainer,
        dex: &'a Dex,
        config: &'a GameConfig,
    ) -> Self {
        Self::new(profile, Opponent::Trainer(trainer), dex, config)
    }

    fn new(
        profile: &'a mut Profile,
        opponent: Opponent<'a>,
        dex: &'a Dex,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            profile,
            opponent,
            opponent_index: 0,
            fighter: None,
            attempt: 1,
            turn_number: 0,
            phase: BattlePhase::Intro,
            dex,
            config,
        }
    }

    pub fn phase(&self) -> &BattlePhase {
        &self.phase
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn profile(&self) -> &Profile {
        self.profile
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.opponent, Opponent::Wild(_))
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// 0-based party index of the creature currently fighting.
    pub fn fighter_index(&self) -> Option<usize> {
        self.fighter
    }

    pub fn fighter(&self) -> Option<&Creature> {
        self.fighter.and_then(|i| self.profile.party_member(i))
    }

    pub fn opponent_creature(&self) -> Option<&Creature> {
        match &self.opponent {
            Opponent::Wild(creature) => Some(creature),
            Opponent::Trainer(trainer) => trainer.inventory().get(self.opponent_index),
        }
    }

    fn opponent_creature_mut(&mut self) -> Option<&mut Creature> {
        match &mut self.opponent {
            Opponent::Wild(creature) => Some(creature),
            Opponent::Trainer(trainer) => trainer.creature_mut(self.opponent_index),
        }
    }

    fn creature(&self, side: Side) -> Option<&Creature> {
        match side {
            Side::Player => self.fighter(),
            Side::Opponent => self.opponent_creature(),
        }
    }

    fn creature_mut(&mut self, side: Side) -> Option<&mut Creature> {
        match side {
            Side::Player => {
                let index = self.fighter?;
                self.profile.party_member_mut(index)
            }
            Side::Opponent => self.opponent_creature_mut(),
        }
    }

    /// Leave `Intro`. A trainer below capacity may first recruit a freshly
    /// generated creature; its first creature still standing leads.
    pub fn begin(&mut self, distance: u32, rng: &mut TurnRng) -> DexResult<EventBus> {
        let mut bus = EventBus::new();
        if self.phase != BattlePhase::Intro {
            return Ok(bus);
        }

        let factory = CreatureFactory::new(self.dex, self.config);
        let growth_chance = self.config.trainer_growth_chance;
        let mut trainer_name = None;
        if let Opponent::Trainer(trainer) = &mut self.opponent {
            if trainer.can_recruit() && rng.roll(100, "trainer growth") < growth_chance {
                let recruit = factory.generate_any(distance, rng)?;
                bus.push(BattleEvent::TrainerRecruited {
                    trainer: trainer.name.clone(),
                    creature: recruit.name.clone(),
                });
                trainer.recruit(recruit);
            }
            trainer_name = Some(trainer.name.clone());
            match trainer.next_able(0) {
                Some(index) => self.opponent_index = index,
                None => {
                    self.win_against_trainer(rng, &mut bus);
                    return Ok(bus);
                }
            }
        }

        if let Some(opponent) = self.opponent_creature() {
            bus.push(BattleEvent::EncounterStarted {
                opponent: opponent.name.clone(),
                level: opponent.level,
                trainer: trainer_name,
            });
        }

        if self.profile.has_able() {
            self.phase = BattlePhase::SelectFighter;
        } else {
            self.finish(BattleOutcome::PartyWipedDraw, &mut bus);
        }
        Ok(bus)
    }

    fn validate_pick(&self, party_index: usize) -> ActionResult<&Creature> {
        let creature = self
            .profile
            .party_member(party_index)
            .ok_or(ActionError::InvalidPartyIndex(party_index))?;
        if creature.is_fainted() {
            return Err(ActionError::FighterFainted(party_index));
        }
        Ok(creature)
    }

    /// Put a standing party member into battle during `SelectFighter`.
    pub fn send_out(&mut self, party_index: usize) -> ActionResult<EventBus> {
        if self.phase != BattlePhase::SelectFighter {
            return Err(ActionError::InvalidAction(
                "no fighter is needed right now".to_string(),
            ));
        }
        let name = self.validate_pick(party_index)?.name.clone();

        let mut bus = EventBus::new();
        self.fighter = Some(party_index);
        bus.push(BattleEvent::CreatureSentOut {
            side: Side::Player,
            creature: name,
        });
        self.phase = BattlePhase::TurnLoop;
        Ok(bus)
    }

    /// Check an action against the current phase and party without changing anything.
    pub fn validate_action(&self, action: &PlayerAction) -> ActionResult<()> {
        if self.phase != BattlePhase::TurnLoop {
            return Err(ActionError::InvalidAction(
                "the battle is not waiting for an action".to_string(),
            ));
        }
        match *action {
            PlayerAction::UseMove { move_index } => {
                if move_index > 1 {
                    return Err(ActionError::InvalidMoveIndex(move_index));
                }
            }
            PlayerAction::Switch { party_index } => {
                self.validate_pick(party_index)?;
                if self.fighter == Some(party_index) {
                    return Err(ActionError::InvalidAction(
                        "that creature is already fighting".to_string(),
                    ));
                }
            }
            PlayerAction::Flee => {
                if !self.is_wild() {
                    return Err(ActionError::CannotFleeTrainer);
                }
            }
        }
        Ok(())
    }

    /// Play out one round of `TurnLoop` with the player's `action`.
    pub fn resolve_round(
        &mut self,
        action: PlayerAction,
        rng: &mut TurnRng,
    ) -> ActionResult<EventBus> {
        self.validate_action(&action)?;
        let fighter = self
            .fighter()
            .cloned()
            .ok_or_else(|| ActionError::InvalidAction("no fighter in battle".to_string()))?;
        let foe = self
            .opponent_creature()
            .cloned()
            .ok_or_else(|| ActionError::InvalidAction("no opponent in battle".to_string()))?;

        let mut bus = EventBus::new();
        self.turn_number += 1;
        bus.push(BattleEvent::TurnStarted {
            turn_number: self.turn_number,
        });

        match action {
            PlayerAction::Flee => {
                let escaped = flee_succeeds(
                    fighter.stats.speed,
                    foe.stats.speed,
                    self.attempt,
                    rng,
                );
                bus.push(BattleEvent::FleeAttempted { succeeded: escaped });
                if escaped {
                    self.finish(BattleOutcome::Fled, &mut bus);
                    return Ok(bus);
                }
            }
            PlayerAction::Switch { party_index } => {
                let new_creature = self
                    .profile
                    .party_member(party_index)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                self.fighter = Some(party_index);
                bus.push(BattleEvent::CreatureSwitched {
                    old_creature: fighter.name.clone(),
                    new_creature,
                });
            }
            PlayerAction::UseMove { .. } => {}
        }

        if self.is_wild() && rng.roll(100, "wild flee") < self.config.wild_flee_chance {
            bus.push(BattleEvent::OpponentFled {
                creature: foe.name.clone(),
            });
            self.finish(BattleOutcome::OpponentFled, &mut bus);
            return Ok(bus);
        }
        let foe_move = rng.roll(2, "opponent move") as usize;

        match action {
            PlayerAction::UseMove { move_index } => {
                let order = if player_moves_first(&fighter.moves[move_index], &foe.moves[foe_move])
                {
                    [(Side::Player, move_index, foe_move), (Side::Opponent, foe_move, move_index)]
                } else {
                    [(Side::Opponent, foe_move, move_index), (Side::Player, move_index, foe_move)]
                };
                for (side, attacker_move, defender_move) in order {
                    if self.strike(side, attacker_move, defender_move, rng, &mut bus) {
                        self.handle_faint(side.other(), rng, &mut bus);
                        break;
                    }
                }
            }
            PlayerAction::Switch { .. } | PlayerAction::Flee => {
                if self.strike(Side::Opponent, foe_move, 0, rng, &mut bus) {
                    self.handle_faint(Side::Player, rng, &mut bus);
                }
            }
        }

        self.attempt += 1;
        Ok(bus)
    }

    /// One side uses a move on the other. Returns true if the defender fainted.
    fn strike(
        &mut self,
        side: Side,
        attacker_move: usize,
        defender_move: usize,
        rng: &mut TurnRng,
        bus: &mut EventBus,
    ) -> bool {
        let (Some(attacker), Some(defender)) = (
            self.creature(side).cloned(),
            self.creature(side.other()).cloned(),
        ) else {
            return false;
        };

        bus.push(BattleEvent::MoveUsed {
            side,
            creature: attacker.name.clone(),
            move_name: attacker.moves[attacker_move].name.clone(),
        });
        let outcome = damage::resolve(
            &attacker,
            &defender,
            attacker_move,
            defender_move,
            self.dex,
            rng,
        );
        if !outcome.hit {
            bus.push(BattleEvent::MoveMissed {
                side,
                creature: attacker.name,
            });
            return false;
        }
        if outcome.critical {
            bus.push(BattleEvent::CriticalHit);
        }
        if outcome.stab {
            bus.push(BattleEvent::SameTypeBonus);
        }
        bus.push(BattleEvent::AttackTypeEffectiveness {
            percent: outcome.effectiveness,
        });

        let Some(target) = self.creature_mut(side.other()) else {
            return false;
        };
        target.take_damage(outcome.damage);
        let remaining_hp = target.hp;
        log::debug!(
            "{} hit {} for {} ({} left)",
            attacker.name,
            defender.name,
            outcome.damage,
            remaining_hp
        );
        bus.push(BattleEvent::DamageDealt {
            side: side.other(),
            target: defender.name,
            damage: outcome.damage,
            remaining_hp,
        });
        remaining_hp == 0
    }

    fn handle_faint(&mut self, side: Side, rng: &mut TurnRng, bus: &mut EventBus) {
        let name = self
            .creature(side)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        bus.push(BattleEvent::CreatureFainted {
            side,
            creature: name.clone(),
        });

        match side {
            Side::Player => {
                self.fighter = None;
                if self.profile.has_able() {
                    self.phase = BattlePhase::SelectFighter;
                } else {
                    self.finish(BattleOutcome::Defeat, bus);
                }
            }
            Side::Opponent => {
                if self.is_wild() {
                    self.attempt_capture(name, rng, bus);
                } else {
                    self.next_trainer_creature(rng, bus);
                }
            }
        }
    }

    fn attempt_capture(&mut self, name: String, rng: &mut TurnRng, bus: &mut EventBus) {
        if !can_attempt_capture(self.profile) {
            bus.push(BattleEvent::NoBallsLeft);
            self.finish(BattleOutcome::Victory { reward: 0 }, bus);
            return;
        }
        self.profile.balls -= 1;
        bus.push(BattleEvent::BallThrown {
            balls_left: self.profile.balls,
        });

        let Opponent::Wild(creature) = &self.opponent else {
            return;
        };
        if !is_caught(creature, self.config, rng) {
            bus.push(BattleEvent::CaptureFailed { creature: name });
            self.finish(BattleOutcome::Victory { reward: 0 }, bus);
            return;
        }

        let destination = capture_destination(self.profile);
        let captured = creature.clone();
        match destination {
            CaptureDestination::Party => {
                self.profile.add_to_party(captured);
            }
            CaptureDestination::Storage => self.profile.add_to_storage(captured),
            CaptureDestination::Released => {}
        }
        bus.push(BattleEvent::CaptureSucceeded {
            creature: name,
            destination,
        });
        self.finish(BattleOutcome::Captured { destination }, bus);
    }

    fn next_trainer_creature(&mut self, rng: &mut TurnRng, bus: &mut EventBus) {
        let next = match &self.opponent {
            Opponent::Trainer(trainer) => trainer.next_able(0),
            Opponent::Wild(_) => None,
        };
        match next {
            Some(index) => {
                self.opponent_index = index;
                if let Some(creature) = self.opponent_creature() {
                    bus.push(BattleEvent::CreatureSentOut {
                        side: Side::Opponent,
                        creature: creature.name.clone(),
                    });
                }
            }
            None => self.win_against_trainer(rng, bus),
        }
    }

    /// One [0, 100) roll per creature the trainer holds.
    fn win_against_trainer(&mut self, rng: &mut TurnRng, bus: &mut EventBus) {
        let held = match &self.opponent {
            Opponent::Trainer(trainer) => trainer.inventory().len(),
            Opponent::Wild(_) => 0,
        };
        let reward = (0..held).map(|_| rng.roll(100, "trainer reward")).sum();
        self.profile.currency += reward;
        bus.push(BattleEvent::RewardEarned { amount: reward });
        self.finish(BattleOutcome::Victory { reward }, bus);
    }

    fn finish(&mut self, outcome: BattleOutcome, bus: &mut EventBus) {
        if let Opponent::Trainer(trainer) = &mut self.opponent {
            if matches!(outcome, BattleOutcome::Victory { .. } | BattleOutcome::Defeat) {
                trainer.mark_defeated();
            }
        }
        log::info!("Battle finished after {} turns: {:?}", self.turn_number, outcome);
        bus.push(BattleEvent::BattleEnded { outcome });
        self.phase = BattlePhase::Finished(outcome);
    }
}
