use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Where a battle currently stands. `Finished` is terminal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattlePhase {
    Intro,
    /// The player must send out a non-fainted party member.
    SelectFighter,
    TurnLoop,
    Finished(BattleOutcome),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Opponent beaten. `reward` is only non-zero against trainers.
    Victory { reward: u32 },
    Defeat,
    /// The player ran from a wild creature.
    Fled,
    Captured { destination: CaptureDestination },
    /// The player had nobody able to fight when the battle began.
    PartyWipedDraw,
    /// The wild creature ran away.
    OpponentFled,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureDestination {
    Party,
    Storage,
    /// Both party and capture storage were full.
    Released,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Use the fighter's move at `move_index` (0 or 1).
    UseMove { move_index: usize },
    /// Send out the party member at `party_index`; consumes the round.
    Switch { party_index: usize },
    /// Attempt to run. Wild encounters only.
    Flee,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    EncounterStarted {
        opponent: String,
        level: u32,
        trainer: Option<String>,
    },
    TrainerRecruited {
        trainer: String,
        creature: String,
    },
    TurnStarted {
        turn_number: u32,
    },
    CreatureSentOut {
        side: Side,
        creature: String,
    },
    CreatureSwitched {
        old_creature: String,
        new_creature: String,
    },
    MoveUsed {
        side: Side,
        creature: String,
        move_name: String,
    },
    MoveMissed {
        side: Side,
        creature: String,
    },
    CriticalHit,
    /// Percent effectiveness of the move type against the defender.
    AttackTypeEffectiveness {
        percent: u16,
    },
    SameTypeBonus,
    DamageDealt {
        side: Side,
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    CreatureFainted {
        side: Side,
        creature: String,
    },
    FleeAttempted {
        succeeded: bool,
    },
    OpponentFled {
        creature: String,
    },
    BallThrown {
        balls_left: u32,
    },
    NoBallsLeft,
    CaptureSucceeded {
        creature: String,
        destination: CaptureDestination,
    },
    CaptureFailed {
        creature: String,
    },
    RewardEarned {
        amount: u32,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::EncounterStarted {
                opponent,
                level,
                trainer: None,
            } => Some(format!("A wild {} (Lv.{}) appeared!", opponent, level)),
            BattleEvent::EncounterStarted {
                opponent,
                level,
                trainer: Some(trainer),
            } => Some(format!(
                "{} wants to battle! {} sends out {} (Lv.{})!",
                trainer, trainer, opponent, level
            )),
            BattleEvent::TrainerRecruited { trainer, creature } => {
                Some(format!("{} caught a {} on the way here!", trainer, creature))
            }
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::CreatureSentOut { side, creature } => match side {
                Side::Player => Some(format!("Go, {}!", creature)),
                Side::Opponent => Some(format!("The opponent sent out {}!", creature)),
            },
            BattleEvent::CreatureSwitched {
                old_creature,
                new_creature,
            } => Some(format!(
                "You recalled {} and sent out {}!",
                old_creature, new_creature
            )),
            BattleEvent::MoveUsed {
                side,
                creature,
                move_name,
            } => Some(format!(
                "{} used {}!",
                Self::side_name(*side, creature),
                Self::format_move_name(move_name)
            )),
            BattleEvent::MoveMissed { side, creature } => Some(format!(
                "{}'s attack missed!",
                Self::side_name(*side, creature)
            )),
            BattleEvent::CriticalHit => Some("A critical hit!".to_string()),
            BattleEvent::AttackTypeEffectiveness { percent } => match *percent {
                0 => Some("It had no effect!".to_string()),
                p if p > 100 => Some("It's super effective!".to_string()),
                p if p < 100 => Some("It's not very effective...".to_string()),
                _ => None, // Normal effectiveness, no message
            },
            BattleEvent::SameTypeBonus => None,
            BattleEvent::DamageDealt {
                side,
                target,
                damage,
                remaining_hp,
            } => Some(format!(
                "{} took {} damage! ({} HP left)",
                Self::side_name(*side, target),
                damage,
                remaining_hp
            )),
            BattleEvent::CreatureFainted { side, creature } => Some(format!(
                "{} fainted!",
                Self::side_name(*side, creature)
            )),
            BattleEvent::FleeAttempted { succeeded: true } => {
                Some("Got away safely!".to_string())
            }
            BattleEvent::FleeAttempted { succeeded: false } => {
                Some("Couldn't get away!".to_string())
            }
            BattleEvent::OpponentFled { creature } => {
                Some(format!("The wild {} fled!", creature))
            }
            BattleEvent::BallThrown { .. } => Some("You threw a pokeball!".to_string()),
            BattleEvent::NoBallsLeft => {
                Some("You have no pokeballs left to catch it with.".to_string())
            }
            BattleEvent::CaptureSucceeded {
                creature,
                destination,
            } => Some(match destination {
                CaptureDestination::Party => format!("Gotcha! {} joined your party!", creature),
                CaptureDestination::Storage => {
                    format!("Gotcha! {} was sent to storage.", creature)
                }
                CaptureDestination::Released => format!(
                    "Gotcha! But there is no room for {}, so it was released.",
                    creature
                ),
            }),
            BattleEvent::CaptureFailed { creature } => {
                Some(format!("Oh no! {} broke free!", creature))
            }
            BattleEvent::RewardEarned { amount } => {
                Some(format!("You earned {} pokebux!", amount))
            }
            BattleEvent::BattleEnded { .. } => None,
        }
    }

    fn side_name(side: Side, creature: &str) -> String {
        match side {
            Side::Player => format!("Your {}", creature),
            Side::Opponent => format!("The opposing {}", creature),
        }
    }

    /// `quick-attack` becomes `Quick Attack`.
    fn format_move_name(identifier: &str) -> String {
        identifier
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        log::trace!("event: {:?}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// User-visible lines, skipping silent events.
    pub fn formatted_lines(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

}

/// Source of every random outcome in the engine.
///
/// Tests script the exact values drawn; the game draws from a seedable `StdRng`.
#[derive(Debug, Clone)]
pub enum TurnRng {
    Scripted { outcomes: Vec<u32>, index: usize },
    Live(StdRng),
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        TurnRng::Scripted { outcomes, index: 0 }
    }

    pub fn seeded(seed: u64) -> Self {
        TurnRng::Live(StdRng::seed_from_u64(seed))
    }

    pub fn new_random() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    /// A value in `[0, bound)`. Bounds of 0 or 1 yield 0 and consume nothing.
    ///
    /// Scripted outcomes must already lie within the bound; running out of
    /// them or scripting one out of range panics naming `reason`.
    pub fn roll(&mut self, bound: u32, reason: &str) -> u32 {
        if bound <= 1 {
            return 0;
        }
        let outcome = match self {
            TurnRng::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                if outcome >= bound {
                    panic!(
                        "Scripted outcome {} for '{}' is outside [0, {})",
                        outcome, reason, bound
                    );
                }
                *index += 1;
                outcome
            }
            TurnRng::Live(rng) => rng.random_range(0..bound),
        };

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);
        log::trace!("rng {} of {} for {}", outcome, bound, reason);

        outcome
    }

    /// Scripted outcomes not yet drawn; always 0 for a live generator.
    pub fn remaining(&self) -> usize {
        match self {
            TurnRng::Scripted { outcomes, index } => outcomes.len() - index,
            TurnRng::Live(_) => 0,
        }
    }
}
