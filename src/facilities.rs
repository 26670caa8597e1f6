//! Menus outside battle: starter selection, the pokemon center, the mart and the bag.
//!
//! Each runs until the player leaves, re-prompting on keys it does not understand.

use crate::battle::state::TurnRng;
use crate::config::GameConfig;
use crate::errors::{EngineError, EngineResult};
use crate::factory::CreatureFactory;
use crate::frontend::{key_to_slot, Frontend, Prompt};
use crate::profile::{Item, Profile};
use strum::IntoEnumIterator;

/// Starters are offered at the lowest level band.
pub const STARTER_DISTANCE: u32 = 0;

fn key<F: Frontend>(frontend: &mut F, prompt: &Prompt) -> EngineResult<char> {
    frontend.read_key(prompt).ok_or(EngineError::InputClosed)
}

fn slot<F: Frontend>(frontend: &mut F) -> EngineResult<Option<usize>> {
    Ok(key_to_slot(key(frontend, &Prompt::ChooseSlot)?))
}

fn list_party<F: Frontend>(frontend: &mut F, profile: &Profile) {
    if profile.party().is_empty() {
        frontend.notify("You have no Pokemon.");
    }
    for (i, creature) in profile.party().iter().enumerate() {
        frontend.notify(&format!("{}. {}", i + 1, creature));
    }
}

/// Grant the starting kit, then run the configured number of rounds, each
/// offering freshly generated creatures of which the player keeps one.
pub fn choose_starters<F: Frontend>(
    profile: &mut Profile,
    factory: &CreatureFactory<'_>,
    config: &GameConfig,
    rng: &mut TurnRng,
    frontend: &mut F,
) -> EngineResult<()> {
    profile.balls = config.starting_kit.balls;
    profile.potions = config.starting_kit.potions;
    profile.revives = config.starting_kit.revives;

    let count = config.starter_choices as usize;
    for _ in 0..config.starter_rounds {
        let offers = (0..count)
            .map(|_| factory.generate_any(STARTER_DISTANCE, rng))
            .collect::<Result<Vec<_>, _>>()?;
        for (i, offer) in offers.iter().enumerate() {
            frontend.notify(&format!(
                "{}. {} | Atk {} Def {} Spd {} SpA {} SpD {}",
                i + 1,
                offer,
                offer.stats.attack,
                offer.stats.defense,
                offer.stats.speed,
                offer.stats.sp_attack,
                offer.stats.sp_defense
            ));
        }

        let choice = loop {
            match key_to_slot(key(frontend, &Prompt::ChooseStarter { count })?) {
                Some(slot) if slot <= offers.len() => break slot - 1,
                _ => frontend.notify("Invalid input"),
            }
        };
        let Some(chosen) = offers.into_iter().nth(choice) else {
            continue;
        };
        frontend.notify(&format!("You chose {}", chosen.name));
        log::debug!("Starter chosen: {}", chosen);
        profile.add_to_party(chosen);
    }
    Ok(())
}

/// Heal party members, or move creatures between party and storage.
pub fn pokemon_center<F: Frontend>(profile: &mut Profile, frontend: &mut F) -> EngineResult<()> {
    frontend.notify("Welcome to the Pokemon Center!");
    loop {
        list_party(frontend, profile);
        let result = match key(frontend, &Prompt::Center)? {
            'q' => return Ok(()),
            's' => match slot(frontend)? {
                Some(slot) => profile.move_to_storage(slot),
                None => {
                    frontend.notify("Invalid input");
                    continue;
                }
            },
            't' => {
                for (i, creature) in profile.storage().iter().enumerate() {
                    frontend.notify(&format!("{}. {}", i + 1, creature));
                }
                match slot(frontend)? {
                    Some(slot) => profile.move_to_party(slot),
                    None => {
                        frontend.notify("Invalid input");
                        continue;
                    }
                }
            }
            other => match key_to_slot(other) {
                Some(slot) => profile.heal_full(slot),
                None => {
                    frontend.notify("Invalid input");
                    continue;
                }
            },
        };
        match result {
            Ok(()) => frontend.notify("Done!"),
            Err(err) => frontend.notify(&err.to_string()),
        }
    }
}

/// Spend currency on items.
pub fn pokemart<F: Frontend>(
    profile: &mut Profile,
    config: &GameConfig,
    frontend: &mut F,
) -> EngineResult<()> {
    frontend.notify("Welcome to the Pokemart!");
    loop {
        frontend.notify(&format!("You have {} pokebux.", profile.currency));
        for (i, item) in Item::iter().enumerate() {
            frontend.notify(&format!("{}. {} ({})", i + 1, item, item.price(&config.prices)));
        }
        let choice = match key(frontend, &Prompt::Mart)? {
            'q' => return Ok(()),
            other => key_to_slot(other).and_then(|slot| Item::iter().nth(slot - 1)),
        };
        let Some(item) = choice else {
            frontend.notify("Invalid input");
            continue;
        };
        match profile.buy(item, &config.prices) {
            Ok(()) => frontend.notify(&format!("You bought a {}.", item)),
            Err(err) => frontend.notify(&err.to_string()),
        }
    }
}

/// Use potions and revives on party members.
pub fn bag<F: Frontend>(
    profile: &mut Profile,
    config: &GameConfig,
    frontend: &mut F,
) -> EngineResult<()> {
    loop {
        frontend.notify(&format!(
            "Potions: {}  Revives: {}  Pokeballs: {}",
            profile.potions, profile.revives, profile.balls
        ));
        let item = match key(frontend, &Prompt::Bag)? {
            'q' => return Ok(()),
            'p' => Item::Potion,
            'r' => Item::Revive,
            _ => {
                frontend.notify("Invalid input");
                continue;
            }
        };
        list_party(frontend, profile);
        let Some(slot) = slot(frontend)? else {
            frontend.notify("Invalid input");
            continue;
        };
        let result = match item {
            Item::Potion => profile
                .apply_potion(slot, config.potion_heal)
                .map(|healed| format!("Restored {} HP.", healed)),
            _ => profile
                .apply_revive(slot)
                .map(|()| "Your Pokemon is back on its feet!".to_string()),
        };
        match result {
            Ok(message) => frontend.notify(&message),
            Err(err) => frontend.notify(&err.to_string()),
        }
    }
}
