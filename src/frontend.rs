//! The seam between the engine and whatever draws the game and reads keys.

use std::fmt;

/// What the engine is waiting for when it asks for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Pick one of `count` offered creatures (1-based).
    ChooseStarter { count: usize },
    /// Pick a party member to send out (1-based).
    ChooseFighter,
    BattleAction { can_flee: bool },
    /// Any key continues.
    Continue,
    Hub,
    Center,
    Mart,
    Bag,
    /// Pick a party or storage slot (1-based).
    ChooseSlot,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::ChooseStarter { count } => {
                write!(f, "Choose a Pokemon, press 1-{}", count)
            }
            Prompt::ChooseFighter => write!(f, "Choose a Pokemon to send out (1-6)"),
            Prompt::BattleAction { can_flee: true } => {
                write!(f, "1/2: use a move, s: switch, f: run")
            }
            Prompt::BattleAction { can_flee: false } => {
                write!(f, "1/2: use a move, s: switch")
            }
            Prompt::Continue => write!(f, "Press any key to continue"),
            Prompt::Hub => write!(
                f,
                "w: tall grass, t: trainer, c: pokemon center, m: pokemart, b: bag, q: quit"
            ),
            Prompt::Center => write!(
                f,
                "1-6: heal that Pokemon, s: store a Pokemon, t: take one out, q: leave"
            ),
            Prompt::Mart => write!(f, "1: potion, 2: pokeball, 3: revive, q: leave"),
            Prompt::Bag => write!(f, "p: use a potion, r: use a revive, q: close"),
            Prompt::ChooseSlot => write!(f, "Which slot? (1-9)"),
        }
    }
}

/// Rendering and input, one blocking key per prompt.
pub trait Frontend {
    /// Show one line of text.
    fn notify(&mut self, line: &str);

    /// Wait for a key. `None` means input is exhausted.
    fn read_key(&mut self, prompt: &Prompt) -> Option<char>;
}

/// `'1'..='9'` as a 1-based slot.
pub fn key_to_slot(key: char) -> Option<usize> {
    key.to_digit(10)
        .filter(|digit| *digit > 0)
        .map(|digit| digit as usize)
}
