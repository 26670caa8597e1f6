//! Tallgrass console game.
//!
//! Reads one command per line from stdin; the first character of the line is the key.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use tallgrass::facilities::{bag, choose_starters, pokemart, pokemon_center};
use tallgrass::{
    BattleOutcome, BattleRunner, CreatureFactory, Dex, EngineError, EngineResult, Frontend,
    GameConfig, Movement, Position, Profile, Prompt, Trainer, TurnRng,
};

const TRAINER_NAMES: [&str; 6] = ["Hiker", "Rival", "Swimmer", "Lass", "Youngster", "Explorer"];

/// Walk the tall grass, battle trainers, and catch what you can.
#[derive(Parser, Debug)]
#[command(name = "tallgrass")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON file overriding game tunables
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RON reference tables to use instead of the bundled ones
    #[arg(short = 'd', long = "data")]
    data: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Manhattan distance from the origin; sets encounter levels
    #[arg(long = "distance", default_value_t = 20)]
    distance: u32,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

struct ConsoleFrontend<R> {
    input: R,
}

impl<R: BufRead> Frontend for ConsoleFrontend<R> {
    fn notify(&mut self, line: &str) {
        println!("{}", line);
    }

    fn read_key(&mut self, prompt: &Prompt) -> Option<char> {
        print!("{} > ", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            // An empty line still counts as a key press.
            Ok(_) => Some(line.trim().chars().next().unwrap_or(' ')),
        }
    }
}

fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn random_trainer(
    factory: &CreatureFactory<'_>,
    distance: u32,
    rng: &mut TurnRng,
) -> EngineResult<Trainer> {
    let name = TRAINER_NAMES[rng.roll(TRAINER_NAMES.len() as u32, "trainer name") as usize];
    let first = factory.generate_any(distance, rng)?;
    Ok(Trainer::new(
        name,
        first,
        Position::default(),
        Movement::Pursue,
    ))
}

fn play<F: Frontend>(
    profile: &mut Profile,
    dex: &Dex,
    config: &GameConfig,
    distance: u32,
    rng: &mut TurnRng,
    frontend: &mut F,
) -> EngineResult<()> {
    let factory = CreatureFactory::new(dex, config);
    choose_starters(profile, &factory, config, rng, frontend)?;

    loop {
        let key = frontend
            .read_key(&Prompt::Hub)
            .ok_or(EngineError::InputClosed)?;
        match key {
            'w' => {
                let outcome =
                    BattleRunner::new(dex, config, frontend, rng).wild_encounter(profile, distance)?;
                if outcome == BattleOutcome::Defeat {
                    frontend.notify("You blacked out!");
                }
            }
            't' => {
                let mut trainer = random_trainer(&factory, distance, rng)?;
                BattleRunner::new(dex, config, frontend, rng).trainer_encounter(
                    profile,
                    &mut trainer,
                    distance,
                )?;
            }
            'c' => pokemon_center(profile, frontend)?,
            'm' => pokemart(profile, config, frontend)?,
            'b' => bag(profile, config, frontend)?,
            'q' => return Ok(()),
            _ => frontend.notify("Invalid input"),
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logger(args.verbose) {
        eprintln!("Error initializing logger: {}", e);
    }

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return;
            }
        },
        None => GameConfig::default(),
    };

    let dex = match &args.data {
        Some(path) => Dex::load_ron(path),
        None => Dex::bundled(),
    };
    let dex = match dex {
        Ok(dex) => dex,
        Err(e) => {
            eprintln!("Error loading reference data: {}", e);
            return;
        }
    };

    let mut rng = match args.seed {
        Some(seed) => TurnRng::seeded(seed),
        None => TurnRng::new_random(),
    };
    let mut frontend = ConsoleFrontend {
        input: io::stdin().lock(),
    };
    let mut profile = Profile::default();

    match play(&mut profile, &dex, &config, args.distance, &mut rng, &mut frontend) {
        Ok(()) | Err(EngineError::InputClosed) => {}
        Err(e) => eprintln!("Error: {}", e),
    }

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing profile: {}", e),
    }
}
