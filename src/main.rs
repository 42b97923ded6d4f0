//! Pursuit headless driver
//!
//! Usage: `pursuit [seed] [tuning.json] [max_ticks]`
//!
//! Runs a scripted getaway driver at the fixed timestep until the session ends
//! or the tick cap is reached, then prints a JSON summary.

use std::num::ParseIntError;
use std::process::ExitCode;

use pursuit::consts::SIM_DT;
use pursuit::sim::DriveIntent;
use pursuit::{Session, Tuning, view};

const DEFAULT_SEED: u64 = 0x5EED;
/// Ten simulated minutes
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 10;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match parse_arg(args.next().as_deref(), DEFAULT_SEED) {
        Ok(seed) => seed,
        Err(e) => {
            log::error!("Invalid seed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(t) => t,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };
    let max_ticks = match parse_arg(args.next().as_deref(), DEFAULT_MAX_TICKS) {
        Ok(n) => n,
        Err(e) => {
            log::error!("Invalid max_ticks: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::new(seed, tuning) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Could not start session: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Pursuit (headless) running up to {max_ticks} ticks");

    while !session.world().ended() && session.world().time_ticks < max_ticks {
        let input = scripted_input(session.world().time_ticks);
        session.step(&input, SIM_DT);

        if session.world().time_ticks % 600 == 0 {
            let [status, pos] = view::hud_lines(session.world(), session.tuning());
            log::debug!("{status} | {pos}");
        }
    }

    let world = session.world();
    let summary = serde_json::json!({
        "seed": session.seed(),
        "ticks": world.time_ticks,
        "outcome": view::banner(world),
        "player": {
            "x": world.player.pos.x,
            "y": world.player.pos.y,
            "health": world.player.health,
        },
        "arrest_timer": world.arrest_timer,
        "pursuers": world.pursuers.len(),
    });
    println!("{summary:#}");
    ExitCode::SUCCESS
}

/// Parse an optional positional argument; absent means `default`
fn parse_arg(arg: Option<&str>, default: u64) -> Result<u64, ParseIntError> {
    arg.map_or(Ok(default), str::parse)
}

/// A looping drive pattern: long straights with periodic turns and a brake tap
fn scripted_input(tick: u64) -> DriveIntent {
    let phase = tick % 240;
    DriveIntent {
        accelerate: phase < 200,
        brake: (220..230).contains(&phase),
        turn_left: (120..150).contains(&phase) && (tick / 240) % 2 == 0,
        turn_right: (120..150).contains(&phase) && (tick / 240) % 2 == 1,
    }
}
