//! Cup Toss entry point
//!
//! Headless demo shell: replays an AR timeline (the built-in scenario or a
//! JSON script passed as the first argument) through the game controller
//! and reports where the session ended up.

use cup_toss::host::{self, ScriptedSession};
use cup_toss::tuning::Tuning;

fn main() {
    env_logger::init();
    log::info!("cup-toss headless demo starting");

    let tuning = Tuning::load_or_default("tuning.json");

    let script = match std::env::args().nth(1) {
        Some(path) => match host::load_script(&path) {
            Ok(script) => {
                log::info!("loaded {} events from {}", script.len(), path);
                script
            }
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => host::demo_script(0x5EED),
    };

    let mut session = ScriptedSession::new(tuning);
    session.run(&script);

    let mirror = session.mirror();
    println!("final phase: {:?}", session.game().phase());
    println!(
        "cup at {:?} (opacity {:.2}), {} plane(s) tracked",
        mirror.cup_position,
        mirror.cup_opacity,
        mirror.planes.len()
    );
    if mirror.prompt_visible {
        println!("prompt: {:?}", mirror.prompt_text);
    }
}
