//! Man with a Gun entry point
//!
//! Loads settings, sets up logging, takes over the terminal and runs the
//! frame loop until the player quits.

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use man_with_a_gun::platform::TerminalPlatform;
use man_with_a_gun::settings::LoadOutcome;
use man_with_a_gun::{Game, Settings};

fn main() -> ExitCode {
    let (settings, outcome) = Settings::load();
    init_logging(&settings);
    match &outcome {
        LoadOutcome::Defaults => {}
        LoadOutcome::Loaded(path) => log::info!("Loaded settings from {}", path.display()),
        LoadOutcome::Fallback(path, err) => {
            log::warn!("Using default settings ({}): {}", path.display(), err);
            // Still on the normal screen, so this stays visible after exit
            eprintln!("man-with-a-gun: using default settings ({}): {err}", path.display());
        }
    }

    log::info!("Man with a Gun starting...");

    let mut platform = match TerminalPlatform::init(&settings) {
        Ok(platform) => platform,
        Err(err) => {
            log::error!("Could not create the display: {}", err);
            eprintln!("man-with-a-gun: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(settings.resolve_seed());
    game.run(&mut platform);

    // Restore the terminal before the process exits
    drop(platform);
    ExitCode::SUCCESS
}

fn init_logging(settings: &Settings) {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(log_writer(settings)))
        .init();
}

/// Log sink: `settings.log_file` when set, otherwise discarded
///
/// Never stderr, which is the terminal the game draws on.
fn log_writer(settings: &Settings) -> Box<dyn Write + Send> {
    let Some(path) = &settings.log_file else {
        return Box::new(io::sink());
    };
    match File::create(path) {
        Ok(file) => Box::new(file),
        Err(err) => {
            eprintln!("man-with-a-gun: cannot open log file {}: {err}", path.display());
            Box::new(io::sink())
        }
    }
}
