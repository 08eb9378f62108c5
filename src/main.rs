use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use arena_snake::audio::TerminalAudio;
use arena_snake::config::{DEFAULT_LOG_FILE, FRAME_POLL_INTERVAL_MS};
use arena_snake::error::ConfigError;
use arena_snake::game::GameState;
use arena_snake::input::InputHandler;
use arena_snake::session::{Session, Snapshot};
use arena_snake::settings::{Overrides, Settings, load_settings_from_path, settings_path};
use arena_snake::terminal_runtime::{TerminalFrontend, TerminalSession, install_panic_hook};
use clap::Parser;
use log::{LevelFilter, info, warn};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Canvas width in pixels; the arena has one cell per 20 px.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Milliseconds per simulation tick.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for apple placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to use instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat the cell the tail is leaving as occupied.
    #[arg(long = "strict-tail")]
    strict_tail: bool,

    /// Never place the apple on the snake.
    #[arg(long = "apple-avoids-snake")]
    apple_avoids_snake: bool,

    /// Ring the terminal bell for sound cues.
    #[arg(long)]
    bell: bool,

    /// Log file path.
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log debug events such as rejected turns and apple placements.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            canvas_width: self.width,
            canvas_height: self.height,
            tick_interval_ms: self.tick_ms,
            strict_tail: self.strict_tail,
            apple_avoids_snake: self.apple_avoids_snake,
            bell: self.bell,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_logging(&cli) {
        eprintln!("Failed to start logging: {error}");
    }

    // Configuration is validated here, before the terminal enters raw mode.
    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Invalid configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();

    match run(&cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = File::create(&cli.log_file)?;

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let from_file = match cli.config.clone().or_else(settings_path) {
        Some(path) => load_settings_from_path(&path)?,
        None => {
            warn!("no platform config directory; using default settings");
            Settings::default()
        }
    };

    from_file.with_overrides(&cli.overrides())
}

fn run(cli: &Cli, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let grid = settings.grid()?;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, settings.rules(), seed),
        None => GameState::new(grid, settings.rules()),
    };
    let mut session = Session::new(state, settings.tick_interval()?);
    info!("settings: {settings:?}");

    let mut frontend = TerminalFrontend::new(
        TerminalSession::enter()?,
        TerminalAudio::new(settings.bell),
    );
    let mut input = InputHandler::new();
    let frame_poll = Duration::from_millis(FRAME_POLL_INTERVAL_MS);

    loop {
        frontend.draw(&Snapshot::of(session.state()))?;

        let wait = session
            .scheduler()
            .time_until_next(Instant::now())
            .map_or(frame_poll, |left| left.min(frame_poll));
        if let Some(game_input) = input.poll_input(wait)? {
            if !session.handle_input(game_input, Instant::now(), &mut frontend) {
                break;
            }
        }

        session.poll(Instant::now(), &mut frontend);
        if let Some(error) = frontend.take_error() {
            return Err(error.into());
        }
    }

    info!("exiting");
    Ok(())
}
