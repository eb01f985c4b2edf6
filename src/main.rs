use std::fs::File;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{DEFAULT_GRID_TILES, DEFAULT_TICK_INTERVAL_MS, GameConfig, THEME_NEON};
use grid_snake::error::AppError;
use grid_snake::game::Engine;
use grid_snake::input::GameInput;
use grid_snake::loop_driver::{LoopDriver, LoopEvent};
use grid_snake::renderer::{self, Screen};
use grid_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort, poll_input};
use tracing_subscriber::EnvFilter;

/// Longest wait for input while no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board edge length in tiles.
    #[arg(long, default_value_t = DEFAULT_GRID_TILES)]
    grid: u16,

    /// Tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig {
        grid_tiles: cli.grid,
        tick_interval: Duration::from_millis(cli.tick_ms),
        ..GameConfig::default()
    };
    let engine = match cli.seed {
        Some(seed) => Engine::with_seed(config, seed)?,
        None => Engine::new(config)?,
    };

    install_panic_hook();
    run(LoopDriver::new(engine))
}

fn run(mut driver: LoopDriver) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    draw(&mut session, &driver)?;

    loop {
        let now = Instant::now();
        let wait = driver.time_until_next(now).unwrap_or(IDLE_POLL).min(IDLE_POLL);

        if let Some(input) = poll_input(wait)? {
            if input == GameInput::Quit {
                break;
            }

            handle_input(&mut driver, input);
            draw(&mut session, &driver)?;
        }

        let grid = driver.engine().grid();
        let mut drawn = Ok(());
        let event = driver.poll(Instant::now(), |state| {
            let screen = Screen::after_tick(state);
            drawn = session
                .terminal_mut()
                .draw(|frame| renderer::render(frame, state, grid, screen, &THEME_NEON))
                .map(drop);
        });
        drawn?;

        if let Some(LoopEvent::Finished {
            final_score,
            reason,
        }) = event
        {
            tracing::info!(final_score, ?reason, "session finished");
        }
    }

    Ok(())
}

fn handle_input(driver: &mut LoopDriver, input: GameInput) {
    let now = Instant::now();
    match input {
        GameInput::Confirm => {
            if !driver.is_paused() {
                driver.start(now);
            }
        }
        GameInput::Direction(direction) => {
            if Screen::of(driver) == Screen::Start {
                driver.start(now);
            }
            driver.engine_mut().set_direction_intent(direction);
        }
        GameInput::Pause => {
            if driver.is_paused() {
                driver.resume(now);
            } else {
                driver.pause();
            }
        }
        GameInput::Quit => {}
    }
}

fn draw(session: &mut TerminalSession, driver: &LoopDriver) -> Result<(), AppError> {
    let engine = driver.engine();
    let screen = Screen::of(driver);
    session.terminal_mut().draw(|frame| {
        renderer::render(frame, engine.state(), engine.grid(), screen, &THEME_NEON);
    })?;
    Ok(())
}

fn init_tracing(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), "grid-snake starting");
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
