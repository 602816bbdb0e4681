//! Shy button TUI
//!
//! A button that runs away from the mouse, and a confirmation dialog
//! that does not wait long for an answer.
//! Run with: shybutton [--lang es|en] [--config <PATH>]

mod app;
mod config;
mod constants;
mod event;
mod evasion;
mod flow;
mod layout;
mod scheduler;
mod text;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{Config, DisplacementMode};
use crate::constants::FRAME_INTERVAL;
use crate::event::EventHandler;
use crate::scheduler::{TimerFired, TokioScheduler};
use crate::text::Locale;

/// Command line arguments. Flags override the config file.
#[derive(Debug, Parser)]
#[command(name = "shybutton", version, about = "A terminal button that runs away from your mouse")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "SHYBUTTON_CONFIG")]
    config: Option<PathBuf>,
    /// UI language
    #[arg(short, long, value_enum)]
    lang: Option<Locale>,
    /// Dialog auto-dismiss timeout in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,
    /// Countdown update interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Repulsion radius in terminal columns
    #[arg(long)]
    radius: Option<f64>,
    /// Largest jump in percent of the screen
    #[arg(long)]
    max_move: Option<f64>,
    /// Jump size policy
    #[arg(long, value_enum)]
    displacement: Option<DisplacementMode>,
    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "SHYBUTTON_LOG")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command line overrides on top of `config`.
    fn apply(&self, config: &mut Config) {
        if let Some(lang) = self.lang {
            config.locale = lang;
        }
        if let Some(duration_ms) = self.duration_ms {
            config.countdown.duration_ms = duration_ms;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.countdown.tick_ms = tick_ms;
        }
        if let Some(radius) = self.radius {
            config.evasion.repulsion_radius = radius;
        }
        if let Some(max_move) = self.max_move {
            config.evasion.max_displacement = max_move;
        }
        if let Some(displacement) = self.displacement {
            config.evasion.displacement = displacement;
        }
    }
}

/// Sends tracing output to `path`. The terminal belongs to the UI, so
/// without a log file nothing is recorded.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Settle configuration before touching the terminal
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;
    info!(?config, "starting");

    // Timer firings come back to the main loop through this channel
    let (timer_tx, timer_rx) = mpsc::unbounded_channel();
    let app = App::new(&config, TokioScheduler::new(timer_tx));

    // Initialize the terminal
    let terminal = ratatui::init();
    let result = match execute!(io::stdout(), EnableMouseCapture) {
        Ok(()) => run_app(terminal, app, timer_rx).await,
        Err(err) => Err(err).context("Failed to enable mouse capture"),
    };

    // Restore the terminal to its original state
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        warn!(%err, "failed to disable mouse capture");
    }
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// Draws, then waits for whichever comes first: a terminal event, a
/// timer firing or the next animation frame.
async fn run_app(
    mut terminal: ratatui::DefaultTerminal,
    mut app: App<TokioScheduler>,
    mut timers: UnboundedReceiver<TimerFired>,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(size.width, size.height);

    let event_handler = EventHandler::new();
    let mut events = EventStream::new();
    let mut frames = time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.advance_frame(now - last_frame);
                last_frame = now;
            }
            Some(fired) = timers.recv() => app.on_timer(fired),
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if let Some(action) = event_handler.translate(event) {
                        if app.handle_action(action) {
                            break;
                        }
                    }
                }
                Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                None => break,
            },
        }
    }

    info!("quitting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "shybutton",
            "--lang",
            "en",
            "--duration-ms",
            "900",
            "--radius",
            "20",
            "--displacement",
            "fixed",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.countdown.duration_ms, 900);
        assert_eq!(config.countdown.tick_ms, 30);
        assert_eq!(config.evasion.repulsion_radius, 20.0);
        assert_eq!(config.evasion.displacement, DisplacementMode::Fixed);
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let cli = Cli::parse_from(["shybutton"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_infinite_values_fail_validation() {
        let cli = Cli::parse_from(["shybutton", "--max-move", "inf"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.validate().is_err());

        let cli = Cli::parse_from(["shybutton", "--radius", "inf"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.validate().is_err());
    }
}
