//! Terminal runner for the typing game (default binary).
//!
//! Loads the assets, sets up file logging, then runs a fixed-rate frame loop:
//! drain input, tick while playing, render.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dragon_typer::core::{Persistence, Session};
use dragon_typer::input::{drain_events, viewport_for_cells};
use dragon_typer::store::{load_high_scores, load_word_list, AssetPaths};
use dragon_typer::term::{FrameBuffer, GameView, TerminalRenderer};
use dragon_typer::types::{InputEvent, Mode, FRAME_MS};

#[derive(Debug, Parser)]
#[command(name = "dragon-typer", version, about = "Type the falling words before they land")]
struct Cli {
    /// Directory holding words.txt, save.txt and scores.txt.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Dictionary file (defaults to <assets>/words.txt).
    #[arg(long)]
    words: Option<PathBuf>,

    /// Spawner seed; time based when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Log file (defaults to <assets>/dragon-typer.log).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Seconds elapsed between playing ticks.
struct FrameClock {
    last: Instant,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn restart(&mut self) {
        self.last = Instant::now();
    }

    fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| cli.assets.join("dragon-typer.log"));
    init_logging(&log_path)?;

    let mut paths = AssetPaths::in_dir(&cli.assets);
    if let Some(words) = &cli.words {
        paths = paths.with_words(words);
    }

    let words = load_word_list(&paths.words)
        .with_context(|| format!("failed to load word list {}", paths.words.display()))?;
    let high_scores = load_high_scores(&paths.scores);
    let seed = cli.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, words = words.len(), "starting");

    let (cols, rows) = crossterm::terminal::size().unwrap_or((100, 37));
    let mut session =
        Session::new(words, high_scores, seed).with_viewport(viewport_for_cells(cols, rows));
    let mut store = paths.store();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(%err, "exiting with error");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut Session, store: &mut dyn Persistence) -> Result<()> {
    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = FrameClock::new();
    let mut events = Vec::new();

    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = Instant::now();

    loop {
        events.clear();
        drain_events(next_frame.saturating_duration_since(Instant::now()), &mut events)?;

        for event in &events {
            if matches!(event, InputEvent::Resized { .. }) {
                term.invalidate();
            }
            if let Some(t) = session.handle_event(event, store) {
                if t.entered_playing() {
                    clock.restart();
                }
            }
        }

        if session.quit_requested() {
            tracing::info!("quit requested");
            return Ok(());
        }

        let now = Instant::now();
        if now < next_frame {
            continue;
        }
        next_frame = now + frame;

        if session.mode() == Mode::Playing {
            let report = session.tick(clock.lap(), store);
            if report.missed > 0 {
                tracing::debug!(missed = report.missed, lives = session.lives(), "words missed");
            }
        }

        view.render_into(session, &mut fb);
        term.present(&mut fb)?;
    }
}
