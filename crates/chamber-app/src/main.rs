use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use chamber_app::config::{AppConfig, LOG_FILE};
use chamber_app::game_loop;
use chamber_app::input::{self, InputCollector};
use chamber_app::render::TerminalRenderer;
use chamber_sim::{SceneMachine, SimulationEngine};

fn main() -> Result<()> {
    let log = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(seed = config.seed, map_dir = ?config.map_dir, "Starting");
    let sim_config = config.sim_config();
    let viewport = sim_config.viewport;
    let mut machine = SceneMachine::new(SimulationEngine::new(sim_config));

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;
    // Release events where the terminal supports them; others fall back to
    // the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let result = run(&mut machine, viewport);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    result
}

fn run(machine: &mut SceneMachine, viewport: (f64, f64)) -> Result<()> {
    let events = input::spawn_event_reader().context("starting input thread")?;
    let mut input = InputCollector::new(viewport);
    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout())).context("querying terminal size")?;
    game_loop::run(machine, &mut input, &events, &mut renderer).context("frame loop")?;
    Ok(())
}
