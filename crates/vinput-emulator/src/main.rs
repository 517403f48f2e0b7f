//! vinput-replay: feeds a TOML script of input events through the emitters.
//!
//! ```text
//! vinput-replay [--config <path>] [--display <name>] [--settle-ms <ms>] [--dry-run] <events.toml>
//! ```
//!
//! The script is a list of `[[event]]` tables, one per [`InputEvent`]:
//!
//! ```toml
//! [[event]]
//! kind = "unicode"
//! text = "héllo"
//!
//! [[event]]
//! kind = "mouse_scroll"
//! distance = -120
//! ```
//!
//! Without `--dry-run` the tool opens the X display and creates a uinput
//! keyboard.  A freshly created uinput device is not usable until the
//! session has picked it up, so replay waits `--settle-ms` after creating it
//! and again before destroying it.  A backend that cannot be opened is skipped with a warning and
//! the events it would have handled are dropped.  With `--dry-run` every
//! event goes to the in-memory recorder and the recorded backend calls are
//! printed instead.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use vinput_core::InputEvent;
use vinput_emulator::backend::recording::RecordingBackend;
use vinput_emulator::config::{default_config_path, EmulatorConfig};
use vinput_emulator::{InputEmulator, RawInputSink};

/// Default wait around the lifetime of a new uinput device.
const DEFAULT_SETTLE_MS: u64 = 200;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Replays a script of keyboard, text and mouse events into the local session.
#[derive(Debug, Parser)]
#[command(name = "vinput-replay", version)]
struct Cli {
    /// Config file.  Defaults to `$XDG_CONFIG_HOME/vinput/config.toml`.
    #[arg(long, env = "VINPUT_CONFIG")]
    config: Option<PathBuf>,

    /// X display to open instead of `$DISPLAY`.
    #[arg(long)]
    display: Option<String>,

    /// Milliseconds to wait after creating the uinput keyboard and before
    /// removing it.
    #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
    settle_ms: u64,

    /// Record backend calls and print them instead of injecting input.
    #[arg(long)]
    dry_run: bool,

    /// TOML file of `[[event]]` tables.
    events: PathBuf,
}

/// Top-level shape of an events file.
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    event: Vec<InputEvent>,
}

fn parse_script(text: &str) -> anyhow::Result<Vec<InputEvent>> {
    let script: Script = toml::from_str(text).context("invalid events TOML")?;
    Ok(script.event)
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<EmulatorConfig> {
    match explicit {
        Some(path) => EmulatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => match default_config_path() {
            Some(path) => EmulatorConfig::load_or_default(&path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(EmulatorConfig::default()),
        },
    }
}

fn replay(emulator: &mut InputEmulator, sink: &RawInputSink<'_>, events: &[InputEvent]) {
    for event in events {
        emulator.handle(sink, event);
    }
}

fn run_dry(emulator: &mut InputEmulator, events: &[InputEvent]) {
    let recorder = RecordingBackend::new();
    let sink = RawInputSink::new()
        .with_display(&recorder)
        .with_keyboard(&recorder)
        .with_mouse(&recorder);

    replay(emulator, &sink, events);

    for call in recorder.take() {
        println!("{call:?}");
    }
}

/// Blocks until a uinput device created or about to be removed has been
/// noticed by the session.
fn settle(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!(delay_ms = delay.as_millis() as u64, "waiting for uinput device to settle");
    thread::sleep(delay);
}

fn run_live(
    emulator: &mut InputEmulator,
    display_name: Option<&str>,
    settle_delay: Duration,
    events: &[InputEvent],
) {
    let sink = RawInputSink::new();

    #[cfg(all(target_os = "linux", feature = "x11"))]
    let display = vinput_emulator::backend::xtest::XDisplay::open(display_name)
        .map_err(|e| warn!("{e}; key and pointer events will be dropped"))
        .ok();
    #[cfg(all(target_os = "linux", feature = "x11"))]
    let sink = match display.as_ref() {
        Some(display) => sink.with_display(display),
        None => sink,
    };
    #[cfg(not(all(target_os = "linux", feature = "x11")))]
    let _ = display_name.map(|name| warn!(display = name, "built without X11 support"));

    #[cfg(all(target_os = "linux", feature = "uinput"))]
    let keyboard = {
        use vinput_emulator::backend::uinput::{UinputKeyboard, DEFAULT_DEVICE_NAME};
        UinputKeyboard::new(DEFAULT_DEVICE_NAME)
            .map_err(|e| warn!("{e}; text events will be dropped"))
            .ok()
    };
    #[cfg(all(target_os = "linux", feature = "uinput"))]
    let sink = match keyboard.as_ref() {
        Some(keyboard) => sink.with_keyboard(keyboard),
        None => sink,
    };

    if sink.display.is_none() && sink.keyboard.is_none() {
        warn!("no input backend available, every event will be dropped");
    }

    let has_keyboard = sink.keyboard.is_some();
    if has_keyboard {
        settle(settle_delay);
    }
    replay(emulator, &sink, events);
    if has_keyboard {
        settle(settle_delay);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the configured level applies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let text = std::fs::read_to_string(&cli.events)
        .with_context(|| format!("reading events file {}", cli.events.display()))?;
    let events = parse_script(&text)
        .with_context(|| format!("parsing events file {}", cli.events.display()))?;
    info!(count = events.len(), dry_run = cli.dry_run, "replaying events");

    let mut emulator = InputEmulator::new(&config.scroll);
    if cli.dry_run {
        run_dry(&mut emulator, &events);
    } else {
        run_live(
            &mut emulator,
            cli.display.as_deref(),
            Duration::from_millis(cli.settle_ms),
            &events,
        );
    }

    info!("replay finished");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
