//! Terminal probe for the input and render pipeline.
//!
//! Runs the same fixed-interval tick a browser view runs, against a recording
//! engine, and prints one line per tick in which an action fired or the
//! overlay caption changed. Keys are read with crossterm; `q` or Ctrl-C quits.
//!
//! ```text
//! blockfall-probe [--json] [--ticks <n>]
//! ```

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::input::term::{dom_code, should_quit};
use blockfall::probe::{parse_probe_args, AutoRelease, Probe, ProbeConfig, ProbeRecord};
use blockfall::types::TICK_MS;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_probe_args(&args)?;

    terminal::enable_raw_mode()?;
    let releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if releases {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    debug!(releases, "terminal ready");

    let result = run(&config, releases);

    // Always try to restore terminal state.
    if releases {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn run(config: &ProbeConfig, releases: bool) -> Result<()> {
    let mut probe = Probe::default();
    let mut auto = AutoRelease::new();
    let mut out = io::stdout();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
                if let Some(code) = dom_code(key.code) {
                    match key.kind {
                        KeyEventKind::Press => {
                            probe.keys_mut().key_down(code);
                            if !releases {
                                auto.press(code, Instant::now());
                            }
                        }
                        KeyEventKind::Repeat => {
                            // Held state already covers repeats.
                        }
                        KeyEventKind::Release => probe.keys_mut().key_up(code),
                    }
                }
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        for code in auto.expire(last_tick) {
            probe.keys_mut().key_up(code);
        }

        if let Some(record) = probe.step() {
            emit(&mut out, config, &record)?;
        }

        if config.ticks.is_some_and(|n| probe.ticks() >= n) {
            info!(ticks = probe.ticks(), "tick limit reached");
            return Ok(());
        }
    }
}

fn emit(out: &mut impl Write, config: &ProbeConfig, record: &ProbeRecord) -> Result<()> {
    // Raw mode: no implicit carriage return.
    if config.json {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\r\n")?;
    } else {
        write!(out, "{}\r\n", record)?;
    }
    out.flush()?;
    Ok(())
}
