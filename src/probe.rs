//! Terminal probe: drives the tick pipeline against a recording engine and
//! reports what fired.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::engine::{EngineSlot, RecordingEngine};
use crate::input::KeyRegistry;
use crate::render::{DrawList, FrameCoordinator, TickOutcome};
use crate::types::{EngineFlags, LogicalAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Hold time assumed for a key when the terminal reports no releases.
pub const AUTO_RELEASE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Emit JSON lines instead of text.
    pub json: bool,
    /// Stop after this many ticks.
    pub ticks: Option<u64>,
}

pub fn parse_probe_args(args: &[String]) -> Result<ProbeConfig> {
    let mut config = ProbeConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => config.json = true,
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("probe: missing value for --ticks"))?;
                let n = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("probe: invalid --ticks value: {}", v))?;
                config.ticks = Some(n);
            }
            other => {
                return Err(anyhow!("probe: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// One trace line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRecord {
    pub tick: u64,
    pub fired: Vec<LogicalAction>,
    pub flags: EngineFlags,
    /// Caption lines on the overlay after this tick.
    pub overlay: Vec<String>,
}

impl fmt::Display for ProbeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {:>6}", self.tick)?;
        if !self.fired.is_empty() {
            f.write_str("  fired")?;
            for action in &self.fired {
                write!(f, " {}", action.as_str())?;
            }
        }
        if self.overlay.is_empty() {
            f.write_str("  screen: -")
        } else {
            write!(f, "  screen: {}", self.overlay.join(" / "))
        }
    }
}

/// Keys held without a release event from the terminal.
///
/// Each press (or terminal auto-repeat) refreshes the key's deadline; once it
/// passes, the key is reported as released.
#[derive(Debug, Default)]
pub struct AutoRelease {
    held: Vec<(&'static str, Instant)>,
}

impl AutoRelease {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: &'static str, now: Instant) {
        let deadline = now + AUTO_RELEASE;
        match self.held.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = deadline,
            None => self.held.push((code, deadline)),
        }
    }

    /// Remove and return every key whose deadline is at or before `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<&'static str> {
        let mut expired = Vec::new();
        self.held.retain(|&(code, deadline)| {
            if deadline <= now {
                expired.push(code);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

/// The pipeline a browser view runs, with `DrawList` layers.
#[derive(Debug)]
pub struct Probe {
    keys: KeyRegistry,
    engine: EngineSlot<RecordingEngine>,
    coordinator: FrameCoordinator,
    main: DrawList,
    overlay: DrawList,
    ticks: u64,
    caption: Vec<String>,
}

impl Default for Probe {
    fn default() -> Self {
        Self::new(RecordingEngine::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT))
    }
}

impl Probe {
    pub fn new(engine: RecordingEngine) -> Self {
        let mut slot = EngineSlot::new();
        // A fresh slot always accepts its first engine.
        let _ = slot.install(engine);
        Self {
            keys: KeyRegistry::new(),
            engine: slot,
            coordinator: FrameCoordinator::default(),
            main: DrawList::new(),
            overlay: DrawList::new(),
            ticks: 0,
            caption: Vec::new(),
        }
    }

    pub fn keys_mut(&mut self) -> &mut KeyRegistry {
        &mut self.keys
    }

    pub fn engine(&self) -> Option<&RecordingEngine> {
        self.engine.ready()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick. Returns a record when an action fired or the overlay
    /// caption changed.
    pub fn step(&mut self) -> Option<ProbeRecord> {
        self.main.reset();
        self.overlay.reset();
        let tick = self.ticks;
        self.ticks += 1;

        let TickOutcome::Rendered(report) = self.coordinator.tick(
            &mut self.keys,
            &mut self.engine,
            &mut self.main,
            &mut self.overlay,
        ) else {
            return None;
        };
        // The report already carries what fired; keep the log from growing.
        if let Some(engine) = self.engine.ready_mut() {
            engine.take_commands();
        }

        // An untouched overlay keeps its last caption.
        let caption_changed = if self.overlay.is_empty() {
            false
        } else {
            let caption: Vec<String> = self.overlay.texts().into_iter().map(String::from).collect();
            let changed = caption != self.caption;
            self.caption = caption;
            changed
        };

        if report.fired.is_empty() && !caption_changed {
            return None;
        }
        Some(ProbeRecord {
            tick,
            fired: report.fired.to_vec(),
            flags: report.flags,
            overlay: self.caption.clone(),
        })
    }
}
