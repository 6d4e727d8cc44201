//! Frame render coordinator.
//!
//! One call to [`FrameCoordinator::tick`] is one frame of the fixed-interval
//! loop:
//!
//! 1. arbitrate input against the engine
//! 2. advance the engine one step
//! 3. draw the playfield on the main layer
//! 4. draw the overlay layer for the current engine flags
//!
//! Until the engine slot is ready the whole tick is a no-op.

use tracing::debug;

use crate::config::RenderConfig;
use crate::engine::{Engine, EngineSlot};
use crate::input::{arbitrate, FiredActions, KeyRegistry};
use crate::layout::BoardLayout;
use crate::overlay::{OverlayPaint, OverlayPainter};
use crate::playfield::draw_playfield;
use crate::surface::Surface;
use crate::types::EngineFlags;

/// What happened in one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No engine yet; nothing was read, dispatched or drawn.
    EngineNotReady,
    Rendered(FrameReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Actions dispatched this tick, in order.
    pub fired: FiredActions,
    /// Flags the frame was drawn with (read after `advance`).
    pub flags: EngineFlags,
    pub overlay: OverlayPaint,
}

#[derive(Debug, Clone)]
pub struct FrameCoordinator {
    config: RenderConfig,
    overlay: OverlayPainter,
    last_flags: Option<EngineFlags>,
    frames: u64,
}

impl Default for FrameCoordinator {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl FrameCoordinator {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            overlay: OverlayPainter::new(),
            last_flags: None,
            frames: 0,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Frames rendered so far (ticks without an engine do not count).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Layout of the engine's board under this configuration.
    pub fn layout_for<E: Engine + ?Sized>(&self, engine: &E) -> BoardLayout {
        self.config.layout(engine.width(), engine.height())
    }

    /// Run one frame.
    pub fn tick<E, M, O>(
        &mut self,
        keys: &mut KeyRegistry,
        slot: &mut EngineSlot<E>,
        main: &mut M,
        overlay: &mut O,
    ) -> TickOutcome
    where
        E: Engine,
        M: Surface + ?Sized,
        O: Surface + ?Sized,
    {
        let Some(engine) = slot.ready_mut() else {
            return TickOutcome::EngineNotReady;
        };

        let fired = arbitrate(keys, engine);
        engine.advance();

        let (flags, overlay_paint) = self.render(engine, main, overlay);
        TickOutcome::Rendered(FrameReport {
            fired,
            flags,
            overlay: overlay_paint,
        })
    }

    /// Draw both layers from the engine's current state, without input or
    /// simulation.
    pub fn render<E, M, O>(
        &mut self,
        engine: &E,
        main: &mut M,
        overlay: &mut O,
    ) -> (EngineFlags, OverlayPaint)
    where
        E: Engine + ?Sized,
        M: Surface + ?Sized,
        O: Surface + ?Sized,
    {
        let flags = engine.flags();
        if self.last_flags != Some(flags) {
            debug!(?flags, frame = self.frames, "engine screen changed");
            self.last_flags = Some(flags);
        }

        let layout = self.layout_for(engine);
        let cells = engine.cells();
        draw_playfield(main, &layout, &cells, &self.config.palette, flags.game_over);

        let paint = self.overlay.paint(overlay, &layout, flags, &self.config);
        self.frames += 1;
        (flags, paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::draw_list::DrawList;
    use crate::engine::{EngineCommand, RecordingEngine};
    use crate::types::{Cell, LogicalAction};

    struct Harness {
        keys: KeyRegistry,
        slot: EngineSlot<RecordingEngine>,
        coordinator: FrameCoordinator,
        main: DrawList,
        overlay: DrawList,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                keys: KeyRegistry::new(),
                slot: EngineSlot::new(),
                coordinator: FrameCoordinator::default(),
                main: DrawList::new(),
                overlay: DrawList::new(),
            }
        }

        fn tick(&mut self) -> TickOutcome {
            self.main.reset();
            self.overlay.reset();
            self.coordinator
                .tick(&mut self.keys, &mut self.slot, &mut self.main, &mut self.overlay)
        }

        fn engine(&self) -> &RecordingEngine {
            self.slot.ready().unwrap()
        }
    }

    #[test]
    fn tick_is_noop_until_engine_installed() {
        let mut h = Harness::new();
        h.slot.begin_loading();
        h.keys.key_down("KeyA");

        assert_eq!(h.tick(), TickOutcome::EngineNotReady);
        assert!(h.main.is_empty());
        assert!(h.overlay.is_empty());
        assert_eq!(h.keys.state(LogicalAction::MoveLeft).held_frames(), 0);
        assert_eq!(h.coordinator.frames(), 0);

        h.slot.install(RecordingEngine::running(4, 2)).unwrap();
        match h.tick() {
            TickOutcome::Rendered(report) => {
                assert_eq!(report.fired.as_slice(), &[LogicalAction::MoveLeft]);
            }
            other => panic!("expected a rendered frame, got {:?}", other),
        }
        assert!(!h.main.is_empty());
    }

    #[test]
    fn input_is_dispatched_before_advance() {
        let mut h = Harness::new();
        h.slot.install(RecordingEngine::running(4, 2)).unwrap();
        h.keys.key_down("KeyK");
        h.tick();
        h.tick();

        assert_eq!(
            h.engine().commands(),
            &[
                EngineCommand::RotateRight,
                EngineCommand::Advance,
                EngineCommand::Advance
            ]
        );
    }

    #[test]
    fn any_key_starts_game_and_overlay_clears_next_frame() {
        let mut h = Harness::new();
        h.slot.install(RecordingEngine::new(4, 2)).unwrap();

        h.tick();
        assert_eq!(h.overlay.texts(), vec!["HIT", "ANY KEY"]);

        h.keys.key_down("KeyX");
        match h.tick() {
            TickOutcome::Rendered(report) => {
                assert_eq!(report.fired.as_slice(), &[LogicalAction::AnyKey]);
                assert_eq!(report.flags, EngineFlags::RUNNING);
                assert_eq!(report.overlay, OverlayPaint::Cleared);
            }
            other => panic!("expected a rendered frame, got {:?}", other),
        }
        assert!(h.overlay.texts().is_empty());
        assert_eq!(h.overlay.clears(), 1);
    }

    #[test]
    fn game_over_frame_has_no_piece_colors() {
        let mut h = Harness::new();
        let mut engine = RecordingEngine::running(4, 2).with_flags(EngineFlags {
            game_over: true,
            ..EngineFlags::default()
        });
        engine.set_cell(0, 0, Cell::T);
        engine.set_cell(1, 2, Cell::Wall);
        h.slot.install(engine).unwrap();

        h.tick();
        assert!(h
            .main
            .fills()
            .all(|(_, c)| c == Palette::EMPTY || c == Palette::FILLER));
        assert_eq!(h.overlay.texts(), vec!["GAME", "OVER"]);
    }

    #[test]
    fn cells_are_read_fresh_every_frame() {
        let mut h = Harness::new();
        h.slot.install(RecordingEngine::running(4, 2)).unwrap();
        h.tick();
        assert!(h.main.fills().all(|(_, c)| c == Palette::EMPTY));

        h.slot.ready_mut().unwrap().set_cell(1, 1, Cell::O);
        h.tick();
        assert_eq!(h.main.fills().filter(|(_, c)| *c == Palette::O).count(), 1);
    }
}
