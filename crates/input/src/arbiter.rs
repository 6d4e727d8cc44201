//! Input timing arbiter.
//!
//! Turns the held/released state in [`KeyRegistry`] into one fire/no-fire
//! decision per action per tick and dispatches the fired actions to the
//! engine.
//!
//! Actions are arbitrated in a fixed order: MoveLeft, MoveRight, SoftDrop,
//! RotateLeft, RotateRight, HardDrop, TogglePause, then AnyKey. AnyKey is only
//! arbitrated while the engine reports the startup screen, checked after the
//! other seven have been dispatched.

use arrayvec::ArrayVec;

use crate::engine::Engine;
use crate::registry::KeyRegistry;
use crate::types::LogicalAction;

/// Actions fired in one tick, in dispatch order.
pub type FiredActions = ArrayVec<LogicalAction, { LogicalAction::COUNT }>;

/// Arbitration order for the always-dispatched actions.
pub const DISPATCH_ORDER: [LogicalAction; 7] = [
    LogicalAction::MoveLeft,
    LogicalAction::MoveRight,
    LogicalAction::SoftDrop,
    LogicalAction::RotateLeft,
    LogicalAction::RotateRight,
    LogicalAction::HardDrop,
    LogicalAction::TogglePause,
];

/// Run one tick of arbitration against `engine`.
///
/// Each held action advances its frame counter whether or not it fires.
/// Does not allocate.
pub fn arbitrate<E: Engine + ?Sized>(keys: &mut KeyRegistry, engine: &mut E) -> FiredActions {
    let mut fired = FiredActions::new();

    for action in DISPATCH_ORDER {
        if keys.state_mut(action).poll() {
            apply(engine, action);
            fired.push(action);
        }
    }

    if engine.is_startup() && keys.state_mut(LogicalAction::AnyKey).poll() {
        apply(engine, LogicalAction::AnyKey);
        fired.push(LogicalAction::AnyKey);
    }

    fired
}

/// Invoke the effect bound to `action`.
pub fn apply<E: Engine + ?Sized>(engine: &mut E, action: LogicalAction) {
    match action {
        LogicalAction::MoveLeft => engine.move_left(),
        LogicalAction::MoveRight => engine.move_right(),
        LogicalAction::RotateLeft => engine.rotate_left(),
        LogicalAction::RotateRight => engine.rotate_right(),
        LogicalAction::SoftDrop => engine.soft_drop(),
        LogicalAction::HardDrop => engine.hard_drop(),
        LogicalAction::TogglePause => engine.toggle_pause(),
        LogicalAction::AnyKey => engine.run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineCommand, RecordingEngine};
    use crate::types::EngineFlags;

    fn fire_ticks(
        keys: &mut KeyRegistry,
        engine: &mut RecordingEngine,
        action: LogicalAction,
        ticks: u32,
    ) -> Vec<u32> {
        (0..ticks)
            .filter(|_| arbitrate(keys, engine).contains(&action))
            .collect()
    }

    #[test]
    fn accel_fires_at_press_then_from_frame_15_every_5() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);
        keys.press(LogicalAction::MoveLeft);

        let ticks = fire_ticks(&mut keys, &mut engine, LogicalAction::MoveLeft, 36);
        assert_eq!(ticks, vec![0, 15, 20, 25, 30, 35]);
    }

    #[test]
    fn never_fires_once_per_hold() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);
        keys.key_down("KeyJ");

        let ticks = fire_ticks(&mut keys, &mut engine, LogicalAction::RotateLeft, 50);
        assert_eq!(ticks, vec![0]);
        assert_eq!(engine.inputs(), vec![EngineCommand::RotateLeft]);
    }

    #[test]
    fn smooth_fires_every_tick_until_release() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);
        keys.key_down("KeyS");

        assert_eq!(fire_ticks(&mut keys, &mut engine, LogicalAction::SoftDrop, 8).len(), 8);
        keys.key_up("KeyS");
        assert!(fire_ticks(&mut keys, &mut engine, LogicalAction::SoftDrop, 8).is_empty());
    }

    #[test]
    fn release_and_repress_restarts_sequence() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);

        keys.key_down("KeyD");
        for _ in 0..12 {
            arbitrate(&mut keys, &mut engine);
        }
        keys.key_up("KeyD");
        keys.key_down("KeyD");

        let ticks = fire_ticks(&mut keys, &mut engine, LogicalAction::MoveRight, 16);
        assert_eq!(ticks, vec![0, 15]);
    }

    #[test]
    fn held_frames_advance_even_without_fire() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);
        keys.press(LogicalAction::HardDrop);
        for _ in 0..5 {
            arbitrate(&mut keys, &mut engine);
        }
        assert_eq!(keys.state(LogicalAction::HardDrop).held_frames(), 5);
    }

    #[test]
    fn any_key_runs_engine_only_on_startup() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::new(4, 4);
        keys.key_down("KeyQ");

        let fired = arbitrate(&mut keys, &mut engine);
        assert_eq!(fired.as_slice(), &[LogicalAction::AnyKey]);
        assert_eq!(engine.inputs(), vec![EngineCommand::Run]);
        assert!(!engine.is_startup());
    }

    #[test]
    fn any_key_is_noop_outside_startup() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);
        keys.key_down("KeyQ");

        for _ in 0..3 {
            assert!(arbitrate(&mut keys, &mut engine).is_empty());
        }
        assert!(engine.inputs().is_empty());
        // Not arbitrated at all: the counter does not move.
        assert_eq!(keys.state(LogicalAction::AnyKey).held_frames(), 0);
    }

    #[test]
    fn any_key_held_into_startup_fires_on_first_startup_tick() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4);
        keys.key_down("KeyQ");
        arbitrate(&mut keys, &mut engine);

        engine.set_flags(EngineFlags {
            startup: true,
            ..EngineFlags::default()
        });
        assert_eq!(
            arbitrate(&mut keys, &mut engine).as_slice(),
            &[LogicalAction::AnyKey]
        );
    }

    #[test]
    fn dispatch_order_is_fixed() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::new(4, 4);
        for code in ["Escape", "Space", "KeyK", "KeyJ", "KeyS", "KeyD", "KeyA"] {
            keys.key_down(code);
        }

        let fired = arbitrate(&mut keys, &mut engine);
        assert_eq!(
            fired.as_slice(),
            &[
                LogicalAction::MoveLeft,
                LogicalAction::MoveRight,
                LogicalAction::SoftDrop,
                LogicalAction::RotateLeft,
                LogicalAction::RotateRight,
                LogicalAction::HardDrop,
                LogicalAction::TogglePause,
                LogicalAction::AnyKey,
            ]
        );
        assert_eq!(
            engine.inputs(),
            vec![
                EngineCommand::MoveLeft,
                EngineCommand::MoveRight,
                EngineCommand::SoftDrop,
                EngineCommand::RotateLeft,
                EngineCommand::RotateRight,
                EngineCommand::HardDrop,
                EngineCommand::TogglePause,
                EngineCommand::Run,
            ]
        );
    }

    #[test]
    fn toggle_pause_dispatches_regardless_of_flags() {
        let mut keys = KeyRegistry::new();
        let mut engine = RecordingEngine::running(4, 4).with_flags(EngineFlags {
            game_over: true,
            ..EngineFlags::default()
        });
        keys.key_down("Escape");
        arbitrate(&mut keys, &mut engine);
        assert_eq!(engine.inputs(), vec![EngineCommand::TogglePause]);
    }
}
