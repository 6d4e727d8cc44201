//! Key mapping from physical key codes to logical actions.
//!
//! Codes are DOM `KeyboardEvent.code` strings: they name the physical key
//! position, not the produced character, so the bindings survive keyboard
//! layouts.

use crate::types::LogicalAction;

/// Fixed binding table.
pub const KEY_BINDINGS: [(&str, LogicalAction); 7] = [
    ("KeyA", LogicalAction::MoveLeft),
    ("KeyD", LogicalAction::MoveRight),
    ("KeyS", LogicalAction::SoftDrop),
    ("KeyJ", LogicalAction::RotateLeft),
    ("KeyK", LogicalAction::RotateRight),
    ("Space", LogicalAction::HardDrop),
    ("Escape", LogicalAction::TogglePause),
];

/// Map a key code to the actions it asserts, `AnyKey` excluded.
pub fn actions_for_code(code: &str) -> &'static [LogicalAction] {
    match code {
        // Movement
        "KeyA" => &[LogicalAction::MoveLeft],
        "KeyD" => &[LogicalAction::MoveRight],
        "KeyS" => &[LogicalAction::SoftDrop],

        // Rotation
        "KeyJ" => &[LogicalAction::RotateLeft],
        "KeyK" => &[LogicalAction::RotateRight],

        // Actions
        "Space" => &[LogicalAction::HardDrop],
        "Escape" => &[LogicalAction::TogglePause],

        _ => &[],
    }
}

/// The key code bound to `action`, if any (`AnyKey` has none).
pub fn code_for_action(action: LogicalAction) -> Option<&'static str> {
    KEY_BINDINGS
        .iter()
        .find(|(_, a)| *a == action)
        .map(|(code, _)| *code)
}
