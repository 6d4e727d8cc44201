//! Keyboard input module (engine-facing).
//!
//! This module is independent of any UI framework. Hosts report physical key
//! transitions by DOM code into a [`KeyRegistry`]; once per tick
//! [`arbitrate`] decides which logical actions fire under their hold policy
//! and dispatches them to the engine.
//!
//! With the `term` feature, [`term`] translates `crossterm` key codes into the
//! same DOM codes.

pub mod arbiter;
pub mod map;
pub mod registry;
#[cfg(feature = "term")]
pub mod term;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use arbiter::{apply, arbitrate, FiredActions, DISPATCH_ORDER};
pub use map::{actions_for_code, code_for_action, KEY_BINDINGS};
pub use registry::{ActionState, KeyRegistry};
