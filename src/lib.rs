//! Blockfall (workspace facade crate).
//!
//! Re-exports the platform-neutral crates under `crates/` as
//! `blockfall::{types,engine,input,render}`. The browser host lives in
//! `blockfall-web` and is built separately for `wasm32`.

pub mod probe;

pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_render as render;
pub use blockfall_types as types;
