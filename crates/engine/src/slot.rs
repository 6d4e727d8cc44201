//! Load state machine for the single engine instance.
//!
//! The engine becomes available asynchronously after start-up. Until then every
//! consumer sees `None` from [`EngineSlot::ready_mut`] and treats the call as a
//! no-op.

use thiserror::Error;

/// Where the engine is in its one-time load.
#[derive(Debug, Default)]
pub enum EngineSlot<E> {
    #[default]
    Unloaded,
    Loading,
    Ready(E),
}

/// A second engine was offered after one was installed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("engine already installed")]
pub struct InstallError;

impl<E> EngineSlot<E> {
    pub fn new() -> Self {
        EngineSlot::Unloaded
    }

    /// Mark an out-of-band load as in flight.
    ///
    /// Returns `false` when the slot is not `Unloaded`.
    pub fn begin_loading(&mut self) -> bool {
        match self {
            EngineSlot::Unloaded => {
                *self = EngineSlot::Loading;
                true
            }
            _ => false,
        }
    }

    /// A load failed; allow a later retry.
    pub fn abandon_loading(&mut self) {
        if matches!(self, EngineSlot::Loading) {
            *self = EngineSlot::Unloaded;
        }
    }

    /// Install the engine.
    ///
    /// The first installed engine is kept for the life of the slot; a second
    /// one is rejected and dropped.
    pub fn install(&mut self, engine: E) -> Result<(), InstallError> {
        if self.is_ready() {
            return Err(InstallError);
        }
        *self = EngineSlot::Ready(engine);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, EngineSlot::Ready(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, EngineSlot::Loading)
    }

    pub fn ready(&self) -> Option<&E> {
        match self {
            EngineSlot::Ready(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut E> {
        match self {
            EngineSlot::Ready(engine) => Some(engine),
            _ => None,
        }
    }

    /// Run `f` against the engine if it is loaded.
    pub fn with_engine<R>(&mut self, f: impl FnOnce(&mut E) -> R) -> Option<R> {
        self.ready_mut().map(f)
    }
}
