//! Browser host: wasm-bindgen exports, DOM key listeners and canvas layers.
//!
//! JS usage:
//!
//! ```js
//! const view = GameCanvas.mount();           // undefined if the canvases are missing
//! view?.loadEngine(import('./engine.js').then((m) => m.GameIO.new()));
//! // ...on unmount
//! view?.unmount();
//! ```
//!
//! A mounted view owns its interval timer and key listeners; `unmount` (or
//! `free`) releases both, so no tick runs after teardown.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub mod bridge;
pub mod console;
pub mod error;
pub mod js_engine;
pub mod layer;

pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_render as render;
pub use blockfall_types as types;

pub use bridge::KeyListeners;
pub use error::MountError;
pub use js_engine::GameIo;
pub use layer::CanvasLayer;

use crate::engine::{Engine, EngineSlot};
use crate::input::KeyRegistry;
use crate::render::{FrameCoordinator, RenderConfig, TickOutcome};
use crate::types::{CANVAS_HEIGHT, CANVAS_WIDTH, TICK_MS};

pub const MAIN_LAYER_ID: &str = "___canvas_main";
pub const OVERLAY_LAYER_ID: &str = "___canvas_screen";

/// Element ids of the two stacked canvases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerIds {
    pub main: String,
    pub overlay: String,
}

impl Default for LayerIds {
    fn default() -> Self {
        Self {
            main: MAIN_LAYER_ID.to_string(),
            overlay: OVERLAY_LAYER_ID.to_string(),
        }
    }
}

/// Everything a tick touches besides the key registry.
pub struct Stage {
    engine: EngineSlot<GameIo>,
    coordinator: FrameCoordinator,
    main: CanvasLayer,
    overlay: CanvasLayer,
}

impl Stage {
    pub fn new(config: RenderConfig, main: CanvasLayer, overlay: CanvasLayer) -> Self {
        Self {
            engine: EngineSlot::new(),
            coordinator: FrameCoordinator::new(config),
            main,
            overlay,
        }
    }

    pub fn tick(&mut self, keys: &mut KeyRegistry) -> TickOutcome {
        self.coordinator
            .tick(keys, &mut self.engine, &mut self.main, &mut self.overlay)
    }

    /// Install the engine and size both layers to its board.
    pub fn install(&mut self, engine: GameIo) -> bool {
        let layout = self.coordinator.layout_for(&engine);
        if self.engine.install(engine).is_err() {
            warn!("engine already installed; ignoring the new instance");
            return false;
        }
        self.main.resize(layout.canvas_width(), layout.canvas_height());
        self.overlay.resize(layout.canvas_width(), layout.canvas_height());
        debug!(
            width = layout.width(),
            height = layout.height(),
            "engine installed"
        );
        true
    }
}

#[wasm_bindgen]
pub struct GameCanvas {
    stage: Rc<RefCell<Stage>>,
    keys: Rc<RefCell<KeyRegistry>>,
    // Dropped with the view: removes the listeners and cancels the timer.
    _listeners: KeyListeners,
    _ticker: Interval,
}

#[wasm_bindgen]
impl GameCanvas {
    /// Mount on the two canvases (default ids when omitted).
    ///
    /// Returns `undefined` when the document, the canvases or their contexts
    /// are not available; nothing is installed in that case.
    pub fn mount(main_id: Option<String>, overlay_id: Option<String>) -> Option<GameCanvas> {
        let defaults = LayerIds::default();
        let ids = LayerIds {
            main: main_id.unwrap_or(defaults.main),
            overlay: overlay_id.unwrap_or(defaults.overlay),
        };
        match Self::try_mount(&ids, RenderConfig::default()) {
            Ok(view) => Some(view),
            Err(err) => {
                debug!(%err, "mount skipped");
                None
            }
        }
    }

    /// Hand over a loaded engine. Returns `false` if one is already installed.
    #[wasm_bindgen(js_name = attachEngine)]
    pub fn attach_engine(&self, engine: GameIo) -> bool {
        self.stage.borrow_mut().install(engine)
    }

    /// Install the engine a promise resolves to.
    ///
    /// Ignored while another load is in flight or an engine is installed. A
    /// rejected promise leaves the view without an engine, ready for a retry.
    /// A promise that settles after `unmount` is dropped.
    #[wasm_bindgen(js_name = loadEngine)]
    pub fn load_engine(&self, promise: js_sys::Promise) {
        if !self.stage.borrow_mut().engine.begin_loading() {
            return;
        }
        let stage = Rc::downgrade(&self.stage);
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise).await;
            let Some(stage) = stage.upgrade() else {
                debug!("view unmounted before the engine loaded");
                return;
            };
            let mut stage = stage.borrow_mut();
            match result {
                Ok(value) => {
                    stage.install(value.unchecked_into::<GameIo>());
                }
                Err(err) => {
                    warn!(?err, "engine load failed");
                    stage.engine.abandon_loading();
                }
            }
        });
    }

    #[wasm_bindgen(js_name = isEngineReady)]
    pub fn is_engine_ready(&self) -> bool {
        self.stage.borrow().engine.is_ready()
    }

    /// Release every held key, e.g. when the page loses focus.
    #[wasm_bindgen(js_name = releaseKeys)]
    pub fn release_keys(&self) {
        self.keys.borrow_mut().reset();
    }

    /// Tear the view down now instead of waiting for `free`.
    pub fn unmount(self) {
        debug!("unmounting view");
    }
}

impl GameCanvas {
    fn try_mount(ids: &LayerIds, config: RenderConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let mut main = CanvasLayer::find(&document, &ids.main)?;
        let mut overlay = CanvasLayer::find(&document, &ids.overlay)?;
        main.resize(CANVAS_WIDTH, CANVAS_HEIGHT);
        overlay.resize(CANVAS_WIDTH, CANVAS_HEIGHT);

        let keys = Rc::new(RefCell::new(KeyRegistry::new()));
        let stage = Rc::new(RefCell::new(Stage::new(config, main, overlay)));

        let listeners = KeyListeners::attach(&window, Rc::clone(&keys))?;

        let ticker = {
            let stage = Rc::clone(&stage);
            let keys = Rc::clone(&keys);
            Interval::new(TICK_MS, move || {
                let (Ok(mut stage), Ok(mut keys)) = (stage.try_borrow_mut(), keys.try_borrow_mut())
                else {
                    return;
                };
                stage.tick(&mut keys);
            })
        };

        debug!(main = %ids.main, overlay = %ids.overlay, "view mounted");
        Ok(Self {
            stage,
            keys,
            _listeners: listeners,
            _ticker: ticker,
        })
    }

    /// Board size of the installed engine, if any.
    pub fn board_size(&self) -> Option<(u32, u32)> {
        self.stage
            .borrow()
            .engine
            .ready()
            .map(|engine| (engine.width(), engine.height()))
    }
}
