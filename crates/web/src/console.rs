//! Browser console output for `tracing` events and panics.

use tracing_subscriber::layer::SubscriberExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init_console() {
    console_error_panic_hook::set_once();

    let config = WASMLayerConfigBuilder::new()
        .set_report_logs_in_timings(false)
        .set_max_level(tracing::Level::DEBUG)
        .build();
    let subscriber = tracing_subscriber::registry().with(WASMLayer::new(config));
    // The host page may already have installed a subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
