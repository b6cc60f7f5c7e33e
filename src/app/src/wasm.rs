//! WebAssembly FFI bindings for the browser shell
//!
//! The page calls `process_event` for user actions, `handle_response` when an
//! HTTP request or timer it was asked to run has finished, and `view` to redraw.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up logging when the module loads
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // fails only when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Process a bincode-serialized `Event`, returning the serialized effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("Failed to process event: {e:?}");
    }
    effects
}

/// Serialized `ViewModel`
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("Failed to serialize view model: {e:?}");
    }
    view
}

/// Resolve effect `id` (an HTTP response or an elapsed timer)
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("Failed to handle response for effect {id}: {e:?}");
    }
    effects
}
