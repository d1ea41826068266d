mod components;

use components::handlers::{SharedBinder, handle_file_change};
use components::preview_target::{ImageSurface, find_file_input, locate_preview_image};
use gloo_events::EventListener;
use image_preview_core::bind;
use image_preview_core::config::{INPUT_ID, TARGET_SELECTOR, log_level};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys::Document;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(log_level()));

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("No document available; image preview disabled");
        return;
    };

    if still_parsing(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| run_initialize()).forget();
    } else {
        run_initialize();
    }
}

/// Binds the preview to the admin form's image input.
/// Only the first call per page load has any effect.
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    bind_document(&document).map(|_| ())
}

/// `document.readyState` before `DOMContentLoaded` has fired.
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn run_initialize() {
    if let Err(e) = initialize() {
        log::error!("Image preview setup failed: {:?}", e);
    }
}

/// Returns whether a change listener was registered.
fn bind_document(document: &Document) -> Result<bool, JsValue> {
    let input = find_file_input(document, INPUT_ID);

    let bound = bind(input, |input| {
        let (image, origin) = locate_preview_image(document, TARGET_SELECTOR)?;
        Ok::<_, JsValue>((ImageSurface::new(image, input.clone()), origin))
    })?;

    let Some((input, binder)) = bound else {
        log::debug!("No #{} on this page; image preview idle", INPUT_ID);
        return Ok(false);
    };

    log::debug!("Image preview bound to #{} ({:?} target)", INPUT_ID, binder.origin());
    let binder: SharedBinder = Rc::new(RefCell::new(binder));
    EventListener::new(&input, "change", move |event| handle_file_change(&binder, event)).forget();
    Ok(true)
}
