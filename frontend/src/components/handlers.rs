use super::preview_target::ImageSurface;
use super::utils::selected_files;
use gloo_file::futures::read_as_data_url;
use image_preview_core::{DataUrl, PendingRead, PreviewBinder, ReadId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

pub type SharedBinder = Rc<RefCell<PreviewBinder<ImageSurface>>>;

pub fn handle_file_change(binder: &SharedBinder, event: &Event) {
    let Some(PendingRead { id, file }) = binder.borrow_mut().begin_read(selected_files(event)) else {
        return;
    };

    let binder = Rc::clone(binder);
    spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(raw) => handle_read_complete(&binder, id, raw),
            // Nothing is shown for a failed or aborted read.
            Err(e) => log::warn!("Preview read {} of {} failed: {:?}", id, file.name(), e),
        }
    });
}

fn handle_read_complete(binder: &SharedBinder, id: ReadId, raw: String) {
    let url = match DataUrl::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Preview read {} returned {}", id, e);
            return;
        }
    };

    if let Err(e) = binder.borrow_mut().complete_read(id, &url) {
        log::error!("Failed to show preview {}: {:?}", id, e);
    }
}
