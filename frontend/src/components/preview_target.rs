use image_preview_core::{PreviewSurface, TargetOrigin};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement, HtmlInputElement};

/// The preview `<img>` together with the file input whose container it
/// is appended to.
pub struct ImageSurface {
    image: HtmlImageElement,
    input: HtmlInputElement,
}

impl ImageSurface {
    pub fn new(image: HtmlImageElement, input: HtmlInputElement) -> Self {
        Self { image, input }
    }
}

impl PreviewSurface for ImageSurface {
    type Error = JsValue;

    fn set_source(&self, src: &str) -> Result<(), JsValue> {
        self.image.set_src(src);
        Ok(())
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), JsValue> {
        self.image.style().set_property(name, value)
    }

    fn attach(&self) -> Result<(), JsValue> {
        // appendChild moves the node to the end, so repeat calls are harmless
        match self.input.parent_node() {
            Some(parent) => parent.append_child(&self.image).map(|_| ()),
            None => {
                log::debug!("File input has no parent; preview stays detached");
                Ok(())
            }
        }
    }
}

pub fn find_file_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Reuses the first image matching `selector`, otherwise builds a detached one.
pub fn locate_preview_image(
    document: &Document,
    selector: &str,
) -> Result<(HtmlImageElement, TargetOrigin), JsValue> {
    let existing = document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlImageElement>().ok());

    match existing {
        Some(image) => Ok((image, TargetOrigin::Existing)),
        None => Ok((HtmlImageElement::new()?, TargetOrigin::Created)),
    }
}
