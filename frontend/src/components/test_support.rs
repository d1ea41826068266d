use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{DataTransfer, Document, Element, File, HtmlInputElement};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Appends a `<div>` holding `html` to the body.
pub fn mount(document: &Document, html: &str) -> Element {
    let container = document.create_element("div").unwrap();
    container.set_inner_html(html);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

/// Puts text-content files on a file input, as a user selection would.
pub fn attach_files(input: &HtmlInputElement, files: &[(&str, &str)]) {
    let transfer = DataTransfer::new().unwrap();
    for (name, contents) in files {
        let bits = Array::of1(&JsValue::from_str(contents));
        let file = File::new_with_str_sequence(&bits, name).unwrap();
        transfer.items().add_with_file(&file).unwrap();
    }
    input.set_files(transfer.files().as_ref());
}
