use gloo_file::File as GlooFile;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

/// Files selected on the input that fired `event`, in list order.
pub fn selected_files(event: &Event) -> impl Iterator<Item = GlooFile> + use<> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .into_iter()
        .flat_map(|input| input_files(&input))
}

pub fn input_files(input: &HtmlInputElement) -> impl Iterator<Item = GlooFile> + use<> {
    input.files().into_iter().flat_map(|list| {
        (0..list.length())
            .filter_map(move |i| list.item(i))
            .map(GlooFile::from)
    })
}
