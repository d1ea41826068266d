pub mod handlers;
pub mod preview_target;
pub mod utils;

#[cfg(all(test, target_arch = "wasm32"))]
pub mod test_support;
