#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod tracker;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("logger should only be set once");
    leptos::mount::hydrate_body(App);
}
