#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod logging;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    log::info!(
        "questline starting against {} for user {}",
        config::endpoints().base(),
        config::user_id()
    );
    yew::Renderer::<app::App>::new().render();
}
