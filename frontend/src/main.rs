mod api;
mod app;
mod charts;
mod components;
mod config;
mod context;
mod error;
mod format;
mod forms;
mod models;
mod notify;
mod pages;
mod refresh;
mod route;
mod session;
mod storage;
mod theme;

use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    // applied before the first render
    let theme = theme::apply_stored_theme(&BrowserStorage);
    log::info!("starting with {} theme", theme.as_str());

    yew::Renderer::<app::App>::new().render();
}
