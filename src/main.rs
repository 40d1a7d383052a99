mod components;
mod config;
mod error;
mod hooks;
mod models;
mod navigation;
mod services;
mod state;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("⚖️ Lexi IA - Asistente Legal iniciando...");

    yew::Renderer::<App>::new().render();
}
