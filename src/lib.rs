mod app;

pub mod chat;
pub mod components;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod gemini;
pub mod onboarding;
pub mod pages;
pub mod routes;
pub mod storage;
pub mod theme;
pub mod types;
pub mod utils;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting {}", config::APP_NAME);
    yew::Renderer::<App>::new().render();
}
