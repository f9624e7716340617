//! Jadwal Kegiatan Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    mount_to_body(App);
}
