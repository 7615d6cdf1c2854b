//! Heartnote - an animated birthday greeting
//! Built with iced, with background music through rodio

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod audio;
mod content;
mod features;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // HEARTNOTE_LOG wins over RUST_LOG; default to info
    let filter = EnvFilter::try_from_env("HEARTNOTE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Run as a daemon so the close request can release the audio first
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
