#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    iced::application(
        app::MemeBoardApp::build,
        app::MemeBoardApp::handle_update,
        app::MemeBoardApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::MemeBoardApp::current_theme)
    .subscription(app::MemeBoardApp::handle_subscription)
    .window_size((1100.0, 800.0))
    .run()
}
