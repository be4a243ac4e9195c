//! NovaBank - Desktop dashboard shell
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::{Size, window};
use nova_gui::app::App;
use nova_gui::component::LUCIDE_FONT_BYTES;
use nova_shell::ShellConfig;
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting NovaBank v{}", env!("CARGO_PKG_VERSION"));

    let config = ShellConfig::load();
    let window_config = config.window;

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(window_config.width, window_config.height),
            min_size: Some(Size::new(window_config.min_width, window_config.min_height)),
            ..Default::default()
        })
        .run()
}
