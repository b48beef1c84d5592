use iced::{Application, Settings, Size};
use imprint_core::EditorConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::ImprintApp;

fn main() -> anyhow::Result<()> {
    let config = EditorConfig::load_or_default()?;

    // RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!("Starting Imprint v{}", env!("CARGO_PKG_VERSION"));

    let size = Size::new(config.window_width, config.window_height);
    ImprintApp::run(Settings {
        window: iced::window::Settings {
            size,
            min_size: Some(Size::new(800.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })?;

    Ok(())
}
