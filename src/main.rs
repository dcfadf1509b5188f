#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod app;
mod key_input;
mod style;

use app::App;
use touch_typing_lib::Config;
use tracing::info;

fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load_or_default();
    info!("starting {}", config.window.title);

    let builder = dioxus::LaunchBuilder::new();
    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop_config(&config));
    builder.with_context(config).launch(App);
}

#[cfg(feature = "desktop")]
fn desktop_config(config: &Config) -> dioxus::desktop::Config {
    use dioxus::desktop::{LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(config.window.title.as_str())
        .with_inner_size(LogicalSize::new(
            f64::from(config.window.width),
            f64::from(config.window.height),
        ))
        .with_resizable(false);

    dioxus::desktop::Config::new().with_window(window)
}
