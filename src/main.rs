mod app;
mod domain;
mod infra;
#[cfg(test)]
mod tests;
mod ui;
mod usecase;

use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::infra::config::default_webview_data_dir;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trivia_admin=info")),
        )
        .init();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create webview data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Trivia Admin"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}
