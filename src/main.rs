//! blockskin: a voxel avatar skin editor
//!
//! Paint the six boxes of a block avatar cell by cell and watch the result
//! on a 3D model:
//! - 64x64 skin atlas with the standard unwrap, base and overlay layers
//! - 2D face grids kept in sync with the atlas and the 3D preview
//! - Click/drag painting, double-click repeat, color pick, brightness jitter
//! - PNG import (drop or open dialog) and export

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod editor;
mod preview;
mod skin;
mod ui;

use macroquad::prelude::*;
use tracing::info;

use app::App;
use config::EditorConfig;
use ui::{MouseState, UiContext};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("blockskin v{}", VERSION),
        window_width: 1600,
        window_height: 900,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt().without_time().compact().init();

    let config = EditorConfig::load_platform();
    // Wall clock works on both native and web
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut app = App::new(config, seed);
    let mut ui_ctx = UiContext::new();

    info!("blockskin v{} started", VERSION);

    loop {
        ui_ctx.begin_frame(MouseState::poll());
        app.frame(&mut ui_ctx);
        next_frame().await;
    }
}
