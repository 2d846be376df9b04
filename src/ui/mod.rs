//! Immediate-mode UI helpers
//!
//! - Rectangle-based layout, rebuilt every frame
//! - Mouse state sampled once per frame
//! - Flat toolbar buttons, palette swatches and RGB sliders
//!
//! Drawing goes straight through macroquad.

mod input;
mod rect;
mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use theme::*;
pub use widgets::*;
