//! Pixel editor
//!
//! - Palette of user colors with a selected slot
//! - Gesture handling: click, drag strokes, double-click repeat, pick, jitter
//! - Screen layout and hit-testing of the face grids of one body part

mod layout;
mod palette;
mod surface;

pub use layout::EditorLayout;
pub use surface::{
    CellRef, DroppedFile, Gesture, GestureOutcome, MultiClick, PixelEditor, PointerButton,
};
