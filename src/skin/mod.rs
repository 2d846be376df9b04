//! Skin data model and atlas synchronization
//!
//! ## Overview
//!
//! - **model**: body parts, orientations, layers and the 72 face grids
//! - **uv_map**: where each face lives inside the 64x64 atlas
//! - **atlas**: the atlas raster, image import (nearest resample) and PNG export
//! - **sync**: `SkinDocument`, which keeps grids, atlas and the 3D view consistent
//!
//! ## Layers
//!
//! Base faces are always opaque: clearing or importing a transparent pixel
//! yields black. Overlay faces keep "no paint" as real transparency.

mod atlas;
mod color;
mod error;
mod model;
mod sync;
mod uv_map;

pub use atlas::Atlas;
pub use color::Rgb;
pub use error::SkinError;
pub use model::{BodyPart, FaceId, Layer, Orientation, FACE_COUNT};
pub use sync::{FaceImage, Presentation, SkinDocument};
pub use uv_map::UvMap;

#[cfg(test)]
pub use sync::RecordingPresentation;
