//! Face synchronizer
//!
//! `SkinDocument` owns the face grids and the atlas and keeps them equal
//! under the UV mapping. Every edit goes through it:
//!
//! - `paint_cell` writes one cell to the grid and the atlas, then delivers a
//!   regenerated face image (or defers that until `flush` during a stroke)
//! - `import_atlas` replaces the atlas and reads every face back out of it
//!
//! Face images always cover the whole face. The bottom face is emitted upside
//! down, matching its storage in the atlas.

use image::{Rgba, RgbaImage};
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::atlas::{Atlas, TRANSPARENT};
use super::model::{BodyPart, Cell, FaceGrid, FaceId, Layer, SkinModel};
use super::uv_map::UvMap;
use super::Rgb;

/// Renderable RGBA image of a single face
pub type FaceImage = RgbaImage;

/// Receiver of face images and visibility changes (the 3D view)
pub trait Presentation {
    /// Replace the texture shown on one face
    fn update_face_image(&mut self, face: FaceId, image: &FaceImage);

    /// Show or hide one (part, layer) box
    fn set_visible(&mut self, part: BodyPart, layer: Layer, visible: bool);
}

/// RGBA written to the atlas for a cell
fn cell_to_rgba(cell: Cell) -> [u8; 4] {
    match cell {
        Some(color) => color.to_rgba(),
        None => TRANSPARENT,
    }
}

/// Cell read back from an atlas pixel. Alpha is otherwise ignored
fn rgba_to_cell(rgba: [u8; 4], layer: Layer) -> Cell {
    if rgba[3] == 0 {
        layer.empty_cell()
    } else {
        Some(Rgb::new(rgba[0], rgba[1], rgba[2]))
    }
}

/// Build the renderable image for a face grid
pub fn render_face_image(grid: &FaceGrid, row_flipped: bool) -> FaceImage {
    let mut image = RgbaImage::new(grid.width as u32, grid.height as u32);
    for row in 0..grid.height {
        let src_row = if row_flipped { grid.height - 1 - row } else { row };
        for col in 0..grid.width {
            let rgba = cell_to_rgba(grid.get(src_row, col));
            image.put_pixel(col as u32, row as u32, Rgba(rgba));
        }
    }
    image
}

/// The editing session's skin: face grids, atlas and pending redraws
#[derive(Debug, Clone)]
pub struct SkinDocument {
    model: SkinModel,
    atlas: Atlas,
    uv: &'static UvMap,
    /// Faces whose image must be regenerated on the next flush
    dirty: BTreeSet<FaceId>,
    /// Visibility per (part, layer)
    visible: [[bool; 2]; 6],
}

impl SkinDocument {
    /// Default skin with the atlas written from the default grids
    pub fn new() -> Self {
        let mut doc = Self {
            model: SkinModel::new(),
            atlas: Atlas::new(),
            uv: UvMap::canonical(),
            dirty: BTreeSet::new(),
            visible: [[true; 2]; 6],
        };
        for face in FaceId::all() {
            doc.write_face_to_atlas(face);
        }
        doc
    }

    #[cfg(test)]
    pub fn model(&self) -> &SkinModel {
        &self.model
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    #[cfg(test)]
    pub fn uv_map(&self) -> &'static UvMap {
        self.uv
    }

    /// Current cell content. Panics when out of range
    pub fn cell(&self, face: FaceId, row: usize, col: usize) -> Cell {
        self.model.face(face).get(row, col)
    }

    /// Set one cell and deliver the regenerated face image immediately
    #[cfg(test)]
    pub fn paint_cell(
        &mut self,
        face: FaceId,
        row: usize,
        col: usize,
        cell: Cell,
        presentation: &mut dyn Presentation,
    ) {
        self.paint_cell_deferred(face, row, col, cell);
        self.dirty.remove(&face);
        self.deliver(face, presentation);
    }

    /// Set one cell in the grid and atlas; the face image waits for `flush`
    pub fn paint_cell_deferred(&mut self, face: FaceId, row: usize, col: usize, cell: Cell) {
        let cell = face.layer.normalize(cell);
        let (x, y) = self.uv.atlas_coord(face, row, col);
        self.model.face_mut(face).set(row, col, cell);
        self.atlas.set_pixel(x, y, cell_to_rgba(cell));
        self.dirty.insert(face);
    }

    /// Faces waiting for a redraw
    #[cfg(test)]
    pub fn dirty_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.dirty.iter().copied()
    }

    /// Deliver images for every face edited since the last flush.
    /// Returns how many faces were redrawn
    pub fn flush(&mut self, presentation: &mut dyn Presentation) -> usize {
        let dirty = std::mem::take(&mut self.dirty);
        for &face in &dirty {
            self.deliver(face, presentation);
        }
        if !dirty.is_empty() {
            debug!("flushed {} face image(s)", dirty.len());
        }
        dirty.len()
    }

    /// Replace the atlas and rebuild every face grid and face image from it
    pub fn import_atlas(&mut self, atlas: Atlas, presentation: &mut dyn Presentation) {
        self.atlas = atlas;
        self.dirty.clear();
        for face in FaceId::all() {
            let (w, h) = face.grid_size();
            for row in 0..h {
                for col in 0..w {
                    let (x, y) = self.uv.atlas_coord(face, row, col);
                    let cell = rgba_to_cell(self.atlas.pixel(x, y), face.layer);
                    self.model.face_mut(face).set(row, col, cell);
                }
            }
        }
        // Translucent pixels become opaque, transparent base pixels black
        for face in FaceId::all() {
            self.write_face_to_atlas(face);
        }
        self.refresh_all(presentation);
        info!("imported atlas into {} faces", FaceId::all().count());
    }

    /// Reset to the default skin and redraw everything
    pub fn reset(&mut self, presentation: &mut dyn Presentation) {
        self.model.reset();
        for face in FaceId::all() {
            self.write_face_to_atlas(face);
        }
        self.dirty.clear();
        self.refresh_all(presentation);
    }

    /// Deliver every face image and visibility flag
    pub fn refresh_all(&self, presentation: &mut dyn Presentation) {
        for face in FaceId::all() {
            self.deliver(face, presentation);
        }
        for part in BodyPart::ALL {
            for layer in Layer::ALL {
                presentation.set_visible(part, layer, self.is_visible(part, layer));
            }
        }
    }

    /// Regenerated image for one face
    pub fn face_image(&self, face: FaceId) -> FaceImage {
        render_face_image(self.model.face(face), face.orientation.is_row_flipped())
    }

    pub fn is_visible(&self, part: BodyPart, layer: Layer) -> bool {
        self.visible[part as usize][layer as usize]
    }

    pub fn set_visible(
        &mut self,
        part: BodyPart,
        layer: Layer,
        visible: bool,
        presentation: &mut dyn Presentation,
    ) {
        self.visible[part as usize][layer as usize] = visible;
        presentation.set_visible(part, layer, visible);
    }

    fn deliver(&self, face: FaceId, presentation: &mut dyn Presentation) {
        presentation.update_face_image(face, &self.face_image(face));
    }

    fn write_face_to_atlas(&mut self, face: FaceId) {
        let (w, h) = face.grid_size();
        for row in 0..h {
            for col in 0..w {
                let (x, y) = self.uv.atlas_coord(face, row, col);
                let cell = self.model.face(face).get(row, col);
                self.atlas.set_pixel(x, y, cell_to_rgba(cell));
            }
        }
    }
}

impl Default for SkinDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation double that records every call
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPresentation {
    pub updates: Vec<(FaceId, FaceImage)>,
    pub visibility: Vec<(BodyPart, Layer, bool)>,
}

#[cfg(test)]
impl RecordingPresentation {
    pub fn updated_faces(&self) -> Vec<FaceId> {
        self.updates.iter().map(|(f, _)| *f).collect()
    }

    pub fn clear(&mut self) {
        self.updates.clear();
        self.visibility.clear();
    }
}

#[cfg(test)]
impl Presentation for RecordingPresentation {
    fn update_face_image(&mut self, face: FaceId, image: &FaceImage) {
        self.updates.push((face, image.clone()));
    }

    fn set_visible(&mut self, part: BodyPart, layer: Layer, visible: bool) {
        self.visibility.push((part, layer, visible));
    }
}
