//! Screen layout of the pixel editor
//!
//! Shows one body part at a time. Faces keep their atlas arrangement:
//! each layer is placed relative to the smallest corner of its own six
//! regions, with the overlay layer shifted right by a fixed number of cells.
//! Rows are shown in grid order (no bottom-face flip on screen).

use super::surface::CellRef;
use crate::skin::{BodyPart, FaceId, Layer, Orientation, UvMap};
use crate::ui::Rect;

/// Cell placement and hit-testing for the selected part
#[derive(Debug, Clone, Copy)]
pub struct EditorLayout {
    /// Screen position of the top-left of the base layer
    pub origin: (f32, f32),
    pub cell_size: f32,
    /// Overlay layer offset in cells
    pub overlay_column_offset: usize,
    pub part: BodyPart,
}

impl EditorLayout {
    pub fn new(origin: (f32, f32), cell_size: f32, overlay_column_offset: usize, part: BodyPart) -> Self {
        Self {
            origin,
            cell_size,
            overlay_column_offset,
            part,
        }
    }

    /// Top-left of a face in cell units, relative to `origin`
    fn face_offset(&self, face: FaceId) -> (usize, usize) {
        let uv = UvMap::canonical();
        let region = uv.region_for(face);
        let (min_x, min_y) = uv.layer_origin(face.part, face.layer);
        let shift = match face.layer {
            Layer::Base => 0,
            Layer::Overlay => self.overlay_column_offset,
        };
        (region.x - min_x + shift, region.y - min_y)
    }

    /// Screen rectangle covered by a whole face
    pub fn face_rect(&self, face: FaceId) -> Rect {
        let (cx, cy) = self.face_offset(face);
        let (w, h) = face.grid_size();
        Rect::new(
            self.origin.0 + cx as f32 * self.cell_size,
            self.origin.1 + cy as f32 * self.cell_size,
            w as f32 * self.cell_size,
            h as f32 * self.cell_size,
        )
    }

    /// Screen rectangle of one cell
    pub fn cell_rect(&self, cell: CellRef) -> Rect {
        let face = self.face_rect(cell.face);
        Rect::new(
            face.x + cell.col as f32 * self.cell_size,
            face.y + cell.row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Faces of the selected part, base layer first
    pub fn faces(&self) -> impl Iterator<Item = FaceId> {
        let part = self.part;
        Layer::ALL.into_iter().flat_map(move |layer| {
            Orientation::ALL
                .into_iter()
                .map(move |orientation| FaceId::new(part, orientation, layer))
        })
    }

    /// Cell under a screen point, if any
    pub fn hit_test(&self, x: f32, y: f32) -> Option<CellRef> {
        self.faces().find_map(|face| {
            let rect = self.face_rect(face);
            if !rect.contains(x, y) {
                return None;
            }
            let (w, h) = face.grid_size();
            let col = (((x - rect.x) / self.cell_size) as usize).min(w - 1);
            let row = (((y - rect.y) / self.cell_size) as usize).min(h - 1);
            Some(CellRef::new(face, row, col))
        })
    }

    /// Bounding box of both layers
    pub fn bounds(&self) -> Rect {
        let mut right = self.origin.0;
        let mut bottom = self.origin.1;
        for face in self.faces() {
            let r = self.face_rect(face);
            right = right.max(r.right());
            bottom = bottom.max(r.bottom());
        }
        Rect::new(self.origin.0, self.origin.1, right - self.origin.0, bottom - self.origin.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(part: BodyPart) -> EditorLayout {
        EditorLayout::new((10.0, 20.0), 17.0, 33, part)
    }

    #[test]
    fn test_head_front_placement() {
        let l = layout(BodyPart::Head);
        let front = FaceId::new(BodyPart::Head, Orientation::Front, Layer::Base);
        // Region (8, 8) relative to head origin (0, 0)
        assert_eq!(l.face_rect(front), Rect::new(10.0 + 136.0, 20.0 + 136.0, 136.0, 136.0));

        let overlay = FaceId::new(BodyPart::Head, Orientation::Front, Layer::Overlay);
        // Region (40, 8) relative to (32, 0), shifted by 33 cells
        assert_eq!(l.face_rect(overlay).x, 10.0 + (8.0 + 33.0) * 17.0);
        assert_eq!(l.face_rect(overlay).y, 20.0 + 8.0 * 17.0);
    }

    #[test]
    fn test_hit_test_finds_cells() {
        let l = layout(BodyPart::Head);
        let front = FaceId::new(BodyPart::Head, Orientation::Front, Layer::Base);
        let hit = l.hit_test(10.0 + 136.0 + 1.0, 20.0 + 136.0 + 17.0 * 2.0 + 5.0);
        assert_eq!(hit, Some(CellRef::new(front, 2, 0)));

        // Top-left corner of the head unwrap is unused space
        assert_eq!(l.hit_test(12.0, 22.0), None);
        assert_eq!(l.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn test_hit_test_round_trips_cell_rects() {
        for part in BodyPart::ALL {
            let l = layout(part);
            for face in l.faces() {
                let (w, h) = face.grid_size();
                for row in 0..h {
                    for col in 0..w {
                        let cell = CellRef::new(face, row, col);
                        let r = l.cell_rect(cell);
                        assert_eq!(l.hit_test(r.center_x(), r.center_y()), Some(cell));
                    }
                }
            }
        }
    }

    #[test]
    fn test_layers_do_not_overlap_on_screen() {
        for part in BodyPart::ALL {
            let l = layout(part);
            let base_right = l
                .faces()
                .filter(|f| f.layer == Layer::Base)
                .map(|f| l.face_rect(f).right())
                .fold(0.0, f32::max);
            let overlay_left = l
                .faces()
                .filter(|f| f.layer == Layer::Overlay)
                .map(|f| l.face_rect(f).x)
                .fold(f32::MAX, f32::min);
            assert!(base_right <= overlay_left, "{}", part);
        }
    }

    #[test]
    fn test_bounds_cover_everything() {
        let l = layout(BodyPart::Body);
        let b = l.bounds();
        for face in l.faces() {
            let r = l.face_rect(face);
            assert!(r.x >= b.x && r.right() <= b.right() && r.bottom() <= b.bottom());
        }
    }
}
