//! UV atlas mapper
//!
//! Places every face inside the 64x64 skin atlas using the standard
//! block-avatar unwrap. For each (part, layer) anchor the six faces are laid
//! out as:
//!
//! ```text
//!        T  B
//!     R  F  L  Bk
//! ```
//!
//! The table is computed once per process and shared.

use std::sync::OnceLock;

use super::model::{BodyPart, FaceId, Layer, Orientation, FACE_COUNT};

/// Atlas side length in pixels
pub const ATLAS_SIZE: usize = 64;

/// Top-left corner of each (part, layer) unwrap
const ANCHORS: [(BodyPart, Layer, (usize, usize)); 12] = [
    (BodyPart::Head, Layer::Base, (0, 0)),
    (BodyPart::Head, Layer::Overlay, (32, 0)),
    (BodyPart::RightLeg, Layer::Base, (0, 16)),
    (BodyPart::Body, Layer::Base, (16, 16)),
    (BodyPart::RightArm, Layer::Base, (40, 16)),
    (BodyPart::RightLeg, Layer::Overlay, (0, 32)),
    (BodyPart::Body, Layer::Overlay, (16, 32)),
    (BodyPart::RightArm, Layer::Overlay, (40, 32)),
    (BodyPart::LeftLeg, Layer::Overlay, (0, 48)),
    (BodyPart::LeftLeg, Layer::Base, (16, 48)),
    (BodyPart::LeftArm, Layer::Base, (32, 48)),
    (BodyPart::LeftArm, Layer::Overlay, (48, 48)),
];

/// Axis-aligned rectangle in atlas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Region {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> usize {
        self.x + self.w
    }

    pub fn bottom(&self) -> usize {
        self.y + self.h
    }

    pub fn overlaps(&self, other: &Region) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    #[cfg(test)]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Face → atlas region lookup table
#[derive(Debug, Clone)]
pub struct UvMap {
    regions: [Region; FACE_COUNT],
}

impl UvMap {
    /// Build the table from the anchor list
    pub fn new() -> Self {
        let mut regions = [Region::default(); FACE_COUNT];
        for (part, layer, (ax, ay)) in ANCHORS {
            let dims = part.dimensions();
            let (dx, dy, dz) = (dims.width, dims.height, dims.depth);
            for orientation in Orientation::ALL {
                let region = match orientation {
                    Orientation::Top => Region::new(ax + dz, ay, dx, dz),
                    Orientation::Bottom => Region::new(ax + dz + dx, ay, dx, dz),
                    Orientation::Right => Region::new(ax, ay + dz, dz, dy),
                    Orientation::Front => Region::new(ax + dz, ay + dz, dx, dy),
                    Orientation::Left => Region::new(ax + dz + dx, ay + dz, dz, dy),
                    Orientation::Back => Region::new(ax + dz + dx + dz, ay + dz, dx, dy),
                };
                regions[FaceId::new(part, orientation, layer).index()] = region;
            }
        }

        let map = Self { regions };
        debug_assert!(map.find_overlap().is_none(), "atlas regions overlap");
        map
    }

    /// Process-wide cached table
    pub fn canonical() -> &'static UvMap {
        static MAP: OnceLock<UvMap> = OnceLock::new();
        MAP.get_or_init(UvMap::new)
    }

    /// Atlas rectangle covered by a face
    pub fn region_for(&self, face: FaceId) -> Region {
        self.regions[face.index()]
    }

    /// Absolute atlas pixel of a grid cell, with the bottom-face row flip applied.
    /// Panics when (row, col) lies outside the face
    pub fn atlas_coord(&self, face: FaceId, row: usize, col: usize) -> (usize, usize) {
        let region = self.region_for(face);
        assert!(
            row < region.h && col < region.w,
            "cell ({}, {}) outside {} ({}x{})",
            row,
            col,
            face,
            region.w,
            region.h
        );
        let atlas_row = if face.orientation.is_row_flipped() {
            region.h - 1 - row
        } else {
            row
        };
        (region.x + col, region.y + atlas_row)
    }

    /// Smallest top-left corner over all faces of one (part, layer)
    pub fn layer_origin(&self, part: BodyPart, layer: Layer) -> (usize, usize) {
        Orientation::ALL
            .into_iter()
            .map(|o| self.region_for(FaceId::new(part, o, layer)))
            .fold((ATLAS_SIZE, ATLAS_SIZE), |(mx, my), r| (mx.min(r.x), my.min(r.y)))
    }

    /// First pair of faces whose regions overlap or leave the atlas, if any
    pub fn find_overlap(&self) -> Option<(FaceId, FaceId)> {
        let faces: Vec<FaceId> = FaceId::all().collect();
        for (i, a) in faces.iter().enumerate() {
            let ra = self.region_for(*a);
            if ra.right() > ATLAS_SIZE || ra.bottom() > ATLAS_SIZE {
                return Some((*a, *a));
            }
            for b in &faces[i + 1..] {
                if ra.overlaps(&self.region_for(*b)) {
                    return Some((*a, *b));
                }
            }
        }
        None
    }
}

impl Default for UvMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_disjoint_and_in_bounds() {
        let map = UvMap::new();
        assert_eq!(map.find_overlap(), None);

        let regions: Vec<Region> = FaceId::all().map(|f| map.region_for(f)).collect();
        assert_eq!(regions.len(), 72);
        for (i, a) in regions.iter().enumerate() {
            assert!(a.right() <= ATLAS_SIZE && a.bottom() <= ATLAS_SIZE);
            for b in &regions[i + 1..] {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_region_sizes_match_grids() {
        let map = UvMap::canonical();
        for face in FaceId::all() {
            let r = map.region_for(face);
            assert_eq!((r.w, r.h), face.grid_size(), "{}", face);
        }
    }

    #[test]
    fn test_known_regions() {
        let map = UvMap::canonical();
        let head_front = FaceId::new(BodyPart::Head, Orientation::Front, Layer::Base);
        assert_eq!(map.region_for(head_front), Region::new(8, 8, 8, 8));

        let body_back = FaceId::new(BodyPart::Body, Orientation::Back, Layer::Base);
        assert_eq!(map.region_for(body_back), Region::new(32, 20, 8, 12));

        let left_arm_overlay_top = FaceId::new(BodyPart::LeftArm, Orientation::Top, Layer::Overlay);
        assert_eq!(map.region_for(left_arm_overlay_top), Region::new(52, 48, 4, 4));
    }

    #[test]
    fn test_bottom_face_rows_are_flipped() {
        let map = UvMap::canonical();
        let bottom = FaceId::new(BodyPart::Head, Orientation::Bottom, Layer::Base);
        // Region (16, 0, 8, 8)
        assert_eq!(map.atlas_coord(bottom, 0, 0), (16, 7));
        assert_eq!(map.atlas_coord(bottom, 7, 3), (19, 0));

        let top = FaceId::new(BodyPart::Head, Orientation::Top, Layer::Base);
        assert_eq!(map.atlas_coord(top, 0, 0), (8, 0));
    }

    #[test]
    fn test_layer_origin() {
        let map = UvMap::canonical();
        assert_eq!(map.layer_origin(BodyPart::Head, Layer::Base), (0, 0));
        assert_eq!(map.layer_origin(BodyPart::Head, Layer::Overlay), (32, 0));
        assert_eq!(map.layer_origin(BodyPart::LeftArm, Layer::Base), (32, 48));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_atlas_coord_out_of_range_panics() {
        let face = FaceId::new(BodyPart::Body, Orientation::Left, Layer::Base);
        UvMap::canonical().atlas_coord(face, 0, 4);
    }
}
