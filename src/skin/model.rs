//! Skin model schema: body parts, faces, layers and per-face cell grids
//!
//! The part set and every dimension are fixed. Each part is a box with six
//! orientations, and every orientation exists twice: once on the opaque base
//! layer and once on the transparent-capable overlay layer.

use std::fmt;
use std::str::FromStr;

use super::{Rgb, SkinError};

/// Content of one grid cell. `None` = no paint (transparent on overlay faces)
pub type Cell = Option<Rgb>;

/// Number of distinct faces (6 parts x 6 orientations x 2 layers)
pub const FACE_COUNT: usize = BodyPart::ALL.len() * Orientation::ALL.len() * Layer::ALL.len();

/// Box size of a body part in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// X extent (left to right)
    pub width: usize,
    /// Y extent (bottom to top)
    pub height: usize,
    /// Z extent (front to back)
    pub depth: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self { width, height, depth }
    }
}

/// The six boxes that make up the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Body,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    /// Fixed box size of this part
    pub const fn dimensions(&self) -> Dimensions {
        match self {
            BodyPart::Head => Dimensions::new(8, 8, 8),
            BodyPart::Body => Dimensions::new(8, 12, 4),
            BodyPart::LeftArm | BodyPart::RightArm => Dimensions::new(4, 12, 4),
            BodyPart::LeftLeg | BodyPart::RightLeg => Dimensions::new(4, 12, 4),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Body => "body",
            BodyPart::LeftArm => "left_arm",
            BodyPart::RightArm => "right_arm",
            BodyPart::LeftLeg => "left_leg",
            BodyPart::RightLeg => "right_leg",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyPart {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPart::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SkinError::UnknownPart(s.to_string()))
    }
}

/// Which side of a part's box a face covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Front,
        Orientation::Back,
        Orientation::Left,
        Orientation::Right,
        Orientation::Top,
        Orientation::Bottom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Front => "front",
            Orientation::Back => "back",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
        }
    }

    /// Grid size (columns, rows) of this side for a box of the given dimensions
    pub const fn grid_size(&self, dims: Dimensions) -> (usize, usize) {
        match self {
            Orientation::Front | Orientation::Back => (dims.width, dims.height),
            Orientation::Left | Orientation::Right => (dims.depth, dims.height),
            Orientation::Top | Orientation::Bottom => (dims.width, dims.depth),
        }
    }

    /// Bottom faces are stored upside down in the atlas and in face images
    pub const fn is_row_flipped(&self) -> bool {
        matches!(self, Orientation::Bottom)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| SkinError::UnknownOrientation(s.to_string()))
    }
}

/// Depth layer of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Always opaque; unpainted cells are black
    Base,
    /// Rendered slightly outside the base box; unpainted cells are transparent
    Overlay,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Base, Layer::Overlay];

    pub fn name(&self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Overlay => "overlay",
        }
    }

    /// Cell a fresh or cleared face holds on this layer
    pub const fn empty_cell(&self) -> Cell {
        match self {
            Layer::Base => Some(Rgb::BLACK),
            Layer::Overlay => None,
        }
    }

    /// Collapse "no paint" to black on the base layer
    pub fn normalize(&self, cell: Cell) -> Cell {
        match cell {
            None => self.empty_cell(),
            some => some,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| SkinError::UnknownLayer(s.to_string()))
    }
}

/// Identifies one paintable face: (part, orientation, layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId {
    pub part: BodyPart,
    pub orientation: Orientation,
    pub layer: Layer,
}

impl FaceId {
    pub const fn new(part: BodyPart, orientation: Orientation, layer: Layer) -> Self {
        Self { part, orientation, layer }
    }

    /// Parse from the three snake_case names, e.g. `("head", "front", "base")`
    #[cfg(test)]
    pub fn parse(part: &str, orientation: &str, layer: &str) -> Result<Self, SkinError> {
        Ok(Self::new(part.parse()?, orientation.parse()?, layer.parse()?))
    }

    /// Grid size (columns, rows)
    pub const fn grid_size(&self) -> (usize, usize) {
        self.orientation.grid_size(self.part.dimensions())
    }

    /// Dense index in 0..FACE_COUNT
    pub fn index(&self) -> usize {
        (self.part.index() * Layer::ALL.len() + self.layer.index()) * Orientation::ALL.len()
            + self.orientation.index()
    }

    /// Every face, grouped by part then layer
    pub fn all() -> impl Iterator<Item = FaceId> {
        BodyPart::ALL.into_iter().flat_map(|part| {
            Layer::ALL.into_iter().flat_map(move |layer| {
                Orientation::ALL
                    .into_iter()
                    .map(move |orientation| FaceId::new(part, orientation, layer))
            })
        })
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.part, self.orientation, self.layer)
    }
}

/// Row-major grid of cells backing one face
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl FaceGrid {
    /// Grid filled with a single cell value
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Cell at (row, col). Panics when out of range
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite the cell at (row, col). Panics when out of range
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let offset = self.offset(row, col);
        self.cells[offset] = cell;
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Iterate rows top to bottom
    #[cfg(test)]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) outside {}x{} face grid",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width + col
    }
}

/// All 72 face grids of a character
#[derive(Debug, Clone, PartialEq)]
pub struct SkinModel {
    faces: Vec<FaceGrid>,
}

impl SkinModel {
    /// Default skin: base faces black, overlay faces empty
    pub fn new() -> Self {
        let mut faces: Vec<Option<FaceGrid>> = vec![None; FACE_COUNT];
        for face in FaceId::all() {
            let (w, h) = face.grid_size();
            faces[face.index()] = Some(FaceGrid::filled(w, h, face.layer.empty_cell()));
        }
        Self {
            faces: faces.into_iter().flatten().collect(),
        }
    }

    pub fn face(&self, face: FaceId) -> &FaceGrid {
        &self.faces[face.index()]
    }

    pub fn face_mut(&mut self, face: FaceId) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }

    /// Reset every face to its layer default
    pub fn reset(&mut self) {
        for face in FaceId::all() {
            self.face_mut(face).fill(face.layer.empty_cell());
        }
    }
}

impl Default for SkinModel {
    fn default() -> Self {
        Self::new()
    }
}
