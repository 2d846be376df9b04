//! Pixel editor surface
//!
//! Translates pointer gestures on the 2D cell grid into `SkinDocument` edits.
//!
//! - Primary button paints the selected palette color (optionally jittered)
//! - Secondary button clears (overlay → transparent, base → black)
//! - Pick mode samples the pressed cell into the selected palette slot, once
//! - Dragging repeats the press gesture on every entered cell; grid and atlas
//!   update immediately, face images are pushed once on release
//! - Pressing the same cell again within the double-click window repeats the
//!   gesture on that cell, the face's previous stroke or the whole face,
//!   depending on `MultiClick`
//! - Wheel cycles the palette; dropping an image file imports it

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::palette::Palette;
use crate::config::EditorConfig;
use crate::skin::{Atlas, FaceId, Presentation, Rgb, SkinDocument, SkinError};

/// One cell of one face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub face: FaceId,
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(face: FaceId, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }
}

/// Mouse button driving a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Paint (or pick)
    Primary,
    /// Clear
    Secondary,
}

/// File handed to the editor by a drop or an open dialog
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: String,
    /// MIME type when the source provides one
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    /// Decode into an atlas, rejecting anything that is not an image
    pub fn decode(&self) -> Result<Atlas, SkinError> {
        if let Some(mime) = &self.mime {
            if !mime.starts_with("image/") {
                return Err(SkinError::NotAnImage(format!("{} ({})", self.name, mime)));
            }
        }
        Atlas::decode(&self.bytes)
    }
}

/// User input, resolved to cells by the layout
#[derive(Debug, Clone)]
pub enum Gesture {
    /// Button pressed over a cell; `time_ms` is a monotonic timestamp
    PointerDown {
        cell: CellRef,
        button: PointerButton,
        time_ms: f64,
    },
    /// Pointer moved onto another cell while a button is held
    PointerEnter { cell: CellRef },
    /// Button released (anywhere)
    PointerUp,
    /// File dropped onto the editor
    Drop(DroppedFile),
    /// Wheel moved over the editor; positive = down
    WheelScroll { delta: f32 },
}

/// What a gesture did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No state changed
    Ignored,
    /// Cells were painted or cleared
    Painted,
    /// A color was copied into the palette
    Picked(Rgb),
    /// Pending face images were delivered
    StrokeFinished,
    /// The atlas was replaced and every face rebuilt
    Imported,
    /// Palette selection moved
    SelectionChanged,
}

/// What a quick second press on the same cell does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MultiClick {
    /// Apply the gesture to the pressed cell again
    #[default]
    RepeatCell,
    /// Re-apply the gesture to the face's stroke preceding the first press
    LastStroke,
    /// Apply the gesture to every cell of the pressed face
    FillFace,
}

/// Press recorded for multi-click detection
#[derive(Debug, Clone)]
struct LastPress {
    cell: CellRef,
    button: PointerButton,
    time_ms: f64,
    /// Face stroke as it was before this press
    replay_stroke: Option<Vec<CellRef>>,
}

/// Cells touched between a press and its release
#[derive(Debug, Clone)]
struct Stroke {
    button: PointerButton,
    cells: Vec<CellRef>,
}

/// Editor state: palette, modes and in-flight stroke
#[derive(Debug)]
pub struct PixelEditor {
    pub palette: Palette,
    /// Perturb painted colors by a random brightness offset
    pub jitter: bool,
    /// Next primary press samples instead of painting
    pub pick_mode: bool,
    jitter_range: i16,
    double_click_ms: f64,
    multi_click: MultiClick,
    rng: StdRng,
    stroke: Option<Stroke>,
    last_press: Option<LastPress>,
    /// Most recent completed stroke per face
    last_strokes: HashMap<FaceId, Vec<CellRef>>,
}

impl PixelEditor {
    /// Editor with the given config; `seed` drives jitter
    pub fn new(config: &EditorConfig, seed: u64) -> Self {
        Self {
            palette: Palette::with_colors(config.palette.clone()),
            jitter: false,
            pick_mode: false,
            jitter_range: config.jitter_range.clamp(0, 255),
            double_click_ms: config.double_click_ms,
            multi_click: config.multi_click,
            rng: StdRng::seed_from_u64(seed),
            stroke: None,
            last_press: None,
            last_strokes: HashMap::new(),
        }
    }

    /// Whether a button is currently held over the grid
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Dispatch one gesture
    pub fn handle(
        &mut self,
        gesture: Gesture,
        doc: &mut SkinDocument,
        presentation: &mut dyn Presentation,
    ) -> GestureOutcome {
        match gesture {
            Gesture::PointerDown { cell, button, time_ms } => {
                self.pointer_down(cell, button, time_ms, doc)
            }
            Gesture::PointerEnter { cell } => self.pointer_enter(cell, doc),
            Gesture::PointerUp => self.pointer_up(doc, presentation),
            Gesture::Drop(file) => self.drop_file(&file, doc, presentation),
            Gesture::WheelScroll { delta } => self.scroll(delta),
        }
    }

    fn pointer_down(
        &mut self,
        cell: CellRef,
        button: PointerButton,
        time_ms: f64,
        doc: &mut SkinDocument,
    ) -> GestureOutcome {
        let previous = self.last_press.take();
        let repeated = previous.as_ref().is_some_and(|last| {
            last.cell == cell
                && last.button == button
                && time_ms - last.time_ms < self.double_click_ms
        });
        let replay_stroke = match previous {
            Some(last) if repeated => last.replay_stroke,
            _ => self.last_strokes.get(&cell.face).cloned(),
        };
        self.last_press = Some(LastPress {
            cell,
            button,
            time_ms,
            replay_stroke: replay_stroke.clone(),
        });
        self.stroke = Some(Stroke { button, cells: Vec::new() });

        if !repeated {
            return self.apply(cell, button, doc);
        }

        let targets: Vec<CellRef> = match self.multi_click {
            MultiClick::RepeatCell => vec![cell],
            MultiClick::LastStroke => {
                let mut cells = replay_stroke.unwrap_or_default();
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
                cells
            }
            MultiClick::FillFace => {
                let (w, h) = cell.face.grid_size();
                (0..h)
                    .flat_map(|row| (0..w).map(move |col| CellRef::new(cell.face, row, col)))
                    .collect()
            }
        };
        debug!("multi-click on {}: {} cell(s)", cell.face, targets.len());

        let mut outcome = GestureOutcome::Ignored;
        for target in targets {
            let result = self.apply(target, button, doc);
            if result != GestureOutcome::Ignored {
                outcome = result;
            }
            if matches!(result, GestureOutcome::Picked(_)) {
                break;
            }
        }
        outcome
    }

    fn pointer_enter(&mut self, cell: CellRef, doc: &mut SkinDocument) -> GestureOutcome {
        let Some(button) = self.stroke.as_ref().map(|s| s.button) else {
            return GestureOutcome::Ignored;
        };
        if self.stroke.as_ref().is_some_and(|s| s.cells.last() == Some(&cell)) {
            return GestureOutcome::Ignored;
        }
        self.apply(cell, button, doc)
    }

    fn pointer_up(
        &mut self,
        doc: &mut SkinDocument,
        presentation: &mut dyn Presentation,
    ) -> GestureOutcome {
        let Some(stroke) = self.stroke.take() else {
            return GestureOutcome::Ignored;
        };

        let mut per_face: HashMap<FaceId, Vec<CellRef>> = HashMap::new();
        for cell in stroke.cells {
            per_face.entry(cell.face).or_default().push(cell);
        }
        self.last_strokes.extend(per_face);

        if doc.flush(presentation) > 0 {
            GestureOutcome::StrokeFinished
        } else {
            GestureOutcome::Ignored
        }
    }

    fn drop_file(
        &mut self,
        file: &DroppedFile,
        doc: &mut SkinDocument,
        presentation: &mut dyn Presentation,
    ) -> GestureOutcome {
        match file.decode() {
            Ok(atlas) => {
                self.stroke = None;
                self.last_press = None;
                self.last_strokes.clear();
                doc.import_atlas(atlas, presentation);
                info!("imported skin from {}", file.name);
                GestureOutcome::Imported
            }
            Err(e) => {
                warn!("ignoring dropped file {}: {}", file.name, e);
                GestureOutcome::Ignored
            }
        }
    }

    fn scroll(&mut self, delta: f32) -> GestureOutcome {
        if delta == 0.0 || self.palette.is_empty() {
            return GestureOutcome::Ignored;
        }
        self.palette.cycle(if delta > 0.0 { 1 } else { -1 });
        GestureOutcome::SelectionChanged
    }

    /// Apply the stroke's gesture to one cell
    fn apply(&mut self, cell: CellRef, button: PointerButton, doc: &mut SkinDocument) -> GestureOutcome {
        let outcome = match button {
            PointerButton::Primary => {
                let Some(color) = self.palette.selected_color() else {
                    return GestureOutcome::Ignored;
                };
                if self.pick_mode {
                    let picked = doc.cell(cell.face, cell.row, cell.col).unwrap_or(Rgb::BLACK);
                    self.palette.set_selected_color(picked);
                    self.pick_mode = false;
                    return GestureOutcome::Picked(picked);
                }
                let color = if self.jitter { self.jittered(color) } else { color };
                doc.paint_cell_deferred(cell.face, cell.row, cell.col, Some(color));
                GestureOutcome::Painted
            }
            PointerButton::Secondary => {
                doc.paint_cell_deferred(cell.face, cell.row, cell.col, None);
                GestureOutcome::Painted
            }
        };

        if let Some(stroke) = &mut self.stroke {
            stroke.cells.push(cell);
        }
        outcome
    }

    /// One offset per call, shared by all three channels
    fn jittered(&mut self, color: Rgb) -> Rgb {
        let delta = self.rng.gen_range(-self.jitter_range..=self.jitter_range);
        color.shifted(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::{BodyPart, Layer, Orientation, RecordingPresentation};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREY: Rgb = Rgb::new(128, 128, 128);

    fn cell(orientation: Orientation, layer: Layer, row: usize, col: usize) -> CellRef {
        CellRef::new(FaceId::new(BodyPart::Head, orientation, layer), row, col)
    }

    fn editor_with(colors: Vec<Rgb>) -> PixelEditor {
        let config = EditorConfig {
            palette: colors,
            ..Default::default()
        };
        PixelEditor::new(&config, 7)
    }

    fn down(cell: CellRef, button: PointerButton, time_ms: f64) -> Gesture {
        Gesture::PointerDown { cell, button, time_ms }
    }

    #[test]
    fn test_click_paints_and_redraws_on_release() {
        let mut editor = editor_with(vec![RED]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let target = cell(Orientation::Front, Layer::Base, 0, 0);

        let outcome = editor.handle(down(target, PointerButton::Primary, 0.0), &mut doc, &mut view);
        assert_eq!(outcome, GestureOutcome::Painted);
        assert_eq!(doc.cell(target.face, 0, 0), Some(RED));
        assert_eq!(doc.atlas().pixel(8, 8), [255, 0, 0, 255]);
        assert!(view.updates.is_empty());

        let outcome = editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        assert_eq!(outcome, GestureOutcome::StrokeFinished);
        assert_eq!(view.updated_faces(), vec![target.face]);
    }

    #[test]
    fn test_empty_palette_paint_is_noop() {
        let mut editor = editor_with(Vec::new());
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let target = cell(Orientation::Front, Layer::Overlay, 1, 1);

        let outcome = editor.handle(down(target, PointerButton::Primary, 0.0), &mut doc, &mut view);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(doc.cell(target.face, 1, 1), None);
        assert_eq!(editor.handle(Gesture::PointerUp, &mut doc, &mut view), GestureOutcome::Ignored);
    }

    #[test]
    fn test_clear_works_without_palette() {
        let mut editor = editor_with(Vec::new());
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let base = cell(Orientation::Top, Layer::Base, 2, 2);
        let overlay = cell(Orientation::Top, Layer::Overlay, 2, 2);
        doc.paint_cell(base.face, 2, 2, Some(RED), &mut view);
        doc.paint_cell(overlay.face, 2, 2, Some(RED), &mut view);

        editor.handle(down(base, PointerButton::Secondary, 0.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerEnter { cell: overlay }, &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        assert_eq!(doc.cell(base.face, 2, 2), Some(Rgb::BLACK));
        assert_eq!(doc.cell(overlay.face, 2, 2), None);
    }

    #[test]
    fn test_drag_batches_redraw_per_face() {
        let mut editor = editor_with(vec![RED]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let front = FaceId::new(BodyPart::Head, Orientation::Front, Layer::Base);
        let left = FaceId::new(BodyPart::Head, Orientation::Left, Layer::Base);

        editor.handle(down(CellRef::new(front, 0, 0), PointerButton::Primary, 0.0), &mut doc, &mut view);
        for col in 1..8 {
            editor.handle(Gesture::PointerEnter { cell: CellRef::new(front, 0, col) }, &mut doc, &mut view);
        }
        editor.handle(Gesture::PointerEnter { cell: CellRef::new(left, 0, 0) }, &mut doc, &mut view);
        assert!(editor.is_stroking());
        assert!(view.updates.is_empty());

        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        assert!(!editor.is_stroking());
        let mut faces = view.updated_faces();
        faces.sort();
        assert_eq!(faces, vec![front, left]);
        assert!((0..8).all(|col| doc.cell(front, 0, col) == Some(RED)));
    }

    #[test]
    fn test_enter_without_press_is_ignored() {
        let mut editor = editor_with(vec![RED]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let target = cell(Orientation::Back, Layer::Base, 0, 0);
        let outcome = editor.handle(Gesture::PointerEnter { cell: target }, &mut doc, &mut view);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(doc.cell(target.face, 0, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn test_jitter_shifts_all_channels_equally() {
        let mut editor = editor_with(vec![GREY]);
        editor.jitter = true;
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();

        let mut saw_variation = false;
        for col in 0..8 {
            let target = cell(Orientation::Front, Layer::Overlay, 0, col);
            editor.handle(down(target, PointerButton::Primary, col as f64 * 5000.0), &mut doc, &mut view);
            editor.handle(Gesture::PointerUp, &mut doc, &mut view);

            let painted = doc.cell(target.face, 0, col).unwrap();
            assert_eq!(painted.r, painted.g);
            assert_eq!(painted.g, painted.b);
            assert!((118..=138).contains(&painted.r), "{}", painted);
            saw_variation |= painted != GREY;
        }
        assert!(saw_variation);
        // The palette entry itself is untouched
        assert_eq!(editor.palette.selected_color(), Some(GREY));
    }

    #[test]
    fn test_huge_jitter_range_saturates() {
        let config = EditorConfig {
            palette: vec![GREY],
            jitter_range: i16::MAX,
            ..Default::default()
        };
        let mut editor = PixelEditor::new(&config, 3);
        editor.jitter = true;
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let target = cell(Orientation::Front, Layer::Base, 0, 0);

        for i in 0..2000 {
            editor.handle(down(target, PointerButton::Primary, i as f64 * 5000.0), &mut doc, &mut view);
            editor.handle(Gesture::PointerUp, &mut doc, &mut view);
            let painted = doc.cell(target.face, 0, 0).unwrap();
            assert_eq!(painted.r, painted.g);
            assert_eq!(painted.g, painted.b);
        }
    }

    #[test]
    fn test_pick_mode_is_one_shot() {
        let mut editor = editor_with(vec![RED]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let source = cell(Orientation::Left, Layer::Base, 3, 3);
        doc.paint_cell(source.face, 3, 3, Some(GREY), &mut view);

        editor.pick_mode = true;
        let outcome = editor.handle(down(source, PointerButton::Primary, 0.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        assert_eq!(outcome, GestureOutcome::Picked(GREY));
        assert_eq!(editor.palette.selected_color(), Some(GREY));
        assert!(!editor.pick_mode);

        // Picking an empty overlay cell yields black
        editor.pick_mode = true;
        let empty = cell(Orientation::Left, Layer::Overlay, 0, 0);
        let outcome = editor.handle(down(empty, PointerButton::Primary, 10_000.0), &mut doc, &mut view);
        assert_eq!(outcome, GestureOutcome::Picked(Rgb::BLACK));
        assert_eq!(doc.cell(empty.face, 0, 0), None);
    }

    #[test]
    fn test_double_click_repeats_on_same_cell() {
        let mut editor = editor_with(vec![GREY]);
        editor.jitter = true;
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let target = cell(Orientation::Front, Layer::Overlay, 4, 4);
        let other = cell(Orientation::Front, Layer::Overlay, 5, 5);

        editor.handle(down(target, PointerButton::Primary, 0.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        let outcome = editor.handle(down(target, PointerButton::Primary, 300.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        assert_eq!(outcome, GestureOutcome::Painted);
        assert!(doc.cell(target.face, 4, 4).is_some());
        assert_eq!(doc.cell(other.face, 5, 5), None);
    }

    #[test]
    fn test_double_click_replays_last_stroke_when_configured() {
        let config = EditorConfig {
            palette: vec![RED, GREY],
            multi_click: MultiClick::LastStroke,
            ..Default::default()
        };
        let mut editor = PixelEditor::new(&config, 1);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let stroke: Vec<CellRef> = (0..4).map(|c| cell(Orientation::Back, Layer::Base, 1, c)).collect();

        // Paint a stroke in red
        editor.handle(down(stroke[0], PointerButton::Primary, 0.0), &mut doc, &mut view);
        for &c in &stroke[1..] {
            editor.handle(Gesture::PointerEnter { cell: c }, &mut doc, &mut view);
        }
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        // Switch to grey, press the last cell twice quickly
        editor.handle(Gesture::WheelScroll { delta: 1.0 }, &mut doc, &mut view);
        let last = stroke[3];
        editor.handle(down(last, PointerButton::Primary, 2000.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        editor.handle(down(last, PointerButton::Primary, 2400.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        for c in &stroke {
            assert_eq!(doc.cell(c.face, c.row, c.col), Some(GREY), "{:?}", c);
        }
    }

    #[test]
    fn test_slow_second_click_does_not_replay() {
        let config = EditorConfig {
            palette: vec![RED, GREY],
            multi_click: MultiClick::LastStroke,
            ..Default::default()
        };
        let mut editor = PixelEditor::new(&config, 1);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let a = cell(Orientation::Right, Layer::Base, 0, 0);
        let b = cell(Orientation::Right, Layer::Base, 0, 1);

        editor.handle(down(a, PointerButton::Primary, 0.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerEnter { cell: b }, &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        editor.palette.select(1);
        editor.handle(down(b, PointerButton::Primary, 500.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        editor.handle(down(b, PointerButton::Primary, 1600.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        assert_eq!(doc.cell(a.face, 0, 0), Some(RED));
        assert_eq!(doc.cell(b.face, 0, 1), Some(GREY));
    }

    #[test]
    fn test_double_click_fill_face() {
        let config = EditorConfig {
            multi_click: MultiClick::FillFace,
            ..Default::default()
        };
        let mut editor = PixelEditor::new(&config, 3);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let face = FaceId::new(BodyPart::Body, Orientation::Front, Layer::Overlay);
        for row in 0..12 {
            for col in 0..8 {
                doc.paint_cell(face, row, col, Some(RED), &mut view);
            }
        }

        let target = CellRef::new(face, 6, 6);
        editor.handle(down(target, PointerButton::Secondary, 0.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        view.clear();
        editor.handle(down(target, PointerButton::Secondary, 250.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        assert!(doc.model().face(face).rows().flatten().all(|c| c.is_none()));
        assert_eq!(view.updated_faces(), vec![face]);
    }

    #[test]
    fn test_double_click_needs_same_button() {
        let config = EditorConfig {
            palette: vec![RED],
            multi_click: MultiClick::FillFace,
            ..Default::default()
        };
        let mut editor = PixelEditor::new(&config, 3);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let target = cell(Orientation::Front, Layer::Base, 0, 0);

        editor.handle(down(target, PointerButton::Primary, 0.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);
        editor.handle(down(target, PointerButton::Secondary, 100.0), &mut doc, &mut view);
        editor.handle(Gesture::PointerUp, &mut doc, &mut view);

        assert_eq!(doc.cell(target.face, 0, 0), Some(Rgb::BLACK));
        assert_eq!(doc.cell(target.face, 7, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn test_wheel_cycles_palette() {
        let mut editor = editor_with(vec![RED, GREY, Rgb::WHITE]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();

        assert_eq!(
            editor.handle(Gesture::WheelScroll { delta: -1.0 }, &mut doc, &mut view),
            GestureOutcome::SelectionChanged
        );
        assert_eq!(editor.palette.selected(), Some(2));
        editor.handle(Gesture::WheelScroll { delta: 3.0 }, &mut doc, &mut view);
        assert_eq!(editor.palette.selected(), Some(0));

        let mut empty = editor_with(Vec::new());
        assert_eq!(
            empty.handle(Gesture::WheelScroll { delta: 1.0 }, &mut doc, &mut view),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn test_drop_non_image_is_ignored() {
        let mut editor = editor_with(vec![RED]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();
        let before = doc.model().clone();

        let text = DroppedFile {
            name: "notes.txt".to_string(),
            mime: Some("text/plain".to_string()),
            bytes: b"hello".to_vec(),
        };
        assert_eq!(editor.handle(Gesture::Drop(text), &mut doc, &mut view), GestureOutcome::Ignored);

        let garbage = DroppedFile {
            name: "skin.png".to_string(),
            mime: None,
            bytes: vec![1, 2, 3, 4],
        };
        assert_eq!(editor.handle(Gesture::Drop(garbage), &mut doc, &mut view), GestureOutcome::Ignored);
        assert_eq!(doc.model(), &before);
        assert!(view.updates.is_empty());
    }

    #[test]
    fn test_drop_image_imports() {
        let mut editor = editor_with(vec![RED]);
        let mut doc = SkinDocument::new();
        let mut view = RecordingPresentation::default();

        let mut source = SkinDocument::new();
        let target = cell(Orientation::Front, Layer::Base, 2, 3);
        source.paint_cell(target.face, 2, 3, Some(GREY), &mut view);
        view.clear();

        let file = DroppedFile {
            name: "skin.png".to_string(),
            mime: Some("image/png".to_string()),
            bytes: source.atlas().encode_png().unwrap(),
        };
        assert_eq!(editor.handle(Gesture::Drop(file), &mut doc, &mut view), GestureOutcome::Imported);
        assert_eq!(doc.cell(target.face, 2, 3), Some(GREY));
        assert_eq!(view.updates.len(), 72);
    }
}
