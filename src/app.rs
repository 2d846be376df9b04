//! Application shell
//!
//! Owns the skin document, the pixel editor and the 3D preview, and runs one
//! UI frame at a time:
//! - top toolbar: part selector, pick/jitter toggles, import/export, camera reset
//! - second row: base/overlay visibility per part
//! - left pane: face grids of the selected part
//! - right pane: 3D preview
//! - bottom strip: palette swatches and RGB sliders

use macroquad::prelude::*;
use tracing::{info, warn};

use crate::config::EditorConfig;
use crate::editor::{CellRef, DroppedFile, EditorLayout, Gesture, GestureOutcome, PixelEditor, PointerButton};
use crate::preview::PreviewScene;
use crate::skin::{BodyPart, Layer, Rgb, SkinDocument};
use crate::ui::{
    channel_slider, swatch, text_button, MouseState, Rect, Toolbar, UiContext, BG_COLOR,
    CHECKER_DARK, CHECKER_LIGHT, FONT_SIZE_CONTENT, GRID_LINE, HEADER_COLOR, TEXT_COLOR,
};

const TOOLBAR_HEIGHT: f32 = 30.0;
const PALETTE_HEIGHT: f32 = 84.0;
const SWATCH_SIZE: f32 = 24.0;
const STATUS_SECS: f64 = 3.0;

/// Turns per-frame mouse state into editor gestures
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Cell under the pointer last frame
    hover: Option<CellRef>,
}

impl PointerTracker {
    /// Gestures for this frame, in dispatch order
    ///
    /// `hit` is the cell under the pointer (if any) and `over_editor` whether
    /// the pointer is over the editor pane at all.
    pub fn gestures(
        &mut self,
        mouse: &MouseState,
        hit: Option<CellRef>,
        over_editor: bool,
        stroking: bool,
        time_ms: f64,
    ) -> Vec<Gesture> {
        let mut out = Vec::new();
        let entered = hit.is_some() && hit != self.hover;
        self.hover = hit;

        if let Some(cell) = hit {
            if mouse.left_pressed {
                out.push(Gesture::PointerDown { cell, button: PointerButton::Primary, time_ms });
            } else if mouse.right_pressed {
                out.push(Gesture::PointerDown { cell, button: PointerButton::Secondary, time_ms });
            } else if stroking && entered {
                out.push(Gesture::PointerEnter { cell });
            }
        }

        let pressed_now = !out.is_empty() && matches!(out[0], Gesture::PointerDown { .. });
        if (mouse.left_released || mouse.right_released) && (stroking || pressed_now) {
            out.push(Gesture::PointerUp);
        }

        if over_editor && mouse.scroll != 0.0 {
            // Wheel up reports positive; gestures count positive as down
            out.push(Gesture::WheelScroll { delta: -mouse.scroll });
        }
        out
    }
}

/// Everything the running editor owns
pub struct App {
    config: EditorConfig,
    doc: SkinDocument,
    editor: PixelEditor,
    preview: PreviewScene,
    part: BodyPart,
    pointer: PointerTracker,
    /// Message and the time it expires
    status: Option<(String, f64)>,
}

impl App {
    pub fn new(config: EditorConfig, seed: u64) -> Self {
        let doc = SkinDocument::new();
        let editor = PixelEditor::new(&config, seed);
        let mut preview = PreviewScene::new(config.camera_distance);
        doc.refresh_all(&mut preview);
        Self {
            config,
            doc,
            editor,
            preview,
            part: BodyPart::Head,
            pointer: PointerTracker::default(),
            status: None,
        }
    }

    /// Run one frame: input, state updates and drawing
    pub fn frame(&mut self, ctx: &mut UiContext) {
        clear_background(BG_COLOR);

        let screen = Rect::screen(screen_width(), screen_height());
        let toolbar = screen.slice_top(TOOLBAR_HEIGHT);
        let rest = screen.remaining_after_top(TOOLBAR_HEIGHT);
        let visibility_bar = rest.slice_top(TOOLBAR_HEIGHT);
        let rest = rest.remaining_after_top(TOOLBAR_HEIGHT);
        let palette_strip = rest.slice_bottom(PALETTE_HEIGHT);
        let (editor_pane, preview_pane) = rest.remaining_after_bottom(PALETTE_HEIGHT).split_h(0.5);

        self.draw_toolbar(ctx, toolbar);
        self.draw_visibility_bar(ctx, visibility_bar);
        self.draw_palette_strip(ctx, palette_strip);
        self.handle_dropped_files();

        let layout = EditorLayout::new(
            (editor_pane.x + 8.0, editor_pane.y + 8.0),
            self.cell_size_for(editor_pane),
            self.config.overlay_column_offset,
            self.part,
        );
        self.handle_editor_input(ctx, &layout, editor_pane);
        self.draw_editor(&layout, editor_pane);

        self.preview.handle_input(ctx, preview_pane);
        self.preview.draw(preview_pane);

        self.draw_status(screen);
    }

    /// Configured cell size, shrunk when both layers would not fit the pane
    fn cell_size_for(&self, pane: Rect) -> f32 {
        let full = EditorLayout::new((0.0, 0.0), 1.0, self.config.overlay_column_offset, self.part).bounds();
        let fit_w = (pane.w - 16.0) / full.w;
        let fit_h = (pane.h - 16.0) / full.h;
        self.config.cell_size.min(fit_w).min(fit_h).max(2.0).floor()
    }

    fn handle_editor_input(&mut self, ctx: &UiContext, layout: &EditorLayout, pane: Rect) {
        let mouse = ctx.mouse;
        let over_editor = mouse.inside(&pane);
        let hit = if over_editor && !ctx.consumed {
            layout.hit_test(mouse.x, mouse.y)
        } else {
            None
        };
        let time_ms = get_time() * 1000.0;
        let gestures = self.pointer.gestures(&mouse, hit, over_editor, self.editor.is_stroking(), time_ms);
        for gesture in gestures {
            self.dispatch(gesture);
        }
    }

    fn dispatch(&mut self, gesture: Gesture) {
        let outcome = self.editor.handle(gesture, &mut self.doc, &mut self.preview);
        if let Some(message) = status_for(outcome) {
            self.set_status(&message);
        }
    }

    fn draw_toolbar(&mut self, ctx: &mut UiContext, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
        let mut toolbar = Toolbar::new(rect);

        for part in BodyPart::ALL {
            if toolbar.toggle(ctx, part.name(), self.part == part) {
                self.part = part;
            }
        }
        toolbar.separator();
        if toolbar.toggle(ctx, "Pick", self.editor.pick_mode) {
            self.editor.pick_mode = !self.editor.pick_mode;
        }
        if toolbar.toggle(ctx, "Jitter", self.editor.jitter) {
            self.editor.jitter = !self.editor.jitter;
        }
        toolbar.separator();
        if toolbar.button(ctx, "Import") {
            self.import_with_dialog();
        }
        if toolbar.button(ctx, "Export") {
            self.export_with_dialog();
        }
        if toolbar.button(ctx, "Clear") {
            self.doc.reset(&mut self.preview);
            self.set_status("Skin cleared");
        }
        toolbar.separator();
        if toolbar.button(ctx, "Reset view") {
            self.preview.camera.reset();
        }
        toolbar.separator();
        if toolbar.button(ctx, "Save settings") {
            self.save_settings();
        }
    }

    /// Persist the config with the current palette as the starting palette
    fn save_settings(&mut self) {
        self.config = self.config.with_palette(self.editor.palette.colors());
        #[cfg(not(target_arch = "wasm32"))]
        match self.config.save_platform() {
            Ok(()) => self.set_status("Settings saved"),
            Err(e) => {
                warn!("failed to save settings: {}", e);
                self.set_status(&format!("Saving settings failed: {}", e));
            }
        }
        #[cfg(target_arch = "wasm32")]
        self.set_status("Settings are not saved in the web build");
    }

    fn draw_visibility_bar(&mut self, ctx: &mut UiContext, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
        let mut toolbar = Toolbar::new(rect);
        for part in BodyPart::ALL {
            toolbar.label(part.name());
            for layer in Layer::ALL {
                let visible = self.doc.is_visible(part, layer);
                if toolbar.toggle(ctx, layer.name(), visible) {
                    self.doc.set_visible(part, layer, !visible, &mut self.preview);
                }
            }
            toolbar.separator();
        }
    }

    fn draw_palette_strip(&mut self, ctx: &mut UiContext, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
        let inner = rect.pad(8.0);

        let add_rect = Rect::new(inner.x, inner.y, SWATCH_SIZE, SWATCH_SIZE);
        if text_button(ctx, add_rect, "+", false) {
            let index = self.editor.palette.add(Rgb::BLACK);
            self.editor.palette.select(index);
        }

        let mut x = add_rect.right() + 8.0;
        let mut removed = None;
        let selected = self.editor.palette.selected();
        let colors = self.editor.palette.colors().to_vec();
        for (i, color) in colors.iter().enumerate() {
            let r = Rect::new(x, inner.y, SWATCH_SIZE, SWATCH_SIZE);
            let response = swatch(ctx, r, to_color(*color), selected == Some(i));
            if response.removed {
                removed = Some(i);
            } else if response.selected {
                self.editor.palette.select(i);
            }
            x += SWATCH_SIZE + 6.0;
        }
        if let Some(i) = removed {
            self.editor.palette.remove(i);
        }

        // Sliders edit the selected color in place
        let Some(color) = self.editor.palette.selected_color() else {
            draw_text(
                "Add a color to start painting",
                inner.x,
                inner.bottom() - 8.0,
                FONT_SIZE_CONTENT,
                TEXT_COLOR,
            );
            return;
        };
        let slider_w = (inner.w / 3.0 - 12.0).min(220.0);
        let tints = [RED, GREEN, BLUE];
        for (channel, label) in ["R", "G", "B"].into_iter().enumerate() {
            let r = Rect::new(
                inner.x + channel as f32 * (slider_w + 12.0),
                inner.bottom() - 20.0,
                slider_w,
                18.0,
            );
            if let Some(value) = channel_slider(ctx, r, label, color.channel(channel), tints[channel]) {
                self.editor.palette.set_selected_color(color.with_channel(channel, value));
            }
        }
    }

    fn draw_editor(&self, layout: &EditorLayout, pane: Rect) {
        let size = layout.cell_size;
        for face in layout.faces() {
            let (w, h) = face.grid_size();
            for row in 0..h {
                for col in 0..w {
                    let r = layout.cell_rect(CellRef::new(face, row, col));
                    if r.y > pane.bottom() || r.x > pane.right() {
                        continue;
                    }
                    let fill = match self.doc.cell(face, row, col) {
                        Some(color) => to_color(color),
                        None if (row + col) % 2 == 0 => CHECKER_LIGHT,
                        None => CHECKER_DARK,
                    };
                    draw_rectangle(r.x, r.y, size, size, fill);
                }
            }
            if size >= 6.0 {
                let fr = layout.face_rect(face);
                for col in 0..=w {
                    let x = fr.x + col as f32 * size;
                    draw_line(x, fr.y, x, fr.bottom(), 1.0, GRID_LINE);
                }
                for row in 0..=h {
                    let y = fr.y + row as f32 * size;
                    draw_line(fr.x, y, fr.right(), y, 1.0, GRID_LINE);
                }
            }
        }
    }

    fn draw_status(&mut self, screen: Rect) {
        let Some((message, expiry)) = &self.status else {
            return;
        };
        if get_time() >= *expiry {
            self.status = None;
            return;
        }
        let dims = measure_text(message, None, FONT_SIZE_CONTENT as u16, 1.0);
        let x = screen.right() - dims.width - 16.0;
        let y = screen.bottom() - PALETTE_HEIGHT - 12.0;
        draw_rectangle(x - 4.0, y - dims.height - 4.0, dims.width + 8.0, dims.height + 8.0, Color::from_rgba(30, 30, 35, 240));
        draw_text(message, x, y, FONT_SIZE_CONTENT, WHITE);
    }

    fn set_status(&mut self, message: &str) {
        self.status = Some((message.to_string(), get_time() + STATUS_SECS));
    }

    /// Files dropped onto the window go through the same path as a drop gesture
    fn handle_dropped_files(&mut self) {
        for file in macroquad::input::get_dropped_files() {
            let Some(bytes) = file.bytes else {
                continue;
            };
            let name = file
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "dropped file".to_string());
            self.dispatch(Gesture::Drop(DroppedFile { name, mime: None, bytes }));
        }
    }

    fn import_with_dialog(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                .pick_file()
            else {
                return;
            };
            match std::fs::read(&path) {
                Ok(bytes) => {
                    let file = DroppedFile {
                        name: path.display().to_string(),
                        mime: None,
                        bytes,
                    };
                    self.dispatch(Gesture::Drop(file));
                }
                Err(e) => {
                    warn!("failed to read {}: {}", path.display(), e);
                    self.set_status(&format!("Failed to read file: {}", e));
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            self.set_status("Drop a skin image onto the window to import");
        }
    }

    fn export_with_dialog(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name("skin.png")
                .save_file()
            else {
                return;
            };
            match self.doc.atlas().save_png(&path) {
                Ok(()) => {
                    info!("exported skin to {}", path.display());
                    self.set_status("Skin exported");
                }
                Err(e) => {
                    warn!("export to {} failed: {}", path.display(), e);
                    self.set_status(&format!("Export failed: {}", e));
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            self.set_status("Export not available in browser");
        }
    }
}

/// Status line text for a gesture outcome. Rejected imports stay silent;
/// the editor already logs them
fn status_for(outcome: GestureOutcome) -> Option<String> {
    match outcome {
        GestureOutcome::Picked(color) => Some(format!("Picked {}", color)),
        GestureOutcome::Imported => Some("Skin imported".to_string()),
        _ => None,
    }
}

fn to_color(color: Rgb) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}
