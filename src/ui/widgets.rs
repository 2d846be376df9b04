//! Basic UI widgets

use macroquad::prelude::*;

use super::{Rect, UiContext, ACCENT_COLOR, FONT_SIZE_CONTENT, FONT_SIZE_HEADER, TEXT_COLOR, TEXT_DIM};

/// Left-to-right toolbar layout helper
pub struct Toolbar {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl Toolbar {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 4.0,
            spacing: 4.0,
        }
    }

    /// Add a separator
    pub fn separator(&mut self) {
        self.cursor_x += self.spacing * 2.0;
        draw_line(
            self.cursor_x,
            self.rect.y + 4.0,
            self.cursor_x,
            self.rect.bottom() - 4.0,
            1.0,
            Color::from_rgba(80, 80, 80, 255),
        );
        self.cursor_x += self.spacing * 2.0;
    }

    /// Add a label
    pub fn label(&mut self, text: &str) {
        let dims = measure_text(text, None, FONT_SIZE_HEADER as u16, 1.0);
        let text_y = (self.rect.y + (self.rect.h + dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), text_y, FONT_SIZE_HEADER, TEXT_DIM);
        self.cursor_x += dims.width + self.spacing;
    }

    /// Add a text button sized to its caption
    pub fn button(&mut self, ctx: &mut UiContext, text: &str) -> bool {
        self.toggle(ctx, text, false)
    }

    /// Add a text button drawn highlighted while `active`
    pub fn toggle(&mut self, ctx: &mut UiContext, text: &str, active: bool) -> bool {
        let dims = measure_text(text, None, FONT_SIZE_HEADER as u16, 1.0);
        let rect = Rect::new(
            self.cursor_x.round(),
            (self.rect.y + 2.0).round(),
            (dims.width + 12.0).round(),
            (self.rect.h - 4.0).round(),
        );
        self.cursor_x += rect.w + self.spacing;
        text_button(ctx, rect, text, active)
    }
}

/// Flat text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, text: &str, active: bool) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);
    if clicked {
        ctx.consumed = true;
    }

    let corner_radius = 4.0;
    if active {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, ACCENT_COLOR);
    } else if pressed {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, Color::from_rgba(60, 60, 70, 255));
    } else if hovered {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, Color::from_rgba(50, 50, 60, 255));
    }

    let color = if active { WHITE } else { TEXT_COLOR };
    let dims = measure_text(text, None, FONT_SIZE_HEADER as u16, 1.0);
    draw_text(
        text,
        (rect.center_x() - dims.width * 0.5).round(),
        (rect.center_y() + dims.height * 0.5).round(),
        FONT_SIZE_HEADER,
        color,
    );

    clicked
}

/// What happened to a palette swatch this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwatchResponse {
    pub selected: bool,
    pub removed: bool,
}

/// Palette swatch: left click selects, right click removes
pub fn swatch(ctx: &mut UiContext, rect: Rect, color: Color, is_selected: bool) -> SwatchResponse {
    let response = SwatchResponse {
        selected: ctx.mouse.clicked(&rect),
        removed: ctx.mouse.right_clicked(&rect),
    };
    if response.selected || response.removed {
        ctx.consumed = true;
    }

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    if is_selected {
        draw_rectangle_lines(rect.x - 2.0, rect.y - 2.0, rect.w + 4.0, rect.h + 4.0, 2.0, ACCENT_COLOR);
    } else if ctx.mouse.inside(&rect) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, TEXT_COLOR);
    }
    response
}

/// Map a pointer x position onto 0..=255 across the slider track
pub fn slider_value(track: &Rect, x: f32) -> u8 {
    if track.w <= 0.0 {
        return 0;
    }
    let t = ((x - track.x) / track.w).clamp(0.0, 1.0);
    (t * 255.0).round() as u8
}

/// Horizontal 0..=255 slider. Returns the new value while dragged
pub fn channel_slider(ctx: &mut UiContext, rect: Rect, label: &str, value: u8, tint: Color) -> Option<u8> {
    let id = ctx.next_id();
    let label_w = 16.0;
    let track = Rect::new(rect.x + label_w, rect.y, rect.w - label_w, rect.h);

    if ctx.mouse.clicked(&track) {
        ctx.start_drag(id);
    }

    draw_text(label, rect.x, rect.center_y() + 4.0, FONT_SIZE_CONTENT, TEXT_COLOR);
    draw_rectangle(track.x, track.center_y() - 2.0, track.w, 4.0, Color::from_rgba(60, 60, 70, 255));
    let fill = track.w * value as f32 / 255.0;
    draw_rectangle(track.x, track.center_y() - 2.0, fill, 4.0, tint);
    draw_circle(track.x + fill, track.center_y(), 5.0, WHITE);

    if ctx.is_dragging(id) {
        let new_value = slider_value(&track, ctx.mouse.x);
        return (new_value != value).then_some(new_value);
    }
    None
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
