//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color for active toggles and the selected swatch
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

/// Grid lines between editor cells
pub const GRID_LINE: Color = Color::new(0.25, 0.25, 0.28, 1.0);

/// Checkerboard shades for empty overlay cells
pub const CHECKER_LIGHT: Color = Color::new(0.30, 0.30, 0.33, 1.0);
pub const CHECKER_DARK: Color = Color::new(0.22, 0.22, 0.25, 1.0);

/// Toolbar text size
pub const FONT_SIZE_HEADER: f32 = 14.0;

/// Labels and slider captions
pub const FONT_SIZE_CONTENT: f32 = 12.0;
