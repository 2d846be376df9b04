//! 3D preview of the avatar
//!
//! Twelve textured boxes (six parts, base and overlay) drawn with macroquad's
//! 3D camera into a screen viewport. Each face has its own nearest-filtered
//! texture, replaced whenever the synchronizer delivers a new face image.

mod geometry;

pub use geometry::OrbitCamera;

use geometry::{
    box_size, face_quad, faces_far_to_near, part_center, parts_far_to_near, QUAD_INDICES, QUAD_UVS,
};

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

use crate::skin::{BodyPart, FaceId, FaceImage, Layer, Orientation, Presentation, FACE_COUNT};
use crate::ui::{Rect, UiContext};

/// Vertical field of view of the preview camera, in degrees
const FOV_DEGREES: f32 = 75.0;

const PREVIEW_BG: Color = Color::new(0.10, 0.10, 0.14, 1.0);

/// GPU side of the skin: face textures, box visibility and the camera
pub struct PreviewScene {
    textures: Vec<Option<Texture2D>>,
    visible: [[bool; 2]; 6],
    pub camera: OrbitCamera,
    /// Last pointer position while orbiting
    drag_from: Option<(f32, f32)>,
}

impl PreviewScene {
    pub fn new(camera_distance: f32) -> Self {
        Self {
            textures: vec![None; FACE_COUNT],
            visible: [[true; 2]; 6],
            camera: OrbitCamera::new(camera_distance),
            drag_from: None,
        }
    }

    pub fn is_visible(&self, part: BodyPart, layer: Layer) -> bool {
        self.visible[part as usize][layer as usize]
    }

    /// Orbit with the left button and zoom with the wheel inside `viewport`
    pub fn handle_input(&mut self, ctx: &UiContext, viewport: Rect) {
        let mouse = ctx.mouse;
        if mouse.left_pressed && mouse.inside(&viewport) && !ctx.consumed {
            self.drag_from = Some((mouse.x, mouse.y));
        }
        if !mouse.left_down {
            self.drag_from = None;
        }
        if let Some((x, y)) = self.drag_from {
            self.camera.orbit(mouse.x - x, mouse.y - y);
            self.drag_from = Some((mouse.x, mouse.y));
        }
        if mouse.scroll != 0.0 && mouse.inside(&viewport) {
            self.camera.zoom(mouse.scroll.signum());
        }
    }

    /// Draw every visible box into `viewport`; leaves the default camera set
    pub fn draw(&self, viewport: Rect) {
        draw_rectangle(viewport.x, viewport.y, viewport.w, viewport.h, PREVIEW_BG);
        if viewport.w < 1.0 || viewport.h < 1.0 {
            return;
        }

        let eye = self.camera.position();
        set_camera(&Camera3D {
            position: eye,
            target: self.camera.target,
            up: Vec3::Y,
            fovy: FOV_DEGREES.to_radians(),
            aspect: Some(viewport.w / viewport.h),
            viewport: Some(gl_viewport(viewport, screen_height(), screen_dpi_scale())),
            ..Default::default()
        });

        // Opaque bases first, then overlays back to front so transparent
        // texels do not hide boxes drawn after them
        for part in BodyPart::ALL {
            if self.is_visible(part, Layer::Base) {
                self.draw_box(part, Layer::Base, &Orientation::ALL);
            }
        }
        for part in parts_far_to_near(eye) {
            if self.is_visible(part, Layer::Overlay) {
                let order = faces_far_to_near(part_center(part), box_size(part, Layer::Overlay), eye);
                self.draw_box(part, Layer::Overlay, &order);
            }
        }

        set_default_camera();
    }

    fn draw_box(&self, part: BodyPart, layer: Layer, orientations: &[Orientation]) {
        let center = part_center(part);
        let size = box_size(part, layer);
        for &orientation in orientations {
            let face = FaceId::new(part, orientation, layer);
            let Some(texture) = &self.textures[face.index()] else {
                continue;
            };
            let corners = face_quad(orientation, center, size);
            let vertices = corners
                .iter()
                .zip(QUAD_UVS)
                .map(|(p, (u, v))| Vertex::new(p.x, p.y, p.z, u, v, WHITE))
                .collect();
            draw_mesh(&Mesh {
                vertices,
                indices: QUAD_INDICES.to_vec(),
                texture: Some(texture.clone()),
            });
        }
    }
}

/// Framebuffer viewport for a rect given in logical screen pixels.
/// GL counts y from the bottom of the window and works in physical pixels
fn gl_viewport(viewport: Rect, screen_h: f32, dpi: f32) -> (i32, i32, i32, i32) {
    (
        (viewport.x * dpi).round() as i32,
        ((screen_h - viewport.bottom()) * dpi).round() as i32,
        (viewport.w * dpi).round() as i32,
        (viewport.h * dpi).round() as i32,
    )
}

impl Presentation for PreviewScene {
    fn update_face_image(&mut self, face: FaceId, image: &FaceImage) {
        let texture = Texture2D::from_rgba8(image.width() as u16, image.height() as u16, image.as_raw());
        texture.set_filter(FilterMode::Nearest);
        self.textures[face.index()] = Some(texture);
    }

    fn set_visible(&mut self, part: BodyPart, layer: Layer, visible: bool) {
        self.visible[part as usize][layer as usize] = visible;
    }
}
