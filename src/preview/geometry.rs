//! Box geometry and orbit camera for the 3D preview
//!
//! One box per (part, layer). Overlay boxes are one unit larger on every axis
//! and share the base box center. Face quads are listed top-left, top-right,
//! bottom-right, bottom-left as seen in the face image, so texture
//! coordinates are the unit square in the same order.

use macroquad::prelude::{vec3, Vec3};

use crate::skin::{BodyPart, Layer, Orientation};

/// Texture coordinates matching the corner order of `face_quad`
pub const QUAD_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Two triangles over the quad corners
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// World-space center of a body part (y up, model facing +z)
pub fn part_center(part: BodyPart) -> Vec3 {
    match part {
        BodyPart::Head => vec3(0.0, 10.0, 0.0),
        BodyPart::Body => vec3(0.0, 0.0, 0.0),
        BodyPart::LeftArm => vec3(6.0, 0.0, 0.0),
        BodyPart::RightArm => vec3(-6.0, 0.0, 0.0),
        BodyPart::LeftLeg => vec3(2.0, -12.0, 0.0),
        BodyPart::RightLeg => vec3(-2.0, -12.0, 0.0),
    }
}

/// Full box extents (width, height, depth)
pub fn box_size(part: BodyPart, layer: Layer) -> Vec3 {
    let dims = part.dimensions();
    let grow = match layer {
        Layer::Base => 0.0,
        Layer::Overlay => 1.0,
    };
    vec3(
        dims.width as f32 + grow,
        dims.height as f32 + grow,
        dims.depth as f32 + grow,
    )
}

/// Corners of one box face: top-left, top-right, bottom-right, bottom-left
///
/// - `Left` is the +x side, `Right` the -x side
/// - `Top` starts at the back edge, `Bottom` at the front edge
pub fn face_quad(orientation: Orientation, center: Vec3, size: Vec3) -> [Vec3; 4] {
    let h = size * 0.5;
    let c = |x: f32, y: f32, z: f32| center + vec3(x * h.x, y * h.y, z * h.z);
    match orientation {
        Orientation::Front => [c(-1.0, 1.0, 1.0), c(1.0, 1.0, 1.0), c(1.0, -1.0, 1.0), c(-1.0, -1.0, 1.0)],
        Orientation::Back => [c(1.0, 1.0, -1.0), c(-1.0, 1.0, -1.0), c(-1.0, -1.0, -1.0), c(1.0, -1.0, -1.0)],
        Orientation::Left => [c(1.0, 1.0, 1.0), c(1.0, 1.0, -1.0), c(1.0, -1.0, -1.0), c(1.0, -1.0, 1.0)],
        Orientation::Right => [c(-1.0, 1.0, -1.0), c(-1.0, 1.0, 1.0), c(-1.0, -1.0, 1.0), c(-1.0, -1.0, -1.0)],
        Orientation::Top => [c(-1.0, 1.0, -1.0), c(1.0, 1.0, -1.0), c(1.0, 1.0, 1.0), c(-1.0, 1.0, 1.0)],
        Orientation::Bottom => [c(-1.0, -1.0, 1.0), c(1.0, -1.0, 1.0), c(1.0, -1.0, -1.0), c(-1.0, -1.0, -1.0)],
    }
}

/// Parts sorted far to near as seen from `eye`
///
/// Overlay boxes are drawn in this order so a see-through texel never hides
/// a box drawn after it.
pub fn parts_far_to_near(eye: Vec3) -> [BodyPart; 6] {
    let mut parts = BodyPart::ALL;
    parts.sort_by(|a, b| {
        let da = eye.distance_squared(part_center(*a));
        let db = eye.distance_squared(part_center(*b));
        db.total_cmp(&da)
    });
    parts
}

/// Faces of one box sorted far to near as seen from `eye`
pub fn faces_far_to_near(center: Vec3, size: Vec3, eye: Vec3) -> [Orientation; 6] {
    let face_center = |o: Orientation| {
        let q = face_quad(o, center, size);
        (q[0] + q[2]) * 0.5
    };
    let mut faces = Orientation::ALL;
    faces.sort_by(|a, b| {
        let da = eye.distance_squared(face_center(*a));
        let db = eye.distance_squared(face_center(*b));
        db.total_cmp(&da)
    });
    faces
}

/// Orbit camera around a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    home_distance: f32,
}

impl OrbitCamera {
    /// Camera on the +z axis looking at the origin
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            target: Vec3::ZERO,
            home_distance: distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        let cos_pitch = self.pitch.cos();
        self.target
            + vec3(
                self.distance * cos_pitch * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                self.distance * cos_pitch * self.yaw.cos(),
            )
    }

    /// Rotate by a mouse drag in pixels
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * 0.01;
        self.pitch = (self.pitch + dy * 0.01).clamp(-1.4, 1.4);
    }

    /// Zoom by wheel steps, positive = closer
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * (1.0 - steps * 0.1)).clamp(5.0, 200.0);
    }

    /// Back to the starting position
    pub fn reset(&mut self) {
        *self = Self::new(self.home_distance);
    }
}
