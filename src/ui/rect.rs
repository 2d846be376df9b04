//! Rectangle type for screen layout

/// Screen-space rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Whole window
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Half-open containment: right and bottom edges belong to the neighbour
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Split left/right at a ratio of the width
    pub fn split_h(&self, ratio: f32) -> (Self, Self) {
        let left_w = (self.w * ratio).round();
        (
            Self::new(self.x, self.y, left_w, self.h),
            Self::new(self.x + left_w, self.y, self.w - left_w, self.h),
        )
    }

    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    pub fn remaining_after_top(&self, height: f32) -> Self {
        let height = height.min(self.h);
        Self::new(self.x, self.y + height, self.w, self.h - height)
    }

    pub fn slice_bottom(&self, height: f32) -> Self {
        let height = height.min(self.h);
        Self::new(self.x, self.bottom() - height, self.w, height)
    }

    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, self.h - height.min(self.h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_h() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (left, right) = r.split_h(0.5);
        assert_eq!(left, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(right, Rect::new(50.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 29.9));
        assert!(!r.contains(30.0, 15.0));
        assert!(!r.contains(5.0, 15.0));
    }

    #[test]
    fn test_slices_partition() {
        let r = Rect::screen(200.0, 100.0);
        assert_eq!(r.slice_top(30.0).h + r.remaining_after_top(30.0).h, 100.0);
        assert_eq!(r.slice_bottom(40.0).y, 60.0);
        assert_eq!(r.remaining_after_bottom(40.0), Rect::new(0.0, 0.0, 200.0, 60.0));
        assert_eq!(r.slice_top(500.0).h, 100.0);
        assert_eq!(r.pad(60.0).h, 0.0);
    }
}
