//! Table geometry

use glam::Vec2;

/// Axis-aligned playable area; y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TableBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        debug_assert!(left < right && top < bottom, "table box is inverted");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Window area inside a rim of `rim` pixels, shifted by a drop shadow
    pub fn from_window(width: f32, height: f32, rim: f32, shadow_offset: f32) -> Self {
        Self::new(
            rim + shadow_offset,
            rim + shadow_offset,
            width - rim + shadow_offset,
            height - rim + shadow_offset,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            0.5 * (self.left + self.right),
            0.5 * (self.top + self.bottom),
        )
    }

    /// The box shrunk by `dx` on the left and right and `dy` on the top and bottom
    pub fn shrink(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }
}
