//! Pixel geometry shared by placement and the host surface.
use serde::{Deserialize, Serialize};

/// Axis-aligned box in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Measured size of a rendered tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Document scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_follow_size() {
        let rect = Rect::new(500.0, 5.0, 20.0, 20.0);
        assert!((rect.right() - 520.0).abs() < f64::EPSILON);
        assert!((rect.bottom() - 25.0).abs() < f64::EPSILON);
        assert!((rect.center_x() - 510.0).abs() < f64::EPSILON);
    }
}
