//! Integer screen geometry as reported by the window manager.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    /// Pulls off-screen coordinates back to the top-left screen edge.
    pub fn clamp_to_screen(self) -> Self { Self { x: self.x.max(0), y: self.y.max(0) } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }
}

/// A window frame. Origins may be negative for windows hanging off screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_negative_coordinates_only() {
        assert_eq!(Point::new(-20, 15).clamp_to_screen(), Point::new(0, 15));
        assert_eq!(Point::new(30, -1).clamp_to_screen(), Point::new(30, 0));
        assert_eq!(Point::new(7, 9).clamp_to_screen(), Point::new(7, 9));
    }
}
