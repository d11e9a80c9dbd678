use serde::{Deserialize, Serialize};

use crate::sys::geometry::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A move along a single axis. The amount is wide enough to hold the
/// distance between any two screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shift {
    pub orientation: Orientation,
    pub amount: i64,
}

impl Shift {
    /// Moves `point`, saturating at the edges of the coordinate space.
    pub fn apply(self, point: Point) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(offset(point.x, self.amount), point.y),
            Orientation::Vertical => Point::new(point.x, offset(point.y, self.amount)),
        }
    }
}

fn offset(coord: i32, amount: i64) -> i32 {
    let moved = i64::from(coord).saturating_add(amount);
    moved.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// The screen area a badge occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupBox {
    pub origin: Point,
    pub size: Size,
}

impl PopupBox {
    pub const fn new(origin: Point, size: Size) -> Self { Self { origin, size } }

    /// Two boxes collide when, on both axes, their distance is under half
    /// the sum of their extents. Both sides are doubled so odd extents are
    /// compared exactly.
    ///
    /// Halving the extent sum with integer division would round 4.5 down to
    /// 4 and let boxes that share a pixel column pass as apart. Keep the
    /// doubled form.
    pub fn overlaps(&self, other: &PopupBox) -> bool {
        let dx = (i64::from(self.origin.x) - i64::from(other.origin.x)).abs();
        let dy = (i64::from(self.origin.y) - i64::from(other.origin.y)).abs();
        2 * dx < i64::from(self.size.width) + i64::from(other.size.width)
            && 2 * dy < i64::from(self.size.height) + i64::from(other.size.height)
    }
}
