use serde::{Deserialize, Serialize};

use crate::data::FrameSize;

/// Axis-aligned pixel rectangle in original-image coordinates, corner format.
///
/// Coordinates are whole pixels; decoding truncates fractional centers the
/// same way the detectors upstream of this crate export them.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl DetBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Builds a box from its top-left corner and size.
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).max(0)
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).max(0)
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> i32 {
        self.x1 + self.width() / 2
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> i32 {
        self.y1 + self.height() / 2
    }

    /// Returns the bounding box coordinates as `(x1, y1, x2, y2)`.
    pub fn xy1_xy2(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Returns the bounding box coordinates and size as `(x, y, w, h)`.
    pub fn xy1_wh(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.width(), self.height())
    }

    /// Computes the area of the bounding box. An inverted box has zero area.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &DetBox) -> i64 {
        let left = self.x1.max(other.x1);
        let right = self.x2.min(other.x2);
        let top = self.y1.max(other.y1);
        let bottom = self.y2.min(other.y2);
        (right - left).max(0) as i64 * (bottom - top).max(0) as i64
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &DetBox) -> i64 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Checks if this bounding box completely contains `other`.
    pub fn contains(&self, other: &DetBox) -> bool {
        self.x1 <= other.x1 && self.x2 >= other.x2 && self.y1 <= other.y1 && self.y2 >= other.y2
    }

    /// Intersects the box with the full-frame rectangle `[0, 0, w, h]`.
    ///
    /// The result may be inverted (zero area) when the box lies entirely
    /// outside the frame; callers decide whether that is a discard.
    pub fn clip(&self, frame: FrameSize) -> DetBox {
        DetBox {
            x1: self.x1.max(0),
            y1: self.y1.max(0),
            x2: self.x2.min(frame.width as i32),
            y2: self.y2.min(frame.height as i32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_inverted_box_is_zero() {
        let b = DetBox::new(100, 100, 40, 40);
        assert_eq!(b.area(), 0);
        assert_eq!(b.width(), 0);
    }

    #[test]
    fn intersect_and_union() {
        let a = DetBox::new(0, 0, 100, 100);
        let b = DetBox::new(50, 50, 150, 150);
        assert_eq!(a.intersect(&b), 2500);
        assert_eq!(a.union(&b), 10000 + 10000 - 2500);

        let far = DetBox::new(500, 500, 600, 600);
        assert_eq!(a.intersect(&far), 0);
    }

    #[test]
    fn clip_to_frame() {
        let frame = FrameSize::new(640, 480);
        let b = DetBox::new(-20, -10, 700, 500).clip(frame);
        assert_eq!(b, DetBox::new(0, 0, 640, 480));

        let outside = DetBox::new(700, 500, 800, 600).clip(frame);
        assert_eq!(outside.area(), 0);
    }
}
