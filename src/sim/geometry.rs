//! Axis-aligned rectangles and line-of-sight queries
//!
//! World coordinates: x grows right, y grows down. A rectangle is anchored at
//! its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }

    /// Does the segment a-b touch this rectangle (boundary or interior)?
    ///
    /// Liang-Barsky clipping against the closed rectangle.
    pub fn clips_segment(&self, a: Vec2, b: Vec2) -> bool {
        let d = b - a;
        let max = self.max();
        let mut t0 = 0.0_f32;
        let mut t1 = 1.0_f32;

        for (p, q) in [
            (-d.x, a.x - self.min.x),
            (d.x, max.x - a.x),
            (-d.y, a.y - self.min.y),
            (d.y, max.y - a.y),
        ] {
            if p == 0.0 {
                // Parallel to this edge: reject if outside it
                if q < 0.0 {
                    return false;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return false;
                    }
                    t0 = t0.max(r);
                } else {
                    if r < t0 {
                        return false;
                    }
                    t1 = t1.min(r);
                }
            }
        }
        true
    }
}

/// True if any rectangle in `rects` overlaps `probe`
pub fn overlaps_any<'a>(probe: &Rect, rects: impl IntoIterator<Item = &'a Rect>) -> bool {
    rects.into_iter().any(|r| probe.intersects(r))
}

/// True iff no rectangle in `blockers` touches the segment a-b
pub fn line_of_sight<'a>(a: Vec2, b: Vec2, blockers: impl IntoIterator<Item = &'a Rect>) -> bool {
    // Clip in a canonical endpoint order so the answer never depends on direction
    let (p, q) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
    !blockers.into_iter().any(|r| r.clips_segment(p, q))
}
