use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geom::Angle;
use crate::utils::FloatCompare;

/// A contiguous range of directions `[bottom, top]` seen from a fixed point.
///
/// Equality and ordering only look at `top`. This is what the obstacle sort
/// needs, so do not use `==` to test whether two segments cover the same range.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct AngleSegment {
    top: Angle,
    bottom: Angle,
}

impl AngleSegment {
    /// Creates a segment from two bounds. The larger bound always becomes the
    /// top, so reversed arguments describe the same range.
    pub fn new(top: Angle, bottom: Angle) -> Self {
        if top < bottom {
            Self {
                top: bottom,
                bottom: top,
            }
        } else {
            Self { top, bottom }
        }
    }

    pub fn empty() -> Self {
        Self::new(Angle::zero(), Angle::zero())
    }

    pub fn top(&self) -> Angle {
        self.top
    }

    pub fn set_top(&mut self, top: Angle) {
        self.top = top;
    }

    pub fn bottom(&self) -> Angle {
        self.bottom
    }

    pub fn set_bottom(&mut self, bottom: Angle) {
        self.bottom = bottom;
    }

    /// Absolute width of the segment
    pub fn delta(&self) -> Angle {
        (self.top - self.bottom).abs()
    }

    pub fn mid(&self) -> Angle {
        self.bottom + (self.top - self.bottom) / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.delta().to_radians().approx_eq(0.0)
    }

    /// True if the two segments share a range of nonzero width
    pub fn overlaps(&self, other: &Self) -> bool {
        other.bottom < self.top && other.top > self.bottom
    }
}

impl PartialEq for AngleSegment {
    fn eq(&self, other: &Self) -> bool {
        self.top == other.top
    }
}

impl PartialOrd for AngleSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.top.partial_cmp(&other.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(top: f64, bottom: f64) -> AngleSegment {
        AngleSegment::new(Angle::from_degrees(top), Angle::from_degrees(bottom))
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let seg = segment(-5.0, 15.0);
        assert!(seg.top().to_degrees().approx_eq(15.0));
        assert!(seg.bottom().to_degrees().approx_eq(-5.0));
        assert!(seg.delta().to_degrees().approx_eq(20.0));
        assert!(seg.mid().to_degrees().approx_eq(5.0));
    }

    #[test]
    fn comparison_uses_top_only() {
        let wide = segment(10.0, -10.0);
        let narrow = segment(10.0, 9.0);
        let lower = segment(3.0, -10.0);

        assert!(wide == narrow);
        assert!(lower < wide);
        assert!(narrow > lower);
        assert_eq!(Some(Ordering::Equal), wide.partial_cmp(&narrow));
    }

    #[test]
    fn degenerate_segment() {
        assert!(AngleSegment::empty().is_degenerate());
        assert!(segment(4.0, 4.0).is_degenerate());
        assert!(!segment(4.0, 3.9).is_degenerate());
    }

    #[test]
    fn overlap_requires_shared_width() {
        let seg = segment(10.0, 0.0);
        assert!(seg.overlaps(&segment(5.0, -5.0)));
        assert!(seg.overlaps(&segment(20.0, -20.0)));
        assert!(!seg.overlaps(&segment(0.0, -5.0)));
        assert!(!seg.overlaps(&segment(15.0, 10.0)));
    }

    #[test]
    fn setters_move_bounds() {
        let mut seg = segment(10.0, -10.0);
        seg.set_top(Angle::from_degrees(2.0));
        seg.set_bottom(Angle::from_degrees(-3.0));
        assert!(seg.delta().to_degrees().approx_eq(5.0));
    }
}
