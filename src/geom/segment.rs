use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::geom::Angle;
use crate::utils::FloatCompare;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.start, &self.end)
    }
}

/// Half line starting at `start` and extending in `direction`
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Ray {
    pub start: Point2<f64>,
    pub direction: Angle,
}

impl Ray {
    pub fn new(start: Point2<f64>, direction: Angle) -> Self {
        Self { start, direction }
    }
}

/// Point where the ray crosses the segment. Parallel and collinear input has
/// no single crossing point and gives `None`.
pub fn intersection(ray: &Ray, segment: &Segment) -> Option<Point2<f64>> {
    let direction = ray.direction.to_unit_vector();
    let edge = segment.end - segment.start;

    // 2D cross product, zero when the ray runs along the segment
    let denominator = direction.perp(&edge);
    if denominator.approx_eq(0.0) {
        return None;
    }

    let offset = segment.start - ray.start;
    let t = offset.perp(&edge) / denominator;
    let s = offset.perp(&direction) / denominator;

    if t.approx_lt(0.0) || s.approx_lt(0.0) || s.approx_gt(1.0) {
        return None;
    }

    Some(segment.start + edge * s.max(0.0).min(1.0))
}
