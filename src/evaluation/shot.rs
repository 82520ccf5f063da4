use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::geom::Angle;

/// Where to aim on the goal line and how much angular margin there is
/// around that aim point
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Shot {
    pub point: Point2<f64>,
    pub open_angle: Angle,
}

impl Shot {
    pub fn new(point: Point2<f64>, open_angle: Angle) -> Self {
        Self { point, open_angle }
    }
}
