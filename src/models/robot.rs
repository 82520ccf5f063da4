use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A robot on the field at one instant. Identity is the id together with
/// the position, so robots with equal ids on opposing teams stay distinct.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Robot {
    pub id: u32,
    pub position: Point2<f64>,
}

impl Robot {
    pub fn new(id: u32, position: Point2<f64>) -> Self {
        Self { id, position }
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Team {
    robots: Vec<Robot>,
}

impl Team {
    pub fn new(robots: Vec<Robot>) -> Self {
        Self { robots }
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot_by_id(&self, id: u32) -> Option<&Robot> {
        self.robots.iter().find(|robot| robot.id == id)
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }
}
