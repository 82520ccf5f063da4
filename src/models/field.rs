use std::str::FromStr;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::{FIELD_LENGTH_METERS, FIELD_WIDTH_METERS, GOAL_WIDTH_METERS};
use crate::geom::Segment;

/// Selects which of the two goals a shot is aimed at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Friendly,
    Enemy,
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friendly" => Ok(Self::Friendly),
            "enemy" => Ok(Self::Enemy),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Field centered on the origin. The enemy goal is on +x and the friendly
/// goal on -x.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    pub length: f64,
    pub width: f64,
    pub goal_width: f64,
}

impl Field {
    pub fn new(length: f64, width: f64, goal_width: f64) -> Self {
        Self {
            length,
            width,
            goal_width,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.field_length, config.field_width, config.goal_width)
    }

    pub fn enemy_goalpost_pos(&self) -> Point2<f64> {
        Point2::new(self.length / 2.0, self.goal_width / 2.0)
    }

    pub fn enemy_goalpost_neg(&self) -> Point2<f64> {
        Point2::new(self.length / 2.0, -self.goal_width / 2.0)
    }

    pub fn friendly_goalpost_pos(&self) -> Point2<f64> {
        Point2::new(-self.length / 2.0, self.goal_width / 2.0)
    }

    pub fn friendly_goalpost_neg(&self) -> Point2<f64> {
        Point2::new(-self.length / 2.0, -self.goal_width / 2.0)
    }

    /// Posts of the goal as (positive y, negative y)
    pub fn goalposts(&self, goal: Goal) -> (Point2<f64>, Point2<f64>) {
        match goal {
            Goal::Friendly => (self.friendly_goalpost_pos(), self.friendly_goalpost_neg()),
            Goal::Enemy => (self.enemy_goalpost_pos(), self.enemy_goalpost_neg()),
        }
    }

    pub fn goal_segment(&self, goal: Goal) -> Segment {
        let (pos_post, neg_post) = self.goalposts(goal);
        Segment::new(pos_post, neg_post)
    }

    /// Unit vector pointing from the center of the field towards the goal
    pub fn shooting_axis(&self, goal: Goal) -> Vector2<f64> {
        match goal {
            Goal::Friendly => -Vector2::x(),
            Goal::Enemy => Vector2::x(),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_LENGTH_METERS, FIELD_WIDTH_METERS, GOAL_WIDTH_METERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FloatCompare;

    #[test]
    fn goalposts_by_goal() {
        let field = Field::default();

        let (pos, neg) = field.goalposts(Goal::Enemy);
        assert!(pos.x.approx_eq(4.5) && pos.y.approx_eq(0.5));
        assert!(neg.x.approx_eq(4.5) && neg.y.approx_eq(-0.5));

        let (pos, neg) = field.goalposts(Goal::Friendly);
        assert!(pos.x.approx_eq(-4.5) && pos.y.approx_eq(0.5));
        assert!(neg.x.approx_eq(-4.5) && neg.y.approx_eq(-0.5));
    }

    #[test]
    fn shooting_axis_points_at_goal() {
        let field = Field::default();
        for &goal in &[Goal::Friendly, Goal::Enemy] {
            let axis = field.shooting_axis(goal);
            let to_goal = field.goal_segment(goal).midpoint().coords;
            assert!(axis.dot(&to_goal).approx_gt(0.0));
        }
    }

    #[test]
    fn parse_goal() {
        assert_eq!(Ok(Goal::Enemy), "enemy".parse::<Goal>());
        assert_eq!(Ok(Goal::Friendly), "friendly".parse::<Goal>());
        assert!("ours".parse::<Goal>().is_err());
    }
}
