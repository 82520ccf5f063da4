use fastrand::Rng;
use nalgebra::Point2;
use std::cell::RefCell;

use crate::models::{Field, Robot};

#[derive(Debug)]
pub struct Random {
    pub rng: RefCell<Rng>,
    pub seed: u64,
}

impl Random {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(Rng::with_seed(seed)),
            seed,
        }
    }

    pub fn shuffle<T>(&self, container: &mut [T]) {
        self.rng.borrow_mut().shuffle(container);
    }

    pub fn real(&self) -> f64 {
        self.rng.borrow_mut().f64()
    }

    // Get random number in range [lower, upper)
    pub fn range_f64(&self, lower: f64, upper: f64) -> f64 {
        lower + (upper - lower) * self.real()
    }

    pub fn point(&self, field: &Field) -> Point2<f64> {
        Point2::new(
            self.range_f64(-field.length / 2.0, field.length / 2.0),
            self.range_f64(-field.width / 2.0, field.width / 2.0),
        )
    }

    // Robots with ids 0..number spread over the whole field
    pub fn robots(&self, field: &Field, number: u32) -> Vec<Robot> {
        (0..number)
            .map(|id| Robot::new(id, self.point(field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_robots_are_reproducible() {
        let field = Field::default();
        let first = Random::from_seed(3).robots(&field, 6);
        let second = Random::from_seed(3).robots(&field, 6);
        assert_eq!(first, second);
    }

    #[test]
    fn robots_stay_on_field() {
        let field = Field::default();
        let random = Random::from_seed(11);
        for robot in random.robots(&field, 100) {
            assert!(robot.position.x.abs() <= field.length / 2.0);
            assert!(robot.position.y.abs() <= field.width / 2.0);
        }
    }
}
