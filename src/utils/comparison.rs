use std::borrow::Borrow;

// Tolerance used for angles in radians and for distances in meters
pub const EPSILON: f64 = 0.000001;

const MARGIN: float_cmp::F64Margin = float_cmp::F64Margin {
    epsilon: EPSILON,
    ulps: 4,
};

/// Extension trait enabling float comparison using an epsilon value
pub trait FloatCompare<T> {
    fn approx_lt(&self, other: T) -> bool;
    fn approx_lte(&self, other: T) -> bool;
    fn approx_gt(&self, other: T) -> bool;
    fn approx_gte(&self, other: T) -> bool;
    fn approx_eq(&self, other: T) -> bool;
}

impl<T: Borrow<f64>> FloatCompare<T> for f64 {
    fn approx_lt(&self, other: T) -> bool {
        *self < other.borrow() - EPSILON
    }

    fn approx_lte(&self, other: T) -> bool {
        self < other.borrow() || FloatCompare::approx_eq(self, other)
    }

    fn approx_gt(&self, other: T) -> bool {
        *self > other.borrow() + EPSILON
    }

    fn approx_gte(&self, other: T) -> bool {
        self > other.borrow() || FloatCompare::approx_eq(self, other)
    }

    fn approx_eq(&self, other: T) -> bool {
        float_cmp::ApproxEq::approx_eq(*self, *other.borrow(), MARGIN)
    }
}
