// Largest radius of a robot footprint in meters
pub const ROBOT_MAX_RADIUS_METERS: f64 = 0.09;

// Division B field
pub const FIELD_LENGTH_METERS: f64 = 9.0;
pub const FIELD_WIDTH_METERS: f64 = 6.0;
pub const GOAL_WIDTH_METERS: f64 = 1.0;
