mod angle;
pub use self::angle::*;

mod segment;
pub use self::segment::*;

mod angle_segment;
pub use self::angle_segment::*;

mod angle_map;
pub use self::angle_map::*;
