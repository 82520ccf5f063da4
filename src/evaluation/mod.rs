mod shot;
pub use self::shot::*;

mod best_shot;
pub use self::best_shot::*;
