mod field;
pub use self::field::*;

mod robot;
pub use self::robot::*;
