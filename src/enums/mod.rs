pub mod constant;

pub use constant::*;
