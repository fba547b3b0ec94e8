pub mod enums;
pub mod log;

pub use enums::*;
pub use log::*;
