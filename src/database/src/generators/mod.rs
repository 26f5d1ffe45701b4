mod generator;
mod squad;

pub use generator::*;
pub use squad::*;
