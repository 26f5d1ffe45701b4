mod engine;
mod poisson;

pub use engine::*;
pub use poisson::*;
