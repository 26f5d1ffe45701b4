pub mod engine;
mod events;
mod fixture;
mod result;
pub mod squad;

pub use engine::*;
pub use events::*;
pub use fixture::*;
pub use result::*;
pub use squad::*;
