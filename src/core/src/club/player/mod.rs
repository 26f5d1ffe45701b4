pub mod builder;
pub mod generator;
pub mod injury;
pub mod player;
pub mod positions;
pub mod skills;
pub mod statistics;
pub mod training;

pub use builder::*;
pub use generator::*;
pub use injury::*;
pub use player::*;
pub use positions::*;
pub use skills::*;
pub use statistics::*;
pub use training::*;
