mod clock;
mod data;
mod matchday;
mod processors;
mod result;
mod settings;
mod simulator;

pub use clock::*;
pub use data::*;
pub use matchday::*;
pub use processors::*;
pub use result::*;
pub use settings::*;
pub use simulator::*;
