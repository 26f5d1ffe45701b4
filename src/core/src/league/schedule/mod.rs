mod cup;
mod friendlies;
mod round_robin;
mod scheduler;
mod settings;

pub use cup::*;
pub use friendlies::*;
pub use round_robin::*;
pub use scheduler::*;
pub use settings::*;
