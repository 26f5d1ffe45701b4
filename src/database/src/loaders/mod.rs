mod club;
mod league;
mod names;

pub use club::*;
pub use league::*;
pub use names::*;
