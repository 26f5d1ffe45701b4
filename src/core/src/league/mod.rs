mod league;
pub mod schedule;
mod table;

pub use league::*;
pub use schedule::*;
pub use table::*;
