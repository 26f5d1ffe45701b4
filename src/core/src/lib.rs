pub mod club;
pub mod league;
pub mod r#match;
pub mod shared;
pub mod simulator;
pub mod utils;

pub use club::*;
pub use league::*;
pub use r#match::*;
pub use simulator::*;
pub use shared::*;
pub use utils::*;
