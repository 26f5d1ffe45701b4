pub mod academy;
pub mod club;
pub mod finance;
pub mod player;

pub use academy::*;
pub use club::*;
pub use finance::*;
pub use player::*;
