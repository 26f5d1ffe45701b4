pub mod fullname;
pub mod names;
pub mod sequence;

pub use fullname::*;
pub use names::*;
pub use sequence::*;
