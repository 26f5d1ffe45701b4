mod selector;
mod squad;

pub use selector::*;
pub use squad::*;
