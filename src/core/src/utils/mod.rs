pub mod dates;
pub mod logging;
pub mod numbers;
pub mod strings;

pub use dates::*;
pub use logging::*;
pub use numbers::*;
pub use strings::*;
