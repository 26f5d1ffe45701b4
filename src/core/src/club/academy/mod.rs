pub mod academy;
pub mod result;
pub mod settings;

pub use academy::*;
pub use result::*;
pub use settings::*;
