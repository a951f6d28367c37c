pub mod definition;
pub mod patch;

pub use definition::*;
pub use patch::*;
