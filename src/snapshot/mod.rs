pub mod conversion;
pub mod states;

pub use conversion::*;
pub use states::*;
