mod catalog;
mod types;

pub use catalog::*;
pub use types::*;
