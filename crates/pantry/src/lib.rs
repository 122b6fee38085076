mod item;
mod store;

pub use item::*;
pub use store::*;
