mod arrangements;
mod component;

pub use arrangements::*;
pub use component::*;
