mod arena;
mod root;
mod selection;

pub use arena::*;
pub use root::*;
pub use selection::*;
