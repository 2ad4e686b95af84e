pub mod abi;
pub mod consts;
pub mod contract;
pub mod error;
pub mod event;
pub mod screen;
pub mod sdk;
pub mod state;
pub mod view;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;

pub mod prelude {
    pub use crate::abi::*;
    pub use crate::consts::*;
    pub use crate::contract::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use crate::screen::*;
    pub use crate::state::*;
    pub use crate::view::*;
    pub use crate::wallet::*;
}
