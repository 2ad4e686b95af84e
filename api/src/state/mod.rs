mod boss;
mod character;

pub use crate::abi::{BigBoss, CharacterAttributes};
