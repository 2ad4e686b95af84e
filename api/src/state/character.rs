use alloy_sol_types::SolCall;

use crate::abi::{checkIfUserHasNFTCall, getAllDefaultCharactersCall, CharacterAttributes};
use crate::error::AbiError;

impl CharacterAttributes {
    /// Return data of `checkIfUserHasNFT()`. The contract answers with a
    /// zeroed struct when the caller owns nothing, which maps to `None`.
    pub fn decode_owned(data: &[u8]) -> Result<Option<Self>, AbiError> {
        let character = checkIfUserHasNFTCall::abi_decode_returns(data)?;
        if character.name.is_empty() {
            return Ok(None);
        }
        Ok(Some(character))
    }

    /// Return data of `getAllDefaultCharacters()`.
    pub fn decode_list(data: &[u8]) -> Result<Vec<Self>, AbiError> {
        Ok(getAllDefaultCharactersCall::abi_decode_returns(data)?)
    }
}
