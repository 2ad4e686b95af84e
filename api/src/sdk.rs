use alloy_sol_types::SolCall;
use serde::Serialize;

use crate::abi::{
    attackBossCall, checkIfUserHasNFTCall, getAllDefaultCharactersCall, getBigBossCall,
    mintCharacterNFTCall, Bytes, U256,
};
use crate::consts::CONTRACT_ADDRESS;

pub fn check_if_user_has_nft() -> Bytes {
    checkIfUserHasNFTCall {}.abi_encode().into()
}

pub fn get_all_default_characters() -> Bytes {
    getAllDefaultCharactersCall {}.abi_encode().into()
}

pub fn get_big_boss() -> Bytes {
    getBigBossCall {}.abi_encode().into()
}

pub fn mint_character_nft(character_index: u64) -> Bytes {
    mintCharacterNFTCall {
        characterIndex: U256::from(character_index),
    }
    .abi_encode()
    .into()
}

pub fn attack_boss() -> Bytes {
    attackBossCall {}.abi_encode().into()
}

/// Call object for `eth_call` and `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    pub data: Bytes,
}

impl CallRequest {
    pub fn new(from: Option<&str>, data: Bytes) -> Self {
        CallRequest {
            from: from.map(str::to_owned),
            to: CONTRACT_ADDRESS.to_owned(),
            data,
        }
    }
}
