//! Contract interface of the game, plus JSON-RPC quantity helpers.

pub use alloy_primitives::{hex, Address, Bytes, B256, U256};
use alloy_sol_types::sol;

use crate::error::AbiError;

sol! {
    #![sol(all_derives)]

    struct CharacterAttributes {
        uint256 characterIndex;
        string name;
        string imageURI;
        uint256 hp;
        uint256 maxHp;
        uint256 attackDamage;
    }

    struct BigBoss {
        string name;
        string imageURI;
        uint256 hp;
        uint256 maxHp;
        uint256 attackDamage;
    }

    /// Emitted after every attack with the health left on both sides.
    event AttackComplete(uint256 newBossHp, uint256 newPlayerHp);

    event CharacterNFTMinted(address sender, uint256 tokenId, uint256 characterIndex);

    /// Zeroed struct when the caller owns nothing.
    function checkIfUserHasNFT() external view returns (CharacterAttributes memory);
    function getAllDefaultCharacters() external view returns (CharacterAttributes[] memory);
    function getBigBoss() external view returns (BigBoss memory);
    function mintCharacterNFT(uint256 characterIndex) external;
    function attackBoss() external;
}

/// Narrows to `u64`, clamping anything wider to `u64::MAX`.
pub fn saturating_u64(value: U256) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Parses a JSON-RPC quantity such as `0x1b4`.
pub fn parse_quantity(value: &str) -> Result<u64, AbiError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16).map_err(|e| AbiError::Quantity(e.to_string()))
}

pub fn to_quantity(value: u64) -> String {
    format!("0x{value:x}")
}
