use alloy_sol_types::SolCall;

use crate::abi::{getBigBossCall, BigBoss};
use crate::error::AbiError;

impl BigBoss {
    /// Return data of `getBigBoss()`.
    pub fn decode_returned(data: &[u8]) -> Result<Self, AbiError> {
        Ok(getBigBossCall::abi_decode_returns(data)?)
    }
}
