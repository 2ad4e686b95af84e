use thiserror::Error;

/// Failures decoding contract return data, log payloads or RPC quantities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("abi decode failed: {0}")]
    Sol(String),
    #[error("invalid quantity: {0}")]
    Quantity(String),
    #[error("log has more than four topics")]
    TooManyTopics,
}

impl From<alloy_sol_types::Error> for AbiError {
    fn from(e: alloy_sol_types::Error) -> Self {
        AbiError::Sol(e.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("no injected wallet found")]
    ProviderMissing,
    #[error("request rejected by user")]
    Rejected,
    #[error("wallet error {code}: {message}")]
    Provider { code: i64, message: String },
    #[error("unexpected wallet response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("rpc error: {0}")]
    Rpc(String),
    #[error("decode error: {0}")]
    Decode(#[from] AbiError),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("transaction {0} reverted")]
    Reverted(String),
    #[error("transaction {0} not confirmed in time")]
    ConfirmationTimeout(String),
}
