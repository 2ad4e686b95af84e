use std::time::Duration;

/// Address of the deployed game contract.
pub const CONTRACT_ADDRESS: &str = "0x5f2b7a8f0a3c6d7e41b2c9d8e7f60a1b2c3d4e5f";

/// JSON-RPC endpoint used for reads, receipts and logs.
pub const RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Chain the contract is deployed on (Sepolia).
pub const REQUIRED_CHAIN_ID: u64 = 11_155_111;

/// Human readable name of [`REQUIRED_CHAIN_ID`], used in alerts.
pub const REQUIRED_NETWORK_NAME: &str = "Sepolia";

/// Content-addressed gateway that character and boss images resolve against.
pub const IPFS_GATEWAY: &str = "https://cloudflare-ipfs.com/ipfs/";

/// How long the "boss was hit" toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_millis(5_000);

/// Interval between `eth_getLogs` polls for attack results.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(4_000);

/// Interval between receipt polls while a transaction confirms.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(2_000);

/// Receipt polls before a pending transaction is reported as unconfirmed.
pub const RECEIPT_POLL_LIMIT: u32 = 150;

/// EIP-1193 error code for a request the user declined.
pub const USER_REJECTED_CODE: i64 = 4001;
