use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::abi::parse_quantity;
use crate::consts::{RECEIPT_POLL_INTERVAL, RECEIPT_POLL_LIMIT};
use crate::error::GameError;
use crate::event::LogEntry;
use crate::state::{BigBoss, CharacterAttributes};

/// Confirmed transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: String,
    pub block_number: u64,
    pub logs: Vec<LogEntry>,
}

/// Typed handle on the game contract. Reads resolve immediately; writes
/// resolve once the transaction is confirmed.
///
/// Futures are not `Send`: implementations live on the browser's UI thread.
pub trait GameContract {
    /// `checkIfUserHasNFT()` for the signer. `None` when nothing is owned.
    fn owned_character(
        &self,
    ) -> impl Future<Output = Result<Option<CharacterAttributes>, GameError>>;

    fn boss(&self) -> impl Future<Output = Result<BigBoss, GameError>>;

    fn default_characters(
        &self,
    ) -> impl Future<Output = Result<Vec<CharacterAttributes>, GameError>>;

    fn mint_character(
        &self,
        character_index: u64,
    ) -> impl Future<Output = Result<TxReceipt, GameError>>;

    fn attack_boss(&self) -> impl Future<Output = Result<TxReceipt, GameError>>;

    fn block_number(&self) -> impl Future<Output = Result<u64, GameError>>;

    /// `AttackComplete` logs emitted in `from..=to`.
    fn attack_logs(
        &self,
        from: u64,
        to: u64,
    ) -> impl Future<Output = Result<Vec<LogEntry>, GameError>>;
}

/// Source of delays, swapped for simulated time in tests.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// `eth_getTransactionReceipt` result, as the node returns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    pub transaction_hash: String,
    pub block_number: String,
    /// `0x1` on success, `0x0` when reverted.
    pub status: Option<String>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// Where receipts of sent transactions are looked up.
pub trait ReceiptSource {
    /// `Ok(None)` while the transaction is still pending.
    fn receipt(
        &self,
        tx_hash: &str,
    ) -> impl Future<Output = Result<Option<RpcReceipt>, GameError>>;
}

/// Polls `source` until `tx_hash` is mined, at most [`RECEIPT_POLL_LIMIT`]
/// times, [`RECEIPT_POLL_INTERVAL`] apart. Failed polls are retried.
pub async fn wait_for_receipt<S: ReceiptSource, T: Timer>(
    source: &S,
    timer: &T,
    tx_hash: &str,
) -> Result<TxReceipt, GameError> {
    for attempt in 0..RECEIPT_POLL_LIMIT {
        if attempt > 0 {
            timer.sleep(RECEIPT_POLL_INTERVAL).await;
        }
        match source.receipt(tx_hash).await {
            Ok(Some(receipt)) => {
                if receipt.status.as_deref() == Some("0x0") {
                    return Err(GameError::Reverted(tx_hash.to_string()));
                }
                return Ok(TxReceipt {
                    block_number: parse_quantity(&receipt.block_number)?,
                    tx_hash: receipt.transaction_hash,
                    logs: receipt.logs,
                });
            }
            Ok(None) => {}
            Err(e) => warn!(tx = %tx_hash, attempt, "receipt poll failed: {e}"),
        }
    }
    Err(GameError::ConfirmationTimeout(tx_hash.to_string()))
}
