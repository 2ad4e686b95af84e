use alloy_sol_types::SolEvent;
use epic_game_api::abi::{AttackComplete, Bytes};
use epic_game_api::consts::{CONTRACT_ADDRESS, RPC_URL};
use epic_game_api::contract::{wait_for_receipt, GameContract, ReceiptSource, RpcReceipt, TxReceipt};
use epic_game_api::error::{GameError, WalletError};
use epic_game_api::event::LogEntry;
use epic_game_api::sdk::{self, CallRequest};
use epic_game_api::state::{BigBoss, CharacterAttributes};
use tracing::debug;

use super::ethereum::InjectedWallet;
use super::rpc::{eth_call, fetch_block_number, fetch_logs, fetch_receipt};
use super::timer::AppTimer;

/// Game contract reached over JSON-RPC for reads, with writes signed by the
/// injected wallet on behalf of `account`.
#[derive(Clone)]
pub struct EvmGameContract {
    account: String,
    wallet: Option<InjectedWallet>,
    rpc_url: &'static str,
}

impl EvmGameContract {
    pub fn new(account: String, wallet: Option<InjectedWallet>) -> Self {
        EvmGameContract {
            account,
            wallet,
            rpc_url: RPC_URL,
        }
    }

    async fn call(&self, data: Bytes) -> Result<Bytes, GameError> {
        let request = CallRequest::new(Some(&self.account), data);
        eth_call(self.rpc_url, &request).await.map_err(GameError::Rpc)
    }

    /// Sends through the wallet and waits for the receipt.
    async fn transact(&self, data: Bytes) -> Result<TxReceipt, GameError> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::ProviderMissing)?;
        let tx_hash = wallet
            .send_transaction(&CallRequest::new(Some(&self.account), data))
            .await?;
        debug!(tx = %tx_hash, "transaction sent, waiting for receipt");
        wait_for_receipt(self, &AppTimer, &tx_hash).await
    }
}

impl ReceiptSource for EvmGameContract {
    async fn receipt(&self, tx_hash: &str) -> Result<Option<RpcReceipt>, GameError> {
        fetch_receipt(self.rpc_url, tx_hash)
            .await
            .map_err(GameError::Rpc)
    }
}

impl GameContract for EvmGameContract {
    async fn owned_character(&self) -> Result<Option<CharacterAttributes>, GameError> {
        let data = self.call(sdk::check_if_user_has_nft()).await?;
        Ok(CharacterAttributes::decode_owned(&data)?)
    }

    async fn boss(&self) -> Result<BigBoss, GameError> {
        let data = self.call(sdk::get_big_boss()).await?;
        Ok(BigBoss::decode_returned(&data)?)
    }

    async fn default_characters(&self) -> Result<Vec<CharacterAttributes>, GameError> {
        let data = self.call(sdk::get_all_default_characters()).await?;
        Ok(CharacterAttributes::decode_list(&data)?)
    }

    async fn mint_character(&self, character_index: u64) -> Result<TxReceipt, GameError> {
        self.transact(sdk::mint_character_nft(character_index)).await
    }

    async fn attack_boss(&self) -> Result<TxReceipt, GameError> {
        self.transact(sdk::attack_boss()).await
    }

    async fn block_number(&self) -> Result<u64, GameError> {
        fetch_block_number(self.rpc_url)
            .await
            .map_err(GameError::Rpc)
    }

    async fn attack_logs(&self, from: u64, to: u64) -> Result<Vec<LogEntry>, GameError> {
        fetch_logs(
            self.rpc_url,
            CONTRACT_ADDRESS,
            AttackComplete::SIGNATURE_HASH,
            from,
            to,
        )
        .await
        .map_err(GameError::Rpc)
    }
}
