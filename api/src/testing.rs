//! Test doubles for the wallet, contract and receipt seams, plus fixtures.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use alloy_sol_types::{SolCall, SolEvent};

use crate::abi::{
    checkIfUserHasNFTCall, getAllDefaultCharactersCall, getBigBossCall, hex, to_quantity,
    Address, AttackComplete, CharacterNFTMinted, U256,
};
use crate::consts::{CONTRACT_ADDRESS, REQUIRED_CHAIN_ID};
use crate::contract::{GameContract, ReceiptSource, RpcReceipt, Timer, TxReceipt};
use crate::error::{GameError, WalletError};
use crate::event::LogEntry;
use crate::state::{BigBoss, CharacterAttributes};
use crate::wallet::WalletProvider;

pub const ALICE: &str = "0x00000000000000000000000000000000000a11ce";

fn character(index: u64, name: &str, image: &str, hp: u64, damage: u64) -> CharacterAttributes {
    CharacterAttributes {
        characterIndex: U256::from(index),
        name: name.into(),
        imageURI: image.into(),
        hp: U256::from(hp),
        maxHp: U256::from(hp),
        attackDamage: U256::from(damage),
    }
}

pub fn leonardo() -> CharacterAttributes {
    character(0, "Leonardo", "QmLeonardo", 300, 25)
}

pub fn donatello() -> CharacterAttributes {
    character(1, "Donatello", "QmDonatello", 200, 50)
}

pub fn shredder() -> BigBoss {
    BigBoss {
        name: "Shredder".into(),
        imageURI: "QmShredder".into(),
        hp: U256::from(10_000),
        maxHp: U256::from(10_000),
        attackDamage: U256::from(50),
    }
}

/// `event` as the contract would emit it in `block`.
pub fn log_entry<E: SolEvent>(event: &E, block: u64) -> LogEntry {
    let log = event.encode_log_data();
    LogEntry {
        address: Some(CONTRACT_ADDRESS.parse().unwrap()),
        topics: log.topics().to_vec(),
        data: log.data,
        block_number: Some(to_quantity(block)),
        transaction_hash: Some(hex::encode_prefixed([block as u8; 32])),
    }
}

pub fn attack_log(boss_hp: u64, player_hp: u64, block: u64) -> LogEntry {
    log_entry(
        &AttackComplete {
            newBossHp: U256::from(boss_hp),
            newPlayerHp: U256::from(player_hp),
        },
        block,
    )
}

pub struct FakeWallet {
    pub authorized: Vec<String>,
    pub granted: Vec<String>,
    pub chain_id: u64,
    pub latency: Duration,
    pub accounts_error: Option<WalletError>,
    pub request_error: Option<WalletError>,
}

impl Default for FakeWallet {
    fn default() -> Self {
        FakeWallet {
            authorized: vec![],
            granted: vec![],
            chain_id: REQUIRED_CHAIN_ID,
            latency: Duration::ZERO,
            accounts_error: None,
            request_error: None,
        }
    }
}

impl FakeWallet {
    pub fn with_accounts(accounts: &[&str]) -> Self {
        let accounts: Vec<String> = accounts.iter().map(|a| a.to_string()).collect();
        FakeWallet {
            authorized: accounts.clone(),
            granted: accounts,
            ..Default::default()
        }
    }

    pub fn granting(account: &str) -> Self {
        FakeWallet {
            granted: vec![account.to_owned()],
            ..Default::default()
        }
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl WalletProvider for FakeWallet {
    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        self.delay().await;
        match &self.accounts_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.authorized.clone()),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.delay().await;
        match &self.request_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.granted.clone()),
        }
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        self.delay().await;
        Ok(self.chain_id)
    }
}

/// In-memory contract. Reads are ABI-encoded and run back through the real
/// decoders so the fake exercises the same path as the RPC-backed gateway.
pub struct FakeContract {
    pub defaults: Vec<CharacterAttributes>,
    pub boss: BigBoss,
    owned: RefCell<Option<CharacterAttributes>>,
    minted: RefCell<Vec<u64>>,
    logs: RefCell<Vec<LogEntry>>,
    head: Cell<u64>,
    tx_count: Cell<u64>,
    pub attack_delay: Duration,
    /// `checkIfUserHasNFT` keeps answering from a node that has not seen
    /// the latest block.
    pub stale_reads: bool,
    pub owned_error: Option<GameError>,
    pub mint_error: Option<GameError>,
    pub attack_error: Option<GameError>,
}

impl Default for FakeContract {
    fn default() -> Self {
        FakeContract {
            defaults: vec![leonardo(), donatello()],
            boss: shredder(),
            owned: RefCell::new(None),
            minted: RefCell::new(vec![]),
            logs: RefCell::new(vec![]),
            head: Cell::new(1),
            tx_count: Cell::new(0),
            attack_delay: Duration::ZERO,
            stale_reads: false,
            owned_error: None,
            mint_error: None,
            attack_error: None,
        }
    }
}

impl FakeContract {
    pub fn with_owned(self, character: CharacterAttributes) -> Self {
        *self.owned.borrow_mut() = Some(character);
        self
    }

    pub fn with_attack_delay(mut self, delay: Duration) -> Self {
        self.attack_delay = delay;
        self
    }

    pub fn with_stale_reads(mut self) -> Self {
        self.stale_reads = true;
        self
    }

    pub fn minted(&self) -> Vec<u64> {
        self.minted.borrow().clone()
    }

    pub fn set_head(&self, block: u64) {
        self.head.set(block);
    }

    pub fn push_log(&self, log: LogEntry) {
        self.logs.borrow_mut().push(log);
    }

    fn receipt(&self, logs: Vec<LogEntry>) -> TxReceipt {
        let n = self.tx_count.get() + 1;
        self.tx_count.set(n);
        TxReceipt {
            tx_hash: to_quantity(n),
            block_number: self.head.get(),
            logs,
        }
    }
}

impl GameContract for FakeContract {
    async fn owned_character(&self) -> Result<Option<CharacterAttributes>, GameError> {
        if let Some(e) = &self.owned_error {
            return Err(e.clone());
        }
        let owned = match self.stale_reads {
            true => CharacterAttributes::default(),
            false => self.owned.borrow().clone().unwrap_or_default(),
        };
        let data = checkIfUserHasNFTCall::abi_encode_returns(&owned);
        Ok(CharacterAttributes::decode_owned(&data)?)
    }

    async fn boss(&self) -> Result<BigBoss, GameError> {
        let data = getBigBossCall::abi_encode_returns(&self.boss);
        Ok(BigBoss::decode_returned(&data)?)
    }

    async fn default_characters(&self) -> Result<Vec<CharacterAttributes>, GameError> {
        let data = getAllDefaultCharactersCall::abi_encode_returns(&self.defaults);
        Ok(CharacterAttributes::decode_list(&data)?)
    }

    async fn mint_character(&self, character_index: u64) -> Result<TxReceipt, GameError> {
        if let Some(e) = &self.mint_error {
            return Err(e.clone());
        }
        let character = self
            .defaults
            .get(character_index as usize)
            .cloned()
            .ok_or_else(|| GameError::Reverted("invalid index".into()))?;
        self.minted.borrow_mut().push(character_index);
        *self.owned.borrow_mut() = Some(character);
        let minted = CharacterNFTMinted {
            sender: ALICE.parse::<Address>().unwrap(),
            tokenId: U256::from(self.minted.borrow().len()),
            characterIndex: U256::from(character_index),
        };
        Ok(self.receipt(vec![log_entry(&minted, self.head.get())]))
    }

    async fn attack_boss(&self) -> Result<TxReceipt, GameError> {
        if !self.attack_delay.is_zero() {
            tokio::time::sleep(self.attack_delay).await;
        }
        if let Some(e) = &self.attack_error {
            return Err(e.clone());
        }
        Ok(self.receipt(vec![]))
    }

    async fn block_number(&self) -> Result<u64, GameError> {
        Ok(self.head.get())
    }

    async fn attack_logs(&self, from: u64, to: u64) -> Result<Vec<LogEntry>, GameError> {
        Ok(self
            .logs
            .borrow()
            .iter()
            .filter(|log| matches!(log.block(), Ok(Some(b)) if (from..=to).contains(&b)))
            .cloned()
            .collect())
    }
}

/// Answers receipt polls from a script, then stays pending forever.
pub struct FakeReceipts {
    script: RefCell<VecDeque<Result<Option<RpcReceipt>, GameError>>>,
    polls: Cell<usize>,
}

impl FakeReceipts {
    pub fn new(script: Vec<Result<Option<RpcReceipt>, GameError>>) -> Self {
        FakeReceipts {
            script: RefCell::new(script.into()),
            polls: Cell::new(0),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls.get()
    }
}

impl ReceiptSource for FakeReceipts {
    async fn receipt(&self, _tx_hash: &str) -> Result<Option<RpcReceipt>, GameError> {
        self.polls.set(self.polls.get() + 1);
        self.script.borrow_mut().pop_front().unwrap_or(Ok(None))
    }
}

pub struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
