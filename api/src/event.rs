use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use alloy_primitives::LogData;
use alloy_sol_types::SolEvent;
use serde::Deserialize;

use crate::abi::{parse_quantity, saturating_u64, Address, AttackComplete, Bytes, CharacterNFTMinted, B256};
use crate::error::AbiError;

/// A log as returned by `eth_getLogs` and inside transaction receipts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default)]
    pub address: Option<Address>,
    pub topics: Vec<B256>,
    pub data: Bytes,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

impl LogEntry {
    pub fn block(&self) -> Result<Option<u64>, AbiError> {
        self.block_number.as_deref().map(parse_quantity).transpose()
    }

    /// Decodes as event `E`, checking topic0 against its signature.
    pub fn decode<E: SolEvent>(&self) -> Result<E, AbiError> {
        let log = LogData::new(self.topics.clone(), self.data.clone())
            .ok_or(AbiError::TooManyTopics)?;
        Ok(E::decode_log_data(&log)?)
    }
}

/// `AttackComplete(newBossHp, newPlayerHp)`, narrowed for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackResult {
    pub boss_hp: u64,
    pub player_hp: u64,
}

impl AttackResult {
    pub fn decode(log: &LogEntry) -> Result<Self, AbiError> {
        let event: AttackComplete = log.decode()?;
        Ok(AttackResult {
            boss_hp: saturating_u64(event.newBossHp),
            player_hp: saturating_u64(event.newPlayerHp),
        })
    }
}

/// First `CharacterNFTMinted` among a receipt's logs.
pub fn find_minted(logs: &[LogEntry]) -> Option<CharacterNFTMinted> {
    logs.iter().find_map(|log| log.decode().ok())
}

type Handler = Rc<RefCell<dyn FnMut(&AttackResult)>>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    handlers: BTreeMap<u64, Handler>,
}

/// Fan-out of attack results to whoever is currently listening.
#[derive(Clone, Default)]
pub struct AttackFeed {
    inner: Rc<RefCell<Subscribers>>,
}

impl AttackFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl FnMut(&AttackResult) + 'static) -> Subscription {
        let mut subs = self.inner.borrow_mut();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.handlers.insert(id, Rc::new(RefCell::new(handler)));
        Subscription {
            id,
            feed: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every live subscriber. A handler may drop another
    /// subscription mid-delivery; the dropped one is skipped.
    pub fn publish(&self, event: &AttackResult) {
        let snapshot: Vec<(u64, Handler)> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(id, h)| (*id, h.clone()))
            .collect();
        for (id, handler) in snapshot {
            if !self.inner.borrow().handlers.contains_key(&id) {
                continue;
            }
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut *handler)(event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Live registration on an [`AttackFeed`]. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    feed: Weak<RefCell<Subscribers>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(feed) = self.feed.upgrade() {
            feed.borrow_mut().handlers.remove(&self.id);
        }
    }
}
