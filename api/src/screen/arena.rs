use tracing::{debug, error, info, warn};

use crate::consts::{EVENT_POLL_INTERVAL, TOAST_DURATION};
use crate::contract::{GameContract, Timer};
use crate::error::GameError;
use crate::event::{AttackFeed, AttackResult};
use crate::screen::AppEvent;
use crate::view::CharacterView;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttackState {
    #[default]
    Idle,
    Attacking,
    Hit,
}

impl AttackState {
    /// CSS modifier for the boss card.
    pub fn class(&self) -> &'static str {
        match self {
            AttackState::Idle => "",
            AttackState::Attacking => "attacking",
            AttackState::Hit => "hit",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaState {
    pub boss: Option<CharacterView>,
    pub attack: AttackState,

    /// Ticket of the attack whose toast is showing.
    toast: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaEvent {
    BossLoaded(CharacterView),
    BossHp(u64),
    AttackStarted,
    /// `ticket` identifies the confirmed attack, used to expire its toast.
    AttackConfirmed { ticket: String },
    AttackFailed,
    ToastExpired { ticket: String },
}

impl ArenaState {
    pub fn toast_visible(&self) -> bool {
        self.toast.is_some()
    }

    pub fn can_attack(&self) -> bool {
        self.boss.is_some() && self.attack != AttackState::Attacking
    }

    pub fn apply(&mut self, event: ArenaEvent) {
        debug!(?event, "arena event");
        match event {
            ArenaEvent::BossLoaded(boss) => self.boss = Some(boss),
            ArenaEvent::BossHp(hp) => {
                if let Some(boss) = self.boss.as_mut() {
                    boss.hp = hp;
                }
            }
            ArenaEvent::AttackStarted => self.attack = AttackState::Attacking,
            ArenaEvent::AttackConfirmed { ticket } => {
                self.attack = AttackState::Hit;
                self.toast = Some(ticket);
            }
            ArenaEvent::AttackFailed => self.attack = AttackState::Idle,
            ArenaEvent::ToastExpired { ticket } => {
                if self.toast.as_deref() == Some(ticket.as_str()) {
                    self.toast = None;
                }
            }
        }
    }
}

pub async fn load_boss<C: GameContract>(contract: &C, mut apply: impl FnMut(ArenaEvent)) {
    match contract.boss().await {
        Ok(raw) => {
            info!(name = %raw.name, "boss loaded");
            apply(ArenaEvent::BossLoaded(CharacterView::from(raw)));
        }
        Err(e) => error!("failed to load boss: {e}"),
    }
}

/// Submits an attack and drives the attack state and toast through it.
/// Health changes arrive separately through the [`AttackFeed`].
pub async fn perform_attack<C: GameContract, T: Timer>(
    contract: &C,
    timer: &T,
    mut apply: impl FnMut(ArenaEvent),
) {
    apply(ArenaEvent::AttackStarted);
    match contract.attack_boss().await {
        Ok(receipt) => {
            info!(tx = %receipt.tx_hash, block = receipt.block_number, "attack confirmed");
            apply(ArenaEvent::AttackConfirmed {
                ticket: receipt.tx_hash.clone(),
            });
            timer.sleep(TOAST_DURATION).await;
            apply(ArenaEvent::ToastExpired {
                ticket: receipt.tx_hash,
            });
        }
        Err(e) => {
            error!("attack failed: {e}");
            apply(ArenaEvent::AttackFailed);
        }
    }
}

/// Routes an attack result into both the arena and the root state. Only the
/// health fields change.
pub fn on_attack_complete(
    event: &AttackResult,
    mut apply: impl FnMut(ArenaEvent),
    mut apply_app: impl FnMut(AppEvent),
) {
    info!(
        boss_hp = event.boss_hp,
        player_hp = event.player_hp,
        "attack complete"
    );
    apply(ArenaEvent::BossHp(event.boss_hp));
    apply_app(AppEvent::CharacterHp(event.player_hp));
}

/// Tracks how far `AttackComplete` logs have been delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackCursor {
    next_block: u64,
}

impl AttackCursor {
    /// Starts after the block that is current now; earlier attacks are not
    /// replayed.
    pub async fn start<C: GameContract>(contract: &C) -> Result<Self, GameError> {
        let head = contract.block_number().await?;
        Ok(AttackCursor {
            next_block: head.saturating_add(1),
        })
    }

    pub fn next_block(&self) -> u64 {
        self.next_block
    }

    /// Publishes attack results mined since the last poll. Returns how many
    /// were delivered.
    pub async fn poll<C: GameContract>(
        &mut self,
        contract: &C,
        feed: &AttackFeed,
    ) -> Result<usize, GameError> {
        let head = contract.block_number().await?;
        if head < self.next_block {
            return Ok(0);
        }
        let logs = contract.attack_logs(self.next_block, head).await?;
        let mut delivered = 0;
        for log in &logs {
            match AttackResult::decode(log) {
                Ok(event) => {
                    feed.publish(&event);
                    delivered += 1;
                }
                Err(e) => warn!("skipping undecodable attack log: {e}"),
            }
        }
        self.next_block = head + 1;
        Ok(delivered)
    }
}

/// Polls for attack results until the surrounding task is dropped.
pub async fn watch_attacks<C: GameContract, T: Timer>(contract: &C, timer: &T, feed: &AttackFeed) {
    let mut cursor = loop {
        match AttackCursor::start(contract).await {
            Ok(cursor) => break cursor,
            Err(e) => {
                warn!("failed to read block number: {e}");
                timer.sleep(EVENT_POLL_INTERVAL).await;
            }
        }
    };
    loop {
        timer.sleep(EVENT_POLL_INTERVAL).await;
        if let Err(e) = cursor.poll(contract, feed).await {
            warn!(from = cursor.next_block(), "attack log poll failed: {e}");
        }
    }
}
