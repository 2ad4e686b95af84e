use tracing::{debug, error, info, warn};

use crate::contract::GameContract;
use crate::error::WalletError;
use crate::view::CharacterView;
use crate::wallet::{
    check_existing_connection, request_connection, verify_network, Alert, WalletProvider,
};

/// Which top-level screen to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    ConnectPrompt,
    Selection,
    Arena,
}

/// Top-level client state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Connected account. Set once, never cleared.
    pub account: Option<String>,

    /// Character owned by `account`.
    pub character: Option<CharacterView>,

    /// Loading windows still open. The loading screen shows while non-zero.
    pending: u32,

    /// Banners waiting to be dismissed, oldest first.
    pub alerts: Vec<Alert>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    LoadingStarted,
    LoadingFinished,
    /// Also opens a loading window for the owned-character lookup.
    AccountConnected(String),
    CharacterLookupFinished(Option<CharacterView>),
    CharacterMinted(CharacterView),
    CharacterHp(u64),
    AlertRaised(Alert),
    AlertDismissed(usize),
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn screen(&self) -> Screen {
        if self.is_loading() {
            return Screen::Loading;
        }
        match (&self.account, &self.character) {
            (None, _) => Screen::ConnectPrompt,
            (Some(_), None) => Screen::Selection,
            (Some(_), Some(_)) => Screen::Arena,
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        debug!(?event, "app event");
        match event {
            AppEvent::LoadingStarted => self.pending += 1,
            AppEvent::LoadingFinished => self.pending = self.pending.saturating_sub(1),
            AppEvent::AccountConnected(account) => {
                if self.account.is_none() {
                    self.account = Some(account);
                    self.pending += 1;
                }
            }
            AppEvent::CharacterLookupFinished(character) => {
                if character.is_some() {
                    self.character = character;
                }
                self.pending = self.pending.saturating_sub(1);
            }
            AppEvent::CharacterMinted(character) => self.character = Some(character),
            AppEvent::CharacterHp(hp) => {
                if let Some(character) = self.character.as_mut() {
                    character.hp = hp;
                }
            }
            AppEvent::AlertRaised(alert) => self.alerts.push(alert),
            AppEvent::AlertDismissed(index) => {
                if index < self.alerts.len() {
                    self.alerts.remove(index);
                }
            }
        }
    }
}

/// First-mount flow: loading while the existing-connection check and the
/// network check run side by side.
pub async fn mount<W: WalletProvider>(wallet: Option<&W>, mut apply: impl FnMut(AppEvent)) {
    apply(AppEvent::LoadingStarted);
    let (account, network) = futures::join!(
        check_existing_connection(wallet),
        verify_network(wallet)
    );
    if let Some(alert) = network.alert() {
        apply(AppEvent::AlertRaised(alert));
    }
    if let Some(account) = account {
        apply(AppEvent::AccountConnected(account));
    }
    apply(AppEvent::LoadingFinished);
}

/// Connect button flow.
pub async fn connect<W: WalletProvider>(wallet: Option<&W>, mut apply: impl FnMut(AppEvent)) {
    match request_connection(wallet).await {
        Ok(account) => apply(AppEvent::AccountConnected(account)),
        Err(WalletError::ProviderMissing) => apply(AppEvent::AlertRaised(Alert::WalletMissing)),
        Err(WalletError::Rejected) => info!("user declined account access"),
        Err(e) => warn!("wallet connection failed: {e}"),
    }
}

/// Looks up the signer's character and closes the loading window opened by
/// [`AppEvent::AccountConnected`], whatever the outcome.
pub async fn load_owned_character<C: GameContract>(contract: &C, mut apply: impl FnMut(AppEvent)) {
    let found = match contract.owned_character().await {
        Ok(Some(raw)) => {
            info!(name = %raw.name, "user owns a character NFT");
            Some(CharacterView::from(raw))
        }
        Ok(None) => {
            info!("no character NFT found");
            None
        }
        Err(e) => {
            error!("failed to look up character NFT: {e}");
            None
        }
    };
    apply(AppEvent::CharacterLookupFinished(found));
}
