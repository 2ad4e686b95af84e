use tracing::{error, info, warn};

use crate::abi::saturating_u64;
use crate::contract::GameContract;
use crate::event::find_minted;
use crate::screen::AppEvent;
use crate::view::CharacterView;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub characters: Vec<CharacterView>,

    /// Index of the character whose mint is in flight.
    pub minting: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    CharactersLoaded(Vec<CharacterView>),
    MintStarted(u64),
    MintFinished,
}

impl SelectionState {
    pub fn can_mint(&self) -> bool {
        self.minting.is_none()
    }

    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::CharactersLoaded(characters) => self.characters = characters,
            SelectionEvent::MintStarted(index) => self.minting = Some(index),
            SelectionEvent::MintFinished => self.minting = None,
        }
    }
}

pub async fn load_default_characters<C: GameContract>(
    contract: &C,
    mut apply: impl FnMut(SelectionEvent),
) {
    match contract.default_characters().await {
        Ok(raw) => {
            info!(count = raw.len(), "loaded default characters");
            apply(SelectionEvent::CharactersLoaded(
                raw.into_iter().map(CharacterView::from).collect(),
            ));
        }
        Err(e) => error!("failed to load default characters: {e}"),
    }
}

/// Mints `character_index`, waits for confirmation, then hands the freshly
/// owned character to the root state.
pub async fn mint_character<C: GameContract>(
    contract: &C,
    character_index: u64,
    mut apply: impl FnMut(SelectionEvent),
    mut apply_app: impl FnMut(AppEvent),
) {
    apply(SelectionEvent::MintStarted(character_index));
    match contract.mint_character(character_index).await {
        Ok(receipt) => {
            let minted_index = match find_minted(&receipt.logs) {
                Some(minted) => {
                    info!(
                        tx = %receipt.tx_hash,
                        token_id = saturating_u64(minted.tokenId),
                        "character NFT minted"
                    );
                    saturating_u64(minted.characterIndex)
                }
                None => {
                    info!(tx = %receipt.tx_hash, "mint confirmed");
                    character_index
                }
            };
            match minted_character(contract, minted_index).await {
                Some(character) => apply_app(AppEvent::CharacterMinted(character)),
                None => error!(index = minted_index, "minted character could not be read"),
            }
        }
        Err(e) => error!("mint failed: {e}"),
    }
    apply(SelectionEvent::MintFinished);
}

/// The caller's character after a confirmed mint. A read node that lags the
/// mint's block still reports nothing owned; the freshly minted NFT then
/// starts as the default character at `index`.
async fn minted_character<C: GameContract>(contract: &C, index: u64) -> Option<CharacterView> {
    match contract.owned_character().await {
        Ok(Some(raw)) => return Some(CharacterView::from(raw)),
        Ok(None) => warn!(index, "mint confirmed but read shows no character yet"),
        Err(e) => warn!(index, "failed to fetch minted character: {e}"),
    }
    match contract.default_characters().await {
        Ok(defaults) => defaults
            .into_iter()
            .find(|c| saturating_u64(c.characterIndex) == index)
            .map(CharacterView::from),
        Err(e) => {
            error!("failed to load default characters: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::error::GameError;
    use crate::screen::{AppState, Screen};
    use crate::testing::{donatello, leonardo, FakeContract, ALICE};

    fn connected() -> AppState {
        let mut app = AppState::default();
        app.apply(AppEvent::AccountConnected(ALICE.into()));
        app.apply(AppEvent::CharacterLookupFinished(None));
        app
    }

    #[tokio::test]
    async fn load_default_characters__maps_every_character() {
        let contract = FakeContract::default();
        let mut selection = SelectionState::default();

        load_default_characters(&contract, |e| selection.apply(e)).await;

        let names: Vec<_> = selection.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Leonardo", "Donatello"]);
        assert_eq!(selection.characters[1].character_index, Some(1));
    }

    #[tokio::test]
    async fn mint_character__moves_to_arena() {
        // given
        let contract = FakeContract::default();
        let mut app = connected();
        let mut selection = SelectionState::default();
        assert_eq!(app.screen(), Screen::Selection);

        // when
        mint_character(&contract, 1, |e| selection.apply(e), |e| app.apply(e)).await;

        // then
        assert_eq!(app.screen(), Screen::Arena);
        assert_eq!(app.character, Some(CharacterView::from(donatello())));
        assert!(selection.can_mint());
        assert_eq!(contract.minted(), vec![1]);
    }

    #[tokio::test]
    async fn mint_character__lagging_read_falls_back_to_minted_default() {
        // given a read node that has not caught up with the mint
        let contract = FakeContract::default().with_stale_reads();
        let mut app = connected();
        let mut selection = SelectionState::default();

        // when
        mint_character(&contract, 1, |e| selection.apply(e), |e| app.apply(e)).await;

        // then
        assert_eq!(app.screen(), Screen::Arena);
        assert_eq!(app.character, Some(CharacterView::from(donatello())));
        assert!(selection.can_mint());
    }

    #[tokio::test]
    async fn mint_character__failed_read_falls_back_to_minted_default() {
        let mut contract = FakeContract::default();
        contract.owned_error = Some(GameError::Rpc("timeout".into()));
        let mut app = connected();
        let mut selection = SelectionState::default();

        mint_character(&contract, 0, |e| selection.apply(e), |e| app.apply(e)).await;

        assert_eq!(app.screen(), Screen::Arena);
        assert_eq!(app.character, Some(CharacterView::from(leonardo())));
    }

    #[tokio::test]
    async fn mint_character__failure_stays_on_selection() {
        let mut contract = FakeContract::default();
        contract.mint_error = Some(GameError::Reverted("0x1".into()));
        let mut app = connected();
        let mut selection = SelectionState::default();

        mint_character(&contract, 0, |e| selection.apply(e), |e| app.apply(e)).await;

        assert_eq!(app.screen(), Screen::Selection);
        assert_eq!(selection.minting, None);
    }

    #[test]
    fn apply__blocks_second_mint_while_in_flight() {
        let mut selection = SelectionState::default();

        selection.apply(SelectionEvent::MintStarted(0));

        assert!(!selection.can_mint());
    }
}
