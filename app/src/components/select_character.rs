use dioxus::prelude::*;
use epic_game_api::screen::{load_default_characters, mint_character, AppState, SelectionState};

use crate::components::LoadingIndicator;
use crate::hooks::EvmGameContract;

#[component]
pub fn SelectCharacter() -> Element {
    let contract = use_context::<Signal<Option<EvmGameContract>>>();
    let mut app = use_context::<Signal<AppState>>();
    let mut selection = use_signal(SelectionState::default);

    use_future(move || async move {
        let Some(gateway) = contract.read().clone() else {
            return;
        };
        load_default_characters(&gateway, |e| selection.write().apply(e)).await;
    });

    let mint = move |index: u64| {
        if !selection.read().can_mint() {
            return;
        }
        let Some(gateway) = contract.read().clone() else {
            return;
        };
        spawn(async move {
            mint_character(
                &gateway,
                index,
                |e| selection.write().apply(e),
                |e| app.write().apply(e),
            )
            .await;
        });
    };

    let state = selection.read();
    let can_mint = state.can_mint();

    rsx! {
        div { class: "select-character-container",
            h2 { "Mint your hero. Choose wisely." }
            if state.characters.is_empty() {
                LoadingIndicator {}
            }
            div { class: "character-grid",
                for character in state.characters.iter() {
                    div { class: "character-item", key: "{character.name}",
                        div { class: "name-container",
                            p { "{character.name}" }
                        }
                        img { src: "{character.image_url()}", alt: "{character.name}" }
                        button {
                            class: "character-mint-button",
                            disabled: !can_mint,
                            onclick: {
                                let index = character.character_index.unwrap_or_default();
                                move |_| mint(index)
                            },
                            "Mint {character.name}"
                        }
                    }
                }
            }
            if let Some(index) = state.minting {
                div { class: "loading",
                    div { class: "indicator",
                        LoadingIndicator {}
                        p { "Minting character #{index}..." }
                    }
                }
            }
        }
    }
}
