use dioxus::prelude::*;
use epic_game_api::prelude::{load_boss, perform_attack, AppState, ArenaState, AttackState};

use crate::components::LoadingIndicator;
use crate::hooks::{use_attack_feed, AppTimer, EvmGameContract};

#[component]
pub fn Arena() -> Element {
    let contract = use_context::<Signal<Option<EvmGameContract>>>();
    let app = use_context::<Signal<AppState>>();
    let mut arena = use_signal(ArenaState::default);

    use_attack_feed(arena);

    use_future(move || async move {
        let Some(gateway) = contract.read().clone() else {
            return;
        };
        load_boss(&gateway, |e| arena.write().apply(e)).await;
    });

    let run_attack = move |_| {
        if !arena.read().can_attack() {
            return;
        }
        let Some(gateway) = contract.read().clone() else {
            return;
        };
        spawn(async move {
            perform_attack(&gateway, &AppTimer, |e| arena.write().apply(e)).await;
        });
    };

    let state = arena.read();
    let character = app.read().character.clone();
    let toast_class = if state.toast_visible() { "show" } else { "" };

    rsx! {
        div { class: "arena-container",
            if let (Some(boss), Some(character)) = (&state.boss, &character) {
                div { id: "toast", class: "{toast_class}",
                    div { id: "desc", "💥 {boss.name} was hit for {character.attack_damage} damage!" }
                }
            }

            if let Some(boss) = &state.boss {
                div { class: "boss-container",
                    div { class: "boss-content {state.attack.class()}",
                        h2 { "🔥 {boss.name} 🔥" }
                        div { class: "image-content",
                            img { src: "{boss.image_url()}", alt: "Boss {boss.name}" }
                            div { class: "health-bar",
                                progress { value: "{boss.hp}", max: "{boss.max_hp}" }
                                p { "{boss.hp} / {boss.max_hp} HP" }
                            }
                        }
                    }
                    div { class: "attack-container",
                        button {
                            class: "cta-button",
                            disabled: !state.can_attack(),
                            onclick: run_attack,
                            "💥 Attack {boss.name}"
                        }
                    }

                    if state.attack == AttackState::Attacking {
                        div { class: "loading-indicator",
                            LoadingIndicator {}
                            p { "Attacking ⚔️" }
                        }
                    }
                }
            } else {
                LoadingIndicator {}
            }

            if let Some(character) = &character {
                div { class: "players-container",
                    div { class: "player-container",
                        h2 { "Your Character" }
                        div { class: "player",
                            div { class: "image-content",
                                h2 { "{character.name}" }
                                img { src: "{character.image_url()}", alt: "Character {character.name}" }
                                div { class: "health-bar",
                                    progress { value: "{character.hp}", max: "{character.max_hp}" }
                                    p { "{character.hp} / {character.max_hp} HP" }
                                }
                            }
                            div { class: "stats",
                                h4 { "⚔️ Attack Damage: {character.attack_damage}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
