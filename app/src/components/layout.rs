use dioxus::prelude::*;
use epic_game_api::consts::CONTRACT_ADDRESS;
use epic_game_api::screen::AppState;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div { class: "App",
            div { class: "container",
                div { class: "header-container",
                    p { class: "header gradient-text", "⚔️ Metaverse Slayer ⚔️" }
                    p { class: "sub-text", "Team up to protect the Metaverse!" }
                    AccountBadge {}
                    {children}
                }

                // Footer
                footer { class: "footer-container",
                    p { class: "footer-text",
                        "Contract: "
                        code { "{CONTRACT_ADDRESS}" }
                    }
                }
            }
        }
    }
}

/// Shortened address of the connected account.
#[component]
fn AccountBadge() -> Element {
    let app = use_context::<Signal<AppState>>();
    let account = app.read().account.clone();

    let Some(account) = account else {
        return rsx! {};
    };

    let short_account = if account.is_ascii() && account.len() > 10 {
        format!("{}...{}", &account[..6], &account[account.len() - 4..])
    } else {
        account.clone()
    };

    rsx! {
        p { class: "account-badge", title: "{account}", "{short_account}" }
    }
}
