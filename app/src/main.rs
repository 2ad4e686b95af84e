#![allow(non_snake_case)]

mod components;
mod hooks;

use components::{AlertBanners, Arena, ConnectWallet, Layout, LoadingIndicator, SelectCharacter};
use dioxus::prelude::*;
use epic_game_api::event::AttackFeed;
use epic_game_api::screen::{load_owned_character, mount, AppState, Screen};
use hooks::{EvmGameContract, InjectedWallet};

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    let wallet = use_context_provider(InjectedWallet::detect);
    let mut app = use_context_provider(|| Signal::new(AppState::default()));
    let mut contract = use_context_provider(|| Signal::new(None::<EvmGameContract>));
    use_context_provider(AttackFeed::new);

    // Existing connection and network check, once
    let mount_wallet = wallet.clone();
    use_future(move || {
        let wallet = mount_wallet.clone();
        async move {
            mount(wallet.as_ref(), |e| app.write().apply(e)).await;
        }
    });

    // Build the gateway and look up the owned character once an account is known
    let account = use_memo(move || app.read().account.clone());
    use_effect(move || {
        let Some(account) = account() else {
            return;
        };
        tracing::info!(%account, "account connected");
        let gateway = EvmGameContract::new(account, wallet.clone());
        contract.set(Some(gateway.clone()));
        spawn(async move {
            load_owned_character(&gateway, |e| app.write().apply(e)).await;
        });
    });

    let screen = app.read().screen();

    rsx! {
        Layout {
            AlertBanners {}
            {
                match screen {
                    Screen::Loading => rsx! { LoadingIndicator {} },
                    Screen::ConnectPrompt => rsx! { ConnectWallet {} },
                    Screen::Selection => rsx! { SelectCharacter {} },
                    Screen::Arena => rsx! { Arena {} },
                }
            }
        }
    }
}
