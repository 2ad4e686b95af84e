use dioxus::prelude::*;
use epic_game_api::screen::{connect, AppState};
use futures::StreamExt;

use crate::hooks::InjectedWallet;

#[derive(Clone)]
enum WalletAction {
    Connect,
}

/// Shown while no account is connected.
#[component]
pub fn ConnectWallet() -> Element {
    let wallet = use_context::<Option<InjectedWallet>>();
    let mut app = use_context::<Signal<AppState>>();

    // Coroutine keeps the connect request tied to this component
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        let wallet = wallet.clone();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => {
                        connect(wallet.as_ref(), |e| app.write().apply(e)).await;
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "connect-wallet-container",
            img {
                src: "https://64.media.tumblr.com/62052098c3ed44fbb60917c548db4906/tumblr_ny8p27WHJq1ro8ysbo1_500.gifv",
                alt: "Shredder Gif",
            }
            button {
                class: "cta-button connect-wallet-button",
                onclick: move |_| wallet_coro.send(WalletAction::Connect),
                "Connect your wallet to get started"
            }
        }
    }
}
