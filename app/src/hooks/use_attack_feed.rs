use std::rc::Rc;

use dioxus::prelude::*;
use epic_game_api::event::{AttackFeed, Subscription};
use epic_game_api::screen::{on_attack_complete, watch_attacks, AppState, ArenaState};

use super::contract::EvmGameContract;
use super::timer::AppTimer;

/// Feeds `AttackComplete` results into the arena and the owned character for
/// as long as the calling component is mounted.
pub fn use_attack_feed(mut arena: Signal<ArenaState>) {
    let feed = use_context::<AttackFeed>();
    let contract = use_context::<Signal<Option<EvmGameContract>>>();
    let mut app = use_context::<Signal<AppState>>();

    // Dropped with the component, which unsubscribes.
    let subscribe_to = feed.clone();
    let _subscription: Rc<Subscription> = use_hook(move || {
        Rc::new(subscribe_to.subscribe(move |event| {
            on_attack_complete(
                event,
                |e| arena.write().apply(e),
                |e| app.write().apply(e),
            )
        }))
    });

    // Log poller, cancelled on unmount.
    use_future(move || {
        let feed = feed.clone();
        async move {
            let Some(gateway) = contract.read().clone() else {
                return;
            };
            watch_attacks(&gateway, &AppTimer, &feed).await;
        }
    });
}
