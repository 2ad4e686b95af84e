use dioxus::prelude::*;
use epic_game_api::screen::{AppEvent, AppState};

/// Queued wallet alerts, newest last.
#[component]
pub fn AlertBanners() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let alerts: Vec<String> = app.read().alerts.iter().map(|a| a.to_string()).collect();

    rsx! {
        for (index, message) in alerts.into_iter().enumerate() {
            div { key: "{index}-{message}", class: "alert-banner",
                span { "{message}" }
                button {
                    class: "alert-dismiss",
                    onclick: move |_| app.write().apply(AppEvent::AlertDismissed(index)),
                    "✕"
                }
            }
        }
    }
}
