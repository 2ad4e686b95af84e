use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "lds-ring",
            div {}
            div {}
            div {}
            div {}
        }
    }
}
