//=============================================================================
// File: src/screens/click_me.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::Card;
use dioxus::prelude::*;

/// The demo counter tab.
#[component]
pub fn ClickMeScreen() -> Element {
    rsx! {
        Card {
            p { "Open up this screen to start working on your app!" }
            Counter {}
        }
    }
}

#[component]
fn Counter() -> Element {
    let mut count = use_signal(|| 0);

    rsx! {
        p { "You clicked {count} times" }
        Button {
            on_click: move |_| count += 1,
            "Click me"
        }
    }
}
