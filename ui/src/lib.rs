// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod cart_state;
mod components;
mod screens;

use api::cart::Cart;
use api::config::StoreConfig;
use app_state::AppState;
use cart_state::CartState;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use screens::checkout::CheckoutScreen;
use screens::click_me::ClickMeScreen;
use screens::home::HomeScreen;
use screens::statistics::StatisticsScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default)]
enum Screen {
    #[default]
    Home,
    Checkout,
    Statistics,
    ClickMe,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Cashier",
            Screen::Checkout => "Order",
            Screen::Statistics => "Statistics",
            Screen::ClickMe => "Click Me",
        }
    }
}

/// Enum to represent the current view mode (for simulation).
#[derive(Clone, Copy, PartialEq, Default)]
enum ViewMode {
    #[default]
    Desktop,
    Mobile,
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 4] = [
    Screen::Home,
    Screen::Checkout,
    Screen::Statistics,
    Screen::ClickMe,
];

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: {
                                if *active_screen.read() == screen { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if *active_screen.read() == screen { "page" } else { "false" }
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>, view_mode: Signal<ViewMode>) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in ALL_SCREENS {
                        a {
                            class: {
                                if *active_screen.read() == screen {
                                    "custom-dropdown-item active-tab"
                                } else {
                                    "custom-dropdown-item"
                                }
                            },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                                is_open.set(false);
                            },
                            "{screen.name()}"
                        }
                    }
                    hr {}
                    a {
                        class: "custom-dropdown-item",
                        href: "#",
                        onclick: move |event| {
                            event.prevent_default();
                            view_mode.set(ViewMode::Desktop);
                            is_open.set(false);
                        },
                        "Desktop View"
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        background-color: var(--muted-border-color);
    }

    /* --- APP FRAME --- */
    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px; /* Margin from window edge */

        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--background-color);
        z-index: 100;
    }

    .app-main-container > * {
        flex: 1;
        display: flex !important;
        flex-direction: column;
        height: 100%;
        min-height: 0;
        overflow: hidden;

        margin: 0 !important;
        width: 100% !important;
        max-width: 100% !important;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        opacity: 1 !important;
        border-radius: 10px 10px 0 0;
        border: none;
        border-bottom: 3px solid var(--pico-primary) !important;
        background-color: color-mix(in srgb, var(--pico-primary), transparent 95%);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- MOBILE MENU HIGHLIGHTS --- */
    .custom-dropdown-item.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(1rem - 4px); /* Keep text aligned */
        background-color: var(--pico-card-background-color);
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow-y: auto;
        min-height: 0;
        padding: 0 1rem;
        margin-top: 0;
    }

    /* --- Mobile Styles --- */
    .mobile-view-wrapper { display: flex; justify-content: center; align-items: flex-start; padding-top: 2rem; min-height: 100vh; background-color: var(--muted-border-color); }
    .mobile-view-content { width: 100%; max-width: 400px; height: 800px; border-radius: 1.5rem; overflow: hidden; display: flex; flex-direction: column; border: 4px solid #374151; box-shadow: 0 10px 40px rgba(0,0,0,0.25); background-color: var(--card-background-color); position: relative; }
    .mobile-view-content header { flex-shrink: 0; padding: 1rem; border-bottom: 1px solid var(--card-border-color); background-color: var(--card-background-color); }
    .mobile-view-content .content { flex-grow: 1; overflow-y: auto; padding: 1rem; position: relative; }

    /* --- CATALOG GRID --- */
    .home-screen { position: relative; }
    .product-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
        padding-bottom: 5rem; /* Keep the last row reachable under the mini-cart */
    }
    .product-card {
        position: relative;
        background-color: var(--pico-card-background-color);
        border-radius: 12px;
        box-shadow: var(--pico-card-box-shadow);
        overflow: hidden;
        display: flex;
        flex-direction: column;
    }
    .favorite-icon { position: absolute; top: 8px; right: 8px; width: 24px; height: 24px; z-index: 1; }
    .product-image { width: 100%; height: 150px; object-fit: contain; background-color: var(--pico-card-sectioning-background-color); }
    .product-info { display: flex; flex-direction: column; gap: 0.25rem; padding: 0.75rem; flex: 1; }
    .product-name {
        font-size: 0.875rem;
        font-weight: 600;
        margin: 0;
        display: -webkit-box;
        -webkit-line-clamp: 2;
        -webkit-box-orient: vertical;
        overflow: hidden;
        min-height: 2.5em; /* Fixed height for 2 lines */
    }
    .product-price { font-size: 1rem; font-weight: 700; margin: 0 0 0.5rem 0; }

    /* --- FLOATING MINI-CART --- */
    .floating-cart {
        position: absolute;
        top: 1rem;
        right: 1rem;
        left: 1rem;
        max-height: 80%;
        display: flex;
        flex-direction: column;
        background-color: var(--pico-card-background-color);
        border-radius: 16px;
        box-shadow: 0 4px 8px rgba(0,0,0,0.25);
        z-index: 50;
    }
    .floating-cart-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem;
        cursor: pointer;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }
    .cart-total { color: #059669; }
    .floating-cart-items { overflow-y: auto; }
    .floating-cart-checkout {
        margin: 1rem;
        border-radius: 8px;
    }

    /* --- CART ROWS (mini-cart and checkout) --- */
    .cart-row {
        display: flex;
        align-items: center;
        padding: 0.75rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }
    .cart-row-image { width: 50px; height: 50px; border-radius: 8px; object-fit: contain; }
    .cart-row-info { flex: 1; margin-left: 0.75rem; }
    .cart-row-name { font-size: 0.875rem; font-weight: 500; margin: 0; }
    .cart-row-price { font-size: 0.875rem; font-weight: 600; color: #059669; margin: 0.25rem 0 0 0; }
    .quantity-control { display: flex; align-items: center; margin-top: 0.5rem; }
    .quantity-button {
        width: 28px; height: 28px;
        padding: 0;
        line-height: 1;
        border-radius: 14px;
        display: flex; align-items: center; justify-content: center;
    }
    .quantity { margin: 0 0.75rem; font-size: 0.875rem; font-weight: 500; }
    .remove-button {
        background: none; border: none;
        padding: 0.5rem;
        font-size: 1.25rem;
        color: #EF4444;
        cursor: pointer;
    }

    /* --- CHECKOUT / STATISTICS --- */
    .amount-cell { text-align: right; }
    .chart-row { display: flex; align-items: center; gap: 0.75rem; }
    .chart-row progress { flex: 1; margin-bottom: 0; }
    .chart-label { width: 2rem; color: var(--pico-muted-color); }
    .chart-value { width: 7rem; text-align: right; font-variant-numeric: tabular-nums; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Processed on the server before the initial page is delivered, so the
    // client starts with the store's actual configuration.
    let config_future = use_server_future(move || async move { api::store_config().await })?;

    let body = match &*config_future.read() {
        Some(Ok(config)) => {
            rsx! {
                LoadedApp {
                    config: config.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when config is ready.
#[component]
fn LoadedApp(config: StoreConfig) -> Element {
    let store_name = config.store_name.clone();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(config.clone()));

    // Create the cart signal at the top level and hand out a single store
    // handle: one writer, any number of subscribed readers.
    let cart_signal = use_signal(Cart::new);
    use_context_provider(|| CartState::new(cart_signal));

    let active_screen = use_signal(Screen::default);
    let mut view_mode = use_signal(ViewMode::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    let wrapper_class = if view_mode() == ViewMode::Mobile {
        "mobile-view-wrapper"
    } else {
        ""
    };
    let content_class = if view_mode() == ViewMode::Mobile {
        "mobile-view-content"
    } else {
        ""
    };
    rsx! {
        if view_mode() == ViewMode::Desktop {
            div {
                class: "app-main-container",
                Container {
                    header {
                        nav {
                            ul {
                                // Conditionally render the button based on the environment variable.
                                if option_env!("VIEW_MODE_TOGGLE") == Some("1") {
                                    li {
                                        Button {
                                            button_type: ButtonType::Contrast,
                                            outline: true,
                                            on_click: move |_| view_mode.set(ViewMode::Mobile),
                                            "Mobile View"
                                        }
                                    }
                                }
                                li {
                                    Tabs {
                                        active_screen,
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "content",
                        match active_screen() {
                            Screen::Home => rsx! {
                                HomeScreen {}
                            },
                            Screen::Checkout => rsx! {
                                CheckoutScreen {}
                            },
                            Screen::Statistics => rsx! {
                                StatisticsScreen {}
                            },
                            Screen::ClickMe => rsx! {
                                ClickMeScreen {}
                            },
                        }
                    }
                }
            }
        } else {
            div {
                class: "{wrapper_class}",
                div {
                    class: "{content_class}",
                    header {
                        nav {
                            ul {
                                li {
                                    h1 {
                                        style: "margin: 0; font-size: 1.5rem;",
                                        "{store_name}"
                                    }
                                }
                            }
                            ul {
                                li {
                                    HamburgerMenu {
                                        active_screen,
                                        view_mode,
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "content",
                        match active_screen() {
                            Screen::Home => rsx! {
                                HomeScreen {}
                            },
                            Screen::Checkout => rsx! {
                                CheckoutScreen {}
                            },
                            Screen::Statistics => rsx! {
                                StatisticsScreen {}
                            },
                            Screen::ClickMe => rsx! {
                                ClickMeScreen {}
                            },
                        }
                    }
                }
            }
        }
    }
}
