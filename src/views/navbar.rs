use dioxus::prelude::*;
use crate::appearance::{ AppearancePreference, PreferenceSource };
use crate::routes::Route;
use crate::utils::ShellState;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Layout around every page: navigation links, the generic switch and the
/// appearance controls.
#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut appearance = use_context::<Signal<AppearancePreference>>();
    let mut shell = use_signal(ShellState::default);

    let theme = appearance.read().theme();
    let follows_system = appearance.read().source() == PreferenceSource::System;
    let icon = theme.toggle_icon();
    let menu_icon = if shell.read().expanded { "✕" } else { "☰" };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: theme.nav_class(),
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        button {
                            class: theme.button_class(),
                            title: "Toggle navigation",
                            onclick: move |_| shell.write().toggle_expanded(),
                            "{menu_icon}"
                        }
                        if shell.read().expanded {
                            Link {
                                class: theme.link_class(),
                                to: Route::CreatorPage {},
                                "Creators"
                            }
                            Link {
                                class: theme.link_class(),
                                to: Route::BundlePage {},
                                "Bundles"
                            }
                        }
                    }
                    div {
                        class: "flex items-center space-x-2",
                        label {
                            class: theme.link_class(),
                            input {
                                r#type: "checkbox",
                                checked: shell.read().switch_on,
                                onchange: move |_| shell.write().toggle_switch(),
                            }
                            " Switch"
                        }
                        button {
                            class: theme.button_class(),
                            title: "Use system theme",
                            disabled: follows_system,
                            onclick: move |_| appearance.write().reset(),
                            "🖥"
                        }
                        button {
                            class: theme.button_class(),
                            title: "Toggle dark mode",
                            onclick: move |_| appearance.write().toggle(),
                            "{icon}"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
