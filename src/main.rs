use dioxus::prelude::*;
use miniatures_vault::appearance::{ on_system_scheme_change, AppearancePreference };
use miniatures_vault::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        let config = miniatures_vault::AppConfig::from_env();
        env_logger::Builder::new().parse_filters(&config.log_filter).init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to initialise logging: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut appearance = use_signal(AppearancePreference::detached);
    use_context_provider(|| appearance);

    // effects only run in the client, after hydration
    use_effect(move || appearance.set(AppearancePreference::from_host()));

    use_hook(move || {
        on_system_scheme_change(move || {
            if appearance.write().follow_system() {
                log::info!("System color scheme changed");
            }
        });
    });

    let theme = appearance.read().theme();

    rsx! {
        div {
            class: theme.root_class(),
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
