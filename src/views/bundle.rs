use dioxus::prelude::*;

#[component]
pub fn BundlePage() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Bundles"
            }
            p {
                class: "text-gray-600",
                "Bundles group miniatures sold together."
            }
        }
    }
}
