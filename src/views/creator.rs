use dioxus::prelude::*;
use crate::server::{ add_creator, delete_creator, list_creators, update_creator, ApiResponse, Creator };

/// Writes the failure of a catalogue call into `message`.
/// Returns whether the call succeeded.
fn report<T>(
    result: Result<ApiResponse<T>, ServerFnError>,
    mut message: Signal<Option<String>>
) -> bool {
    match result {
        Ok(response) =>
            match response.into_result() {
                Ok(_) => {
                    message.set(None);
                    true
                }
                Err(details) => {
                    log::warn!("Catalogue rejected request: {}", details.details);
                    message.set(Some(details.details));
                    false
                }
            }
        Err(e) => {
            log::error!("Catalogue request failed: {}", e);
            message.set(Some(e.to_string()));
            false
        }
    }
}

#[component]
fn CreatorRow(creator: Creator, message: Signal<Option<String>>, on_changed: EventHandler<()>) -> Element {
    let mut draft = use_signal(|| None::<String>);
    let id = creator.id;

    let save = move |_| {
        let name = draft.read().clone().unwrap_or_default();
        spawn(async move {
            if report(update_creator(id, name).await, message) {
                draft.set(None);
                on_changed.call(());
            }
        });
    };

    let remove = move |_| {
        spawn(async move {
            if report(delete_creator(id).await, message) {
                on_changed.call(());
            }
        });
    };

    let editing = draft.read().clone();

    rsx! {
        tr {
            td { class: "px-6 py-4",
                if let Some(value) = editing {
                    input {
                        class: "input",
                        value: "{value}",
                        oninput: move |evt: Event<FormData>| draft.set(Some(evt.value())),
                    }
                } else {
                    "{creator.name}"
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{creator.id}" }
            td { class: "px-6 py-4 space-x-2",
                if draft.read().is_some() {
                    button { class: "button", onclick: save, "Save" }
                    button { class: "button", onclick: move |_| draft.set(None), "Cancel" }
                } else {
                    button {
                        class: "button",
                        onclick: {
                            let name = creator.name.clone();
                            move |_| draft.set(Some(name.clone()))
                        },
                        "Rename"
                    }
                    button { class: "button", onclick: remove, "Delete" }
                }
            }
        }
    }
}

#[component]
pub fn CreatorPage() -> Element {
    let mut creators = use_resource(|| async move { list_creators().await });
    let mut new_name = use_signal(String::new);
    let message = use_signal(|| None::<String>);

    let submit = move |_| {
        let name = new_name.read().clone();
        spawn(async move {
            if report(add_creator(name).await, message) {
                new_name.set(String::new());
                creators.restart();
            }
        });
    };

    let listing = match &*creators.read_unchecked() {
        Some(Ok(response)) => {
            let rows = response.data.clone().unwrap_or_default();
            if rows.is_empty() {
                rsx! { div { class: "text-center text-gray-500", "No creators yet." } }
            } else {
                rsx! {
                    table { class: "min-w-full divide-y divide-gray-300",
                        thead {
                            tr {
                                th { class: "py-3.5 px-3 text-left text-sm font-semibold", "Name" }
                                th { class: "py-3.5 px-3 text-left text-sm font-semibold", "ID" }
                                th { class: "py-3.5 px-3 text-left text-sm font-semibold", "Action" }
                            }
                        }
                        tbody {
                            for creator in rows {
                                CreatorRow {
                                    key: "{creator.id}",
                                    creator: creator.clone(),
                                    message,
                                    on_changed: move |_| creators.restart(),
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "text-center text-red-500",
                div { "Error loading creators" }
                div { "{e}" }
            }
        },
        None => rsx! { div { class: "text-center text-gray-500", "Loading..." } },
    };

    rsx! {
        div { class: "container mx-auto p-4",
            h1 { class: "text-2xl font-bold mb-4", "Creators" }
            div { class: "mb-4 flex items-center gap-4",
                input {
                    class: "input",
                    placeholder: "Creator name",
                    value: "{new_name}",
                    oninput: move |evt: Event<FormData>| new_name.set(evt.value()),
                }
                button {
                    class: "button",
                    disabled: new_name.read().trim().is_empty(),
                    onclick: submit,
                    "Add"
                }
            }
            if let Some(err) = message.read().as_ref() {
                div { class: "mb-4 text-red-500", "{err}" }
            }
            {listing}
        }
    }
}
