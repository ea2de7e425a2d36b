//! Admin subscriber management: search, create/edit, deactivate, WhatsApp
//! contact, newline-separated bulk import, and the destructive wipe.
//!
//! The phone number is the record key. It is set once at creation and shown
//! read-only in the editor afterwards; bulk-imported rows carry a
//! placeholder phone and render as "unclaimed" until a subscriber links
//! their account.

use api::money::format_usd;
use api::phone::{format_phone_display, is_placeholder_phone, is_valid_phone, sanitize_phone};
use api::{BulkImportInput, BulkImportOutcome, BulkImportStatus, Package, Subscriber};
use dioxus::prelude::*;
use ui::whatsapp::{is_valid_whatsapp_phone, open_whatsapp_chat};
use ui::{use_toasts, ToastLevel};

use super::{date_input_to_ns, today_date_input};

fn package_label(packages: &[Package], id: i64) -> String {
    packages
        .iter()
        .find(|p| p.id == id)
        .map(|p| format!("{} ({})", p.name, format_usd(p.price_usd)))
        .unwrap_or_else(|| "—".to_string())
}

fn outcome_node(outcome: &BulkImportOutcome) -> Element {
    match &outcome.status {
        BulkImportStatus::Created(_) => rsx! {
            span { class: "import-ok", "{outcome.name} — created" }
        },
        BulkImportStatus::Failed(reason) => rsx! {
            span { class: "import-fail", "{outcome.name} — {reason}" }
        },
    }
}

#[component]
pub fn Subscribers() -> Element {
    let mut toasts = use_toasts();

    let mut subscribers =
        use_resource(|| async { api::subscribers::get_all_active_subscribers().await });
    let packages = use_resource(|| async { api::packages::get_all_packages().await });

    let mut search = use_signal(String::new);

    // Editor state. `editing_phone` is `None` when creating.
    let mut show_editor = use_signal(|| false);
    let mut editing_phone = use_signal(|| Option::<String>::None);
    let mut form_name = use_signal(String::new);
    let mut form_phone = use_signal(String::new);
    let mut form_package = use_signal(String::new);
    let mut form_date = use_signal(today_date_input);

    // Bulk import state.
    let mut show_import = use_signal(|| false);
    let mut import_names = use_signal(String::new);
    let mut import_package = use_signal(String::new);
    let mut import_outcomes = use_signal(Vec::<BulkImportOutcome>::new);
    let mut importing = use_signal(|| false);

    // Two-step delete-all confirmation.
    let mut delete_armed = use_signal(|| false);

    let open_create = move |_| {
        editing_phone.set(None);
        form_name.set(String::new());
        form_phone.set(String::new());
        form_package.set(String::new());
        form_date.set(today_date_input());
        show_editor.set(true);
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let name = form_name().trim().to_string();
            let package_id: i64 = match form_package().parse() {
                Ok(id) => id,
                Err(_) => {
                    toasts
                        .write()
                        .push(ToastLevel::Error, "Please fill in all required fields");
                    return;
                }
            };
            if name.is_empty() {
                toasts
                    .write()
                    .push(ToastLevel::Error, "Please fill in all required fields");
                return;
            }

            let result = match editing_phone() {
                Some(phone) => {
                    api::subscribers::update_subscriber(phone, name, package_id, true).await
                }
                None => {
                    let phone = sanitize_phone(&form_phone());
                    if !is_valid_phone(&phone) {
                        toasts.write().push(
                            ToastLevel::Error,
                            "Phone must be 10 digits starting with 09",
                        );
                        return;
                    }
                    let Some(start) = date_input_to_ns(&form_date()) else {
                        toasts
                            .write()
                            .push(ToastLevel::Error, "Invalid subscription start date");
                        return;
                    };
                    api::subscribers::create_subscriber(name, phone, package_id, start).await
                }
            };

            match result {
                Ok(_) => {
                    toasts.write().push(ToastLevel::Success, "Subscriber saved");
                    show_editor.set(false);
                    subscribers.restart();
                }
                Err(e) => toasts.write().push(ToastLevel::Error, e.to_string()),
            }
        });
    };

    let handle_import = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let package_id: i64 = match import_package().parse() {
                Ok(id) => id,
                Err(_) => {
                    toasts
                        .write()
                        .push(ToastLevel::Error, "Please select a package");
                    return;
                }
            };
            if import_names().trim().is_empty() {
                toasts
                    .write()
                    .push(ToastLevel::Error, "Enter at least one name");
                return;
            }
            let Some(start) = date_input_to_ns(&today_date_input()) else {
                return;
            };

            importing.set(true);
            let input = BulkImportInput {
                names: import_names(),
                package_id,
                subscription_start_date: start,
            };
            match api::subscribers::bulk_create_subscribers(input).await {
                Ok(outcomes) => {
                    let created = outcomes
                        .iter()
                        .filter(|o| matches!(o.status, BulkImportStatus::Created(_)))
                        .count();
                    let failed = outcomes.len() - created;
                    if created > 0 {
                        toasts
                            .write()
                            .push(ToastLevel::Success, format!("Imported {created} subscribers"));
                    }
                    if failed > 0 {
                        toasts
                            .write()
                            .push(ToastLevel::Error, format!("{failed} names failed"));
                    }
                    import_outcomes.set(outcomes);
                    import_names.set(String::new());
                    subscribers.restart();
                }
                Err(e) => toasts.write().push(ToastLevel::Error, e.to_string()),
            }
            importing.set(false);
        });
    };

    let handle_delete_all = move |_| {
        if !delete_armed() {
            delete_armed.set(true);
            return;
        }
        delete_armed.set(false);
        spawn(async move {
            match api::subscribers::delete_all_subscribers().await {
                Ok(result) => {
                    toasts.write().push(
                        ToastLevel::Success,
                        format!("Deleted {} subscribers", result.subscribers_deleted),
                    );
                    subscribers.restart();
                }
                Err(e) => toasts.write().push(ToastLevel::Error, e.to_string()),
            }
        });
    };

    let package_list: Vec<Package> = match &*packages.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let table_body = match &*subscribers.read() {
        Some(Ok(list)) => {
            let needle = search().to_lowercase();
            let filtered: Vec<Subscriber> = list
                .iter()
                .filter(|s| {
                    needle.is_empty()
                        || s.full_name.to_lowercase().contains(&needle)
                        || s.phone.contains(&needle)
                })
                .cloned()
                .collect();

            rsx! {
                div { class: "card",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Phone" }
                                th { "Package" }
                                th { "" }
                            }
                        }
                        tbody {
                            for s in filtered.into_iter() {
                                SubscriberRow {
                                    key: "{s.phone}",
                                    package_label: package_label(&package_list, s.package_id),
                                    on_edit: move |s: Subscriber| {
                                        editing_phone.set(Some(s.phone.clone()));
                                        form_name.set(s.full_name.clone());
                                        form_phone.set(s.phone.clone());
                                        form_package.set(s.package_id.to_string());
                                        show_editor.set(true);
                                    },
                                    on_changed: move |_| subscribers.restart(),
                                    subscriber: s,
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! { div { class: "card alert alert-error", "{e}" } },
        None => rsx! { div { class: "card", p { class: "muted", "Loading..." } } },
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Subscribers" }
                div { class: "page-actions",
                    button { class: "btn btn-primary", onclick: open_create, "Add subscriber" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            import_outcomes.set(Vec::new());
                            show_import.set(!show_import());
                        },
                        "Bulk import"
                    }
                    button {
                        class: if delete_armed() { "btn btn-danger" } else { "btn btn-ghost" },
                        onclick: handle_delete_all,
                        if delete_armed() { "Click again to delete ALL" } else { "Delete all" }
                    }
                }
            }

            if show_import() {
                div { class: "card",
                    h2 { class: "section-title", "Bulk import" }
                    p { class: "muted",
                        "One subscriber name per line. Imported rows get a placeholder phone until claimed."
                    }
                    form { class: "stack", onsubmit: handle_import,
                        textarea {
                            class: "input textarea",
                            rows: 6,
                            placeholder: "Ahmed Ali\nSara Hassan\n...",
                            value: import_names(),
                            oninput: move |evt| import_names.set(evt.value()),
                        }
                        select {
                            class: "select",
                            value: import_package(),
                            onchange: move |evt| import_package.set(evt.value()),
                            option { value: "", "Select package" }
                            for p in package_list.iter() {
                                option {
                                    key: "{p.id}",
                                    value: "{p.id}",
                                    "{p.name} ({format_usd(p.price_usd)})"
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: importing(),
                            if importing() { "Importing..." } else { "Import" }
                        }
                    }
                    if !import_outcomes().is_empty() {
                        ul { class: "import-results",
                            for outcome in import_outcomes().iter() {
                                li { key: "{outcome.name}", {outcome_node(outcome)} }
                            }
                        }
                    }
                }
            }

            input {
                class: "input search",
                placeholder: "Search by name or phone",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }

            {table_body}

            if show_editor() {
                div { class: "dialog-overlay",
                    div { class: "card dialog",
                        h2 { class: "section-title",
                            if editing_phone().is_some() { "Edit subscriber" } else { "New subscriber" }
                        }
                        form { class: "stack", onsubmit: handle_save,
                            input {
                                class: "input",
                                placeholder: "Full name",
                                value: form_name(),
                                oninput: move |evt| form_name.set(evt.value()),
                            }
                            input {
                                class: "input",
                                r#type: "tel",
                                placeholder: "Phone (09XXXXXXXX)",
                                value: form_phone(),
                                disabled: editing_phone().is_some(),
                                oninput: move |evt| form_phone.set(evt.value()),
                            }
                            select {
                                class: "select",
                                value: form_package(),
                                onchange: move |evt| form_package.set(evt.value()),
                                option { value: "", "Select package" }
                                for p in package_list.iter() {
                                    option {
                                        key: "{p.id}",
                                        value: "{p.id}",
                                        "{p.name} ({format_usd(p.price_usd)})"
                                    }
                                }
                            }
                            if editing_phone().is_none() {
                                input {
                                    class: "input",
                                    r#type: "date",
                                    value: form_date(),
                                    oninput: move |evt| form_date.set(evt.value()),
                                }
                            }
                            div { class: "dialog-actions",
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| show_editor.set(false),
                                    "Cancel"
                                }
                                button { class: "btn btn-primary", r#type: "submit", "Save" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubscriberRow(
    subscriber: Subscriber,
    package_label: String,
    on_edit: EventHandler<Subscriber>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut toasts = use_toasts();
    let placeholder = is_placeholder_phone(&subscriber.phone);

    let deactivate = {
        let s = subscriber.clone();
        move |_| {
            let s = s.clone();
            spawn(async move {
                match api::subscribers::update_subscriber(
                    s.phone.clone(),
                    s.full_name.clone(),
                    s.package_id,
                    false,
                )
                .await
                {
                    Ok(_) => {
                        toasts
                            .write()
                            .push(ToastLevel::Success, "Subscriber deactivated");
                        on_changed.call(());
                    }
                    Err(e) => toasts.write().push(ToastLevel::Error, e.to_string()),
                }
            });
        }
    };

    let whatsapp = {
        let phone = subscriber.phone.clone();
        move |_| {
            if let Err(e) = open_whatsapp_chat(&phone) {
                toasts.write().push(ToastLevel::Error, e);
            }
        }
    };

    let edit_subscriber = subscriber.clone();

    rsx! {
        tr {
            td { "{subscriber.full_name}" }
            td {
                if placeholder {
                    span { class: "badge badge-muted", "Unclaimed" }
                } else {
                    "{format_phone_display(&subscriber.phone)}"
                }
            }
            td { "{package_label}" }
            td { class: "row-actions",
                if !placeholder && is_valid_whatsapp_phone(&subscriber.phone) {
                    button { class: "btn btn-sm btn-whatsapp", onclick: whatsapp, "WhatsApp" }
                }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| on_edit.call(edit_subscriber.clone()),
                    "Edit"
                }
                button { class: "btn btn-sm btn-danger", onclick: deactivate, "Deactivate" }
            }
        }
    }
}
