use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde_json::Value;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage},
        Page, TextField, ThumbnailInput,
    },
    constant::SITE_NAME,
    model::{
        cache::Cache,
        form::{
            schema::{Rule, Schema},
            FormState,
        },
    },
};
use crate::model::store::StoreDto;

#[cfg(feature = "web")]
use crate::client::{
    api::{
        store::{get_store, update_store},
        upload::upload_asset,
    },
    model::error::UploadError,
};

fn store_schema() -> Schema {
    Schema::new()
        .rule(
            "fullName",
            Rule::Presence {
                message: "Name is required".to_string(),
            },
        )
        .rule(
            "shortName",
            Rule::Length {
                min: None,
                max: Some(32),
                message: "Short name must be at most 32 characters".to_string(),
            },
        )
}

#[component]
pub fn StoreDetails(id: i64) -> Element {
    let mut cache = use_signal(Cache::<StoreDto>::default);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_store(id).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(store) => cache.set(Cache::Fetched(store.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch store: {}", err);
                    cache.set(Cache::Error(err.clone()));
                }
            }
        }
    });

    let store = cache.read().data().cloned();
    let error = cache.read().error().cloned();

    rsx! {
        Title { "Store | {SITE_NAME}" }
        if let Some(store) = store {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-3xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Store Details"
                    }
                    StoreForm { store }
                }
            }
        } else if let Some(err) = error {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn StoreForm(store: StoreDto) -> Element {
    let store_id = store.id;
    let mut form = use_signal({
        let store = store.clone();
        move || {
            let entity = serde_json::to_value(&store).unwrap_or(Value::Null);
            FormState::new(&entity, store_schema())
        }
    });

    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);

    let field_error = move |field: &str| form.read().error(field).map(String::from);

    let full_name = form.read().text("fullName").to_string();
    let short_name = form.read().text("shortName").to_string();
    let phone_number = form.read().text("phoneNumber").to_string();
    let street = form.read().text("street").to_string();
    let active = form.read().flag("active");
    let thumbnail_uri = form
        .read()
        .value("thumbnail")
        .and_then(|thumbnail| thumbnail.get("uri"))
        .and_then(Value::as_str)
        .map(String::from);
    let is_valid = form.read().is_valid();

    let created = store.created_date.format("%d/%m/%Y %H:%M:%S").to_string();
    let modified = store.last_modified_date.format("%d/%m/%Y %H:%M:%S").to_string();

    let on_select = move |file: FileData| {
        #[cfg(feature = "web")]
        {
            uploading.set(true);
            upload_error.set(None);
            spawn(async move {
                let file_name = file.name();
                let result = async {
                    let bytes = file
                        .read_bytes()
                        .await
                        .map_err(|e| UploadError::Read(e.to_string()))?;
                    upload_asset("/api/v1/store", &file_name, bytes.to_vec()).await
                }
                .await;

                match result {
                    Ok(asset) => {
                        // Only the thumbnail field is written; concurrent
                        // edits to other fields survive the resolution.
                        let descriptor = serde_json::to_value(&asset).unwrap_or(Value::Null);
                        form.write().set_value("thumbnail", descriptor);
                    }
                    Err(err) => {
                        tracing::error!("Thumbnail upload failed: {}", err);
                        upload_error.set(Some(err.to_string()));
                    }
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = file;
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        #[cfg(feature = "web")]
        if let Some(draft) = form.read().submit() {
            saving.set(true);
            save_error.set(None);
            spawn(async move {
                match update_store(store_id, &draft).await {
                    Ok(updated) => {
                        let entity = serde_json::to_value(&updated).unwrap_or(Value::Null);
                        form.set(FormState::new(&entity, store_schema()));
                    }
                    Err(err) => {
                        tracing::error!("Failed to update store: {}", err);
                        save_error.set(Some(err.message.clone()));
                    }
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        form {
            onsubmit: on_submit,
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body flex flex-col gap-4",
                    div {
                        class: "flex items-center justify-between",
                        h2 {
                            class: "card-title",
                            "Store Data"
                        }
                        label {
                            class: "label cursor-pointer gap-2",
                            span {
                                class: "label-text",
                                "Active"
                            }
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-primary",
                                checked: active,
                                disabled: saving(),
                                onchange: move |evt| {
                                    form.write().set_flag("active", evt.checked());
                                },
                            }
                        }
                    }
                    ThumbnailInput {
                        uri: thumbnail_uri,
                        name: full_name.clone(),
                        uploading: uploading(),
                        on_select,
                    }
                    if let Some(err) = upload_error() {
                        div {
                            class: "alert alert-error",
                            span { "{err}" }
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        TextField {
                            label: "Name",
                            value: full_name,
                            error: field_error("fullName"),
                            disabled: saving(),
                            on_input: move |value: String| {
                                form.write().set_text("fullName", value);
                            },
                        }
                        TextField {
                            label: "Short name",
                            value: short_name,
                            error: field_error("shortName"),
                            disabled: saving(),
                            on_input: move |value: String| {
                                form.write().set_text("shortName", value);
                            },
                        }
                        TextField {
                            label: "Phone",
                            value: phone_number,
                            error: field_error("phoneNumber"),
                            disabled: saving(),
                            on_input: move |value: String| {
                                form.write().set_text("phoneNumber", value);
                            },
                        }
                        TextField {
                            label: "Address",
                            value: street,
                            error: field_error("street"),
                            disabled: saving(),
                            on_input: move |value: String| {
                                form.write().set_text("street", value);
                            },
                        }
                    }
                    div {
                        class: "divider"
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4 text-sm opacity-70",
                        div {
                            div { "Created by {store.created_by}" }
                            div { "{created}" }
                        }
                        div {
                            div { "Last modified by {store.last_modified_by}" }
                            div { "{modified}" }
                        }
                    }
                }
            }
            if let Some(err) = save_error() {
                div {
                    class: "alert alert-error mt-4",
                    span { "{err}" }
                }
            }
            div {
                class: "mt-4",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !is_valid || saving(),
                    if saving() {
                        span {
                            class: "loading loading-spinner loading-sm mr-2",
                        }
                        "Saving..."
                    } else {
                        "Save changes"
                    }
                }
            }
        }
    }
}
