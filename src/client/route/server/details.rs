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
use crate::model::server::ServerDto;

#[cfg(feature = "web")]
use crate::client::{
    api::{
        server::{get_server, update_server},
        upload::upload_asset,
    },
    model::error::UploadError,
};

fn server_schema() -> Schema {
    Schema::new().rule(
        "serverName",
        Rule::Presence {
            message: "Name is required".to_string(),
        },
    )
}

#[component]
pub fn ServerDetails(id: i64) -> Element {
    let mut cache = use_signal(Cache::<ServerDto>::default);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_server(id).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(server) => cache.set(Cache::Fetched(server.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch server: {}", err);
                    cache.set(Cache::Error(err.clone()));
                }
            }
        }
    });

    let server = cache.read().data().cloned();
    let error = cache.read().error().cloned();

    rsx! {
        Title { "Server | {SITE_NAME}" }
        if let Some(server) = server {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-3xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Server Details"
                    }
                    ServerForm { server }
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
fn ServerForm(server: ServerDto) -> Element {
    let server_id = server.id;
    let mut form = use_signal({
        let server = server.clone();
        move || {
            let entity = serde_json::to_value(&server).unwrap_or(Value::Null);
            FormState::new(&entity, server_schema())
        }
    });

    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);

    let field_error = move |field: &str| form.read().error(field).map(String::from);

    let server_name = form.read().text("serverName").to_string();
    let active = form.read().flag("active");
    let thumbnail_uri = form
        .read()
        .value("thumbnail")
        .and_then(|thumbnail| thumbnail.get("uri"))
        .and_then(Value::as_str)
        .map(String::from);
    let is_valid = form.read().is_valid();

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
                    upload_asset("/api/v1/server", &file_name, bytes.to_vec()).await
                }
                .await;

                match result {
                    Ok(asset) => {
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
                match update_server(server_id, &draft).await {
                    Ok(updated) => {
                        let entity = serde_json::to_value(&updated).unwrap_or(Value::Null);
                        form.set(FormState::new(&entity, server_schema()));
                    }
                    Err(err) => {
                        tracing::error!("Failed to update server: {}", err);
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
                            "Server Data"
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
                        name: server_name.clone(),
                        uploading: uploading(),
                        on_select,
                    }
                    if let Some(err) = upload_error() {
                        div {
                            class: "alert alert-error",
                            span { "{err}" }
                        }
                    }
                    TextField {
                        label: "Name",
                        value: server_name,
                        error: field_error("serverName"),
                        disabled: saving(),
                        on_input: move |value: String| {
                            form.write().set_text("serverName", value);
                        },
                    }
                    div {
                        class: "form-control w-full flex flex-col gap-2",
                        label {
                            class: "label",
                            span {
                                class: "label-text",
                                "Type"
                            }
                        }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            value: "{server.server_type.display_name}",
                            disabled: true,
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
