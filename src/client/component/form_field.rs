use dioxus::prelude::*;

/// Labeled text input with an inline violation message. The error is only
/// passed in once the form controller reports it, so untouched invalid
/// fields render clean.
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    error: Option<String>,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        div {
            class: "form-control w-full flex flex-col gap-2",
            label {
                class: "label",
                span {
                    class: "label-text",
                    "{label}"
                }
            }
            input {
                r#type: "text",
                class: if error.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
                disabled,
            }
            if let Some(ref error) = error {
                div {
                    class: "text-error text-sm mt-1",
                    "{error}"
                }
            }
        }
    )
}
