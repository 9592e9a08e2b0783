use dioxus::prelude::*;

#[component]
pub fn Modal(mut show: Signal<bool>, title: String, children: Element) -> Element {
    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    show.set(false);
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 max-w-lg",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| show.set(false),
                        "✕"
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| show.set(false),
            }
        }
    )
}
