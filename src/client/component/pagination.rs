use dioxus::prelude::*;

use super::Modal;
use crate::client::{
    constant::PER_PAGE_OPTIONS,
    model::list::{display_range, ListQuery, PageRequest},
};

/// Pagination controls for one list screen. Every gesture goes through the
/// query's request translation and is emitted via `on_change`; the route
/// owns the fetch.
#[component]
pub fn Pagination(
    mut query: Signal<ListQuery>,
    total_elements: u64,
    total_pages: u64,
    on_change: EventHandler<PageRequest>,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let page = query().page;
    let per_page = query().per_page;
    let (from, to) = display_range(page, per_page, total_elements);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            // Per-page selector
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            on_change.call(query.write().set_per_page(value));
                        }
                    },
                    for option in PER_PAGE_OPTIONS {
                        option { value: "{option}", "{option}" }
                    }
                }
                span { "entries" }
            }

            // Pagination info and buttons
            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "{from}-{to} of {total_elements}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: page == 0,
                        onclick: move |_| {
                            let current = query().page;
                            if current > 0 {
                                on_change.call(query.write().set_page(current - 1));
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set((page + 1).to_string());
                            show_page_jump.set(true);
                        },
                        "Page {page + 1} of {total_pages.max(1)}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: page + 1 >= total_pages,
                        onclick: move |_| {
                            let current = query().page;
                            if current + 1 < total_pages {
                                on_change.call(query.write().set_page(current + 1));
                            }
                        },
                        "»"
                    }
                }
            }
        }

        // Page Jump Modal
        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target_page) = jump_page_input().parse::<u64>() {
                        if target_page > 0 && target_page <= total_pages {
                            // Convert to the widget's 0-indexed page
                            on_change.call(query.write().set_page(target_page - 1));
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{total_pages.max(1)})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages.max(1)}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}
