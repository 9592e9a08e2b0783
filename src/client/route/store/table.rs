use dioxus::prelude::*;

use crate::client::{
    component::{Avatar, SkeletonRows, SortableHeader},
    model::{
        cache::Cache,
        list::{ListQuery, PageRequest, Selection},
    },
    router::Route,
};
use crate::model::store::PaginatedStoresDto;

#[component]
pub fn StoresTable(
    query: Signal<ListQuery>,
    mut selection: Signal<Selection>,
    cache: Signal<Cache<PaginatedStoresDto>>,
    on_sort: EventHandler<PageRequest>,
) -> Element {
    let loading = cache.read().is_loading();
    let stores = cache
        .read()
        .data()
        .map(|data| data.content.clone())
        .unwrap_or_default();

    let ids: Vec<i64> = stores.iter().map(|store| store.id).collect();
    let all_selected = selection.read().all_selected(&ids);
    let partly_selected = !all_selected && !selection.read().is_empty();

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th {
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: all_selected,
                                "indeterminate": partly_selected,
                                disabled: loading,
                                onchange: move |evt| {
                                    selection.write().set_all(evt.checked(), &ids);
                                },
                            }
                        }
                        SortableHeader { label: "Name", field: "fullName", query, on_sort }
                        SortableHeader { label: "Phone", field: "phoneNumber", query, on_sort }
                        SortableHeader { label: "Address", field: "street", query, on_sort }
                        SortableHeader { label: "Active", field: "active", query, on_sort }
                        SortableHeader { label: "Created", field: "createdDate", query, on_sort }
                        SortableHeader { label: "Modified", field: "lastModifiedDate", query, on_sort }
                        th { class: "text-right", "" }
                    }
                }
                tbody {
                    if loading {
                        SkeletonRows { rows: query.read().per_page, cols: 8 }
                    } else if stores.is_empty() {
                        tr {
                            td {
                                colspan: "8",
                                class: "text-center py-8 opacity-50",
                                "No stores found"
                            }
                        }
                    } else {
                        for store in &stores {
                            {
                                let id = store.id;
                                let selected = selection.read().contains(id);
                                let uri = store.thumbnail.as_ref().map(|t| t.uri.clone());
                                let created = store.created_date.format("%d/%m/%Y %H:%M:%S").to_string();
                                let modified = store.last_modified_date.format("%d/%m/%Y %H:%M:%S").to_string();
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        class: if selected { "bg-base-300" } else { "" },
                                        td {
                                            input {
                                                r#type: "checkbox",
                                                class: "checkbox checkbox-sm",
                                                checked: selected,
                                                onchange: move |_| {
                                                    selection.write().toggle(id);
                                                },
                                            }
                                        }
                                        td {
                                            div {
                                                class: "flex items-center gap-2",
                                                Avatar { uri, name: store.full_name.clone() }
                                                div {
                                                    Link {
                                                        to: Route::StoreDetails { id },
                                                        class: "font-medium hover:underline",
                                                        "{store.full_name}"
                                                    }
                                                    div {
                                                        class: "text-xs opacity-70",
                                                        "{store.short_name}"
                                                    }
                                                }
                                            }
                                        }
                                        td { "{store.phone_number}" }
                                        td { "{store.street}" }
                                        td {
                                            if store.active { "Yes" } else { "No" }
                                        }
                                        td {
                                            div { "{store.created_by}" }
                                            div {
                                                class: "text-xs opacity-70",
                                                "{created}"
                                            }
                                        }
                                        td {
                                            div { "{store.last_modified_by}" }
                                            div {
                                                class: "text-xs opacity-70",
                                                "{modified}"
                                            }
                                        }
                                        td {
                                            class: "text-right",
                                            Link {
                                                to: Route::StoreDetails { id },
                                                class: "btn btn-sm btn-primary",
                                                "Details"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
