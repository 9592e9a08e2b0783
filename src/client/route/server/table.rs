use dioxus::prelude::*;

use crate::client::{
    component::{Avatar, SkeletonRows, SortableHeader},
    model::{
        cache::Cache,
        list::{ListQuery, PageRequest, Selection},
    },
    router::Route,
};
use crate::model::server::PaginatedServersDto;

#[component]
pub fn ServersTable(
    query: Signal<ListQuery>,
    mut selection: Signal<Selection>,
    cache: Signal<Cache<PaginatedServersDto>>,
    on_sort: EventHandler<PageRequest>,
) -> Element {
    let loading = cache.read().is_loading();
    let servers = cache
        .read()
        .data()
        .map(|data| data.content.clone())
        .unwrap_or_default();

    let ids: Vec<i64> = servers.iter().map(|server| server.id).collect();
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
                        SortableHeader { label: "Name", field: "serverName", query, on_sort }
                        SortableHeader { label: "Type", field: "serverType", query, on_sort }
                        SortableHeader { label: "Active", field: "active", query, on_sort }
                        th { class: "text-right", "" }
                    }
                }
                tbody {
                    if loading {
                        SkeletonRows { rows: query.read().per_page, cols: 5 }
                    } else if servers.is_empty() {
                        tr {
                            td {
                                colspan: "5",
                                class: "text-center py-8 opacity-50",
                                "No servers found"
                            }
                        }
                    } else {
                        for server in &servers {
                            {
                                let id = server.id;
                                let selected = selection.read().contains(id);
                                let uri = server.thumbnail.as_ref().map(|t| t.uri.clone());
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
                                                Avatar { uri, name: server.server_name.clone() }
                                                Link {
                                                    to: Route::ServerDetails { id },
                                                    class: "font-medium hover:underline",
                                                    "{server.server_name}"
                                                }
                                            }
                                        }
                                        td { "{server.server_type.display_name}" }
                                        td {
                                            if server.active { "Yes" } else { "No" }
                                        }
                                        td {
                                            class: "text-right",
                                            Link {
                                                to: Route::ServerDetails { id },
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
