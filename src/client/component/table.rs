use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaSort, FaSortDown, FaSortUp},
    Icon,
};

use crate::client::model::list::{ListQuery, PageRequest, SortDirection};

/// Clickable column header. Clicking translates the gesture through the
/// query (new field starts ascending, same field toggles) and emits the
/// resulting request.
#[component]
pub fn SortableHeader(
    label: &'static str,
    field: &'static str,
    mut query: Signal<ListQuery>,
    on_sort: EventHandler<PageRequest>,
) -> Element {
    let active = query().sort == field;
    let direction = query().direction;

    rsx!(
        th {
            button {
                r#type: "button",
                class: if active { "flex items-center gap-1 font-semibold" } else { "flex items-center gap-1 opacity-70 hover:opacity-100" },
                onclick: move |_| {
                    on_sort.call(query.write().sort_by(field));
                },
                "{label}"
                if active && direction == SortDirection::Asc {
                    Icon { width: 12, height: 12, icon: FaSortUp }
                } else if active {
                    Icon { width: 12, height: 12, icon: FaSortDown }
                } else {
                    Icon { width: 12, height: 12, icon: FaSort }
                }
            }
        }
    )
}

/// Placeholder rows shown while a page is loading. Always exactly the
/// current page size so the table never flashes stale rows or collapses
/// during a transition.
#[component]
pub fn SkeletonRows(rows: u64, cols: u64) -> Element {
    rsx!(
        for row in 0..rows {
            tr {
                key: "{row}",
                for col in 0..cols {
                    td {
                        key: "{col}",
                        div {
                            class: "skeleton h-4 w-full",
                        }
                    }
                }
            }
        }
    )
}
