mod details;
mod table;

pub use details::StoreDetails;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{Page, Pagination},
    constant::{DEFAULT_PER_PAGE, SITE_NAME},
    model::{
        cache::Cache,
        list::{ListQuery, PageRequest, Selection},
    },
};
use crate::model::store::PaginatedStoresDto;

#[cfg(feature = "web")]
use crate::client::api::store::get_stores;

use table::StoresTable;

#[component]
pub fn StoreList() -> Element {
    let query = use_signal(|| ListQuery::new("fullName", DEFAULT_PER_PAGE));
    let mut selection = use_signal(Selection::default);
    let mut cache = use_signal(Cache::<PaginatedStoresDto>::default);
    let mut total_elements = use_signal(|| 0u64);
    let mut total_pages = use_signal(|| 0u64);

    // Resource re-runs whenever the query changes; the gesture handlers
    // below flip the cache to Loading first so skeleton rows replace the
    // stale page during the transition.
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let request = query.read().request();
        get_stores(&request).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    total_elements.set(data.total_elements);
                    total_pages.set(data.total_pages);
                    cache.set(Cache::Fetched(data.clone()));
                }
                Err(err) => {
                    tracing::error!("Failed to fetch stores: {}", err);
                    cache.set(Cache::Error(err.clone()));
                }
            }
            // The page underneath was replaced; selected ids no longer
            // refer to rendered rows.
            selection.write().clear();
        }
    });

    // Sort, page, and size gestures all land here; the request itself is
    // rebuilt from the query by the resource.
    let on_request = move |_request: PageRequest| {
        cache.set(Cache::Loading);
    };

    let selected = selection.read().len();
    let error = cache.read().error().cloned();

    rsx! {
        Title { "Stores | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "flex items-center justify-between gap-4 mb-6",
                    h1 {
                        class: "text-lg sm:text-2xl",
                        "Manage Stores"
                    }
                    if selected > 0 {
                        span {
                            class: "badge badge-primary",
                            "{selected} selected"
                        }
                    }
                }
                if let Some(err) = error {
                    div {
                        class: "alert alert-error mb-4",
                        span { "{err.message}" }
                    }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        h2 {
                            class: "text-lg font-semibold mb-2",
                            "All store accounts"
                        }
                        StoresTable {
                            query,
                            selection,
                            cache,
                            on_sort: on_request,
                        }
                        Pagination {
                            query,
                            total_elements: total_elements(),
                            total_pages: total_pages(),
                            on_change: on_request,
                        }
                    }
                }
            }
        }
    }
}
