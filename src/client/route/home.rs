use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaServer, FaStore},
    Icon,
};

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-lg sm:text-2xl mb-6",
                    "Administration"
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    Link {
                        to: Route::ServerList {},
                        class: "card bg-base-200 hover:bg-base-300 transition-colors",
                        div {
                            class: "card-body",
                            div {
                                class: "flex items-center gap-4",
                                Icon { width: 32, height: 32, icon: FaServer }
                                div {
                                    h3 {
                                        class: "font-semibold",
                                        "Servers"
                                    }
                                    p {
                                        class: "text-sm opacity-70",
                                        "Manage streaming servers"
                                    }
                                }
                            }
                        }
                    }
                    Link {
                        to: Route::StoreList {},
                        class: "card bg-base-200 hover:bg-base-300 transition-colors",
                        div {
                            class: "card-body",
                            div {
                                class: "flex items-center gap-4",
                                Icon { width: 32, height: 32, icon: FaStore }
                                div {
                                    h3 {
                                        class: "font-semibold",
                                        "Stores"
                                    }
                                    p {
                                        class: "text-sm opacity-70",
                                        "Manage store accounts"
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
