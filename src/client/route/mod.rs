pub mod home;
pub mod server;
pub mod store;

pub use home::Home;
pub use server::{ServerDetails, ServerList};
pub use store::{StoreDetails, StoreList};

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-2",
            h1 {
                class: "text-4xl font-bold",
                "404"
            }
            p {
                class: "opacity-70",
                "No page at /{path}"
            }
        }
    )
}
