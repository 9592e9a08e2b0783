use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Home, NotFound, ServerDetails, ServerList, StoreDetails, StoreList};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/servers")]
    ServerList {},

    #[route("/server/:id")]
    ServerDetails { id: i64 },

    #[route("/stores")]
    StoreList {},

    #[route("/store/:id")]
    StoreDetails { id: i64 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
