use dioxus::html::FileData;
use dioxus::prelude::*;

use super::Avatar;

/// Entity thumbnail with a file picker behind it. Selection is handed to
/// the route, which owns the upload; the picker is disabled while an upload
/// is in flight so a second file cannot race the first.
#[component]
pub fn ThumbnailInput(
    uri: Option<String>,
    name: String,
    uploading: bool,
    on_select: EventHandler<FileData>,
) -> Element {
    rsx!(
        label {
            class: "cursor-pointer inline-flex items-center gap-3",
            Avatar { uri, name }
            if uploading {
                span {
                    class: "loading loading-spinner loading-sm",
                }
            } else {
                span {
                    class: "text-sm opacity-70",
                    "Change thumbnail"
                }
            }
            input {
                r#type: "file",
                accept: "image/*",
                class: "hidden",
                disabled: uploading,
                onchange: move |evt| {
                    if let Some(file) = evt.files().into_iter().next() {
                        on_select.call(file);
                    }
                },
            }
        }
    )
}
