use dioxus::prelude::*;

/// First letters of the first two words, uppercased. "Mercado Central"
/// becomes "MC".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Avatar(uri: Option<String>, name: String) -> Element {
    rsx!(
        if let Some(uri) = uri {
            img {
                src: "{uri}",
                alt: "{name}",
                class: "w-10 h-10 rounded-full object-cover",
            }
        } else {
            div {
                class: "w-10 h-10 rounded-full bg-neutral flex items-center justify-center font-bold text-sm",
                "{initials(&name)}"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::initials;

    /// Tests initials extraction for the avatar fallback.
    ///
    /// Verifies two-word names, single words, and empty strings.
    ///
    /// Expected: "MC", "R", ""
    #[test]
    fn takes_first_two_word_initials() {
        assert_eq!(initials("mercado central norte"), "MC");
        assert_eq!(initials("radio"), "R");
        assert_eq!(initials(""), "");
    }
}
