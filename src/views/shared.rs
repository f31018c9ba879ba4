use dioxus::prelude::*;

/// Section title with a mono-spaced kicker line above it.
#[component]
pub fn SectionHeader(title: &'static str, kicker: &'static str) -> Element {
    rsx! {
        div { class: "section-header",
            div { class: "section-kicker mono",
                span { class: "kicker-dot" }
                "{kicker}"
            }
            h2 { class: "section-title", "{title}" }
        }
    }
}

/// `mailto:` / `tel:` targets for the contact cards.
pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn tel(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links() {
        assert_eq!(mailto("a@b.c"), "mailto:a@b.c");
        assert_eq!(tel("+91 90474 34305"), "tel:+919047434305");
    }
}
