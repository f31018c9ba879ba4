use super::shared::SectionHeader;
use crate::content::PERSONAL_INFO;
use dioxus::prelude::*;

#[component]
pub fn ProfileSection() -> Element {
    rsx! {
        section { id: "profile", class: "section",
            SectionHeader {
                title: "Decoding Finance with Code",
                kicker: "Base of Operations",
            }
            div { class: "profile-grid",
                div { class: "glass-card",
                    p { class: "lead", "{PERSONAL_INFO.tagline}" }
                    p { class: "text-muted", "{PERSONAL_INFO.bio}" }
                }
                div { class: "glass-card",
                    p {
                        "Spreadsheets are great, but "
                        span { class: "highlight", "intelligent systems" }
                        " are better."
                    }
                    p { class: "text-muted",
                        "I bridge the gap between regulatory complexity and software simplicity, building tools that don't just calculate; they think."
                    }
                    div { class: "org-line mono", "@ {PERSONAL_INFO.organization}" }
                }
            }
        }
    }
}
