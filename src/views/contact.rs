use super::shared::{SectionHeader, mailto, tel};
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use dioxus::prelude::*;

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "section",
            SectionHeader {
                title: "Let's Talk Numbers & Nodes",
                kicker: "Open Channel",
            }
            div { class: "contact-grid",
                a { class: "glass-card contact-card", href: tel(CONTACT_INFO.phone),
                    span { class: "contact-label mono", "PHONE" }
                    span { class: "contact-value", "{CONTACT_INFO.phone}" }
                }
                a { class: "glass-card contact-card", href: mailto(CONTACT_INFO.email),
                    span { class: "contact-label mono", "EMAIL" }
                    span { class: "contact-value", "{CONTACT_INFO.email}" }
                }
                div { class: "glass-card contact-card",
                    span { class: "contact-label mono", "ORGANIZATION" }
                    span { class: "contact-value", "{CONTACT_INFO.organization}" }
                }
            }
        }
        section { id: "social", class: "section",
            div { class: "social-row",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.name}",
                        class: "social-link",
                        href: link.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link.name}"
                    }
                }
            }
        }
    }
}
