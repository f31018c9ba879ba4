use crate::content::PERSONAL_INFO;
use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-status mono",
                span { class: "status-dot" }
                "NET.OPTIMAL"
            }
            h1 { class: "hero-name", "{PERSONAL_INFO.name}" }
            p { class: "hero-title", "{PERSONAL_INFO.title}" }
            p { class: "hero-tagline",
                "Blending the precision of "
                span { class: "highlight", "Audit" }
                " with the infinite scale of "
                span { class: "highlight", "Automation" }
                "."
            }
            a { class: "btn btn-primary hero-cta", href: "#profile", "Explore" }
        }
    }
}
