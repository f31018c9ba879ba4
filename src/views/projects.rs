use super::shared::SectionHeader;
use crate::content::PROJECTS;
use crate::types::Project;
use dioxus::prelude::*;

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "works", class: "section",
            SectionHeader {
                title: "AI Fintech Tools",
                kicker: "Deployed Systems",
            }
            div { class: "project-grid",
                for project in PROJECTS.iter() {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

/// Card that expands in place to show the full pitch and feature list.
#[component]
pub fn ProjectCard(project: &'static Project) -> Element {
    let mut expanded = use_signal(|| false);
    let card_class = if expanded() {
        format!("project-card open {}", project.accent)
    } else {
        format!("project-card {}", project.accent)
    };

    rsx! {
        div { class: card_class, onclick: move |_| expanded.toggle(),
            div { class: "project-head",
                h3 { class: "project-name", "{project.name}" }
                span { class: "project-toggle", if expanded() { "✕" } else { "↗" } }
            }
            p { class: "project-short", "{project.short_description}" }
            if expanded() {
                div { class: "project-details",
                    p { class: "text-muted", "{project.full_description}" }
                    ul { class: "feature-list",
                        for feature in project.features.iter() {
                            li { key: "{feature}", span { class: "check", "✓" } "{feature}" }
                        }
                    }
                    if project.has_live_url() {
                        a {
                            class: "btn btn-primary",
                            href: project.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: move |ev| ev.stop_propagation(),
                            "Launch App"
                        }
                    } else {
                        span { class: "demo-soon mono", "Demo coming soon" }
                    }
                }
            } else {
                div { class: "project-hint mono", "Tap to expand" }
            }
        }
    }
}
