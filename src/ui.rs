use crate::content::NAV_ITEMS;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{BotCompanion, ContactSection, HeroSection, ProfileSection, ProjectsSection};
use dioxus::prelude::*;

const FINFOLIO_CSS: Asset = asset!("/assets/finfolio.css");

#[component]
pub fn App() -> Element {
    let theme = use_signal(ThemeMode::default);

    rsx! {
        ThemeStyles { theme }
        ThemeToggle { theme }
        SiteHeader {}
        main { class: "page",
            HeroSection {}
            ProfileSection {}
            ProjectsSection {}
            ContactSection {}
        }
        SiteFooter {}
        BotCompanion {}
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: FINFOLIO_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let definition = theme_definition(theme());
    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: "{definition.toggle_label}",
            title: "{definition.toggle_label}",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            "{definition.toggle_glyph}"
        }
    }
}

#[component]
fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            nav { class: "site-nav",
                for item in NAV_ITEMS.iter() {
                    a { class: "nav-link", href: "#{item.anchor}", "{item.label}" }
                }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            span { class: "mono", "Finance + Technology Passion" }
        }
    }
}
