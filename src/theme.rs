use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    /// Label announced by the toggle button, naming the mode it switches to
    pub toggle_label: &'static str,
    pub toggle_glyph: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Switch to light theme",
            toggle_glyph: "☾",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Switch to dark theme",
            toggle_glyph: "☀",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #050505;
    --color-bg-secondary: #0f0f12;
    --color-bg-glass: rgba(20, 20, 26, 0.6);
    --color-text-primary: #ffffff;
    --color-text-muted: #9ca3af;
    --color-border: rgba(255, 255, 255, 0.1);
    --color-primary: #6366f1;
    --color-primary-soft: rgba(99, 102, 241, 0.2);
    --color-card-bg: rgba(30, 30, 38, 0.4);
    --color-header-bg: rgba(0, 0, 0, 0.6);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f8f8fb;
    --color-bg-secondary: #ffffff;
    --color-bg-glass: rgba(255, 255, 255, 0.7);
    --color-text-primary: #111827;
    --color-text-muted: #4b5563;
    --color-border: rgba(0, 0, 0, 0.08);
    --color-primary: #4f46e5;
    --color-primary-soft: rgba(79, 70, 229, 0.15);
    --color-card-bg: rgba(255, 255, 255, 0.6);
    --color-header-bg: rgba(255, 255, 255, 0.7);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
