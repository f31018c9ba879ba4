use crate::companion::typewriter::{
    self, TOOLTIP_CHAR_DELAY, TOOLTIP_START_DELAY, TOOLTIP_TEXT, WELCOME_CHAR_DELAY,
    WELCOME_MESSAGE,
};
use crate::companion::{
    ConversationSession, Dispatcher, PROCESSING_LABEL, TranscriptRow, suggestions_ready,
    transcript_rows, visible_suggestions,
};
use dioxus::prelude::*;

const CHAT_LOG_ID: &str = "finbot-log";

const SCROLL_LISTENER: &str =
    "window.addEventListener('scroll', () => dioxus.send(true), { passive: true });";

/// Floating FinBot trigger plus the chat panel it opens.
///
/// The session outlives the panel: closing it only hides the transcript.
/// Unmounting the widget drops the session, which aborts any outstanding
/// request.
#[component]
pub fn BotCompanion() -> Element {
    let mut is_open = use_signal(|| false);
    let mut is_hovered = use_signal(|| false);
    let mut session = use_signal(ConversationSession::new);
    let mut draft = use_signal(String::new);
    let dispatcher = use_signal(Dispatcher::from_shared_model);

    let welcome = use_welcome_typing(is_open);
    let (mut show_tooltip, mut tooltip_text) = use_tooltip_intro(is_open, is_hovered);

    // Keep the newest message in view
    use_effect(move || {
        session.read();
        spawn(async move {
            let script = format!(
                "document.getElementById('{CHAT_LOG_ID}')?.scrollTo({{ top: 1e9, behavior: 'smooth' }});"
            );
            if let Err(err) = document::eval(&script).await {
                tracing::debug!(error = ?err, "chat log scroll failed");
            }
        });
    });

    let mut send_message = move |text: String| {
        let pending = session.with_mut(|s| dispatcher.read().start(s, &text));
        if let Ok(pending) = pending {
            draft.set(String::new());
            spawn(async move {
                if let Some(outcome) = pending.wait().await {
                    session.with_mut(|s| {
                        s.resolve(outcome);
                    });
                }
            });
        }
    };

    let messages = session.read().messages().to_vec();
    let in_flight = session.read().is_in_flight();
    let rows = transcript_rows(&messages, in_flight);
    let welcome_text = welcome();
    let show_suggestions = suggestions_ready(&messages, &welcome_text);
    let suggestions = visible_suggestions(&messages);
    let send_disabled = in_flight || draft().trim().is_empty();
    let trigger_class = if is_open() {
        "finbot-trigger open"
    } else {
        "finbot-trigger"
    };

    rsx! {
        div {
            class: "finbot-trigger-wrap",
            onmouseenter: move |_| {
                is_hovered.set(true);
                if !is_open() {
                    tooltip_text.set(TOOLTIP_TEXT.to_string());
                    show_tooltip.set(true);
                }
            },
            onmouseleave: move |_| {
                is_hovered.set(false);
                show_tooltip.set(false);
            },
            if !is_open() && show_tooltip() {
                div { class: "finbot-tooltip",
                    p { class: "mono", "{tooltip_text}" }
                    span { class: "cursor-block" }
                }
            }
            button {
                class: trigger_class,
                r#type: "button",
                aria_label: "Toggle Chatbot",
                onclick: move |_| {
                    let next = !is_open();
                    is_open.set(next);
                    if next {
                        show_tooltip.set(false);
                    }
                },
                if is_open() {
                    span { class: "finbot-close", "✕" }
                } else {
                    WinkingBot { winking: is_hovered() }
                }
            }
        }

        if is_open() {
            div { class: "finbot-panel",
                PanelHeader {}
                div { id: CHAT_LOG_ID, class: "finbot-log",
                    div { class: "message-row model",
                        BotAvatar {}
                        div { class: "bubble model mono",
                            "{welcome_text}"
                            span { class: "cursor-block inline" }
                        }
                    }
                    if show_suggestions {
                        div { class: "finbot-suggestions",
                            for question in suggestions.iter().copied() {
                                button {
                                    key: "{question}",
                                    class: "suggestion",
                                    r#type: "button",
                                    onclick: move |_| send_message(question.to_string()),
                                    span { "{question}" }
                                    span { class: "chevron", "›" }
                                }
                            }
                        }
                    }
                    {rows.iter().enumerate().map(|(i, row)| match row {
                        TranscriptRow::Message { text, .. } => rsx! {
                            MessageBubble {
                                key: "{i}",
                                class: row.class(),
                                avatar: row.shows_avatar(),
                                text: text.to_string(),
                            }
                        },
                        TranscriptRow::Processing => rsx! {
                            ProcessingRow { key: "processing", class: row.class() }
                        },
                    })}
                }
                div { class: "finbot-composer",
                    form {
                        onsubmit: move |ev| {
                            ev.prevent_default();
                            send_message(draft());
                        },
                        div { class: "composer-inner",
                            span { class: "prompt-glyph", "›" }
                            input {
                                r#type: "text",
                                class: "mono",
                                placeholder: "Enter command...",
                                value: "{draft}",
                                oninput: move |ev| draft.set(ev.value()),
                            }
                            button {
                                class: "send-btn",
                                r#type: "submit",
                                disabled: send_disabled,
                                "Send"
                            }
                        }
                    }
                    div { class: "composer-meta mono",
                        span { "SECURE_CONNECTION: ENCRYPTED" }
                        span { "LATENCY: 12ms" }
                    }
                }
            }
        }
    }
}

/// Types the welcome line the first time the panel opens.
fn use_welcome_typing(is_open: Signal<bool>) -> Signal<String> {
    let welcome = use_signal(String::new);

    use_effect(move || {
        if is_open() && welcome.peek().is_empty() {
            let mut welcome = welcome;
            spawn(async move {
                for frame in typewriter::frames(WELCOME_MESSAGE).skip(1) {
                    welcome.set(frame.to_string());
                    tokio::time::sleep(WELCOME_CHAR_DELAY).await;
                }
            });
        }
    });

    welcome
}

/// One-shot "Click me" nudge, typed out a few seconds after mount unless the
/// visitor has already opened the panel. Scrolling hides it unless the
/// pointer rests on the trigger.
fn use_tooltip_intro(
    is_open: Signal<bool>,
    is_hovered: Signal<bool>,
) -> (Signal<bool>, Signal<String>) {
    let show = use_signal(|| false);
    let text = use_signal(String::new);

    use_future(move || {
        let mut show = show;
        async move {
            let mut scrolls = document::eval(SCROLL_LISTENER);
            while scrolls.recv::<bool>().await.is_ok() {
                let visible = *show.peek();
                if visible && !typewriter::tooltip_survives_scroll(visible, *is_hovered.peek()) {
                    show.set(false);
                }
            }
        }
    });

    use_hook(move || {
        let (mut show, mut text) = (show, text);
        spawn(async move {
            tokio::time::sleep(TOOLTIP_START_DELAY).await;
            if *is_open.peek() {
                return;
            }
            if !*is_hovered.peek() {
                show.set(true);
            }
            for frame in typewriter::frames(TOOLTIP_TEXT) {
                if *is_open.peek() {
                    show.set(false);
                    return;
                }
                text.set(frame.to_string());
                tokio::time::sleep(TOOLTIP_CHAR_DELAY).await;
            }
        })
    });

    (show, text)
}

#[component]
fn PanelHeader() -> Element {
    rsx! {
        div { class: "finbot-header",
            div { class: "hstack",
                div { class: "finbot-badge", span { class: "sparkle", "✦" } }
                div {
                    h3 { class: "finbot-title", "Fintech AI" }
                    div { class: "finbot-status",
                        span { class: "status-dot" }
                        span { class: "mono", "ONLINE" }
                    }
                }
            }
            div { class: "visualizer",
                for delay in [0, 100, 200, 300, 400] {
                    span { key: "{delay}", class: "bar", style: "animation-delay: {delay}ms" }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(class: &'static str, avatar: bool, text: String) -> Element {
    rsx! {
        div { class: "message-row {class}",
            if avatar {
                BotAvatar {}
            }
            div { class: "bubble {class}", "{text}" }
        }
    }
}

#[component]
fn ProcessingRow(class: &'static str) -> Element {
    rsx! {
        div { class: "message-row {class}",
            div { class: "processing-pill",
                span { class: "spinner" }
                span { class: "mono pulse", "{PROCESSING_LABEL}" }
            }
        }
    }
}

#[component]
fn BotAvatar() -> Element {
    rsx! {
        div { class: "avatar", ">_" }
    }
}

#[component]
fn WinkingBot(winking: bool) -> Element {
    let right_eye = if winking { "M14.5 16h3" } else { "M16 16l0.01 0" };
    rsx! {
        svg {
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { width: "18", height: "10", x: "3", y: "11", rx: "2" }
            circle { cx: "12", cy: "5", r: "2" }
            path { d: "M12 7v4" }
            line { x1: "8", y1: "16", x2: "8.01", y2: "16" }
            path { class: "wink", d: "{right_eye}" }
        }
    }
}
