use assistant_types::{ChatMessage, Sender};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// Scrollable chat history. Pure rendering over the entries the host passes
/// in; appends a typing indicator while the host reports loading.
#[component]
pub fn ChatHistory(history: Vec<ChatMessage>, is_loading: bool) -> Element {
    rsx! {
        div {
            class: "messages-scroll-area",
            div {
                class: "messages-list",
                if history.is_empty() {
                    div {
                        class: "empty-state",
                        div { class: "empty-icon", "💬" }
                        p { "Start a conversation" }
                        span { "Type a message below to begin chatting" }
                    }
                } else {
                    for msg in history.iter() {
                        MessageBubble { message: msg.clone() }
                    }
                }
                if is_loading {
                    TypingIndicator {}
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let is_user = matches!(message.sender, Sender::User);
    let is_system = matches!(message.sender, Sender::System);
    let sender_name = if is_user {
        "You"
    } else if is_system {
        "System"
    } else {
        "Assistant"
    };

    rsx! {
        div {
            class: if is_user {
                "message-row user-row"
            } else if is_system {
                "message-row system-row"
            } else {
                "message-row assistant-row"
            },

            div {
                class: "message-content",

                div {
                    class: "message-header",
                    span { class: "sender-name", "{sender_name}" }
                    span { class: "message-time", "{format_timestamp(message.timestamp)}" }
                    if message.pending {
                        span { class: "pending-badge", "sending..." }
                    }
                }

                div {
                    class: if is_user {
                        "message-bubble user-bubble"
                    } else if is_system {
                        "message-bubble system-bubble"
                    } else {
                        "message-bubble assistant-bubble"
                    },
                    "{message.text}"
                }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "message-row assistant-row",
            div {
                class: "message-content",
                div {
                    class: "message-header",
                    span { class: "sender-name", "Assistant" }
                }
                div {
                    class: "typing-indicator",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_render_as_hour_minute() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 42).unwrap();
        assert_eq!(format_timestamp(ts), "09:05");
    }
}
