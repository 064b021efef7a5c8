use dioxus::prelude::*;

use super::language::display_language;

/// Message input: textarea plus send button. Enter sends, Shift+Enter makes
/// a newline. Inert while `disabled` or while the trimmed text is empty.
#[component]
pub fn ChatInput(
    on_send_message: Callback<String>,
    disabled: bool,
    selected_language: String,
) -> Element {
    let mut input_text = use_signal(String::new);

    let send = use_callback(move |_| {
        if disabled {
            return;
        }
        let text = input_text.to_string();
        if text.trim().is_empty() {
            return;
        }
        on_send_message.call(text);
        input_text.set(String::new());
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send.call(());
        }
    });

    let language_name = display_language(&selected_language).name;

    rsx! {
        div {
            class: "chat-input-area",
            div {
                class: "input-wrapper",
                textarea {
                    class: "chat-textarea",
                    placeholder: "Type a message...",
                    value: "{input_text}",
                    rows: "1",
                    disabled,
                    oninput: move |e: FormEvent| input_text.set(e.value()),
                    onkeydown,
                }
                button {
                    class: "send-button",
                    disabled: disabled || input_text.read().trim().is_empty(),
                    onclick: move |_| send.call(()),
                    if disabled {
                        div {
                            class: "spinner",
                            span { "◐" }
                        }
                    } else {
                        span { "➤" }
                    }
                }
            }
            div {
                class: "input-hint",
                "Press Enter to send · Replies in {language_name}"
            }
        }
    }
}
