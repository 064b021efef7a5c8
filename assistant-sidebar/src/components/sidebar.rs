use assistant_types::ChatMessage;
use dioxus::prelude::*;

use super::history::ChatHistory;
use super::input::ChatInput;
use super::language::{default_language_code, LanguageSelector};
use super::styles::SIDEBAR_STYLES;

/// Right-hand assistant panel: header with language selector, chat history,
/// speech-stop affordance, message input. All chat state and behavior come
/// from the host; the only thing the panel owns is the selected language,
/// which it attaches to every outgoing message.
#[component]
pub fn SidebarPanel(
    history: Vec<ChatMessage>,
    is_loading: bool,
    is_speaking: bool,
    on_send_message: Callback<(String, String)>,
    on_stop_speech: Callback<()>,
) -> Element {
    let mut selected_language = use_signal(|| default_language_code().to_string());

    let handle_send = use_callback(move |text: String| {
        on_send_message.call((text, selected_language.to_string()));
    });

    rsx! {
        style { {SIDEBAR_STYLES} }

        aside {
            class: "sidebar-panel",

            div {
                class: "sidebar-header",
                h2 { class: "sidebar-title", "Sales Assistant" }
                LanguageSelector {
                    selected_language: selected_language(),
                    on_language_change: move |code: String| selected_language.set(code),
                }
            }

            ChatHistory { history, is_loading }

            div {
                class: "sidebar-footer",
                if is_speaking {
                    div {
                        class: "speech-row",
                        div {
                            class: "speech-bars",
                            span {}
                            span {}
                            span {}
                            span {}
                        }
                        button {
                            class: "stop-speech-button",
                            aria_label: "Stop speech",
                            onclick: move |_| on_stop_speech.call(()),
                            span { class: "stop-square", "■" }
                            span { "Stop" }
                        }
                    }
                }

                ChatInput {
                    on_send_message: handle_send,
                    disabled: is_loading,
                    selected_language: selected_language(),
                }
            }
        }
    }
}
