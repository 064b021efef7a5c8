use assistant_types::{ChatMessage, Sender};
use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use gloo_timers::future::TimeoutFuture;

use assistant_sidebar::components::language::display_language;
use assistant_sidebar::SidebarPanel;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

/// Demo host: owns the chat state the panel renders and fakes the assistant
/// side so the loading and speaking flags get exercised without a backend.
#[component]
fn App() -> Element {
    let mut history = use_signal(Vec::<ChatMessage>::new);
    let mut loading = use_signal(|| false);
    let mut speaking = use_signal(|| false);

    let on_send_message = use_callback(move |(text, language_code): (String, String)| {
        dioxus_logger::tracing::info!("send: {} chars, language {}", text.len(), language_code);

        let mut user_msg = ChatMessage::new(text, Sender::User);
        user_msg.pending = true;
        history.push(user_msg);
        loading.set(true);

        spawn(async move {
            TimeoutFuture::new(600).await;

            if let Some(last) = history.write().last_mut() {
                last.pending = false;
            }
            let language = display_language(&language_code).name;
            history.push(ChatMessage::new(
                format!("(Demo) I would answer that in {language}."),
                Sender::Assistant,
            ));
            loading.set(false);
            speaking.set(true);

            // Pretend the spoken reply takes a few seconds unless stopped.
            TimeoutFuture::new(4000).await;
            speaking.set(false);
        });
    });

    let on_stop_speech = use_callback(move |_| {
        dioxus_logger::tracing::info!("stop speech requested");
        speaking.set(false);
    });

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; height: 100vh; background: #020617;",
            SidebarPanel {
                history: history(),
                is_loading: loading(),
                is_speaking: speaking(),
                on_send_message,
                on_stop_speech,
            }
        }
    }
}
