use dioxus::prelude::*;
use touch_typing_lib::{Config, TypingSession, VirtualKey};
use tracing::debug;

use crate::{key_input::key_input, style::stylesheet};

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    let css = use_hook(|| stylesheet(&config));
    let mut session = use_signal(TypingSession::new);

    let (before, after) = session.read().buffer().split_at_caret();
    let keys = session.read().keyboard().keys().to_vec();

    rsx! {
        style { "{css}" }
        div {
            class: "tutor",
            tabindex: "0",
            onmounted: move |element| async move {
                if let Err(e) = element.set_focus(true).await {
                    debug!("couldn't focus the typing area: {e:?}");
                }
            },
            // the default action of Tab would move focus away
            onkeydown: move |evt| {
                evt.prevent_default();
                let input = key_input(&evt.key(), evt.modifiers());
                session.write().on_press(&input);
            },
            onkeyup: move |evt| {
                evt.prevent_default();
                let input = key_input(&evt.key(), evt.modifiers());
                session.write().on_release(&input);
            },
            pre { class: "text",
                "{before}"
                span { class: "caret" }
                "{after}"
            }
            div { class: "keys",
                for key in keys {
                    div { key: "{key.label()}", class: key_class(&key), "{key.label()}" }
                }
            }
        }
    }
}

fn key_class(key: &VirtualKey) -> &'static str {
    if key.is_pressed() {
        "key pressed"
    } else {
        "key"
    }
}
