use dioxus::prelude::*;
use services::SessionController;

use crate::vm::map_quiz;

#[component]
pub fn QuizView() -> Element {
    let session = use_context::<Signal<SessionController>>();
    let Some(vm) = session.read().runner().map(map_quiz) else {
        return rsx! {
            div { class: "page quiz-page",
                p { "No quiz in progress." }
            }
        };
    };

    let countdown_class = if vm.urgent {
        "quiz-countdown quiz-countdown--urgent"
    } else {
        "quiz-countdown"
    };

    let options = vm.options.iter().enumerate().map(|(index, option)| {
        let text = option.text.clone();
        rsx! {
            button {
                key: "{index}",
                class: option.style.class(),
                r#type: "button",
                disabled: option.disabled,
                onclick: move |_| {
                    let mut session = session;
                    let _ = session.write().submit_answer(&text);
                },
                "{option.text}"
            }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut session = session;
                        session.write().exit_quiz();
                    },
                    "Exit"
                }
                span { class: "quiz-heading", "{vm.heading}" }
                span { class: "quiz-score", "{vm.score_label}" }
                span { class: countdown_class, "{vm.countdown}" }
            }
            div { class: "quiz-progress",
                span { class: "quiz-progress-label", "{vm.progress_label}" }
                span { class: "quiz-kind-badge", "{vm.kind_label}" }
            }
            h2 { class: "quiz-question", "{vm.question}" }
            div { class: "quiz-options", {options} }
            if let Some(feedback) = vm.feedback.as_ref() {
                div { class: feedback.class(), role: "status", "{feedback.message()}" }
            }
        }
    }
}
