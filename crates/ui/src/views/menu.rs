use dioxus::prelude::*;
use services::{QuestionSource, SessionController};

use crate::vm::{StartSelection, map_menu};

/// Validate the selection, then generate questions off the render path.
///
/// Rejections (locked, missing subject) and generation failures surface as the
/// controller's notice.
fn begin_attempt(mut session: Signal<SessionController>, selection: StartSelection) {
    let (section, difficulty, subject) = selection;
    let prepared = session.write().prepare_start(section, difficulty, subject);
    let Ok(request) = prepared else {
        return;
    };
    let source = session.read().question_source();
    spawn(async move {
        let result = source.generate(request.generation()).await;
        let _ = session.write().complete_start(request, result);
    });
}

#[component]
pub fn MenuView() -> Element {
    let session = use_context::<Signal<SessionController>>();
    let vm = map_menu(&session.read());

    let section_cards = vm.sections.iter().map(|card| {
        let section = card.section;
        let subject_chips = vm.subjects.iter().map(|chip| {
            let subject = chip.subject;
            let class = if chip.selected {
                "subject-chip subject-chip--selected"
            } else {
                "subject-chip"
            };
            rsx! {
                button {
                    key: "{subject.key()}",
                    class,
                    r#type: "button",
                    onclick: move |_| {
                        let mut session = session;
                        session.write().select_subject(subject);
                    },
                    "{chip.label}"
                }
            }
        });
        let difficulty_buttons = card.difficulties.iter().map(|button| {
            let difficulty = button.difficulty;
            let class = if button.lock_label.is_some() {
                "difficulty-button difficulty-button--locked"
            } else {
                "difficulty-button"
            };
            rsx! {
                button {
                    key: "{difficulty.key()}",
                    class,
                    r#type: "button",
                    disabled: button.disabled,
                    onclick: move |_| begin_attempt(session, (section, difficulty, None)),
                    span { class: "difficulty-name", "{button.label}" }
                    span { class: "difficulty-timer", "{button.timer_label}" }
                    if let Some(lock) = button.lock_label.as_ref() {
                        span { class: "difficulty-lock", "{lock}" }
                    }
                    if let Some(best) = button.best_label.as_ref() {
                        span { class: "difficulty-best", "{best}" }
                    }
                }
            }
        });
        rsx! {
            section { key: "{section.key()}", class: "section-card",
                h3 { class: "section-title", "{card.title}" }
                p { class: "section-blurb", "{card.blurb}" }
                if card.needs_subject {
                    div { class: "subject-chips", {subject_chips} }
                }
                div { class: "difficulty-row", {difficulty_buttons} }
            }
        }
    });

    rsx! {
        div { class: "page menu-page",
            header { class: "view-header menu-header",
                div {
                    h2 { class: "view-title", "{vm.greeting}" }
                    p { class: "view-subtitle", "{vm.level_label}" }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: vm.loading_label.is_some(),
                    onclick: move |_| {
                        let mut session = session;
                        session.write().logout();
                    },
                    "Log out"
                }
            }
            if let Some(notice) = vm.notice.clone() {
                div { class: "notice-banner", role: "alert",
                    span { class: "notice-message", "{notice.message}" }
                    if let Some(selection) = notice.retry {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| begin_attempt(session, selection),
                            "Retry"
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let mut session = session;
                            session.write().dismiss_notice();
                        },
                        "Dismiss"
                    }
                }
            }
            div { class: "view-divider" }
            div { class: "section-grid", {section_cards} }
            if let Some(label) = vm.loading_label.as_ref() {
                div { class: "loading-overlay",
                    div { class: "loading-spinner" }
                    p { class: "loading-label", "{label}" }
                }
            }
        }
    }
}
