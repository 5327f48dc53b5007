use dioxus::prelude::*;
use quiz_core::model::SchoolLevel;
use services::SessionController;

use crate::views::ViewError;

#[component]
pub fn WelcomeView() -> Element {
    let session = use_context::<Signal<SessionController>>();
    let mut name = use_signal(String::new);
    let mut level = use_signal(|| SchoolLevel::Primary);
    let mut error = use_signal(|| None::<ViewError>);

    let mut enter = move || {
        let mut session = session;
        let result = session.write().login(&name(), level());
        error.set(result.err().as_ref().map(ViewError::from));
    };

    let can_enter = !name().trim().is_empty();

    rsx! {
        div { class: "page welcome-page",
            header { class: "view-header",
                h1 { class: "view-title", "Teacher exam prep" }
                p { class: "view-subtitle",
                    "Practice didactics, school legislation and educational psychology with generated questions."
                }
            }
            form {
                class: "welcome-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    enter();
                },
                label { class: "field-label", r#for: "welcome-name", "Your name" }
                input {
                    id: "welcome-name",
                    class: "text-input",
                    r#type: "text",
                    placeholder: "e.g. Amina",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { class: "field-label", r#for: "welcome-level", "School level" }
                select {
                    id: "welcome-level",
                    class: "select-input",
                    onchange: move |evt| {
                        if let Some(selected) = SchoolLevel::from_key(&evt.value()) {
                            level.set(selected);
                        }
                    },
                    for choice in SchoolLevel::ALL {
                        option {
                            value: choice.key(),
                            selected: choice == level(),
                            "{choice.label()}"
                        }
                    }
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{err.message()}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_enter,
                    "Enter"
                }
            }
        }
    }
}
