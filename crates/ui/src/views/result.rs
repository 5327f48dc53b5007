use dioxus::prelude::*;
use quiz_core::model::{User, Verdict};
use services::SessionController;

use crate::vm::map_result;

#[component]
pub fn ResultView() -> Element {
    let session = use_context::<Signal<SessionController>>();
    let vm = {
        let session = session.read();
        session
            .last_result()
            .map(|summary| map_result(summary, session.user().map(User::name)))
    };
    let Some(vm) = vm else {
        return rsx! {
            div { class: "page result-page",
                p { "No result to show." }
            }
        };
    };

    let verdict_class = match vm.verdict {
        Verdict::Failed => "result-verdict result-verdict--failed",
        Verdict::Passed => "result-verdict result-verdict--passed",
        Verdict::Excellent => "result-verdict result-verdict--excellent",
    };

    rsx! {
        div { class: "page result-page",
            h2 { class: "view-title", "Your result" }
            p { class: "result-score", "{vm.score_label}" }
            p { class: verdict_class, "{vm.verdict_message}" }
            p { class: "result-detail", "{vm.detail_label}" }
            p { class: "result-meta", "{vm.answered_label} · {vm.completed_at_str}" }
            if let Some(certificate) = vm.certificate.as_ref() {
                div { class: "certificate-banner",
                    h3 { "Certificate" }
                    p { "{certificate}" }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let mut session = session;
                    session.write().return_to_menu();
                },
                "Back to menu"
            }
        }
    }
}
