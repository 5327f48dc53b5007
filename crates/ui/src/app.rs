use dioxus::prelude::*;
use quiz_core::model::Screen;
use services::SessionController;

use crate::context::AppContext;
use crate::views::{MenuView, QuizView, ResultView, WelcomeView};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(|| ctx.session_controller());
    use_context_provider(|| session);
    use_session_timer(session);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Teacher exam prep" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenSwitch {}
            }
        }
    }
}

/// Single consumer of the controller's timer channel; ticks and feedback delays
/// re-enter the controller here.
pub(crate) fn use_session_timer(session: Signal<SessionController>) {
    use_future(move || async move {
        let mut session = session;
        let events = session.write().take_timer_events();
        let Some(mut events) = events else {
            return;
        };
        while let Some(event) = events.recv().await {
            session.write().handle_timer(event);
        }
    });
}

#[component]
pub(crate) fn ScreenSwitch() -> Element {
    let session = use_context::<Signal<SessionController>>();
    let screen = session.read().screen();
    match screen {
        Screen::Welcome => rsx! { WelcomeView {} },
        Screen::Menu => rsx! { MenuView {} },
        Screen::Quiz => rsx! { QuizView {} },
        Screen::Result => rsx! { ResultView {} },
    }
}
