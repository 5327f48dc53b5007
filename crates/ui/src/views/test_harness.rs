use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Question, QuestionKind};
use quiz_core::time::fixed_clock;
use services::{Clock, QuestionSource, SessionController, TimerEvents, TimerKind};

use crate::app::{ScreenSwitch, use_session_timer};
use crate::context::{UiApp, build_app_context};

struct TestApp {
    source: Arc<dyn QuestionSource>,
    question_count: usize,
}

impl UiApp for TestApp {
    fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.source)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn question_count(&self) -> usize {
        self.question_count
    }
}

/// Controller built the same way the desktop app builds it, on a fixed clock.
pub fn session_controller(
    source: Arc<dyn QuestionSource>,
    question_count: usize,
) -> SessionController {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        source,
        question_count,
    });
    build_app_context(&app).session_controller()
}

pub fn questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|n| {
            Question::new(
                format!("Question {n}"),
                QuestionKind::Written,
                vec![format!("right {n}"), format!("wrong {n}")],
                format!("right {n}"),
            )
            .expect("valid question")
        })
        .collect()
}

/// Answer every question of the running attempt, `correct` of them correctly.
pub async fn play_attempt(
    ctrl: &mut SessionController,
    events: &mut TimerEvents,
    correct: usize,
) {
    let mut answered = 0;
    while let Some(attempt) = ctrl.attempt() {
        let question = attempt.current_question().clone();
        let option = if answered < correct {
            question.correct_answer().to_string()
        } else {
            question
                .options()
                .iter()
                .find(|option| !question.is_correct(option))
                .cloned()
                .expect("a wrong option")
        };
        ctrl.submit_answer(&option).expect("pending question");
        answered += 1;
        let event = events.recv().await.expect("feedback event");
        assert_eq!(event.kind, TimerKind::FeedbackElapsed);
        ctrl.handle_timer(event);
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    controller: Rc<RefCell<Option<SessionController>>>,
    handle: Rc<Cell<Option<Signal<SessionController>>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let session = use_signal(|| {
        props
            .controller
            .borrow_mut()
            .take()
            .expect("controller handed to the harness")
    });
    use_context_provider(|| session);
    use_session_timer(session);
    props.handle.set(Some(session));
    rsx! { ScreenSwitch {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handle: Rc<Cell<Option<Signal<SessionController>>>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Mutate the mounted controller, as an event handler would.
    pub fn with_session<R>(&mut self, f: impl FnOnce(&mut SessionController) -> R) -> R {
        let mut session = self.handle.get().expect("harness rebuilt");
        let out = self.dom.in_runtime(|| f(&mut session.write()));
        drive_dom(&mut self.dom);
        out
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(controller: SessionController) -> ViewHarness {
    let handle = Rc::new(Cell::new(None));
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            controller: Rc::new(RefCell::new(Some(controller))),
            handle: Rc::clone(&handle),
        },
    );
    ViewHarness { dom, handle }
}
