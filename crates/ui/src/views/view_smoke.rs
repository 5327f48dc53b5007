use std::sync::Arc;

use quiz_core::model::{Difficulty, Question, SchoolLevel, SectionType, Subject};
use services::{FixedQuestionSource, GenerationRequest, QuestionSource, QuestionSourceError};

use super::test_harness::{
    play_attempt, questions, session_controller, setup_view_harness,
};

struct PendingSource;

#[async_trait::async_trait]
impl QuestionSource for PendingSource {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<Vec<Question>, QuestionSourceError> {
        std::future::pending().await
    }
}

fn fixed(count: usize) -> Arc<FixedQuestionSource> {
    Arc::new(FixedQuestionSource::new(questions(count)))
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_login_form() {
    let mut harness = setup_view_harness(session_controller(fixed(1), 10));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your name"), "missing name field in {html}");
    assert!(html.contains("Middle school"), "missing level option in {html}");
    assert!(html.contains("Enter"), "missing enter button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_sections_and_locks() {
    let mut ctrl = session_controller(fixed(1), 10);
    ctrl.login("Amina", SchoolLevel::Middle).unwrap();
    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome, Amina"), "missing greeting in {html}");
    assert!(html.contains("School legislation"), "missing section in {html}");
    assert!(html.contains("Natural sciences"), "missing subject chip in {html}");
    assert!(html.contains("Locked – score 90 on medium"), "missing lock in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_locked_notice() {
    let mut ctrl = session_controller(fixed(1), 10);
    ctrl.login("Amina", SchoolLevel::Middle).unwrap();
    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();

    let rejected = harness.with_session(|session| {
        session.prepare_start(SectionType::Psychology, Difficulty::Hard, None)
    });
    assert!(rejected.is_err());
    let html = harness.render();
    assert!(html.contains("Hard is locked"), "missing notice in {html}");
    assert!(!html.contains("Retry"), "locked notice offers no retry: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_retry_after_generation_failure() {
    let mut ctrl = session_controller(Arc::new(FixedQuestionSource::failing("down")), 10);
    ctrl.login("Amina", SchoolLevel::Primary).unwrap();
    ctrl.select_subject(Subject::Arabic);
    ctrl.start_quiz(SectionType::Didactics, Difficulty::Easy, None)
        .await
        .unwrap_err();

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_loading_overlay() {
    let mut ctrl = session_controller(Arc::new(PendingSource), 10);
    ctrl.login("Amina", SchoolLevel::Primary).unwrap();
    ctrl.prepare_start(SectionType::Legislation, Difficulty::Medium, None)
        .unwrap();

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Preparing School legislation questions (Medium)"),
        "missing overlay in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_question_and_timer() {
    let mut ctrl = session_controller(fixed(3), 10);
    ctrl.login("Amina", SchoolLevel::Primary).unwrap();
    ctrl.start_quiz(SectionType::Legislation, Difficulty::Medium, None)
        .await
        .unwrap();

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 0 / 100"), "missing score in {html}");
    assert!(html.contains("01:00"), "missing countdown in {html}");
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Written"), "missing kind badge in {html}");
    assert!(html.contains("Exit"), "missing exit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_wrong_answer_feedback() {
    let mut ctrl = session_controller(fixed(2), 10);
    ctrl.login("Amina", SchoolLevel::Primary).unwrap();
    ctrl.start_quiz(SectionType::Psychology, Difficulty::Easy, None)
        .await
        .unwrap();
    ctrl.submit_answer("wrong 0").unwrap();

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Wrong answer. The correct answer is: right 0"),
        "missing feedback in {html}"
    );
    assert!(html.contains("quiz-option--correct"), "missing highlight in {html}");
    assert!(html.contains("quiz-option--wrong"), "missing wrong mark in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_countdown_follows_timer_events() {
    let mut ctrl = session_controller(fixed(1), 10);
    ctrl.login("Amina", SchoolLevel::Primary).unwrap();
    ctrl.start_quiz(SectionType::Psychology, Difficulty::Easy, None)
        .await
        .unwrap();

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    assert!(harness.render().contains("00:30"));

    for _ in 0..100 {
        harness.drive_async().await;
        if harness.render().contains("00:29") {
            break;
        }
    }
    let html = harness.render();
    assert!(html.contains("00:29"), "countdown did not advance in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn result_view_smoke_renders_fail_message() {
    let mut ctrl = session_controller(fixed(1), 10);
    let mut events = ctrl.take_timer_events().unwrap();
    ctrl.login("Amina", SchoolLevel::Primary).unwrap();
    ctrl.start_quiz(SectionType::Legislation, Difficulty::Easy, None)
        .await
        .unwrap();
    play_attempt(&mut ctrl, &mut events, 1).await;

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("10/100"), "missing score in {html}");
    assert!(html.contains("Not there yet"), "missing fail message in {html}");
    assert!(!html.contains("Certificate"), "unexpected certificate in {html}");
    assert!(html.contains("Back to menu"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn result_view_smoke_renders_certificate_on_hard() {
    let mut ctrl = session_controller(fixed(10), 10);
    let mut events = ctrl.take_timer_events().unwrap();
    ctrl.login("Amina", SchoolLevel::Secondary).unwrap();

    ctrl.start_quiz(SectionType::Psychology, Difficulty::Medium, None)
        .await
        .unwrap();
    play_attempt(&mut ctrl, &mut events, 9).await;
    assert!(ctrl.return_to_menu());
    ctrl.start_quiz(SectionType::Psychology, Difficulty::Hard, None)
        .await
        .unwrap();
    play_attempt(&mut ctrl, &mut events, 9).await;

    let mut harness = setup_view_harness(ctrl);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("90/100"), "missing score in {html}");
    assert!(html.contains("Certificate"), "missing certificate in {html}");
    assert!(html.contains("Amina"), "certificate should name the user: {html}");
}
