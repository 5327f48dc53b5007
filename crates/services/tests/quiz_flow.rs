use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{
    AnswerState, Difficulty, Question, QuestionKind, SchoolLevel, Screen, SectionType, Subject,
    Verdict,
};
use quiz_core::time::fixed_clock;
use services::{
    FixedQuestionSource, SessionController, SessionError, SessionNotice, TimerEvents, TimerKind,
};
use tokio::sync::mpsc::error::TryRecvError;

fn questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|n| {
            Question::new(
                format!("Question {n}"),
                QuestionKind::Written,
                vec![
                    format!("right {n}"),
                    format!("wrong {n}"),
                    format!("other {n}"),
                ],
                format!("right {n}"),
            )
            .unwrap()
        })
        .collect()
}

fn logged_in(source: Arc<FixedQuestionSource>) -> (SessionController, TimerEvents) {
    let mut ctrl = SessionController::new(source, fixed_clock());
    let events = ctrl.take_timer_events().expect("timer events");
    ctrl.login("Nadia", SchoolLevel::Primary).unwrap();
    (ctrl, events)
}

async fn answer(ctrl: &mut SessionController, events: &mut TimerEvents, correct: bool) {
    let question = ctrl.attempt().expect("running attempt").current_question().clone();
    let option = if correct {
        question.correct_answer().to_string()
    } else {
        question
            .options()
            .iter()
            .find(|option| !question.is_correct(option))
            .cloned()
            .unwrap()
    };
    let expected = if correct {
        AnswerState::Correct
    } else {
        AnswerState::Incorrect
    };
    assert_eq!(ctrl.submit_answer(&option).unwrap(), expected);

    let event = events.recv().await.unwrap();
    assert_eq!(event.kind, TimerKind::FeedbackElapsed);
    ctrl.handle_timer(event);
}

#[tokio::test(start_paused = true)]
async fn single_correct_answer_scores_ten_and_fails() {
    let source = Arc::new(FixedQuestionSource::new(questions(1)));
    let (mut ctrl, mut events) = logged_in(Arc::clone(&source));

    ctrl.start_quiz(SectionType::Legislation, Difficulty::Easy, None)
        .await
        .unwrap();
    assert_eq!(ctrl.screen(), Screen::Quiz);
    assert_eq!(ctrl.attempt().unwrap().time_left(), 30);

    answer(&mut ctrl, &mut events, true).await;

    assert_eq!(ctrl.screen(), Screen::Result);
    let result = ctrl.last_result().unwrap();
    assert_eq!(result.score(), 10);
    assert_eq!(result.verdict(), Verdict::Failed);
    assert_eq!(
        ctrl.progress()
            .best_score(SectionType::Legislation, Difficulty::Easy),
        10
    );
    assert!(ctrl.attempt().is_none());

    assert!(ctrl.return_to_menu());
    assert_eq!(ctrl.screen(), Screen::Menu);
}

#[tokio::test(start_paused = true)]
async fn ninety_on_medium_unlocks_hard() {
    let source = Arc::new(FixedQuestionSource::new(questions(10)));
    let (mut ctrl, mut events) = logged_in(Arc::clone(&source));
    assert!(!ctrl.progress().is_hard_unlocked(SectionType::Psychology));

    ctrl.start_quiz(SectionType::Psychology, Difficulty::Medium, None)
        .await
        .unwrap();
    assert_eq!(ctrl.attempt().unwrap().time_left(), 60);
    for n in 0..10 {
        answer(&mut ctrl, &mut events, n != 4).await;
        if n < 9 {
            assert_eq!(ctrl.attempt().unwrap().time_left(), 60);
        }
    }

    assert_eq!(ctrl.screen(), Screen::Result);
    assert_eq!(ctrl.last_result().unwrap().score(), 90);
    assert!(!ctrl.last_result().unwrap().earns_certificate());
    assert_eq!(
        ctrl.progress()
            .best_score(SectionType::Psychology, Difficulty::Medium),
        90
    );
    assert!(ctrl.progress().is_hard_unlocked(SectionType::Psychology));
    assert!(!ctrl.progress().is_hard_unlocked(SectionType::Legislation));

    ctrl.return_to_menu();
    ctrl.start_quiz(SectionType::Psychology, Difficulty::Hard, None)
        .await
        .unwrap();
    assert_eq!(ctrl.screen(), Screen::Quiz);
    assert_eq!(ctrl.attempt().unwrap().time_left(), 90);
}

#[tokio::test(start_paused = true)]
async fn locked_hard_start_changes_nothing() {
    let source = Arc::new(FixedQuestionSource::new(questions(3)));
    let (mut ctrl, _events) = logged_in(Arc::clone(&source));
    let before = ctrl.progress().clone();

    let err = ctrl
        .start_quiz(SectionType::Legislation, Difficulty::Hard, None)
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::LockedDifficulty(_)));
    assert_eq!(ctrl.screen(), Screen::Menu);
    assert_eq!(ctrl.progress(), &before);
    assert!(!ctrl.is_loading());
    assert_eq!(
        ctrl.notice(),
        Some(SessionNotice::Locked {
            section: SectionType::Legislation
        })
    );
    assert!(source.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn timeout_counts_as_wrong_and_auto_advances() {
    let source = Arc::new(FixedQuestionSource::new(questions(2)));
    let (mut ctrl, mut events) = logged_in(Arc::clone(&source));
    ctrl.start_quiz(SectionType::Psychology, Difficulty::Easy, None)
        .await
        .unwrap();

    for expected in (0..30).rev() {
        let event = events.recv().await.unwrap();
        assert_eq!(event.kind, TimerKind::Tick);
        ctrl.handle_timer(event);
        assert_eq!(ctrl.attempt().unwrap().time_left(), expected);
    }
    let attempt = ctrl.attempt().unwrap();
    assert_eq!(attempt.answer_state(), AnswerState::Incorrect);
    assert_eq!(attempt.current_index(), 0);
    assert!(ctrl.submit_answer("right 0").is_err());

    let started = tokio::time::Instant::now();
    let event = events.recv().await.unwrap();
    assert_eq!(event.kind, TimerKind::FeedbackElapsed);
    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(1500), "feedback fired after {waited:?}");
    assert!(waited < Duration::from_secs(2), "feedback fired after {waited:?}");
    ctrl.handle_timer(event);

    let attempt = ctrl.attempt().unwrap();
    assert_eq!(attempt.current_index(), 1);
    assert_eq!(attempt.answer_state(), AnswerState::Pending);
    assert_eq!(attempt.time_left(), 30);
    assert_eq!(attempt.score(), 0);
}

#[tokio::test(start_paused = true)]
async fn generation_failure_stays_on_menu() {
    let source = Arc::new(FixedQuestionSource::failing("model overloaded"));
    let (mut ctrl, _events) = logged_in(Arc::clone(&source));
    ctrl.select_subject(Subject::Mathematics);

    let err = ctrl
        .start_quiz(SectionType::Didactics, Difficulty::Easy, None)
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::GenerationFailure(_)));
    assert_eq!(ctrl.screen(), Screen::Menu);
    assert!(!ctrl.is_loading());
    assert!(ctrl.attempt().is_none());
    let notice = ctrl.notice().unwrap();
    assert_eq!(
        notice.retry(),
        Some((SectionType::Didactics, Difficulty::Easy, Some(Subject::Mathematics)))
    );
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn exit_discards_attempt_and_silences_timer() {
    let source = Arc::new(FixedQuestionSource::new(questions(3)));
    let (mut ctrl, mut events) = logged_in(Arc::clone(&source));
    ctrl.start_quiz(SectionType::Legislation, Difficulty::Medium, None)
        .await
        .unwrap();
    ctrl.submit_answer("right 0").unwrap();

    assert!(ctrl.exit_quiz());
    assert_eq!(ctrl.screen(), Screen::Menu);
    assert!(ctrl.attempt().is_none());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(
        ctrl.progress()
            .best_score(SectionType::Legislation, Difficulty::Medium),
        0
    );
}

#[tokio::test(start_paused = true)]
async fn best_score_never_decreases() {
    let source = Arc::new(FixedQuestionSource::new(questions(1)));
    let (mut ctrl, mut events) = logged_in(Arc::clone(&source));

    for correct in [true, false] {
        ctrl.start_quiz(SectionType::Psychology, Difficulty::Easy, None)
            .await
            .unwrap();
        answer(&mut ctrl, &mut events, correct).await;
        ctrl.return_to_menu();
        assert_eq!(
            ctrl.progress()
                .best_score(SectionType::Psychology, Difficulty::Easy),
            10
        );
    }
    assert_eq!(ctrl.last_result().map(|result| result.score()), Some(0));
}

#[tokio::test(start_paused = true)]
async fn generated_options_are_shuffled_copies() {
    let source = Arc::new(FixedQuestionSource::new(questions(5)));
    let (mut ctrl, _events) = logged_in(Arc::clone(&source));
    ctrl.start_quiz(SectionType::Legislation, Difficulty::Easy, None)
        .await
        .unwrap();

    for (shuffled, original) in ctrl.attempt().unwrap().questions().iter().zip(questions(5)) {
        let mut a = shuffled.options().to_vec();
        let mut b = original.options().to_vec();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(shuffled.correct_answer(), original.correct_answer());
    }
}

#[tokio::test(start_paused = true)]
async fn logout_returns_to_welcome_and_keeps_progress() {
    let source = Arc::new(FixedQuestionSource::new(questions(1)));
    let (mut ctrl, mut events) = logged_in(Arc::clone(&source));
    ctrl.start_quiz(SectionType::Legislation, Difficulty::Easy, None)
        .await
        .unwrap();
    answer(&mut ctrl, &mut events, true).await;
    assert!(ctrl.return_to_menu());

    assert!(ctrl.logout());
    assert_eq!(ctrl.screen(), Screen::Welcome);
    assert!(ctrl.user().is_none());
    assert!(ctrl.last_result().is_none());

    ctrl.login("Karim", SchoolLevel::Secondary).unwrap();
    assert_eq!(ctrl.screen(), Screen::Menu);
    assert_eq!(
        ctrl.progress()
            .best_score(SectionType::Legislation, Difficulty::Easy),
        10
    );
}
