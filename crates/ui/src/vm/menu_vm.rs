use quiz_core::model::{Difficulty, SectionType, Subject, UNLOCK_SCORE};
use services::SessionController;

/// Selection a menu button starts.
pub type StartSelection = (SectionType, Difficulty, Option<Subject>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuVm {
    pub greeting: String,
    pub level_label: &'static str,
    pub sections: Vec<SectionCardVm>,
    pub subjects: Vec<SubjectChipVm>,
    pub notice: Option<NoticeVm>,
    pub loading_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCardVm {
    pub section: SectionType,
    pub title: &'static str,
    pub blurb: &'static str,
    pub needs_subject: bool,
    pub difficulties: Vec<DifficultyButtonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyButtonVm {
    pub difficulty: Difficulty,
    pub label: &'static str,
    pub timer_label: String,
    pub lock_label: Option<String>,
    pub best_label: Option<String>,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectChipVm {
    pub subject: Subject,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub message: String,
    pub retry: Option<StartSelection>,
}

fn section_blurb(section: SectionType) -> &'static str {
    match section {
        SectionType::Didactics => "Teaching methods for the subject you will teach.",
        SectionType::Legislation => "Texts and rules governing schools and teachers.",
        SectionType::Psychology => "How pupils learn, develop and stay motivated.",
    }
}

#[must_use]
pub fn map_menu(session: &SessionController) -> MenuVm {
    let (greeting, level_label) = session.user().map_or_else(
        || ("Welcome".to_string(), ""),
        |user| {
            (
                format!("Welcome, {}", user.name()),
                user.school_level().label(),
            )
        },
    );
    let progress = session.progress();
    let selected = session.selected_subject();
    let busy = session.is_loading();

    let sections = SectionType::ALL
        .iter()
        .map(|&section| {
            let needs_subject = section.requires_subject();
            let missing_subject = needs_subject && selected.is_none();
            let difficulties = Difficulty::ALL
                .iter()
                .map(|&difficulty| {
                    let locked = !progress.is_unlocked(section, difficulty);
                    let best = progress.best_score(section, difficulty);
                    DifficultyButtonVm {
                        difficulty,
                        label: difficulty.label(),
                        timer_label: format!("{}s per question", difficulty.seconds_per_question()),
                        lock_label: locked
                            .then(|| format!("Locked – score {UNLOCK_SCORE} on medium")),
                        best_label: (best > 0).then(|| format!("Best: {best}")),
                        disabled: locked || missing_subject || busy,
                    }
                })
                .collect();
            SectionCardVm {
                section,
                title: section.label(),
                blurb: section_blurb(section),
                needs_subject,
                difficulties,
            }
        })
        .collect();

    let subjects = Subject::ALL
        .iter()
        .map(|&subject| SubjectChipVm {
            subject,
            label: subject.label(),
            selected: selected == Some(subject),
        })
        .collect();

    let notice = session.notice().map(|notice| NoticeVm {
        message: notice.message(),
        retry: notice.retry(),
    });

    let loading_label = session
        .loading_selection()
        .map(|(section, difficulty)| format!("Preparing {section} questions ({difficulty})…"));

    MenuVm {
        greeting,
        level_label,
        sections,
        subjects,
        notice,
        loading_label,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::SchoolLevel;
    use quiz_core::time::fixed_clock;
    use services::FixedQuestionSource;

    use super::*;

    fn menu_session() -> SessionController {
        let source = Arc::new(FixedQuestionSource::demo());
        let mut session = SessionController::new(source, fixed_clock());
        session.login("Amina", SchoolLevel::Secondary).unwrap();
        session
    }

    fn button(vm: &MenuVm, section: SectionType, difficulty: Difficulty) -> &DifficultyButtonVm {
        vm.sections
            .iter()
            .find(|card| card.section == section)
            .and_then(|card| card.difficulties.iter().find(|b| b.difficulty == difficulty))
            .unwrap()
    }

    #[test]
    fn fresh_menu_locks_hard_and_waits_for_a_subject() {
        let vm = map_menu(&menu_session());
        assert_eq!(vm.greeting, "Welcome, Amina");
        assert_eq!(vm.level_label, "Secondary school");

        let hard = button(&vm, SectionType::Legislation, Difficulty::Hard);
        assert!(hard.disabled);
        assert_eq!(hard.lock_label.as_deref(), Some("Locked – score 90 on medium"));
        assert_eq!(hard.best_label, None);

        let medium = button(&vm, SectionType::Legislation, Difficulty::Medium);
        assert!(!medium.disabled);
        assert_eq!(medium.timer_label, "60s per question");

        assert!(button(&vm, SectionType::Didactics, Difficulty::Easy).disabled);
        assert!(vm.subjects.iter().all(|chip| !chip.selected));
    }

    #[test]
    fn selected_subject_enables_didactics() {
        let mut session = menu_session();
        session.select_subject(Subject::Physics);
        let vm = map_menu(&session);

        assert!(!button(&vm, SectionType::Didactics, Difficulty::Easy).disabled);
        let chip = vm
            .subjects
            .iter()
            .find(|chip| chip.subject == Subject::Physics)
            .unwrap();
        assert!(chip.selected);
    }

    #[test]
    fn loading_disables_every_button() {
        let mut session = menu_session();
        session
            .prepare_start(SectionType::Psychology, Difficulty::Easy, None)
            .unwrap();
        let vm = map_menu(&session);

        assert!(vm.loading_label.is_some());
        assert!(
            vm.sections
                .iter()
                .flat_map(|card| card.difficulties.iter())
                .all(|b| b.disabled)
        );
    }
}
