use std::sync::Mutex;

use async_trait::async_trait;
use quiz_core::model::{Question, QuestionKind};

use super::{GenerationRequest, QuestionSource};
use crate::error::QuestionSourceError;

type DemoQuestion = (&'static str, QuestionKind, &'static [&'static str], &'static str);

const DEMO_QUESTIONS: [DemoQuestion; 10] = [
    (
        "Which assessment takes place before learning starts, to find out what pupils already know?",
        QuestionKind::Written,
        &["Diagnostic assessment", "Summative assessment", "Certification exam", "Peer review"],
        "Diagnostic assessment",
    ),
    (
        "In the competency-based approach, a learning situation is mainly built around…",
        QuestionKind::Written,
        &["A meaningful problem to solve", "Memorising the lesson", "The teacher's lecture"],
        "A meaningful problem to solve",
    ),
    (
        "A pupil repeatedly disrupts the class. What is the first appropriate step?",
        QuestionKind::OralScenario,
        &[
            "Talk to the pupil privately to understand the cause",
            "Send the pupil out immediately",
            "Ignore the behaviour for the whole term",
            "Lower the pupil's marks",
        ],
        "Talk to the pupil privately to understand the cause",
    ),
    (
        "Piaget's stage in which children start reasoning logically about concrete objects is the…",
        QuestionKind::Written,
        &["Concrete operational stage", "Sensorimotor stage", "Formal operational stage"],
        "Concrete operational stage",
    ),
    (
        "Which body reviews a pupil's serious disciplinary case at school level?",
        QuestionKind::Written,
        &["The discipline council", "The parents' association", "The canteen committee"],
        "The discipline council",
    ),
    (
        "Formative assessment is used mainly to…",
        QuestionKind::Written,
        &["Adjust teaching during learning", "Rank pupils at year end", "Award diplomas"],
        "Adjust teaching during learning",
    ),
    (
        "An inspector asks how you would handle a class with very mixed levels. Best answer?",
        QuestionKind::OralScenario,
        &[
            "Use differentiated instruction and group work",
            "Teach only to the strongest pupils",
            "Give everyone the same worksheet and wait",
        ],
        "Use differentiated instruction and group work",
    ),
    (
        "Intrinsic motivation comes from…",
        QuestionKind::Written,
        &["Interest in the task itself", "Rewards and prizes", "Fear of punishment"],
        "Interest in the task itself",
    ),
    (
        "Vygotsky's zone of proximal development describes what a learner can do…",
        QuestionKind::Written,
        &["With guidance but not yet alone", "Without any help", "Only after adolescence"],
        "With guidance but not yet alone",
    ),
    (
        "A lesson plan's learning objective should be…",
        QuestionKind::Written,
        &["Observable and measurable", "As broad as possible", "Hidden from the pupils"],
        "Observable and measurable",
    ),
];

enum Reply {
    Questions(Vec<Question>),
    Failure(String),
}

/// In-memory source that always answers with a preset list or a preset failure.
///
/// Records every request it receives.
pub struct FixedQuestionSource {
    reply: Reply,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FixedQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            reply: Reply::Questions(questions),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Built-in question set for running without a generator.
    #[must_use]
    pub fn demo() -> Self {
        let questions = DEMO_QUESTIONS
            .iter()
            .filter_map(|(text, kind, options, correct)| {
                let options = options.iter().map(|o| (*o).to_string()).collect();
                Question::new(*text, *kind, options, *correct).ok()
            })
            .collect();
        Self::new(questions)
    }

    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Failure(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuestionSource for FixedQuestionSource {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Question>, QuestionSourceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match &self.reply {
            Reply::Questions(questions) if questions.is_empty() => {
                Err(QuestionSourceError::NoQuestions)
            }
            Reply::Questions(questions) => {
                Ok(questions.iter().take(request.count.max(1)).cloned().collect())
            }
            Reply::Failure(message) => Err(QuestionSourceError::Unavailable(message.clone())),
        }
    }
}
