use quiz_core::model::{Question, QuestionKind};
use serde::Deserialize;

use crate::error::QuestionSourceError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Wrapped { questions: Vec<GeneratedQuestion> },
    Bare(Vec<GeneratedQuestion>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedQuestion {
    text: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: QuestionKind,
    options: Vec<String>,
    correct_answer: String,
}

fn default_kind() -> QuestionKind {
    QuestionKind::Written
}

/// Models often wrap JSON in a markdown fence even when asked not to.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        // Single-line fence: drop the language tag up to the JSON itself.
        None => rest.trim_start_matches(|c: char| c != '[' && c != '{'),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate a generator reply.
///
/// # Errors
///
/// Returns `Malformed` for invalid JSON, `NoQuestions` for an empty list and
/// `InvalidQuestion` for the first record that fails validation.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, QuestionSourceError> {
    let payload: Payload = serde_json::from_str(strip_code_fence(raw))?;
    let generated = match payload {
        Payload::Wrapped { questions } | Payload::Bare(questions) => questions,
    };
    if generated.is_empty() {
        return Err(QuestionSourceError::NoQuestions);
    }

    generated
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let options = item
                .options
                .into_iter()
                .map(|option| option.trim().to_string())
                .collect();
            Question::new(item.text, item.kind, options, item.correct_answer.trim())
                .map_err(|source| QuestionSourceError::InvalidQuestion { index, source })
        })
        .collect()
}
