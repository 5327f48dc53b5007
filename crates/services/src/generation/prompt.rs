use std::fmt::Write as _;

use quiz_core::model::{Difficulty, SectionType};

use super::GenerationRequest;

pub(super) const SYSTEM_PROMPT: &str = "You write multiple-choice questions that prepare \
candidates for the national teacher recruitment exam. Reply with JSON only.";

fn section_focus(section: SectionType) -> &'static str {
    match section {
        SectionType::Didactics => {
            "teaching methods, lesson planning, competency-based approach and assessment for the chosen subject"
        }
        SectionType::Legislation => {
            "school legislation: the orientation law on education, teacher rights and duties, school regulations and discipline"
        }
        SectionType::Psychology => {
            "educational psychology: child and adolescent development, learning theories, motivation and classroom management"
        }
    }
}

fn difficulty_focus(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "basic definitions and direct recall",
        Difficulty::Medium => "application of concepts to common classroom situations",
        Difficulty::Hard => "analysis of complex situations, edge cases and precise legal or theoretical detail",
    }
}

/// Build the user prompt for one attempt.
#[must_use]
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Write {} new, non-repeating questions in Arabic about {}.",
        request.count,
        section_focus(request.section)
    );
    let _ = writeln!(prompt, "Education level: {}.", request.level.label());
    if let Some(subject) = request.subject {
        let _ = writeln!(prompt, "Subject: {}.", subject.label());
    }
    let _ = writeln!(
        prompt,
        "Difficulty: {} ({}).",
        request.difficulty.label(),
        difficulty_focus(request.difficulty)
    );
    prompt.push_str(
        "Mix written questions with oral or scenario-based ones. \
Each question has 3 to 4 options and exactly one correct answer, \
copied verbatim into correctAnswer.\n",
    );
    prompt.push_str(
        "Answer with a JSON object of the form \
{\"questions\": [{\"text\": string, \"type\": \"written\" | \"oral_scenario\", \
\"options\": [string], \"correctAnswer\": string}]}.",
    );
    prompt
}
