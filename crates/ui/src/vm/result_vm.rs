use quiz_core::model::{AttemptSummary, MAX_SCORE, Verdict};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score_label: String,
    pub verdict: Verdict,
    pub verdict_message: &'static str,
    pub detail_label: String,
    pub answered_label: String,
    pub completed_at_str: String,
    pub certificate: Option<String>,
}

fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Failed => "Not there yet. Review this section and try again.",
        Verdict::Passed => "Well done, you passed!",
        Verdict::Excellent => "Excellent work, you mastered this level!",
    }
}

#[must_use]
pub fn map_result(summary: &AttemptSummary, candidate: Option<&str>) -> ResultVm {
    let section = match summary.subject() {
        Some(subject) => format!("{} · {subject}", summary.section()),
        None => summary.section().to_string(),
    };
    let certificate = summary.earns_certificate().then(|| {
        let name = candidate.unwrap_or("Candidate");
        format!("Certificate of excellence awarded to {name}: ready for the hard level exam.")
    });

    ResultVm {
        score_label: format!("{}/{MAX_SCORE}", summary.score()),
        verdict: summary.verdict(),
        verdict_message: verdict_message(summary.verdict()),
        detail_label: format!("{section} · {}", summary.difficulty()),
        answered_label: format!(
            "{} of {} answered correctly",
            summary.correct(),
            summary.total()
        ),
        completed_at_str: format_datetime(summary.completed_at()),
        certificate,
    }
}
