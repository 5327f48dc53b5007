use quiz_core::model::Question;
use rand::Rng;
use rand::seq::SliceRandom;

/// Return `question` with its options in a uniformly random order.
///
/// The option multiset and the correct answer are unchanged.
pub fn shuffle_options<R: Rng + ?Sized>(mut question: Question, rng: &mut R) -> Question {
    let mut options = question.options().to_vec();
    options.shuffle(rng);
    if let Err(err) = question.reorder_options(options) {
        tracing::warn!(error = %err, "kept the generated option order");
    }
    question
}
