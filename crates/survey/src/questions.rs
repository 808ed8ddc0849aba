use icebreak_common::error::{IcebreakError, IcebreakResult};
use rand::seq::SliceRandom;
use rand::Rng;

/// Built-in icebreaker questions.
pub const DEFAULT_QUESTIONS: &[&str] = &[
    "What's your favorite unconventional productivity hack?",
    "If you could work from any fictional location, where would it be?",
    "What's one skill you've picked up since working remotely?",
    "What's the best piece of advice you've ever received?",
    "Which book or podcast changed how you think about your work?",
    "What's a hobby you'd pursue if you had an extra day each week?",
    "What was your first job, and what did it teach you?",
    "If you could master any instrument overnight, which would it be?",
    "What's the most interesting place you've ever visited?",
    "Which tool or app could you not live without?",
    "What's a small thing that reliably makes your day better?",
    "If you could have dinner with anyone, living or not, who would it be?",
];

#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Vec<String>,
}

impl QuestionPool {
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Pick `count` distinct questions uniformly at random, in selection order.
    pub fn select<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> IcebreakResult<Vec<String>> {
        if count == 0 {
            return Err(IcebreakError::Validation(
                "question count must be at least 1".to_string(),
            ));
        }
        if count > self.questions.len() {
            return Err(IcebreakError::Validation(format!(
                "cannot select {count} questions from a pool of {}",
                self.questions.len()
            )));
        }

        Ok(self
            .questions
            .choose_multiple(rng, count)
            .cloned()
            .collect())
    }
}

impl Default for QuestionPool {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS.iter().copied())
    }
}
