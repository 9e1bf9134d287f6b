//! Quiz session runner.
//!
//! A session picks up to `rounds` questions from a quiz in random order,
//! grades answers one at a time, and produces the final [`Score`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Quiz, Score, ScoreBasis};

/// Case-insensitive exact comparison of a response with the expected answer.
pub fn is_correct(response: &str, expected: &str) -> bool {
    response
        .chars()
        .flat_map(char::to_lowercase)
        .eq(expected.chars().flat_map(char::to_lowercase))
}

/// The question currently waiting for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'q> {
    /// 1-based position within the session.
    pub number: usize,
    pub question: &'q str,
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade<'q> {
    pub correct: bool,
    pub expected: &'q str,
}

/// One student's attempt at a quiz.
#[derive(Debug)]
pub struct QuizSession<'q> {
    quiz: &'q Quiz,
    order: Vec<&'q str>,
    position: usize,
    correct: u32,
    rounds: u32,
}

impl<'q> QuizSession<'q> {
    /// Start a session with questions shuffled by the thread RNG.
    pub fn new(quiz: &'q Quiz, rounds: u32) -> Self {
        Self::with_rng(quiz, rounds, &mut rand::thread_rng())
    }

    /// Start a session with questions shuffled by `rng`.
    pub fn with_rng<R: Rng + ?Sized>(quiz: &'q Quiz, rounds: u32, rng: &mut R) -> Self {
        let mut order: Vec<&'q str> = quiz.questions.keys().map(String::as_str).collect();
        // HashMap iteration order leaks into the shuffle otherwise.
        order.sort_unstable();
        order.shuffle(rng);
        order.truncate(usize::try_from(rounds).unwrap_or(usize::MAX));

        tracing::debug!(
            "session on '{}': {} of {} questions",
            quiz.name,
            order.len(),
            quiz.len()
        );

        Self {
            quiz,
            order,
            position: 0,
            correct: 0,
            rounds,
        }
    }

    /// Questions selected for this session, in presentation order.
    pub fn questions(&self) -> &[&'q str] {
        &self.order
    }

    /// The next question to answer, or `None` once every question is graded.
    pub fn current(&self) -> Option<Prompt<'q>> {
        self.order.get(self.position).map(|&question| Prompt {
            number: self.position + 1,
            question,
        })
    }

    /// Grade `response` against the current question and move on.
    ///
    /// Returns `None` when the session is already finished.
    pub fn answer(&mut self, response: &str) -> Option<Grade<'q>> {
        let question = *self.order.get(self.position)?;
        let expected = self.quiz.answer_for(question).unwrap_or_default();
        let correct = is_correct(response, expected);
        if correct {
            self.correct += 1;
        }
        self.position += 1;
        Some(Grade { correct, expected })
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.order.len()
    }

    /// Number of questions selected for this session.
    pub fn asked(&self) -> usize {
        self.order.len()
    }

    /// Score so far, with the total chosen by `basis`.
    pub fn score(&self, basis: ScoreBasis) -> Score {
        let total = match basis {
            ScoreBasis::Rounds => self.rounds,
            // Never more than `rounds`.
            ScoreBasis::Asked => u32::try_from(self.order.len()).unwrap_or(self.rounds),
        };
        Score {
            obtained: self.correct,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::{format_percentage, DEFAULT_ROUNDS};

    fn quiz_with(n: usize) -> Quiz {
        let mut quiz = Quiz::new("numbers");
        for i in 0..n {
            quiz.insert(format!("What is {i} + 1?"), (i + 1).to_string());
        }
        quiz
    }

    #[test]
    fn grading_ignores_case() {
        assert!(is_correct("Paris", "paris"));
        assert!(is_correct("PARIS", "Paris"));
        assert!(is_correct("Élan", "élan"));
        assert!(!is_correct("Paris ", "Paris"));
        assert!(!is_correct("Pari", "Paris"));
        assert!(!is_correct("4.0", "4"));
    }

    #[test]
    fn large_quiz_presents_round_limit_distinct_questions() {
        let quiz = quiz_with(12);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let session = QuizSession::with_rng(&quiz, DEFAULT_ROUNDS, &mut rng);
            assert_eq!(session.asked(), 5);
            let distinct: HashSet<&str> = session.questions().iter().copied().collect();
            assert_eq!(distinct.len(), 5);
            assert!(distinct.iter().all(|q| quiz.answer_for(q).is_some()));
        }
    }

    #[test]
    fn small_quiz_presents_everything_but_keeps_round_denominator() {
        let quiz = quiz_with(3);
        let mut session = QuizSession::new(&quiz, DEFAULT_ROUNDS);
        assert_eq!(session.asked(), 3);

        while let Some(prompt) = session.current() {
            let expected = quiz.answer_for(prompt.question).unwrap().to_string();
            assert!(session.answer(&expected).unwrap().correct);
        }

        assert_eq!(session.score(ScoreBasis::Rounds).to_string(), "3/5");
        assert_eq!(session.score(ScoreBasis::Asked).to_string(), "3/3");
    }

    #[test]
    fn answers_advance_and_count() {
        let quiz = quiz_with(6);
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = QuizSession::with_rng(&quiz, DEFAULT_ROUNDS, &mut rng);

        let mut numbers = Vec::new();
        let mut right = 0;
        while let Some(prompt) = session.current() {
            numbers.push(prompt.number);
            let expected = quiz.answer_for(prompt.question).unwrap();
            // Every other answer is wrong.
            let response = if prompt.number % 2 == 1 {
                right += 1;
                expected.to_string()
            } else {
                "wrong".to_string()
            };
            let grade = session.answer(&response).unwrap();
            assert_eq!(grade.expected, expected);
        }

        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(session.is_finished());
        assert!(session.answer("late").is_none());

        let score = session.score(ScoreBasis::Rounds);
        assert_eq!(score.obtained, right);
        assert_eq!(format_percentage(score.percentage()), "60.00%");
    }

    #[test]
    fn same_seed_same_order() {
        let quiz = quiz_with(10);
        let a = QuizSession::with_rng(&quiz, 5, &mut StdRng::seed_from_u64(1));
        let b = QuizSession::with_rng(&quiz, 5, &mut StdRng::seed_from_u64(1));
        assert_eq!(a.questions(), b.questions());
    }

    #[test]
    fn huge_round_count_keeps_exact_totals() {
        let quiz = quiz_with(4);
        let session = QuizSession::new(&quiz, u32::MAX);
        assert_eq!(session.asked(), 4);
        assert_eq!(session.score(ScoreBasis::Rounds).total, u32::MAX);
        assert_eq!(session.score(ScoreBasis::Asked).total, 4);
    }

    #[test]
    fn empty_quiz_finishes_immediately() {
        let quiz = Quiz::new("empty");
        let session = QuizSession::new(&quiz, DEFAULT_ROUNDS);
        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.score(ScoreBasis::Rounds).to_string(), "0/5");
    }
}
