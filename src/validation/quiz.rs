/*!
 * Batch validation of error-detection quizzes.
 *
 * Each question embeds the exercise sentence in single quotes, e.g.
 * `Find the error in 'ma näed raamatut'`. Questions without a quoted
 * sentence are skipped and do not count toward the totals.
 */

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::aggregator::ErrorValidator;
use super::findings::ValidationVerdict;

/// Regex for the first single-quoted sentence in a question
static QUOTED_SENTENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'([^']+)'").expect("Invalid quoted sentence regex")
});

/// One quiz question as stored in quiz content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text containing the quoted sentence
    pub question: String,
    /// The word the exercise marks as erroneous
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    /// Teacher-supplied explanation of the error
    pub explanation: String,
}

/// An error-detection quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// Validation result for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub sentence: String,
    pub error_word: String,
    pub validation: ValidationVerdict,
}

/// Summary of a whole quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub total_questions: usize,
    pub valid_questions: usize,
    pub invalid_questions: usize,
    pub details: Vec<QuestionResult>,
    pub all_valid: bool,
}

impl QuizReport {
    fn from_results(details: Vec<QuestionResult>) -> Self {
        let total_questions = details.len();
        let valid_questions = details.iter().filter(|r| r.validation.is_valid).count();

        Self {
            total_questions,
            valid_questions,
            invalid_questions: total_questions - valid_questions,
            details,
            all_valid: valid_questions == total_questions,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Quiz: {}/{} questions valid, {} invalid",
            self.valid_questions, self.total_questions, self.invalid_questions
        )
    }
}

/// Extract the first single-quoted sentence from a question
pub fn extract_sentence(question: &str) -> Option<&str> {
    QUOTED_SENTENCE_REGEX
        .captures(question)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Runs the error validator over every question of a quiz
pub struct QuizRunner<'a> {
    validator: &'a ErrorValidator<'a>,
}

impl<'a> QuizRunner<'a> {
    pub fn new(validator: &'a ErrorValidator<'a>) -> Self {
        Self { validator }
    }

    /// Validate every question that contains a quoted sentence
    pub fn run(&self, quiz: &Quiz) -> QuizReport {
        let details: Vec<QuestionResult> = quiz
            .questions
            .iter()
            .filter_map(|question| self.validate_question(question))
            .collect();

        let report = QuizReport::from_results(details);
        info!("{}", report.summary());
        report
    }

    fn validate_question(&self, question: &QuizQuestion) -> Option<QuestionResult> {
        let Some(sentence) = extract_sentence(&question.question) else {
            debug!("Skipping question without a quoted sentence: {}", question.question);
            return None;
        };

        let validation =
            self.validator
                .validate(sentence, &question.correct_answer, &question.explanation);

        Some(QuestionResult {
            question: question.question.clone(),
            sentence: sentence.to_string(),
            error_word: question.correct_answer.clone(),
            validation,
        })
    }
}
