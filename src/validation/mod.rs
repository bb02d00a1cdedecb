/*!
 * Validation of error-detection exercises.
 *
 * An exercise passes when its sentence contains exactly one detectable error:
 * - Verb agreement (pronoun followed by a verb with the wrong ending)
 * - Case agreement (adjective-noun pair without a shared case)
 * - Case error (explanation names a case problem for the flagged word)
 *
 * # Architecture
 *
 * - `sentence`: Whitespace tokenization
 * - `verb_agreement`, `case_agreement`, `case_error`: Per-category checkers
 * - `findings`: Findings and the weighted verdict
 * - `aggregator`: Runs every checker over a sentence
 * - `suggest`: Corrected verb forms
 * - `quiz`: Batch validation of whole quizzes
 */

pub mod sentence;
pub mod findings;
pub mod verb_agreement;
pub mod case_agreement;
pub mod case_error;
pub mod aggregator;
pub mod suggest;
pub mod quiz;

// Re-export main types
pub use aggregator::ErrorValidator;
pub use findings::{ErrorFinding, FindingCategory, ValidationVerdict};
pub use quiz::{Quiz, QuizQuestion, QuizReport, QuizRunner};
pub use suggest::FixSuggester;
