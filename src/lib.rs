/*!
 * # estcheck - Estonian error-detection quiz validator
 *
 * A Rust library for auditing language-learning exercises. Each exercise is a
 * sentence with exactly one marked grammatical error; the validator checks that
 * the sentence really contains exactly one detectable error of a known kind.
 *
 * ## Features
 *
 * - Pronoun-verb agreement checking
 * - Adjective-noun case agreement checking
 * - Case-error detection from exercise explanations
 * - Weighted error counting with a single pass/fail verdict
 * - Corrected verb form suggestions
 * - Batch validation of whole quizzes
 *
 * The checkers rely on suffix heuristics, not a dictionary, so words outside
 * the ending tables produce false positives and false negatives.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `linguistics`: Pronoun, case-ending and adjective-pattern tables
 * - `validation`: Checkers, error aggregation, fix suggestions and quizzes
 * - `protocol`: JSON request/response handling
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod linguistics;
pub mod validation;
pub mod protocol;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use linguistics::{estonian_tables, Case, LinguisticTables};
pub use validation::{ErrorFinding, ErrorValidator, FixSuggester, QuizReport, ValidationVerdict};
pub use protocol::{Request, Response};
pub use errors::{AppError, ValidatorError};
