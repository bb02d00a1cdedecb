/*!
 * Error aggregation over a whole sentence.
 *
 * Runs every checker over the tokenized sentence and folds the findings into
 * one verdict. Findings are never de-duplicated: a token that fills the verb
 * slot after a pronoun and also starts an adjective-noun pair can be reported
 * by both checkers, and both findings count toward the total.
 */

use log::debug;

use crate::linguistics::{estonian_tables, LinguisticTables};

use super::case_agreement::CaseAgreementChecker;
use super::case_error::CaseErrorChecker;
use super::findings::{ErrorFinding, ValidationVerdict};
use super::sentence::Sentence;
use super::suggest::FixSuggester;
use super::verb_agreement::VerbAgreementChecker;

/// Validates that an exercise sentence contains exactly one detectable error
#[derive(Debug, Clone, Copy)]
pub struct ErrorValidator<'a> {
    tables: &'a LinguisticTables,
    verb_checker: VerbAgreementChecker<'a>,
    case_agreement_checker: CaseAgreementChecker<'a>,
    case_error_checker: CaseErrorChecker<'a>,
    suggester: FixSuggester<'a>,
}

impl Default for ErrorValidator<'static> {
    fn default() -> Self {
        Self::new(estonian_tables())
    }
}

impl<'a> ErrorValidator<'a> {
    /// Create a validator backed by the given tables
    pub fn new(tables: &'a LinguisticTables) -> Self {
        Self {
            tables,
            verb_checker: VerbAgreementChecker::new(tables),
            case_agreement_checker: CaseAgreementChecker::new(tables),
            case_error_checker: CaseErrorChecker::new(tables),
            suggester: FixSuggester::new(tables),
        }
    }

    /// Validate a sentence against the word the exercise marks as wrong.
    ///
    /// Never fails: input with no recognizable shapes yields zero findings,
    /// which is not a valid exercise.
    pub fn validate(&self, sentence: &str, error_word: &str, explanation: &str) -> ValidationVerdict {
        let sentence = Sentence::tokenize(sentence);

        let mut findings = self.verb_agreement_findings(&sentence);
        findings.extend(self.case_agreement_findings(&sentence));
        findings.extend(self.case_error_finding(&sentence, error_word, explanation));

        let verdict = ValidationVerdict::from_findings(findings);

        debug!(
            "Validated {} tokens: findings={}, error_count={}, valid={}",
            sentence.len(),
            verdict.findings.len(),
            verdict.error_count,
            verdict.is_valid
        );

        verdict
    }

    /// Suggest a corrected form for the flagged word
    pub fn suggest_fix(&self, sentence: &str, error_word: &str) -> Option<String> {
        self.suggester.suggest(sentence, error_word)
    }

    fn verb_agreement_findings(&self, sentence: &Sentence<'_>) -> Vec<ErrorFinding> {
        sentence
            .adjacent_pairs()
            .filter(|(_, pronoun, _)| self.tables.is_pronoun(pronoun))
            .filter(|(_, pronoun, verb)| !self.verb_checker.check(pronoun, verb))
            .map(|(i, _, verb)| ErrorFinding::verb_agreement(verb, i + 1))
            .collect()
    }

    fn case_agreement_findings(&self, sentence: &Sentence<'_>) -> Vec<ErrorFinding> {
        sentence
            .adjacent_pairs()
            .filter(|(_, first, second)| self.case_agreement_checker.is_pair(first, second))
            .filter(|(_, adjective, noun)| !self.case_agreement_checker.check(adjective, noun))
            .map(|(i, adjective, noun)| ErrorFinding::case_agreement(adjective, noun, i))
            .collect()
    }

    fn case_error_finding(
        &self,
        sentence: &Sentence<'_>,
        error_word: &str,
        explanation: &str,
    ) -> Option<ErrorFinding> {
        let position = sentence.position_of(error_word)?;
        self.case_error_checker
            .check(error_word, explanation)
            .then(|| ErrorFinding::case_error(error_word, position))
    }
}
