/*!
 * Adjective-noun case agreement.
 *
 * Pairs are found by looking at the first word only: any token ending in an
 * adjective-forming suffix starts a candidate pair with the token after it.
 * The agreement check then looks for one pattern row whose adjective endings
 * match the first word and whose noun endings match the second. Only the
 * partitive and genitive rows exist, so other cases are never checked.
 */

use log::trace;

use crate::linguistics::tables::any_suffix_of;
use crate::linguistics::{estonian_tables, Case, LinguisticTables};

/// Detects candidate adjective-noun pairs and checks their case agreement
#[derive(Debug, Clone, Copy)]
pub struct CaseAgreementChecker<'a> {
    tables: &'a LinguisticTables,
}

impl Default for CaseAgreementChecker<'static> {
    fn default() -> Self {
        Self::new(estonian_tables())
    }
}

impl<'a> CaseAgreementChecker<'a> {
    pub fn new(tables: &'a LinguisticTables) -> Self {
        Self { tables }
    }

    /// True if `word1` looks like an adjective. `_word2` is not inspected.
    pub fn is_pair(&self, word1: &str, _word2: &str) -> bool {
        self.tables
            .adjective_suffixes
            .iter()
            .any(|suffix| word1.ends_with(suffix))
    }

    /// The first pattern row matching both words, if any
    pub fn shared_case(&self, adjective: &str, noun: &str) -> Option<Case> {
        self.tables
            .adjective_patterns
            .iter()
            .find(|row| any_suffix_of(&row.adjective, adjective) && any_suffix_of(&row.noun, noun))
            .map(|row| row.case)
    }

    /// True if both words appear to share a case
    pub fn check(&self, adjective: &str, noun: &str) -> bool {
        let shared = self.shared_case(adjective, noun);
        trace!("Case agreement '{} {}': {:?}", adjective, noun, shared);
        shared.is_some()
    }
}
