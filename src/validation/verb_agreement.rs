/*!
 * Pronoun-verb agreement.
 *
 * The check is a suffix test only. A verb whose ending happens to coincide
 * with the expected ending of its pronoun passes even when the form is
 * otherwise wrong, e.g. `ma` followed by a noun ending in `n`.
 */

use log::trace;

use crate::linguistics::tables::any_suffix_of;
use crate::linguistics::{estonian_tables, LinguisticTables};

/// Checks whether the word after a personal pronoun carries a matching ending
#[derive(Debug, Clone, Copy)]
pub struct VerbAgreementChecker<'a> {
    tables: &'a LinguisticTables,
}

impl Default for VerbAgreementChecker<'static> {
    fn default() -> Self {
        Self::new(estonian_tables())
    }
}

impl<'a> VerbAgreementChecker<'a> {
    pub fn new(tables: &'a LinguisticTables) -> Self {
        Self { tables }
    }

    /// Returns true when no disagreement is detected.
    ///
    /// Unknown pronouns never produce a disagreement. For the 3rd person
    /// singular, a verb without any other person's ending is accepted since
    /// those verbs often take no overt suffix.
    pub fn check(&self, pronoun: &str, verb: &str) -> bool {
        let Some(agreement) = self.tables.pronoun(pronoun) else {
            return true;
        };

        if agreement.is_third_singular()
            && !self
                .tables
                .third_singular_conflicts
                .iter()
                .any(|ending| verb.ends_with(ending))
        {
            return true;
        }

        let agrees = any_suffix_of(&agreement.endings, verb);
        trace!("Verb agreement '{} {}': {}", pronoun, verb, agrees);
        agrees
    }
}
