/*!
 * Corrected verb forms for pronoun-verb agreement errors.
 *
 * Only verb agreement is repaired; case errors get no suggestion.
 */

use log::debug;

use crate::linguistics::{estonian_tables, LinguisticTables};

use super::sentence::Sentence;

/// Proposes a corrected form for a word following a personal pronoun
#[derive(Debug, Clone, Copy)]
pub struct FixSuggester<'a> {
    tables: &'a LinguisticTables,
}

impl Default for FixSuggester<'static> {
    fn default() -> Self {
        Self::new(estonian_tables())
    }
}

impl<'a> FixSuggester<'a> {
    pub fn new(tables: &'a LinguisticTables) -> Self {
        Self { tables }
    }

    /// Suggest a corrected form of `error_word`.
    ///
    /// Returns `None` when the word is not in the sentence or the token
    /// before its first occurrence is not a known pronoun.
    pub fn suggest(&self, sentence: &str, error_word: &str) -> Option<String> {
        let sentence = Sentence::tokenize(sentence);
        let position = sentence.position_of(error_word)?;
        let previous = sentence.get(position.checked_sub(1)?)?;
        let agreement = self.tables.pronoun(previous)?;

        let fixed = agreement.repair.apply(error_word);
        debug!("Suggested '{}' -> '{}' after '{}'", error_word, fixed, previous);
        Some(fixed)
    }
}
