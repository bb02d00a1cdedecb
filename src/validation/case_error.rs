/*!
 * Single-word case errors, detected from the exercise explanation text.
 */

use crate::linguistics::{estonian_tables, LinguisticTables};

/// Decides whether an explanation describes a case-marking problem
#[derive(Debug, Clone, Copy)]
pub struct CaseErrorChecker<'a> {
    tables: &'a LinguisticTables,
}

impl Default for CaseErrorChecker<'static> {
    fn default() -> Self {
        Self::new(estonian_tables())
    }
}

impl<'a> CaseErrorChecker<'a> {
    pub fn new(tables: &'a LinguisticTables) -> Self {
        Self { tables }
    }

    /// True if the lower-cased explanation contains a case keyword.
    ///
    /// The flagged word itself is not inspected; the result depends only on
    /// how the explanation is phrased.
    pub fn check(&self, _word: &str, explanation: &str) -> bool {
        let explanation = explanation.to_lowercase();
        self.tables
            .case_keywords
            .iter()
            .any(|keyword| explanation.contains(keyword))
    }
}
