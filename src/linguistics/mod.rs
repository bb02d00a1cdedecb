/*!
 * Linguistic tables for Estonian.
 *
 * - `case`: The grammatical case enumeration
 * - `tables`: Pronoun, case-ending and adjective-pattern tables
 */

pub mod case;
pub mod tables;

// Re-export main types
pub use case::Case;
pub use tables::{
    estonian_tables, AdjectivePattern, Ending, LinguisticTables, Number, Person,
    PronounAgreement, VerbRepair,
};
