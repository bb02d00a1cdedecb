/*!
 * Suffix tables that drive every checker.
 *
 * The tables are heuristics, not a morphological lexicon: each entry lists
 * endings commonly observed for a form, and the checkers only ever test
 * whether a token ends with one of them.
 */

use once_cell::sync::Lazy;

use super::case::Case;

/// A candidate word ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A literal suffix
    Suffix(&'static str),
    /// The form takes no overt suffix. Never matches as a literal suffix.
    Bare,
}

impl Ending {
    /// Check whether the word ends with this ending as a literal suffix
    pub fn is_suffix_of(&self, word: &str) -> bool {
        match self {
            Ending::Suffix(suffix) => word.ends_with(*suffix),
            Ending::Bare => false,
        }
    }
}

/// Check whether any ending in the set is a literal suffix of the word
pub fn any_suffix_of(endings: &[Ending], word: &str) -> bool {
    endings.iter().any(|ending| ending.is_suffix_of(word))
}

/// Grammatical person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

/// How to turn a verb into the form a pronoun expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbRepair {
    /// Append the personal ending
    Append(&'static str),
    /// Trim every trailing occurrence of each character, in order
    StripTrailing(&'static [char]),
}

impl VerbRepair {
    pub fn apply(&self, verb: &str) -> String {
        match self {
            VerbRepair::Append(suffix) => format!("{}{}", verb, suffix),
            VerbRepair::StripTrailing(chars) => chars
                .iter()
                .fold(verb, |stem, c| stem.trim_end_matches(*c))
                .to_string(),
        }
    }
}

/// Verb endings expected after a personal pronoun
#[derive(Debug, Clone)]
pub struct PronounAgreement {
    pub pronoun: &'static str,
    pub person: Person,
    pub number: Number,
    pub endings: Vec<Ending>,
    pub repair: VerbRepair,
}

impl PronounAgreement {
    pub fn is_third_singular(&self) -> bool {
        self.person == Person::Third && self.number == Number::Singular
    }
}

/// Paired endings approximating adjective-noun agreement in one case
#[derive(Debug, Clone)]
pub struct AdjectivePattern {
    pub case: Case,
    pub adjective: Vec<Ending>,
    pub noun: Vec<Ending>,
}

/// The full set of read-only tables used by the checkers
#[derive(Debug, Clone)]
pub struct LinguisticTables {
    /// Endings observed for words in a given case, in table order
    pub case_endings: Vec<(Case, Vec<&'static str>)>,
    /// The closed set of personal pronouns
    pub pronouns: Vec<PronounAgreement>,
    /// Adjective-noun agreement rows; only partitive and genitive are populated
    pub adjective_patterns: Vec<AdjectivePattern>,
    /// Endings that make a token look like an adjective
    pub adjective_suffixes: Vec<&'static str>,
    /// Endings that rule out a bare 3rd-person singular verb
    pub third_singular_conflicts: Vec<&'static str>,
    /// Words in an explanation that mark a case-marking problem
    pub case_keywords: Vec<&'static str>,
}

static ESTONIAN: Lazy<LinguisticTables> = Lazy::new(LinguisticTables::estonian);

/// Process-wide Estonian tables, built on first use
pub fn estonian_tables() -> &'static LinguisticTables {
    &ESTONIAN
}

fn suffixes(list: &[&'static str]) -> Vec<Ending> {
    list.iter().map(|s| Ending::Suffix(*s)).collect()
}

impl LinguisticTables {
    /// Build the Estonian tables
    pub fn estonian() -> Self {
        use Ending::Bare;

        let case_endings = vec![
            (Case::Partitive, vec!["t", "d", "i", "e", "a", "u"]),
            (Case::Genitive, vec!["i", "e", "a", "u"]),
            (Case::Illative, vec!["sse", "de", "te", "ha", "hu", "i"]),
            (Case::Inessive, vec!["s", "es", "is", "as"]),
            (Case::Elative, vec!["st", "est", "ist", "ast"]),
            (Case::Allative, vec!["le", "lle"]),
            (Case::Adessive, vec!["l", "el", "il", "al", "ul"]),
            (Case::Ablative, vec!["lt", "elt", "ilt", "alt", "ult"]),
            (Case::Translative, vec!["ks", "eks", "iks", "aks", "uks"]),
            (Case::Comitative, vec!["ga"]),
            (Case::Abessive, vec!["ta"]),
        ];

        let pronouns = vec![
            PronounAgreement {
                pronoun: "ma",
                person: Person::First,
                number: Number::Singular,
                endings: suffixes(&["n"]),
                repair: VerbRepair::Append("n"),
            },
            PronounAgreement {
                pronoun: "sa",
                person: Person::Second,
                number: Number::Singular,
                endings: suffixes(&["d"]),
                repair: VerbRepair::Append("d"),
            },
            PronounAgreement {
                pronoun: "ta",
                person: Person::Third,
                number: Number::Singular,
                endings: vec![Ending::Suffix("b"), Bare],
                repair: VerbRepair::StripTrailing(&['n', 'd']),
            },
            PronounAgreement {
                pronoun: "me",
                person: Person::First,
                number: Number::Plural,
                endings: suffixes(&["me"]),
                repair: VerbRepair::Append("me"),
            },
            PronounAgreement {
                pronoun: "te",
                person: Person::Second,
                number: Number::Plural,
                endings: suffixes(&["te"]),
                repair: VerbRepair::Append("te"),
            },
            PronounAgreement {
                pronoun: "nad",
                person: Person::Third,
                number: Number::Plural,
                endings: suffixes(&["vad", "id"]),
                repair: VerbRepair::Append("vad"),
            },
        ];

        let adjective_patterns = vec![
            AdjectivePattern {
                case: Case::Partitive,
                adjective: suffixes(&["t", "at", "ut", "et"]),
                noun: suffixes(&["t", "i", "d", "e", "a", "u"]),
            },
            AdjectivePattern {
                case: Case::Genitive,
                adjective: vec![Bare, Ending::Suffix("a"), Ending::Suffix("e")],
                noun: suffixes(&["i", "e", "a", "u"]),
            },
        ];

        Self {
            case_endings,
            pronouns,
            adjective_patterns,
            adjective_suffixes: vec!["ne", "line", "lik", "kas", "ine"],
            third_singular_conflicts: vec!["n", "d", "me", "te", "vad"],
            case_keywords: vec![
                "partitiiv", "genitiiv", "illatiiv", "inessiiv",
                "elatiiv", "allatiiv", "adessiiv", "ablatiiv",
                "partitivo", "genitivo", "ilativo", "inessivo",
                "caso", "requiere",
            ],
        }
    }

    /// Look up a pronoun. Matching is exact and case-sensitive.
    pub fn pronoun(&self, token: &str) -> Option<&PronounAgreement> {
        self.pronouns.iter().find(|p| p.pronoun == token)
    }

    pub fn is_pronoun(&self, token: &str) -> bool {
        self.pronoun(token).is_some()
    }

    /// Cases whose listed endings match the word, in table order
    pub fn candidate_cases(&self, word: &str) -> Vec<Case> {
        self.case_endings
            .iter()
            .filter(|(_, endings)| endings.iter().any(|e| word.ends_with(e)))
            .map(|(case, _)| *case)
            .collect()
    }
}
