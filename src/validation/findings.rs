/*!
 * Findings produced by the checkers and the verdict built from them.
 */

use serde::{Deserialize, Serialize};

/// Categories of detectable errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingCategory {
    /// A verb that does not carry the ending its pronoun expects
    VerbAgreement,
    /// An adjective-noun pair whose endings share no case
    CaseAgreement,
    /// A single word whose explanation names a case problem
    CaseError,
}

impl FindingCategory {
    /// Contribution of one finding to the error count.
    ///
    /// A case-agreement finding implicates both words of the pair.
    pub fn weight(&self) -> usize {
        match self {
            FindingCategory::VerbAgreement => 1,
            FindingCategory::CaseAgreement => 2,
            FindingCategory::CaseError => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCategory::VerbAgreement => "verb_agreement",
            FindingCategory::CaseAgreement => "case_agreement",
            FindingCategory::CaseError => "case_error",
        }
    }
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single error found in a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ErrorFinding {
    VerbAgreement { word: String, position: usize },
    CaseAgreement { words: [String; 2], positions: [usize; 2] },
    CaseError { word: String, position: usize },
}

impl ErrorFinding {
    pub fn verb_agreement(word: &str, position: usize) -> Self {
        Self::VerbAgreement {
            word: word.to_string(),
            position,
        }
    }

    pub fn case_agreement(adjective: &str, noun: &str, position: usize) -> Self {
        Self::CaseAgreement {
            words: [adjective.to_string(), noun.to_string()],
            positions: [position, position + 1],
        }
    }

    pub fn case_error(word: &str, position: usize) -> Self {
        Self::CaseError {
            word: word.to_string(),
            position,
        }
    }

    pub fn category(&self) -> FindingCategory {
        match self {
            Self::VerbAgreement { .. } => FindingCategory::VerbAgreement,
            Self::CaseAgreement { .. } => FindingCategory::CaseAgreement,
            Self::CaseError { .. } => FindingCategory::CaseError,
        }
    }

    pub fn weight(&self) -> usize {
        self.category().weight()
    }
}

/// Outcome of validating one exercise sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Exactly one error was detected
    #[serde(rename = "valid")]
    pub is_valid: bool,
    /// Weighted sum of all findings
    pub error_count: usize,
    #[serde(rename = "errors")]
    pub findings: Vec<ErrorFinding>,
    #[serde(rename = "message")]
    pub summary: String,
}

impl ValidationVerdict {
    /// Build a verdict, deriving the count, validity and summary from the findings
    pub fn from_findings(findings: Vec<ErrorFinding>) -> Self {
        let error_count: usize = findings.iter().map(ErrorFinding::weight).sum();
        let is_valid = error_count == 1;
        let summary = if is_valid {
            "Single error detected".to_string()
        } else {
            format!("Multiple errors detected: {}", error_count)
        };

        Self {
            is_valid,
            error_count,
            findings,
            summary,
        }
    }

    /// Number of findings in a category
    pub fn count_of(&self, category: FindingCategory) -> usize {
        self.findings
            .iter()
            .filter(|f| f.category() == category)
            .count()
    }
}
