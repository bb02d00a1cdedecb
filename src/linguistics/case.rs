/*!
 * Estonian grammatical cases.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// One of the fourteen Estonian grammatical cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Genitive,
    Partitive,
    Illative,
    Inessive,
    Elative,
    Allative,
    Adessive,
    Ablative,
    Translative,
    Terminative,
    Essive,
    Abessive,
    Comitative,
}

impl Case {
    /// All cases in traditional grammar order
    pub const ALL: [Case; 14] = [
        Case::Nominative,
        Case::Genitive,
        Case::Partitive,
        Case::Illative,
        Case::Inessive,
        Case::Elative,
        Case::Allative,
        Case::Adessive,
        Case::Ablative,
        Case::Translative,
        Case::Terminative,
        Case::Essive,
        Case::Abessive,
        Case::Comitative,
    ];

    // @returns: Short grammar label ("nom", "gen", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nominative => "nom",
            Self::Genitive => "gen",
            Self::Partitive => "part",
            Self::Illative => "ill",
            Self::Inessive => "ine",
            Self::Elative => "ela",
            Self::Allative => "all",
            Self::Adessive => "ade",
            Self::Ablative => "abl",
            Self::Translative => "tra",
            Self::Terminative => "ter",
            Self::Essive => "ess",
            Self::Abessive => "abe",
            Self::Comitative => "com",
        }
    }

    // @returns: Estonian name of the case
    pub fn estonian_name(&self) -> &'static str {
        match self {
            Self::Nominative => "nominatiiv",
            Self::Genitive => "genitiiv",
            Self::Partitive => "partitiiv",
            Self::Illative => "illatiiv",
            Self::Inessive => "inessiiv",
            Self::Elative => "elatiiv",
            Self::Allative => "allatiiv",
            Self::Adessive => "adessiiv",
            Self::Ablative => "ablatiiv",
            Self::Translative => "translatiiv",
            Self::Terminative => "terminatiiv",
            Self::Essive => "essiiv",
            Self::Abessive => "abessiiv",
            Self::Comitative => "komitatiiv",
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.estonian_name())
    }
}

// Accepts either the short label or the Estonian name
impl std::str::FromStr for Case {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Case::ALL
            .iter()
            .find(|case| case.label() == needle || case.estonian_name() == needle)
            .copied()
            .ok_or_else(|| anyhow!("Unknown case: {}", s))
    }
}
