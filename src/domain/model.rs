use serde::{Deserialize, Serialize};

/// Tags reported in `properties`. Serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Odd,
    Even,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

/// Body of every rejected classification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub error: bool,
}

impl ClassificationError {
    pub fn new(raw: Option<String>) -> Self {
        Self {
            number: raw,
            error: true,
        }
    }
}

/// Where a `fun_fact` came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactOutcome {
    Fetched(String),
    Fallback(String),
}

impl FactOutcome {
    pub fn into_text(self) -> String {
        match self {
            Self::Fetched(text) | Self::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
