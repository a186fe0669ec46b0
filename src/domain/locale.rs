use serde::{Deserialize, Serialize};

/// A language/region code under which translatable fields are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub code: String,
}

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
