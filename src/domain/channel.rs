use serde::{Deserialize, Serialize};

/// A sales channel that a payment method can be made available in.
///
/// Channels are owned by the channel subsystem; this crate only reads them
/// and attaches them to generated payment methods by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique lookup key, e.g. `"WEB"`.
    pub code: String,
    pub name: String,
}

impl Channel {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
