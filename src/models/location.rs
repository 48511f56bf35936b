// Location model for free-text "<City>, <Region>" strings

use serde::{Deserialize, Serialize};

/// Region token used when a location string is empty
pub const UNKNOWN_REGION: &str = "Unknown";

/// A free-text location as entered on a product or buyer profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a new location from any string
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// The raw text as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the region token used for distance lookup.
    ///
    /// With two or more comma-separated segments the second-to-last one is
    /// taken, otherwise the whole string. Both are trimmed. An empty string
    /// yields [`UNKNOWN_REGION`].
    pub fn region(&self) -> &str {
        region_token(&self.0)
    }
}

impl From<&str> for Location {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Location {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Region extraction on a bare string, see [`Location::region`]
pub fn region_token(location: &str) -> &str {
    if location.is_empty() {
        return UNKNOWN_REGION;
    }

    let parts: Vec<&str> = location.split(',').collect();
    if parts.len() > 1 {
        parts[parts.len() - 2].trim()
    } else {
        parts[0].trim()
    }
}
