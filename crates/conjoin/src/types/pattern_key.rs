use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// The name under which a locale database stores one set of list patterns.
///
/// Keys follow the CLDR `listPattern` resource names, so `Standard` is stored
/// as `standard`, `UnitNarrow` as `unit-narrow`, and so on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKey {
    Standard,
    Or,
    Unit,
    UnitShort,
    UnitNarrow,
}

impl PatternKey {
    /// Every pattern key, in declaration order.
    pub const ALL: [PatternKey; 5] = [
        PatternKey::Standard,
        PatternKey::Or,
        PatternKey::Unit,
        PatternKey::UnitShort,
        PatternKey::UnitNarrow,
    ];

    /// The resource name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKey::Standard => "standard",
            PatternKey::Or => "or",
            PatternKey::Unit => "unit",
            PatternKey::UnitShort => "unit-short",
            PatternKey::UnitNarrow => "unit-narrow",
        }
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known = PatternKey::ALL.map(PatternKey::as_str);
                FormatError::invalid_option("pattern key", s, &known)
            })
    }
}
