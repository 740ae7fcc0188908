use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Verbosity of the connective text. Only unit lists distinguish styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Long,
    Short,
    Narrow,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 3] = [Style::Long, Style::Short, Style::Narrow];

    /// The option name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Long => "long",
            Style::Short => "short",
            Style::Narrow => "narrow",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                let known = Style::ALL.map(Style::as_str);
                FormatError::invalid_option("style", s, &known)
            })
    }
}
