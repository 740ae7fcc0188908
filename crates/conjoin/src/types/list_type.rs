use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// The semantic category of a list: "and", "or", or a list of measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// "A, B, and C"
    #[default]
    Conjunction,
    /// "A, B, or C"
    Disjunction,
    /// "5 pounds, 12 ounces"
    Unit,
}

impl ListType {
    /// Every list type, in declaration order.
    pub const ALL: [ListType; 3] = [
        ListType::Conjunction,
        ListType::Disjunction,
        ListType::Unit,
    ];

    /// The option name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ListType::Conjunction => "conjunction",
            ListType::Disjunction => "disjunction",
            ListType::Unit => "unit",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListType::ALL
            .into_iter()
            .find(|list_type| list_type.as_str() == s)
            .ok_or_else(|| {
                let known = ListType::ALL.map(ListType::as_str);
                FormatError::invalid_option("list type", s, &known)
            })
    }
}
