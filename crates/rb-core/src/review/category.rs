use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Review categories accepted by the remote store. Anything outside this
/// set is rejected server-side with a 400, so drafts never leave the
/// client with an unknown value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Education,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Education];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Education => "education",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "education" => Ok(Category::Education),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
