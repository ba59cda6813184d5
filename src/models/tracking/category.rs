//! Category of a processed email and the table it is tracked in.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Info,
    Pub,
    Traite,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Info, Category::Pub, Category::Traite];

    /// Tracking table holding rows of this category.
    pub fn table(self) -> &'static str {
        match self {
            Category::Info => "email_info",
            Category::Pub => "email_pub",
            Category::Traite => "email_traite",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Pub => "pub",
            Category::Traite => "traite",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Category::Info),
            "pub" => Ok(Category::Pub),
            "traite" => Ok(Category::Traite),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
