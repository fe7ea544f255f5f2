use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named partition of the café menu.
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Espresso,
    Frappuccino,
    Blended,
    Teavana,
    Desert,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 5] = [
        Self::Espresso,
        Self::Frappuccino,
        Self::Blended,
        Self::Teavana,
        Self::Desert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Espresso => "espresso",
            Self::Frappuccino => "frappuccino",
            Self::Blended => "blended",
            Self::Teavana => "teavana",
            Self::Desert => "desert",
        }
    }

    /// Heading shown above the category's list.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Espresso => "☕ 에스프레소 메뉴 관리",
            Self::Frappuccino => "🥤 프라푸치노 메뉴 관리",
            Self::Blended => "🍹 블렌디드 메뉴 관리",
            Self::Teavana => "🫖 티바나 메뉴 관리",
            Self::Desert => "🍰 디저트 메뉴 관리",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
