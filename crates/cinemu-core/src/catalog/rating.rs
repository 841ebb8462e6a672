use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Star rating. Variants are declared in ascending order, so the derived
/// `Ord` is the order range filters compare by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    pub fn stars(&self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }

    pub fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            1 => Some(Rating::One),
            2 => Some(Rating::Two),
            3 => Some(Rating::Three),
            4 => Some(Rating::Four),
            5 => Some(Rating::Five),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::One => "ONE",
            Rating::Two => "TWO",
            Rating::Three => "THREE",
            Rating::Four => "FOUR",
            Rating::Five => "FIVE",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ParseError;

    /// Accepts the symbolic name in any case or a star count `1..=5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(stars) = trimmed.parse::<u8>() {
            return Rating::from_stars(stars).ok_or_else(|| ParseError::Rating(s.to_string()));
        }

        let upper = trimmed.to_uppercase();
        Rating::ALL
            .into_iter()
            .find(|r| r.as_str() == upper)
            .ok_or_else(|| ParseError::Rating(s.to_string()))
    }
}
