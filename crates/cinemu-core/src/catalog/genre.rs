use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Film genre, as offered in the catalog's genre picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Historical,
    Horror,
    Mystery,
    Noir,
    Political,
    Romance,
    SciFi,
    Thriller,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 14] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Historical,
        Genre::Horror,
        Genre::Mystery,
        Genre::Noir,
        Genre::Political,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Western,
    ];

    /// Symbolic name used for display and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Adventure => "ADVENTURE",
            Genre::Comedy => "COMEDY",
            Genre::Drama => "DRAMA",
            Genre::Fantasy => "FANTASY",
            Genre::Historical => "HISTORICAL",
            Genre::Horror => "HORROR",
            Genre::Mystery => "MYSTERY",
            Genre::Noir => "NOIR",
            Genre::Political => "POLITICAL",
            Genre::Romance => "ROMANCE",
            Genre::SciFi => "SCI_FI",
            Genre::Thriller => "THRILLER",
            Genre::Western => "WESTERN",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");

        match normalized.as_str() {
            "SCIFI" => return Ok(Genre::SciFi),
            "HISTORY" => return Ok(Genre::Historical),
            _ => {}
        }

        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| ParseError::Genre(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbolic_names_case_insensitively() {
        assert_eq!("DRAMA".parse::<Genre>(), Ok(Genre::Drama));
        assert_eq!("noir".parse::<Genre>(), Ok(Genre::Noir));
        assert_eq!("  Western ".parse::<Genre>(), Ok(Genre::Western));
    }

    #[test]
    fn accepts_separator_variants_for_sci_fi() {
        for text in ["SCI_FI", "sci-fi", "Sci Fi", "scifi"] {
            assert_eq!(text.parse::<Genre>(), Ok(Genre::SciFi), "{text}");
        }
    }

    #[test]
    fn rejects_unknown_genre() {
        assert_eq!("musical".parse::<Genre>(), Err(ParseError::Genre("musical".into())));
    }

    #[test]
    fn display_round_trips_for_every_variant() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string().parse::<Genre>(), Ok(genre));
        }
    }

    #[test]
    fn serializes_as_symbolic_name() {
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"SCI_FI\"");
        assert_eq!(serde_json::from_str::<Genre>("\"THRILLER\"").unwrap(), Genre::Thriller);
    }
}
