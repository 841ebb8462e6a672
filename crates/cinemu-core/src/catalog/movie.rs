use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{genre::Genre, rating::Rating};

/// One cataloged movie.
///
/// Nothing makes a record unique; two entries may share every attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    pub genre: Genre,
    pub release_year: i32,
    pub rating: Rating,
    /// Billing order is kept as entered.
    pub cast: Vec<String>,
}

impl MovieRecord {
    /// Header of the tabular view, in the order of [`MovieRecord::table_row`].
    pub const COLUMNS: [&'static str; 6] = ["Title", "Director", "Genre", "Year", "Rating", "Cast"];

    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: Genre,
        release_year: i32,
        rating: Rating,
        cast: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        MovieRecord {
            title: title.into(),
            director: director.into(),
            genre,
            release_year,
            rating,
            cast: cast.into_iter().map(Into::into).collect(),
        }
    }

    /// The cast joined with `", "`; this is the text cast searches run against.
    pub fn cast_text(&self) -> String {
        self.cast.join(", ")
    }

    pub fn table_row(&self) -> [String; 6] {
        [
            self.title.clone(),
            self.director.clone(),
            self.genre.to_string(),
            self.release_year.to_string(),
            self.rating.to_string(),
            self.cast_text(),
        ]
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} - Director: {} - Genre: {} - Year: {} - Rating: {} - Cast: {}",
            self.title,
            self.director,
            self.genre,
            self.release_year,
            self.rating,
            self.cast_text()
        )
    }
}

/// Required text fields of a new movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Director,
    Cast,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Director => "director",
            Field::Cast => "cast",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Incomplete movie data: the {0} field is required.")]
    Missing(Field),
}

/// Values as typed by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub genre: Genre,
    pub release_year: i32,
    pub rating: Rating,
    pub cast: Vec<String>,
}

impl MovieDraft {
    /// Trims every text field and builds the record.
    ///
    /// Blank cast entries are dropped; an all-blank cast counts as missing.
    pub fn validate(self) -> Result<MovieRecord, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Missing(Field::Title));
        }

        let director = self.director.trim();
        if director.is_empty() {
            return Err(ValidationError::Missing(Field::Director));
        }

        let cast: Vec<String> = self
            .cast
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if cast.is_empty() {
            return Err(ValidationError::Missing(Field::Cast));
        }

        Ok(MovieRecord {
            title: title.to_string(),
            director: director.to_string(),
            genre: self.genre,
            release_year: self.release_year,
            rating: self.rating,
            cast,
        })
    }
}

/// Splits a comma separated cast field into trimmed, non-empty names.
pub fn parse_cast(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
