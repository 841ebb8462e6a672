pub mod genre;
pub mod movie;
pub mod rating;

use thiserror::Error;

pub use genre::Genre;
pub use movie::{Field, MovieDraft, MovieRecord, ValidationError, parse_cast};
pub use rating::Rating;

/// Text that does not name a catalog value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid genre: {0}")]
    Genre(String),

    #[error("Invalid rating: {0}")]
    Rating(String),

    #[error("Invalid year: {0}")]
    Year(String),
}
