//! Movie catalog model: records, the ordered collection and its filters.
//!
//! Everything here is synchronous and free of I/O. Persistence and
//! presentation live in other crates and only exchange plain values with
//! this one.

pub mod catalog;
pub mod collection;
pub mod query;
pub mod search;

pub use catalog::{Field, Genre, MovieDraft, MovieRecord, ParseError, Rating, ValidationError, parse_cast};
pub use collection::{Collection, CollectionError};
pub use query::Query;
pub use search::{AdvancedSearch, PersonTerm, RatingCriterion, YearCriterion};
