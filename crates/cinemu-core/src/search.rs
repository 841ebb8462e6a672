use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    catalog::{Genre, ParseError, Rating},
    collection::Collection,
};

static YEAR_CRITERION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?P<op>[<>])\s*(?P<bound>-?\d+)|(?P<start>-?\d+)\s*-\s*(?P<end>-?\d+)|(?P<exact>-?\d+))\s*$")
        .expect("year criterion pattern")
});

static RATING_CRITERION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?P<op>[<>])\s*(?P<bound>\w+)|(?P<low>\w+)\s*-\s*(?P<high>\w+)|(?P<exact>\w+))\s*$")
        .expect("rating criterion pattern")
});

/// Who the free-text term of an advanced search is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonTerm {
    Director(String),
    Cast(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCriterion {
    Exactly(Rating),
    Above(Rating),
    Below(Rating),
    /// Inclusive; a reversed pair matches nothing.
    Between(Rating, Rating),
}

impl RatingCriterion {
    fn apply(&self, movies: &Collection) -> Collection {
        let q = movies.query();
        match *self {
            RatingCriterion::Exactly(r) => q.by_rating(r),
            RatingCriterion::Above(r) => q.rating_above(r),
            RatingCriterion::Below(r) => q.rating_below(r),
            RatingCriterion::Between(low, high) => q.rating_between(low, high),
        }
    }
}

impl FromStr for RatingCriterion {
    type Err = ParseError;

    /// `FOUR`, `>TWO`, `<4`, `TWO-FOUR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RATING_CRITERION
            .captures(s)
            .ok_or_else(|| ParseError::Rating(s.to_string()))?;

        if let (Some(op), Some(bound)) = (caps.name("op"), caps.name("bound")) {
            let rating = bound.as_str().parse()?;
            return Ok(match op.as_str() {
                "<" => RatingCriterion::Below(rating),
                _ => RatingCriterion::Above(rating),
            });
        }
        if let (Some(low), Some(high)) = (caps.name("low"), caps.name("high")) {
            return Ok(RatingCriterion::Between(low.as_str().parse()?, high.as_str().parse()?));
        }
        match caps.name("exact") {
            Some(exact) => Ok(RatingCriterion::Exactly(exact.as_str().parse()?)),
            None => Err(ParseError::Rating(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearCriterion {
    Exactly(i32),
    Before(i32),
    After(i32),
    /// Inclusive; a reversed pair matches nothing.
    Between(i32, i32),
}

impl YearCriterion {
    fn apply(&self, movies: &Collection) -> Collection {
        let q = movies.query();
        match *self {
            YearCriterion::Exactly(y) => q.by_released_year(y),
            YearCriterion::Before(y) => q.released_before(y),
            YearCriterion::After(y) => q.released_after(y),
            YearCriterion::Between(start, end) => q.released_between(start, end),
        }
    }
}

impl FromStr for YearCriterion {
    type Err = ParseError;

    /// `1997`, `<1997`, `>1997`, `1990-2000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Year(s.to_string());
        let caps = YEAR_CRITERION.captures(s).ok_or_else(invalid)?;
        let year = |name: &str| -> Result<Option<i32>, ParseError> {
            caps.name(name)
                .map(|m| m.as_str().parse::<i32>().map_err(|_| invalid()))
                .transpose()
        };

        if let (Some(op), Some(bound)) = (caps.name("op"), year("bound")?) {
            return Ok(match op.as_str() {
                "<" => YearCriterion::Before(bound),
                _ => YearCriterion::After(bound),
            });
        }
        if let (Some(start), Some(end)) = (year("start")?, year("end")?) {
            return Ok(YearCriterion::Between(start, end));
        }
        year("exact")?.map(YearCriterion::Exactly).ok_or_else(invalid)
    }
}

/// A conjunctive search. Each criterion that is set narrows the result of
/// the previous one, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedSearch {
    pub person: Option<PersonTerm>,
    pub title: Option<String>,
    pub genre: Option<Genre>,
    pub rating: Option<RatingCriterion>,
    pub release: Option<YearCriterion>,
}

impl AdvancedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn director(mut self, term: impl Into<String>) -> Self {
        self.person = Some(PersonTerm::Director(term.into()));
        self
    }

    pub fn cast(mut self, term: impl Into<String>) -> Self {
        self.person = Some(PersonTerm::Cast(term.into()));
        self
    }

    pub fn title(mut self, term: impl Into<String>) -> Self {
        self.title = Some(term.into());
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn rating(mut self, criterion: RatingCriterion) -> Self {
        self.rating = Some(criterion);
        self
    }

    pub fn release(mut self, criterion: YearCriterion) -> Self {
        self.release = Some(criterion);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.person.is_none()
            && self.title.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
            && self.release.is_none()
    }

    /// Runs the search. With no criteria the result is a copy of `movies`.
    pub fn run(&self, movies: &Collection) -> Collection {
        let mut results = movies.clone();

        match &self.person {
            Some(PersonTerm::Director(term)) => results = results.query().by_director(term.trim()),
            Some(PersonTerm::Cast(term)) => results = results.query().by_cast(term.trim()),
            None => {}
        }
        if let Some(term) = &self.title {
            results = results.query().by_title(term.trim());
        }
        if let Some(genre) = self.genre {
            results = results.query().by_genre(genre);
        }
        if let Some(criterion) = &self.rating {
            results = criterion.apply(&results);
        }
        if let Some(criterion) = &self.release {
            results = criterion.apply(&results);
        }

        debug!(matched = results.len(), of = movies.len(), "advanced search");
        results
    }
}
