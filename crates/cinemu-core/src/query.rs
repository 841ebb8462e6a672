//! Attribute filters over a [`Collection`].
//!
//! Every filter is a single pass that copies the matching movies into a new
//! collection, keeping their relative order. The source is never modified,
//! so a result can be queried again to narrow it further.

use crate::{
    catalog::{Genre, MovieRecord, Rating},
    collection::Collection,
};

#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    source: &'a Collection,
}

impl<'a> Query<'a> {
    pub fn new(source: &'a Collection) -> Self {
        Query { source }
    }

    /// Movies for which `predicate` holds.
    pub fn matching<P>(&self, mut predicate: P) -> Collection
    where
        P: FnMut(&MovieRecord) -> bool,
    {
        self.source.iter().filter(|m| predicate(m)).cloned().collect()
    }

    pub fn by_title(&self, title: &str) -> Collection {
        let needle = title.to_lowercase();
        self.matching(|m| contains_folded(&m.title, &needle))
    }

    pub fn by_director(&self, director: &str) -> Collection {
        let needle = director.to_lowercase();
        self.matching(|m| contains_folded(&m.director, &needle))
    }

    /// Matches against the comma-joined cast, so a term may span two names.
    pub fn by_cast(&self, member: &str) -> Collection {
        let needle = member.to_lowercase();
        self.matching(|m| contains_folded(&m.cast_text(), &needle))
    }

    pub fn by_genre(&self, genre: Genre) -> Collection {
        self.matching(|m| m.genre == genre)
    }

    pub fn by_released_year(&self, year: i32) -> Collection {
        self.released_between(year, year)
    }

    pub fn released_before(&self, year: i32) -> Collection {
        self.matching(|m| m.release_year < year)
    }

    pub fn released_after(&self, year: i32) -> Collection {
        self.matching(|m| m.release_year > year)
    }

    /// Inclusive on both ends. `start > end` matches nothing.
    pub fn released_between(&self, start: i32, end: i32) -> Collection {
        self.matching(|m| (start..=end).contains(&m.release_year))
    }

    pub fn by_rating(&self, rating: Rating) -> Collection {
        self.rating_between(rating, rating)
    }

    pub fn rating_below(&self, rating: Rating) -> Collection {
        self.matching(|m| m.rating < rating)
    }

    pub fn rating_above(&self, rating: Rating) -> Collection {
        self.matching(|m| m.rating > rating)
    }

    /// Inclusive on both ends. Bounds are not swapped: `low > high` matches nothing.
    pub fn rating_between(&self, low: Rating, high: Rating) -> Collection {
        self.matching(|m| (low..=high).contains(&m.rating))
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titanic() -> MovieRecord {
        MovieRecord::new("Titanic", "James Cameron", Genre::Drama, 1997, Rating::One, ["Leonardo DiCaprio"])
    }

    fn avatar() -> MovieRecord {
        MovieRecord::new("Avatar", "James Cameron", Genre::Fantasy, 2009, Rating::Two, ["Sam Worthington"])
    }

    fn cameron() -> Collection {
        vec![titanic(), avatar()].into()
    }

    fn library() -> Collection {
        vec![
            MovieRecord::new(
                "Titanic",
                "James Cameron",
                Genre::Drama,
                1997,
                Rating::One,
                ["Leonardo DiCaprio", "Kate Winslet", "Billy Zane"],
            ),
            MovieRecord::new(
                "Avatar",
                "James Cameron",
                Genre::Fantasy,
                2009,
                Rating::Two,
                ["Sam Worthington", "Zoe Saldana", "Sigourney Weaver"],
            ),
            MovieRecord::new(
                "Life of Pi",
                "Ang Lee",
                Genre::Adventure,
                2012,
                Rating::Three,
                ["Suraj Sharma", "Irrfan Khan", "Adil Hussain"],
            ),
            MovieRecord::new(
                "Slumdog Millionaire",
                "Danny Boyle",
                Genre::Drama,
                2008,
                Rating::Four,
                ["Dev Patel", "Freida Pinto", "Saurabh Shukla"],
            ),
            MovieRecord::new(
                "The King's Speech",
                "Tom Hooper",
                Genre::Drama,
                2010,
                Rating::Five,
                ["Colin Firth", "Geoffrey Rush", "Helena Bonham Carter"],
            ),
        ]
        .into()
    }

    fn titles(c: &Collection) -> Vec<&str> {
        c.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn cameron_scenario() {
        let c = cameron();

        assert_eq!(titles(&c.query().by_director("cameron")), ["Titanic", "Avatar"]);
        assert_eq!(titles(&c.query().released_between(2000, 2010)), ["Avatar"]);
        assert_eq!(titles(&c.query().rating_above(Rating::One)), ["Avatar"]);

        let dramas = c.query().by_genre(Genre::Drama);
        assert_eq!(titles(&dramas.query().by_director("cameron")), ["Titanic"]);
    }

    #[test]
    fn text_filters_are_case_insensitive_substrings() {
        let c = library();
        assert_eq!(titles(&c.query().by_title("SPEECH")), ["The King's Speech"]);
        assert_eq!(titles(&c.query().by_title("i")).len(), 4);
        assert_eq!(titles(&c.query().by_director("ang")), ["Life of Pi"]);
        assert_eq!(titles(&c.query().by_cast("winslet")), ["Titanic"]);
    }

    #[test]
    fn cast_filter_runs_against_joined_text() {
        let c = library();
        assert_eq!(titles(&c.query().by_cast("Patel, Freida")), ["Slumdog Millionaire"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let c = library();
        assert_eq!(c.query().by_title(""), c);
    }

    #[test]
    fn year_bounds_are_strict_or_inclusive_as_named() {
        let c = library();
        assert_eq!(titles(&c.query().released_before(2009)), ["Titanic", "Slumdog Millionaire"]);
        assert_eq!(titles(&c.query().released_after(2009)), ["Life of Pi", "The King's Speech"]);
        assert_eq!(
            titles(&c.query().released_between(2008, 2010)),
            ["Avatar", "Slumdog Millionaire", "The King's Speech"]
        );
        assert!(c.query().released_between(2010, 2008).is_empty());
    }

    #[test]
    fn released_year_equals_degenerate_range() {
        let c = library();
        for year in 1990..2020 {
            assert_eq!(c.query().by_released_year(year), c.query().released_between(year, year));
        }
    }

    #[test]
    fn rating_bounds_follow_rating_order() {
        let c = library();
        assert_eq!(titles(&c.query().rating_below(Rating::Three)), ["Titanic", "Avatar"]);
        assert_eq!(titles(&c.query().rating_above(Rating::Three)), ["Slumdog Millionaire", "The King's Speech"]);
        assert_eq!(
            titles(&c.query().rating_between(Rating::Two, Rating::Four)),
            ["Avatar", "Life of Pi", "Slumdog Millionaire"]
        );
        assert!(c.query().rating_below(Rating::One).is_empty());
        assert!(c.query().rating_above(Rating::Five).is_empty());
    }

    #[test]
    fn by_rating_equals_degenerate_range() {
        let c = library();
        for rating in Rating::ALL {
            assert_eq!(c.query().by_rating(rating), c.query().rating_between(rating, rating));
            assert_eq!(c.query().by_rating(rating).len(), 1);
        }
    }

    #[test]
    fn reversed_rating_bounds_match_nothing() {
        let c = library();
        for high in Rating::ALL {
            for low in Rating::ALL.into_iter().filter(|low| *low < high) {
                assert!(c.query().rating_between(high, low).is_empty(), "{high}..{low}");
            }
        }
    }

    #[test]
    fn narrowing_commutes() {
        let c = library();
        let a_then_b = c.query().by_genre(Genre::Drama).query().rating_above(Rating::Two);
        let b_then_a = c.query().rating_above(Rating::Two).query().by_genre(Genre::Drama);
        assert_eq!(a_then_b, b_then_a);
        assert_eq!(titles(&a_then_b), ["Slumdog Millionaire", "The King's Speech"]);

        let a_then_b = c.query().by_director("cameron").query().released_after(2000);
        let b_then_a = c.query().released_after(2000).query().by_director("cameron");
        assert_eq!(a_then_b, b_then_a);
    }

    #[test]
    fn results_keep_source_order_and_leave_source_untouched() {
        let c = library();
        let before = c.clone();
        let dramas = c.query().by_genre(Genre::Drama);
        assert_eq!(titles(&dramas), ["Titanic", "Slumdog Millionaire", "The King's Speech"]);
        assert_eq!(c, before);
    }

    #[test]
    fn empty_collection_yields_empty_results() {
        let c = Collection::new();
        let q = c.query();
        assert!(q.by_title("a").is_empty());
        assert!(q.by_director("a").is_empty());
        assert!(q.by_cast("a").is_empty());
        assert!(q.by_genre(Genre::Noir).is_empty());
        assert!(q.by_released_year(2000).is_empty());
        assert!(q.released_before(3000).is_empty());
        assert!(q.released_after(0).is_empty());
        assert!(q.released_between(0, 3000).is_empty());
        assert!(q.by_rating(Rating::One).is_empty());
        assert!(q.rating_below(Rating::Five).is_empty());
        assert!(q.rating_above(Rating::One).is_empty());
        assert!(q.rating_between(Rating::One, Rating::Five).is_empty());
    }
}
