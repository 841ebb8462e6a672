use thiserror::Error;

use crate::{catalog::MovieRecord, query::Query};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("No movie at position {index}; the collection holds {len}.")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered list of movies. Position is meaningful: it is the display order
/// and the handle used for removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    movies: Vec<MovieRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, movie: MovieRecord) {
        self.movies.push(movie);
    }

    /// Removes and returns the movie at `index`. An invalid index leaves the
    /// collection as it was.
    pub fn remove_at(&mut self, index: usize) -> Result<MovieRecord, CollectionError> {
        if index >= self.movies.len() {
            return Err(CollectionError::OutOfRange {
                index,
                len: self.movies.len(),
            });
        }
        Ok(self.movies.remove(index))
    }

    pub fn all(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn to_vec(&self) -> Vec<MovieRecord> {
        self.movies.clone()
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Case-insensitive exact title lookup, used to warn about duplicates.
    pub fn contains_title(&self, title: &str) -> bool {
        let wanted = title.trim().to_lowercase();
        self.movies.iter().any(|m| m.title.to_lowercase() == wanted)
    }

    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }
}

impl From<Vec<MovieRecord>> for Collection {
    fn from(movies: Vec<MovieRecord>) -> Self {
        Collection { movies }
    }
}

impl FromIterator<MovieRecord> for Collection {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Collection {
            movies: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = MovieRecord;
    type IntoIter = std::vec::IntoIter<MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Genre, Rating};

    fn movie(title: &str) -> MovieRecord {
        MovieRecord::new(title, "Someone", Genre::Drama, 2000, Rating::Three, ["Somebody"])
    }

    #[test]
    fn add_appends_in_order() {
        let mut c = Collection::new();
        assert!(c.is_empty());
        c.add(movie("A"));
        c.add(movie("B"));
        c.add(movie("A"));

        let titles: Vec<_> = c.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "A"]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn remove_at_returns_the_removed_movie() {
        let mut c: Collection = vec![movie("A"), movie("B"), movie("C")].into();
        let removed = c.remove_at(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(c.all(), &[movie("A"), movie("C")]);
    }

    #[test]
    fn remove_at_on_empty_collection_fails() {
        let mut c = Collection::new();
        assert_eq!(c.remove_at(0), Err(CollectionError::OutOfRange { index: 0, len: 0 }));
        assert!(c.is_empty());
    }

    #[test]
    fn remove_at_past_the_end_leaves_collection_untouched() {
        let mut c: Collection = vec![movie("A"), movie("B")].into();
        let before = c.clone();
        assert_eq!(c.remove_at(2), Err(CollectionError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(c.remove_at(usize::MAX), Err(CollectionError::OutOfRange { index: usize::MAX, len: 2 }));
        assert_eq!(c, before);
    }

    #[test]
    fn to_vec_is_a_detached_copy() {
        let c: Collection = vec![movie("A")].into();
        let mut copy = c.to_vec();
        copy.push(movie("B"));
        copy[0].title = "Changed".into();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(0).unwrap().title, "A");
    }

    #[test]
    fn contains_title_ignores_case() {
        let c: Collection = vec![movie("The King's Speech")].into();
        assert!(c.contains_title("the king's speech"));
        assert!(c.contains_title(" THE KING'S SPEECH "));
        assert!(!c.contains_title("King's Speech"));
    }
}
