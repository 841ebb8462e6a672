use std::num::NonZeroUsize;

use cinemu_core::{AdvancedSearch, Genre, MovieDraft, Rating, RatingCriterion, YearCriterion, parse_cast};
use cinemu_local_library::DuplicatePolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cinemu", version)]
#[command(about = "Personal movie catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every cataloged movie
    #[command(visible_alias = "ls")]
    List,
    /// Catalog a movie
    #[command(allow_negative_numbers = true)]
    Add(AddArgs),
    /// Remove the movie shown as NUMBER by `list`
    #[command(visible_alias = "rm")]
    Remove { number: NonZeroUsize },
    /// Show the movies matching every given criterion
    Search(SearchArgs),
    /// List the accepted genres
    Genres,
    /// Show or change the settings
    Config(ConfigArgs),
}

impl Command {
    /// Whether the command changes the catalog and so needs a save.
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Remove { .. })
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub title: String,
    pub director: String,
    /// Genre name, e.g. DRAMA or sci-fi
    pub genre: Genre,
    pub year: i32,
    /// ONE to FIVE, or 1 to 5
    pub rating: Rating,
    /// Comma separated names, in billing order
    pub cast: String,
    /// Add even when the title is already cataloged
    #[arg(long)]
    pub force: bool,
}

impl AddArgs {
    pub fn draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            director: self.director.clone(),
            genre: self.genre,
            release_year: self.year,
            rating: self.rating,
            cast: parse_cast(&self.cast),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Director name contains TEXT
    #[arg(long, value_name = "TEXT")]
    pub director: Option<String>,
    /// Cast contains TEXT
    #[arg(long, value_name = "TEXT", conflicts_with = "director")]
    pub cast: Option<String>,
    /// Title contains TEXT
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
    #[arg(long)]
    pub genre: Option<Genre>,
    /// FOUR, >TWO, <4 or TWO-FOUR
    #[arg(long)]
    pub rating: Option<RatingCriterion>,
    /// 1997, <1997, >1997 or 1990-2000
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<YearCriterion>,
}

impl SearchArgs {
    pub fn search(&self) -> AdvancedSearch {
        let mut search = AdvancedSearch::new();
        if let Some(director) = &self.director {
            search = search.director(director);
        }
        if let Some(cast) = &self.cast {
            search = search.cast(cast);
        }
        if let Some(title) = &self.title {
            search = search.title(title);
        }
        if let Some(genre) = self.genre {
            search = search.genre(genre);
        }
        if let Some(rating) = self.rating {
            search = search.rating(rating);
        }
        if let Some(year) = self.year {
            search = search.release(year);
        }
        search
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    #[value(name = "json_lines", alias = "jsonl")]
    JsonLines,
    Sqlite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Allow,
    Skip,
}

impl From<PolicyArg> for DuplicatePolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Allow => DuplicatePolicy::Allow,
            PolicyArg::Skip => DuplicatePolicy::Skip,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Backend used from the next run on
    #[arg(long, value_enum)]
    pub storage: Option<StorageKind>,
    /// What `add` does with a title already cataloged
    #[arg(long, value_enum)]
    pub duplicates: Option<PolicyArg>,
}

impl ConfigArgs {
    pub fn is_empty(&self) -> bool {
        self.storage.is_none() && self.duplicates.is_none()
    }
}
