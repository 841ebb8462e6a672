mod args;
mod table;

use std::{
    fs::File,
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use cinemu_core::{Collection, Genre};
use cinemu_local_library::{
    AddOutcome, ConfigManager, DuplicatePolicy, Session, Storage, StorageBackend, StorageError, storage,
};
use cinemu_paths::CinemuPaths;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::{Cli, Command, ConfigArgs, StorageKind};

fn main() -> ExitCode {
    // Usage errors print and exit with status 2 here.
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Directories, settings and the single-instance lock of one run.
struct Workspace {
    paths: CinemuPaths,
    config: ConfigManager,
    _lock: File,
}

impl Workspace {
    fn open() -> Result<Self> {
        let paths = CinemuPaths::new()?;
        let first_run = paths.is_first_run();
        let lock = paths.lock()?;

        let config = ConfigManager::load(&paths.settings_file)?;
        if first_run && !config.path().exists() {
            info!("First run, writing default settings to {}", config.path().display());
            config.save()?;
        }

        Ok(Workspace {
            paths,
            config,
            _lock: lock,
        })
    }
}

fn run(command: Command) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        Command::Genres => {
            for genre in Genre::ALL {
                writeln!(out, "{genre}")?;
            }
        }
        Command::Config(change) => {
            let mut workspace = Workspace::open()?;
            configure(&mut workspace, &change, &mut out)?;
        }
        command => {
            let workspace = Workspace::open()?;
            let backend = workspace.config.get().storage.resolve(&workspace.paths.data_dir);
            let storage =
                storage::open(&backend).with_context(|| format!("could not open {}", backend.path().display()))?;

            let (session, load_error) = Session::open(storage);
            if let Some(e) = &load_error {
                eprintln!("Warning: only {} movies could be loaded: {e}", session.collection().len());
            }

            let policy = workspace.config.get().duplicate_policy;
            execute(session, load_error.as_ref(), command, policy, &mut out)
                .with_context(|| format!("catalog at {}", backend.path().display()))?;
        }
    }
    Ok(())
}

/// A partially loaded catalog may be read but not written back: saving
/// would drop everything after the first bad record.
fn check_partial_load(load_error: Option<&StorageError>, command: &Command) -> Result<()> {
    if load_error.is_some() && command.mutates() {
        bail!("refusing to modify a partially loaded catalog; fix or move the file first");
    }
    Ok(())
}

/// Runs one catalog command against an open session and saves when it
/// changed something.
fn execute<St: Storage>(
    mut session: Session<St>,
    load_error: Option<&StorageError>,
    command: Command,
    policy: DuplicatePolicy,
    out: &mut impl Write,
) -> Result<()> {
    check_partial_load(load_error, &command)?;

    match command {
        Command::List => print_movies(out, session.collection(), "The collection is empty.")?,
        Command::Search(args) => print_movies(out, &session.search(&args.search()), "No movies match these criteria.")?,
        Command::Add(args) => {
            let policy = if args.force { DuplicatePolicy::Allow } else { policy };
            let title = args.title.trim().to_string();
            match session.add(args.draft(), policy)? {
                AddOutcome::Added { index } => {
                    writeln!(out, "Added #{}: {title}", index + 1)?;
                    close(session)?;
                }
                AddOutcome::SkippedDuplicate => writeln!(
                    out,
                    "A movie titled \"{title}\" is already cataloged; not added. Use --force to add it anyway."
                )?,
            }
        }
        Command::Remove { number } => {
            let removed = session.remove_at(number.get() - 1)?;
            writeln!(out, "Removed: {removed}")?;
            close(session)?;
        }
        Command::Genres | Command::Config(_) => {}
    }
    Ok(())
}

fn close<St: Storage>(session: Session<St>) -> Result<()> {
    session.close().context("the catalog could not be saved")
}

fn print_movies(out: &mut impl Write, movies: &Collection, when_empty: &str) -> io::Result<()> {
    if movies.is_empty() {
        writeln!(out, "{when_empty}")
    } else {
        write!(out, "{}", table::render(movies))
    }
}

fn configure(workspace: &mut Workspace, change: &ConfigArgs, out: &mut impl Write) -> Result<()> {
    let Workspace { paths, config, .. } = workspace;
    if !change.is_empty() {
        config.update(|cfg| {
            match change.storage {
                Some(StorageKind::JsonLines) => cfg.storage = StorageBackend::JsonLines(paths.collection_file.clone()),
                Some(StorageKind::Sqlite) => cfg.storage = StorageBackend::Sqlite(paths.collection_db.clone()),
                None => {}
            }
            if let Some(policy) = change.duplicates {
                cfg.duplicate_policy = policy.into();
            }
        })?;
        if change.storage.is_some() {
            warn!("Storage changed; movies kept by the previous backend are not copied over");
        }
    }

    writeln!(out, "# {}", config.path().display())?;
    write!(out, "{}", config.get().to_toml()?)?;
    Ok(())
}
