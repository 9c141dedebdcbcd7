//! Rename orchestration.
//!
//! A directory run first plans every move (parse, lookup, synthesize) and
//! only touches the file system once every file has a new name, so a failed
//! lookup leaves the source tree untouched. A single file is renamed inside
//! its own directory.

mod params;

pub use params::RenamerParams;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use plexname_parser::output::plex_path;
use plexname_parser::{LookupResult, ParseMode, ParseResult, Parser, ParserConfig};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::fs::FileSystem;
use crate::metadata::Searcher;

/// A planned or performed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of a rename run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: Vec<Move>,
    /// Files left alone by the extension filter or already correctly named.
    pub skipped: Vec<PathBuf>,
}

pub struct Renamer {
    params: RenamerParams,
    searcher: Searcher,
    fs: Arc<dyn FileSystem>,
}

impl Renamer {
    pub fn new(params: RenamerParams, searcher: Searcher, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            params,
            searcher,
            fs,
        }
    }

    pub fn params(&self) -> &RenamerParams {
        &self.params
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let source = &self.params.source;
        let metadata = std::fs::metadata(source)
            .with_context(|| format!("Cannot access source {:?}", source))?;

        if self.params.dry_run {
            info!("Dry run, nothing will be moved");
        }

        if metadata.is_dir() {
            self.run_dir().await
        } else {
            self.run_file().await
        }
    }

    async fn run_dir(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let parser = self.parser(self.params.mode);

        let mut planned = Vec::new();
        for file in self.collect_files()? {
            if !self.params.accepts(&file) {
                info!("Skipping {:?}: extension not selected", file);
                summary.skipped.push(file);
                continue;
            }

            let to = self
                .plan(&parser, &file, &self.params.target)
                .await
                .with_context(|| format!("Could not rename {:?}", self.relative(&file)))?;
            planned.push(Move { from: file, to });
        }
        check_collisions(&planned)?;

        for planned in planned {
            if planned.from == planned.to {
                debug!("{:?} is already named correctly", planned.from);
                summary.skipped.push(planned.from);
                continue;
            }
            if let Some(dir) = planned.to.parent() {
                self.fs
                    .mkdir_all(dir)
                    .with_context(|| format!("mkdir of {:?} failed", dir))?;
            }
            self.move_file(&planned)?;
            summary.moved.push(planned);
        }

        Ok(summary)
    }

    async fn run_file(&self) -> Result<RunSummary> {
        let file = self.params.source.clone();
        let mut summary = RunSummary::default();

        if !self.params.accepts(&file) {
            info!("Skipping {:?}: extension not selected", file);
            summary.skipped.push(file);
            return Ok(summary);
        }

        // A lone file carries no folder context worth parsing unless asked for.
        let mode = match self.params.mode {
            ParseMode::Both => ParseMode::FileOnly,
            mode => mode,
        };
        let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();

        let to = self
            .plan(&self.parser(mode), &file, &dir)
            .await
            .with_context(|| format!("Could not rename {:?}", file))?;
        // Stay in the source directory; only the name changes.
        let to = match to.file_name() {
            Some(name) => dir.join(name),
            None => to,
        };

        let planned = Move { from: file, to };
        if planned.from == planned.to {
            debug!("{:?} is already named correctly", planned.from);
            summary.skipped.push(planned.from);
        } else {
            self.move_file(&planned)?;
            summary.moved.push(planned);
        }
        Ok(summary)
    }

    fn parser(&self, mode: ParseMode) -> Parser {
        Parser::new(
            ParserConfig::builder()
                .mode(mode)
                .target_path(self.params.target.to_string_lossy())
                .overrides(self.params.overrides.clone())
                .build(),
        )
    }

    /// Every regular file below the source, in a stable order.
    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.params.source).sort_by_file_name() {
            let entry = entry.context("directory scan failed")?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        debug!("Found {} files in {:?}", files.len(), self.params.source);
        Ok(files)
    }

    /// Parse, look up and synthesize the new location of `file`.
    async fn plan(&self, parser: &Parser, file: &Path, target: &Path) -> Result<PathBuf> {
        info!("Processing: {}", file.display());

        let parsed: ParseResult = parser.parse(&file.to_string_lossy());
        debug!(?parsed, "parse result");

        let found = self.searcher.search(&parsed).await?;
        debug!(title = %found.title, year = found.year, "lookup result");
        if parsed.year != 0 && found.year != 0 && parsed.year != found.year {
            warn!(
                "Parsed year {} differs from looked up year {} for {:?}, keeping the parsed one",
                parsed.year, found.year, found.title
            );
        }

        let extension = file.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let path = plex_path(&parsed, &LookupResult::from(found), extension, target)?;
        Ok(path.file_path())
    }

    fn move_file(&self, planned: &Move) -> Result<()> {
        self.fs.rename(&planned.from, &planned.to).with_context(|| {
            format!("move of {:?} to {:?} failed", planned.from, planned.to)
        })?;
        info!(
            "Renamed to: {} (from: {})",
            planned.to.display(),
            planned.from.display()
        );
        Ok(())
    }

    fn relative<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.params.source).unwrap_or(file)
    }
}

/// Refuse a plan in which two files share a destination, or a file would
/// land on an existing one.
fn check_collisions(planned: &[Move]) -> Result<()> {
    let mut seen: HashMap<&Path, &Path> = HashMap::with_capacity(planned.len());
    for planned in planned {
        if let Some(first) = seen.insert(&planned.to, &planned.from) {
            anyhow::bail!(
                "{:?} and {:?} would both be renamed to {:?}",
                first,
                planned.from,
                planned.to
            );
        }
        if planned.to != planned.from && planned.to.exists() {
            anyhow::bail!(
                "Could not rename {:?}: {:?} already exists",
                planned.from,
                planned.to
            );
        }
    }
    Ok(())
}
