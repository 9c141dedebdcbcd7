use std::path::{Path, PathBuf};

use plexname_parser::{ParseMode, ParseResult};

/// Everything a rename run needs to know besides its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamerParams {
    /// File or directory to rename.
    pub source: PathBuf,
    /// Library root new directories are created under. Defaults to `source`.
    pub target: PathBuf,
    /// Values that replace whatever the parser finds.
    pub overrides: ParseResult,
    /// Lower-cased extensions without the dot; empty means every file.
    pub extensions: Vec<String>,
    pub dry_run: bool,
    pub mode: ParseMode,
}

impl RenamerParams {
    pub fn new(source: impl AsRef<Path>, target: Option<&Path>) -> Self {
        let source = trim_trailing_separators(source.as_ref());
        let target = match target {
            Some(target) => trim_trailing_separators(target),
            None => source.clone(),
        };
        Self {
            source,
            target,
            overrides: ParseResult::default(),
            extensions: Vec::new(),
            dry_run: false,
            mode: ParseMode::default(),
        }
    }

    pub fn overrides(mut self, overrides: ParseResult) -> Self {
        self.overrides = overrides;
        self
    }

    /// Restrict the run to files with one of `extensions` (`"mkv"`, `".MP4"`...).
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether the extension filter lets `path` through.
    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

fn trim_trailing_separators(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}
