//! Plex-compatible naming.

use std::path::{Path, PathBuf};

use crate::model::{MediaType, ParseResult};

/// Canonical title and year of a release, as returned by a metadata lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookupResult {
    pub title: String,
    /// `0` when the lookup does not know the year
    pub year: u16,
}

impl LookupResult {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

/// Errors raised while synthesizing a Plex name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// Movies are always named `Title (Year)`.
    #[error("neither parser nor lookup yielded a year for movie {title:?}")]
    MissingYear { title: String },

    #[error("media type of {title:?} is unknown")]
    UnknownMediaType { title: String },
}

/// A synthesized Plex location.
///
/// Movies:
/// `<target>/<Title (Year)>/<Title (Year)> - <version>.<ext>`
///
/// TV shows:
/// `<target>/<Title (Year)>/Season NN/<Title (Year)> - SNNENN - <version>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlexPath {
    /// `Title (Year)`, or just `Title` for a TV show without a year
    pub plex_name: String,
    /// Technical attribute suffix, possibly empty
    pub version_info: String,
    /// Directory the file belongs in
    pub directory: PathBuf,
    /// New file name including the extension
    pub file_name: String,
}

impl PlexPath {
    /// Full path of the renamed file.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Plex path synthesizer rooted at a target library directory.
///
/// # Example
///
/// ```
/// use plexname_parser::output::{LookupResult, PlexNamer};
/// use plexname_parser::parse;
///
/// let result = parse("Some.Movie.1999.German.1080p.BluRay.mkv");
/// let namer = PlexNamer::new("/media/movies");
/// let path = namer
///     .name(&result, &LookupResult::new("Some Movie", 0), "mkv")
///     .unwrap();
///
/// assert_eq!(path.file_name, "Some Movie (1999) - German.1080p.Blu-ray.mkv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlexNamer {
    target_dir: PathBuf,
}

impl PlexNamer {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Synthesize the Plex location of a parsed release.
    ///
    /// `extension` is the original file extension with or without the
    /// leading dot; it is lower-cased.
    pub fn name(
        &self,
        result: &ParseResult,
        lookup: &LookupResult,
        extension: &str,
    ) -> Result<PlexPath, NamingError> {
        let plex_name = plex_name(result, lookup)?;
        let version_info = result.version_info();
        let extension = normalize_extension(extension);

        let (directory, stem) = match result.media_type {
            MediaType::Movie => {
                let directory = self.target_dir.join(&plex_name);
                let stem = join_non_empty(&[&plex_name, &version_info]);
                (directory, stem)
            }
            MediaType::Tv => {
                let directory = self
                    .target_dir
                    .join(&plex_name)
                    .join(format!("Season {:02}", result.season));
                let stem = join_non_empty(&[&plex_name, &tv_info(result), &version_info]);
                (directory, stem)
            }
            MediaType::Unknown => return Err(unknown_media_type(lookup)),
        };

        Ok(PlexPath {
            plex_name,
            version_info,
            directory,
            file_name: format!("{stem}{extension}"),
        })
    }
}

/// Synthesize a Plex location under `target_dir`.
pub fn plex_path(
    result: &ParseResult,
    lookup: &LookupResult,
    extension: &str,
    target_dir: impl Into<PathBuf>,
) -> Result<PlexPath, NamingError> {
    PlexNamer::new(target_dir).name(result, lookup, extension)
}

/// `Title (Year)` using the parsed year, else the looked up one.
///
/// TV shows without any year are named by their bare title.
pub fn plex_name(result: &ParseResult, lookup: &LookupResult) -> Result<String, NamingError> {
    let year = if result.year != 0 {
        result.year
    } else {
        lookup.year
    };
    match (result.media_type, year) {
        (MediaType::Unknown, _) => Err(unknown_media_type(lookup)),
        (_, year) if year != 0 => Ok(format!("{} ({})", lookup.title, year)),
        (MediaType::Tv, _) => Ok(lookup.title.clone()),
        (MediaType::Movie, _) => Err(NamingError::MissingYear {
            title: lookup.title.clone(),
        }),
    }
}

/// `SNNENN[ENN]`; the season part is also emitted for specials (season 0).
fn tv_info(result: &ParseResult) -> String {
    let mut info = String::new();
    if result.season > 0 || result.special.is_true() {
        info.push_str(&format!("S{:02}", result.season));
    }
    if result.episode1 > 0 {
        info.push_str(&format!("E{:02}", result.episode1));
        if result.episode2 > 0 {
            info.push_str(&format!("E{:02}", result.episode2));
        }
    }
    info
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" - ")
}

fn normalize_extension(extension: &str) -> String {
    let extension = extension.to_lowercase();
    if extension.is_empty() || extension.starts_with('.') {
        extension
    } else {
        format!(".{extension}")
    }
}

fn unknown_media_type(lookup: &LookupResult) -> NamingError {
    NamingError::UnknownMediaType {
        title: lookup.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, Resolution, Source, TriState};

    fn movie() -> ParseResult {
        ParseResult {
            media_type: MediaType::Movie,
            year: 1999,
            language: Language::German,
            resolution: Resolution::_1080p,
            dual_language: TriState::True,
            source: Source::BluRay,
            remux: TriState::True,
            ..Default::default()
        }
    }

    fn episode() -> ParseResult {
        ParseResult {
            media_type: MediaType::Tv,
            season: 2,
            episode1: 13,
            ..movie()
        }
    }

    #[test]
    fn test_movie_path() {
        let path = plex_path(
            &movie(),
            &LookupResult::new("Real Movie Title", 0),
            ".mkv",
            "/dev/null",
        )
        .unwrap();

        assert_eq!(path.plex_name, "Real Movie Title (1999)");
        assert_eq!(path.version_info, "German.1080p.DL.Blu-ray.Remux");
        assert_eq!(path.directory, PathBuf::from("/dev/null/Real Movie Title (1999)"));
        assert_eq!(
            path.file_name,
            "Real Movie Title (1999) - German.1080p.DL.Blu-ray.Remux.mkv"
        );
        assert_eq!(
            path.file_path(),
            PathBuf::from(
                "/dev/null/Real Movie Title (1999)/Real Movie Title (1999) - German.1080p.DL.Blu-ray.Remux.mkv"
            )
        );
    }

    #[test]
    fn test_movie_without_version_info() {
        let result = ParseResult {
            media_type: MediaType::Movie,
            ..Default::default()
        };
        let path = plex_path(&result, &LookupResult::new("Plain", 2001), "MKV", "/t").unwrap();
        assert_eq!(path.file_name, "Plain (2001).mkv");
    }

    #[test]
    fn test_parsed_year_beats_lookup_year() {
        let name = plex_name(&movie(), &LookupResult::new("Title", 2005)).unwrap();
        assert_eq!(name, "Title (1999)");
    }

    #[test]
    fn test_movie_missing_year() {
        let result = ParseResult {
            media_type: MediaType::Movie,
            ..Default::default()
        };
        let err = plex_path(&result, &LookupResult::new("Title", 0), "mkv", "/t").unwrap_err();
        assert_eq!(
            err,
            NamingError::MissingYear {
                title: "Title".into()
            }
        );
    }

    #[test]
    fn test_tv_path_without_year() {
        let result = ParseResult {
            year: 0,
            ..episode()
        };
        let path = plex_path(
            &result,
            &LookupResult::new("Real TV Show Title", 0),
            "mkv",
            "/dev/null",
        )
        .unwrap();

        assert_eq!(
            path.directory,
            PathBuf::from("/dev/null/Real TV Show Title/Season 02")
        );
        assert_eq!(
            path.file_name,
            "Real TV Show Title - S02E13 - German.1080p.DL.Blu-ray.Remux.mkv"
        );
    }

    #[test]
    fn test_tv_path_with_lookup_year() {
        let result = ParseResult {
            year: 0,
            ..episode()
        };
        let path = plex_path(
            &result,
            &LookupResult::new("Another Show", 1981),
            "mkv",
            "/t",
        )
        .unwrap();
        assert_eq!(path.plex_name, "Another Show (1981)");
        assert_eq!(path.directory, PathBuf::from("/t/Another Show (1981)/Season 02"));
    }

    #[test]
    fn test_tv_dual_episode_no_version() {
        let result = ParseResult {
            media_type: MediaType::Tv,
            season: 1,
            episode1: 3,
            episode2: 4,
            ..Default::default()
        };
        let path = plex_path(&result, &LookupResult::new("Awesome Show", 0), "mkv", "/t").unwrap();
        assert_eq!(path.file_name, "Awesome Show - S01E03E04.mkv");
    }

    #[test]
    fn test_tv_special() {
        let result = ParseResult {
            media_type: MediaType::Tv,
            special: TriState::True,
            episode1: 1,
            language: Language::German,
            ..Default::default()
        };
        let path = plex_path(&result, &LookupResult::new("Awesome Show", 0), "mkv", "/t").unwrap();
        assert_eq!(path.directory, PathBuf::from("/t/Awesome Show/Season 00"));
        assert_eq!(path.file_name, "Awesome Show - S00E01 - German.mkv");
    }

    #[test]
    fn test_tv_without_episode() {
        let result = ParseResult {
            media_type: MediaType::Tv,
            season: 3,
            ..Default::default()
        };
        let path = plex_path(&result, &LookupResult::new("Show", 0), "", "/t").unwrap();
        assert_eq!(path.file_name, "Show - S03");
    }

    #[test]
    fn test_unknown_media_type() {
        let result = ParseResult {
            year: 2000,
            ..Default::default()
        };
        let err = plex_path(&result, &LookupResult::new("X", 0), "mkv", "/t").unwrap_err();
        assert!(matches!(err, NamingError::UnknownMediaType { .. }));
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("MKV"), ".mkv");
        assert_eq!(normalize_extension(".Mp4"), ".mp4");
        assert_eq!(normalize_extension(""), "");
    }
}
