use clap::Parser;
use plexname_parser::{Language, MediaType, ParseMode, ParseResult, Resolution, Source, TriState};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plexname")]
#[command(
    author,
    version,
    about = "Rename your media files and folders for the Plex Media Server",
    after_help = "Example:\n  plexname --extensions mkv,mp4 --lang english --remux true downloads movies"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// File or directory to rename
    #[arg(value_name = "SOURCE")]
    pub source_path: PathBuf,

    /// Library root new folders are created in (defaults to SOURCE)
    #[arg(value_name = "TARGET")]
    pub target_path: Option<PathBuf>,

    /// Show what would be done without moving anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the parse result and the would-be Plex name, no lookup
    #[arg(long)]
    pub parse_only: bool,

    /// Print the --parse-only result as JSON
    #[arg(long, requires = "parse_only")]
    pub json: bool,

    /// Pick the first candidate instead of asking when a lookup is ambiguous
    #[arg(short, long)]
    pub yes: bool,

    /// Only move files with these extensions
    #[arg(long, value_delimiter = ',', value_name = "EXT,...")]
    pub extensions: Vec<String>,

    /// Only parse file names
    #[arg(long, conflicts_with = "only_dir")]
    pub only_file: bool,

    /// Only parse parent directory names
    #[arg(long)]
    pub only_dir: bool,

    /// Movie/TV title
    #[arg(long, help_heading = "Overrides")]
    pub title: Option<String>,

    /// Year of release
    #[arg(long, help_heading = "Overrides")]
    pub year: Option<u16>,

    /// TV season
    #[arg(long, help_heading = "Overrides")]
    pub season: Option<u16>,

    /// TV episode
    #[arg(long, help_heading = "Overrides")]
    pub episode1: Option<u16>,

    /// Second TV episode of a double episode
    #[arg(long, help_heading = "Overrides")]
    pub episode2: Option<u16>,

    /// Media type (movie|tv)
    #[arg(long, help_heading = "Overrides")]
    pub media_type: Option<MediaType>,

    /// Resolution: 720p, 1080p etc.
    #[arg(long, help_heading = "Overrides")]
    pub resolution: Option<Resolution>,

    /// Media source (web-dl, blu-ray etc.)
    #[arg(long, help_heading = "Overrides")]
    pub source: Option<Source>,

    /// Audio language
    #[arg(long, help_heading = "Overrides")]
    pub lang: Option<Language>,

    /// Proper release (true|false)
    #[arg(long, value_name = "BOOL", help_heading = "Overrides")]
    pub proper: Option<TriState>,

    /// Remux of the source, no encode (true|false)
    #[arg(long, value_name = "BOOL", help_heading = "Overrides")]
    pub remux: Option<TriState>,

    /// Dual language (true|false)
    #[arg(long, value_name = "BOOL", help_heading = "Overrides")]
    pub dl: Option<TriState>,

    /// Special episode (true|false)
    #[arg(long, value_name = "BOOL", help_heading = "Overrides")]
    pub special: Option<TriState>,
}

impl Cli {
    /// Collect the override flags into a result for the merge engine.
    pub fn overrides(&self) -> ParseResult {
        ParseResult {
            title: self.title.clone().unwrap_or_default(),
            media_type: self.media_type.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            season: self.season.unwrap_or_default(),
            episode1: self.episode1.unwrap_or_default(),
            episode2: self.episode2.unwrap_or_default(),
            special: self.special.unwrap_or_default(),
            resolution: self.resolution.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            language: self.lang.unwrap_or_default(),
            remux: self.remux.unwrap_or_default(),
            proper: self.proper.unwrap_or_default(),
            dual_language: self.dl.unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> ParseMode {
        if self.only_file {
            ParseMode::FileOnly
        } else if self.only_dir {
            ParseMode::DirOnly
        } else {
            ParseMode::Both
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("plexname").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn positional_paths() {
        let cli = parse(&["downloads", "movies"]);
        assert_eq!(cli.source_path, PathBuf::from("downloads"));
        assert_eq!(cli.target_path, Some(PathBuf::from("movies")));

        let cli = parse(&["downloads"]);
        assert!(cli.target_path.is_none());
        assert_eq!(cli.mode(), ParseMode::Both);
    }

    #[test]
    fn source_is_required() {
        assert!(Cli::try_parse_from(["plexname"]).is_err());
    }

    #[test]
    fn no_flags_means_no_overrides() {
        assert_eq!(parse(&["x"]).overrides(), ParseResult::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = parse(&[
            "--title", "Real Title",
            "--year", "1999",
            "--season", "2",
            "--episode1", "3",
            "--episode2", "4",
            "--media-type", "tv",
            "--resolution", "1080p",
            "--source", "web-dl",
            "--lang", "german",
            "--proper", "true",
            "--remux", "false",
            "--dl", "true",
            "--special", "false",
            "x",
        ]);
        let o = cli.overrides();
        assert_eq!(o.title, "Real Title");
        assert_eq!(o.year, 1999);
        assert_eq!(o.season, 2);
        assert_eq!(o.episode1, 3);
        assert_eq!(o.episode2, 4);
        assert_eq!(o.media_type, MediaType::Tv);
        assert_eq!(o.resolution, Resolution::_1080p);
        assert_eq!(o.source, Source::WebDl);
        assert_eq!(o.language, Language::German);
        assert_eq!(o.proper, TriState::True);
        assert_eq!(o.remux, TriState::False);
        assert_eq!(o.dual_language, TriState::True);
        assert_eq!(o.special, TriState::False);
    }

    #[test]
    fn invalid_override_is_rejected() {
        assert!(Cli::try_parse_from(["plexname", "--resolution", "999p", "x"]).is_err());
        assert!(Cli::try_parse_from(["plexname", "--media-type", "podcast", "x"]).is_err());
        assert!(Cli::try_parse_from(["plexname", "--remux", "maybe", "x"]).is_err());
    }

    #[test]
    fn extensions_are_comma_separated() {
        let cli = parse(&["--extensions", "mkv,mp4", "x"]);
        assert_eq!(cli.extensions, vec!["mkv", "mp4"]);
    }

    #[test]
    fn parse_modes() {
        assert_eq!(parse(&["--only-file", "x"]).mode(), ParseMode::FileOnly);
        assert_eq!(parse(&["--only-dir", "x"]).mode(), ParseMode::DirOnly);
        assert!(Cli::try_parse_from(["plexname", "--only-file", "--only-dir", "x"]).is_err());
    }

    #[test]
    fn json_requires_parse_only() {
        assert!(Cli::try_parse_from(["plexname", "--json", "x"]).is_err());
        assert!(parse(&["--parse-only", "--json", "x"]).json);
    }
}
