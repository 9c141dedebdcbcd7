//! Year, season and episode extraction.
//!
//! Per-token markers (`s01`, `e05`, `e01e02`, `s01e05`, `s01e01e02`) are
//! recognized with winnow combinators and merged into the running result
//! left to right, so the rightmost marker wins. When that leaves the season
//! or the first episode unset, a family of whole-string fallback patterns is
//! tried and the best scoring candidate supplies season and episodes.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::lexer::Normalized;
use crate::model::ParseResult;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<year>(?:19|20)\d{2})$").expect("valid year regex"));

/// Whole-string patterns for layouts without per-token markers, in priority
/// order. Each must capture `season` and `episode1` (optionally `episode2`).
static FALLBACKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "show title s01/1 - title.mkv"
        r".*\bs(?P<season>\d{1,2}).*/(?P<episode1>\d{1,4}).+",
        // "season 2/05 - title.mkv"
        r".*season\W?(?P<season>\d{1,2}).*/(?P<episode1>\d{1,4}).+",
        // "show 2x05 title.mkv"
        r"(?:^|\W)(?P<season>\d{1,2})x(?P<episode1>\d{2,3})(?:\W|$)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid fallback regex"))
    .collect()
});

/// A season/episode marker occupying a whole token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Season(u16),
    Episode(u16, Option<u16>),
    SeasonEpisode(u16, u16, Option<u16>),
}

impl Marker {
    fn to_result(self) -> ParseResult {
        let (season, episode1, episode2) = match self {
            Marker::Season(s) => (s, 0, None),
            Marker::Episode(e1, e2) => (0, e1, e2),
            Marker::SeasonEpisode(s, e1, e2) => (s, e1, e2),
        };
        ParseResult {
            season,
            episode1,
            episode2: episode2.unwrap_or(0),
            ..Default::default()
        }
    }
}

fn number<'i>(width: RangeInclusive<usize>) -> impl Parser<&'i str, u16, ContextError> {
    take_while(width, |c: char| c.is_ascii_digit()).try_map(|digits: &str| digits.parse::<u16>())
}

fn episodes(input: &mut &str) -> PResult<(u16, Option<u16>)> {
    (
        preceded('e', number(2..=4)),
        opt(preceded('e', number(2..=4))),
    )
        .parse_next(input)
}

fn season_episode(input: &mut &str) -> PResult<Marker> {
    terminated((preceded('s', number(1..=2)), episodes), eof)
        .map(|(s, (e1, e2))| Marker::SeasonEpisode(s, e1, e2))
        .parse_next(input)
}

fn episode_only(input: &mut &str) -> PResult<Marker> {
    terminated(episodes, eof)
        .map(|(e1, e2)| Marker::Episode(e1, e2))
        .parse_next(input)
}

fn season_only(input: &mut &str) -> PResult<Marker> {
    terminated(preceded('s', number(1..=2)), eof)
        .map(Marker::Season)
        .parse_next(input)
}

/// Recognize a token that is entirely a season and/or episode marker.
pub(crate) fn parse_marker(token: &str) -> Option<Marker> {
    alt((season_episode, episode_only, season_only))
        .parse(token)
        .ok()
}

/// Parse a token that is a plausible release year.
pub(crate) fn parse_year(token: &str) -> Option<u16> {
    YEAR.captures(token)?.name("year")?.as_str().parse().ok()
}

/// `2x05` style season/episode token.
fn cross_notation(input: &mut &str) -> PResult<(u16, u16)> {
    terminated((number(1..=2), preceded('x', number(2..=3))), eof).parse_next(input)
}

/// Whether a token ends the title.
pub(crate) fn is_title_boundary(token: &str) -> bool {
    parse_year(token).is_some()
        || parse_marker(token).is_some()
        || cross_notation.parse(token).is_ok()
}

/// Extract the release year; the last year-like token wins.
pub fn extract_year(input: &Normalized, result: &mut ParseResult) {
    if let Some(year) = input.words().filter_map(parse_year).last() {
        result.year = year;
    }
}

/// Extract season and episode numbers.
pub fn extract(input: &Normalized, result: &mut ParseResult) {
    for marker in input.words().filter_map(parse_marker) {
        let found = marker.to_result();
        result.merge_in(&found);
        // Episodes travel as a pair: a single episode replaces an earlier double.
        if found.episode1 > 0 {
            result.episode2 = found.episode2;
        }
    }

    if result.season == 0 || result.episode1 == 0 {
        let best = best_fallback(input.name());
        if best.score() > 0 {
            result.season = best.season;
            result.episode1 = best.episode1;
            result.episode2 = best.episode2;
        }
    }
}

/// Try every fallback pattern and keep the first candidate with the highest
/// score. An empty result means nothing matched.
fn best_fallback(name: &str) -> ParseResult {
    let mut best = ParseResult::new();
    for candidate in FALLBACKS.iter().map(|rx| from_captures(rx, name)) {
        if candidate.score() > best.score() {
            best = candidate;
        }
    }
    best
}

fn from_captures(rx: &Regex, name: &str) -> ParseResult {
    let Some(caps) = rx.captures(name) else {
        return ParseResult::new();
    };
    let field = |group: &str| -> u16 {
        caps.name(group)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    ParseResult {
        season: field("season"),
        episode1: field("episode1"),
        episode2: field("episode2"),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> ParseResult {
        let n = Normalized::new(input);
        let mut r = ParseResult::new();
        extract_year(&n, &mut r);
        extract(&n, &mut r);
        r
    }

    #[test]
    fn test_markers() {
        assert_eq!(parse_marker("s04"), Some(Marker::Season(4)));
        assert_eq!(parse_marker("e01"), Some(Marker::Episode(1, None)));
        assert_eq!(parse_marker("e01e02"), Some(Marker::Episode(1, Some(2))));
        assert_eq!(
            parse_marker("s04e01"),
            Some(Marker::SeasonEpisode(4, 1, None))
        );
        assert_eq!(
            parse_marker("s01e03e04"),
            Some(Marker::SeasonEpisode(1, 3, Some(4)))
        );
    }

    #[test]
    fn test_marker_rejects_near_misses() {
        assert_eq!(parse_marker("s123"), None);
        assert_eq!(parse_marker("e1"), None);
        assert_eq!(parse_marker("e12345"), None);
        assert_eq!(parse_marker("s01e02x"), None);
        assert_eq!(parse_marker("series"), None);
        assert_eq!(parse_marker("special"), None);
    }

    #[test]
    fn test_year() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year("2012"), Some(2012));
        assert_eq!(parse_year("1899"), None);
        assert_eq!(parse_year("20123"), None);
        assert_eq!(run("Movie.1984.Remake.2012").year, 2012);
    }

    #[test]
    fn test_season_episode_token() {
        let r = run("Some.Title.S04E01");
        assert_eq!((r.season, r.episode1, r.episode2), (4, 1, 0));
    }

    #[test]
    fn test_dual_episode_token() {
        let r = run("Some.Title.E01E02");
        assert_eq!((r.episode1, r.episode2), (1, 2));
        let r = run("Title S01E03E04.mkv");
        assert_eq!((r.season, r.episode1, r.episode2), (1, 3, 4));
    }

    #[test]
    fn test_separate_season_and_episode_tokens() {
        let r = run("A.Very.Long.Show.Name.2000.German.S01.DL.1080p.BluRay/Title.E06.mkv");
        assert_eq!((r.season, r.episode1), (1, 6));
        assert_eq!(r.year, 2000);
    }

    #[test]
    fn test_rightmost_marker_wins() {
        let r = run("Show.S01E01/Show.S02E05.mkv");
        assert_eq!((r.season, r.episode1), (2, 5));
    }

    #[test]
    fn test_fallback_season_folder_bare_episode() {
        let r = run("Awesome Show S01/1 - Title.mkv");
        assert_eq!((r.season, r.episode1, r.episode2), (1, 1, 0));
    }

    #[test]
    fn test_single_episode_replaces_double() {
        let r = run("Show.S01E01E02/Show.S01E05.mkv");
        assert_eq!((r.season, r.episode1, r.episode2), (1, 5, 0));
        let r = run("Show.S01E05/Show.S01E01E02.mkv");
        assert_eq!((r.season, r.episode1, r.episode2), (1, 1, 2));
    }

    #[test]
    fn test_season_folder_needs_word_start() {
        let r = run("Movie.Title.1999.German.DTS5.1/1999-movie.mkv");
        assert_eq!((r.season, r.episode1), (0, 0));
        let r = run("Show.S01/1 - Title.mkv");
        assert_eq!((r.season, r.episode1), (1, 1));
    }

    #[test]
    fn test_cross_notation_is_a_title_boundary() {
        assert!(is_title_boundary("2x05"));
        assert!(is_title_boundary("10x101"));
        assert!(!is_title_boundary("1920x1080"));
        assert!(!is_title_boundary("x05"));
    }

    #[test]
    fn test_fallback_season_word_folder() {
        let r = run("Season 2/05 - Title.mkv");
        assert_eq!((r.season, r.episode1), (2, 5));
    }

    #[test]
    fn test_fallback_cross_notation() {
        let r = run("Some.Show.2x05.HDTV");
        assert_eq!((r.season, r.episode1), (2, 5));
        let r = run("Some.Movie.1920x1080");
        assert_eq!((r.season, r.episode1), (0, 0));
    }

    #[test]
    fn test_fallback_not_used_when_complete() {
        let r = run("Show S01/Show.S01E07.mkv");
        assert_eq!((r.season, r.episode1), (1, 7));
    }

    #[test]
    fn test_no_markers() {
        let r = run("Some.Title.2012.Remux");
        assert_eq!((r.season, r.episode1, r.episode2), (0, 0, 0));
    }
}
