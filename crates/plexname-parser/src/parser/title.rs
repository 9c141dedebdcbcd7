//! Title extraction.

use super::episode::is_title_boundary;
use crate::lexer::Normalized;
use crate::model::ParseResult;

/// The title is every token before the first year, season or episode marker.
///
/// A `season` word followed by a number (`Season 2/05.mkv`) is a marker too.
pub fn extract(input: &Normalized, result: &mut ParseResult) {
    let words: Vec<&str> = input.words().collect();
    let end = words
        .iter()
        .enumerate()
        .position(|(i, t)| is_title_boundary(t) || is_season_word(t, words.get(i + 1)))
        .unwrap_or(words.len());
    result.title = words[..end].join(" ");
}

fn is_season_word(token: &str, next: Option<&&str>) -> bool {
    token == "season" && next.is_some_and(|n| n.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(input: &str) -> String {
        let mut r = ParseResult::new();
        extract(&Normalized::new(input), &mut r);
        r.title
    }

    #[test]
    fn test_stops_at_year() {
        assert_eq!(title("Some.Title.2012.Remux"), "some title");
    }

    #[test]
    fn test_stops_at_markers() {
        assert_eq!(title("Some.Title.S04E01"), "some title");
        assert_eq!(title("Show Name S01.German"), "show name");
        assert_eq!(title("Show.Name.E05"), "show name");
    }

    #[test]
    fn test_stops_at_fallback_markers() {
        assert_eq!(title("Title.2x05.HDTV"), "title");
        assert_eq!(title("Some Show Season 1/01.mkv"), "some show");
        assert_eq!(title("Season 1/01.mkv"), "");
        assert_eq!(title("Season.Finale.mkv"), "season finale mkv");
    }

    #[test]
    fn test_no_boundary_keeps_everything() {
        assert_eq!(title("Some Title repack"), "some title repack");
    }

    #[test]
    fn test_leading_marker_gives_empty_title() {
        assert_eq!(title("S01E01.Pilot"), "");
    }
}
