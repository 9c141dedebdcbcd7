//! Resolution and source extraction.

use crate::dictionary::{self, RESOLUTIONS, SOURCES};
use crate::lexer::Normalized;
use crate::model::ParseResult;

/// Extract resolution and source.
pub fn extract(input: &Normalized, result: &mut ParseResult) {
    if let Some(resolution) = dictionary::classify(&RESOLUTIONS, input) {
        result.resolution = resolution;
    }
    if let Some(source) = dictionary::classify(&SOURCES, input) {
        result.source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Resolution, Source};

    fn run(input: &str) -> ParseResult {
        let mut r = ParseResult::new();
        extract(&Normalized::new(input), &mut r);
        r
    }

    #[test]
    fn test_sources() {
        let cases = [
            ("Some Title HDTV", Source::Hdtv),
            ("Some Title PDTV", Source::Pdtv),
            ("Some Title SDTV", Source::Sdtv),
            ("Some Title TVRip", Source::Tv),
            ("Some Title BD", Source::BluRay),
            ("Some Title BR-Rip", Source::BluRay),
            ("Some Title Blu-Ray", Source::BluRay),
            ("Some Title DVD", Source::Dvd),
            ("Some.Title.webrip", Source::WebRip),
            ("Some.Title.WEB-DL.DL", Source::WebDl),
        ];
        for (input, expected) in cases {
            assert_eq!(run(input).source, expected, "input: {input}");
        }
    }

    #[test]
    fn test_resolution_and_source_together() {
        let r = run("Some Title.avi 720p webdl");
        assert_eq!(r.resolution, Resolution::_720p);
        assert_eq!(r.source, Source::WebDl);

        let r = run("1080p web dl of Some Title");
        assert_eq!(r.resolution, Resolution::_1080p);
        assert_eq!(r.source, Source::WebDl);
    }

    #[test]
    fn test_resolution_aliases() {
        assert_eq!(run("Old.Show.848x480.XviD").resolution, Resolution::_480p);
        assert_eq!(run("Movie.2160p.UHD").resolution, Resolution::_2160p);
    }

    #[test]
    fn test_nothing_detected() {
        let r = run("Just A Title");
        assert_eq!(r.resolution, Resolution::None);
        assert_eq!(r.source, Source::None);
    }
}
