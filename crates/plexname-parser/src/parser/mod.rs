//! Classifier pipeline for release names.
//!
//! Every classifier reads the same [`Normalized`] view of the selected path
//! segments and writes its own fields of the [`ParseResult`]. Overrides are
//! merged last and the media type is finalized on the merged result.

mod episode;
mod flags;
mod language;
mod media_type;
mod quality;
mod title;

use crate::config::{ParseMode, ParserConfig};
use crate::lexer::Normalized;
use crate::model::ParseResult;

/// Parse a release name with the default configuration.
pub fn parse(input: &str) -> ParseResult {
    parse_with_config(input, &ParserConfig::default())
}

/// Parse the release name(s) in `source` according to `config`.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> ParseResult {
    let input = Normalized::new(&select_segments(source, config.mode));
    let mut result = ParseResult::new();

    title::extract(&input, &mut result);
    episode::extract_year(&input, &mut result);
    quality::extract(&input, &mut result);
    language::extract(&input, &mut result);
    flags::extract(&input, &mut result);
    episode::extract(&input, &mut result);
    result.apply_plausibility();

    result.merge_in(&config.overrides);
    if !config.overrides.special.is_set() {
        result.apply_plausibility();
    }

    let target = config.target_path.as_deref().map(Normalized::new);
    media_type::classify(&mut result, target.as_ref(), &Normalized::new(source));

    result
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Split a path into its parent directory name and file name.
fn split_source(source: &str) -> (&str, &str) {
    let (head, file) = match source.rfind(is_separator) {
        Some(idx) => (&source[..idx], &source[idx + 1..]),
        None => ("", source),
    };
    let head = head.trim_end_matches(is_separator);
    let dir = match head.rfind(is_separator) {
        Some(idx) => &head[idx + 1..],
        None => head,
    };
    (dir, file)
}

/// Pick the text to classify for the given mode.
fn select_segments(source: &str, mode: ParseMode) -> String {
    let (dir, file) = split_source(source);
    match mode {
        ParseMode::FileOnly => file.to_string(),
        ParseMode::DirOnly if !dir.is_empty() => dir.to_string(),
        ParseMode::DirOnly => file.to_string(),
        ParseMode::Both if dir.is_empty() => file.to_string(),
        ParseMode::Both => format!("{dir}/{file}"),
    }
}
