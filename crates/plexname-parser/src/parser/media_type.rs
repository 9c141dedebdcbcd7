//! Media type classification.

use crate::dictionary::MEDIA_TYPE_HINTS;
use crate::lexer::Normalized;
use crate::model::{MediaType, ParseResult};

/// Find the first path segment token naming a media type.
pub fn hint(path: &Normalized) -> Option<MediaType> {
    path.words().find_map(|t| MEDIA_TYPE_HINTS.get(t).copied())
}

/// Finalize the media type of an already merged result.
///
/// An explicit value (from overrides) is kept. Otherwise the target path is
/// consulted before the source path, and without a hint a result with a
/// special marker or both season and episode is TV; everything else is a
/// movie.
pub fn classify(result: &mut ParseResult, target: Option<&Normalized>, source: &Normalized) {
    if result.media_type != MediaType::Unknown {
        return;
    }
    let hinted = target.and_then(hint).or_else(|| hint(source));
    result.media_type = hinted.unwrap_or_else(|| {
        if result.special.is_true() || (result.season > 0 && result.episode1 > 0) {
            MediaType::Tv
        } else {
            MediaType::Movie
        }
    });
}
