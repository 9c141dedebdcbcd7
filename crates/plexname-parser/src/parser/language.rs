//! Language extraction.

use crate::dictionary::{self, LANGUAGES};
use crate::lexer::Normalized;
use crate::model::ParseResult;

pub fn extract(input: &Normalized, result: &mut ParseResult) {
    if let Some(language) = dictionary::classify(&LANGUAGES, input) {
        result.language = language;
    }
}
