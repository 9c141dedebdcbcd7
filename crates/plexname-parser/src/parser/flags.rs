//! Boolean release attributes: proper, remux, dual-language and specials.

use crate::lexer::Normalized;
use crate::model::{ParseResult, TriState};

const PROPER_MARKERS: [&str; 3] = ["repack", "rerip", "proper"];
const SPECIAL_MARKERS: [&str; 4] = ["special", "specials", "extra", "extras"];

pub fn extract(input: &Normalized, result: &mut ParseResult) {
    if is_proper(input) {
        result.proper = TriState::True;
    }
    if is_remux(input) {
        result.remux = TriState::True;
    }
    if is_dual_language(input) {
        result.dual_language = TriState::True;
    }
    if is_special(input) {
        result.special = TriState::True;
    }
}

fn is_proper(input: &Normalized) -> bool {
    PROPER_MARKERS
        .iter()
        .any(|m| input.has_token(m) || input.joined().contains(m))
}

fn is_remux(input: &Normalized) -> bool {
    input.has_token("remux") || input.joined().contains("remux")
}

/// `DL` marks a dual-language release, unless the only `dl` in the name is
/// the one inside `WEB-DL`.
fn is_dual_language(input: &Normalized) -> bool {
    if !input.has_token("dl") {
        return false;
    }
    let joined = input.joined();
    let count = joined.matches("dl").count();
    let web_dl = joined.contains("webdl");
    (!web_dl && count == 1) || count > 1
}

fn is_special(input: &Normalized) -> bool {
    SPECIAL_MARKERS.iter().any(|m| input.has_token(m)) || input.joined().contains("s00")
}
