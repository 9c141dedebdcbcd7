//! Closed vocabularies for the dictionary classifiers.
//!
//! Keys are in joined form: lower-case, separators removed.

use phf::phf_map;

use crate::lexer::Normalized;
use crate::model::{Language, MediaType, Resolution, Source};

/// Keys shorter than this are only matched as whole tokens.
pub const MIN_SUBSTRING_KEY_LEN: usize = 5;

pub static RESOLUTIONS: phf::Map<&'static str, Resolution> = phf_map! {
    "360p" => Resolution::_360p,
    "640x480" => Resolution::_480p,
    "848x480" => Resolution::_480p,
    "480p" => Resolution::_480p,
    "540p" => Resolution::_540p,
    "576p" => Resolution::_576p,
    "720p" => Resolution::_720p,
    "1080p" => Resolution::_1080p,
    "2160p" => Resolution::_2160p,
};

pub static SOURCES: phf::Map<&'static str, Source> = phf_map! {
    "bluray" => Source::BluRay,
    "hddvd" => Source::BluRay,
    "bd" => Source::BluRay,
    "bdrip" => Source::BluRay,
    "brrip" => Source::BluRay,
    "webrip" => Source::WebRip,
    "webdl" => Source::WebDl,
    "ituneshd" => Source::WebDl,
    "webhd" => Source::WebDl,
    "webx264" => Source::WebDl,
    "webx265" => Source::WebDl,
    "webh264" => Source::WebDl,
    "webh265" => Source::WebDl,
    "tvrip" => Source::Tv,
    "hdtv" => Source::Hdtv,
    "pdtv" => Source::Pdtv,
    "sdtv" => Source::Sdtv,
    "wsdsr" => Source::Dsr,
    "dsr" => Source::Dsr,
    "dvd" => Source::Dvd,
    "dvdrip" => Source::Dvd,
    "ntsc" => Source::Dvd,
    "pal" => Source::Dvd,
    "xvidvd" => Source::Dvd,
};

pub static LANGUAGES: phf::Map<&'static str, Language> = phf_map! {
    "english" => Language::English,
    "fr" => Language::French,
    "vostfr" => Language::French,
    "french" => Language::French,
    "spanish" => Language::Spanish,
    "videomann" => Language::German,
    "german" => Language::German,
    "ita" => Language::Italian,
    "italian" => Language::Italian,
    "danish" => Language::Danish,
    "nl" => Language::Dutch,
    "dutch" => Language::Dutch,
    "japanese" => Language::Japanese,
    "cantonese" => Language::Cantonese,
    "mandarin" => Language::Mandarin,
    "rus" => Language::Russian,
    "brus" => Language::Russian,
    "russian" => Language::Russian,
    "polish" => Language::Polish,
    "vietnamese" => Language::Vietnamese,
    "swedish" => Language::Swedish,
    "norwegian" => Language::Norwegian,
    "finnish" => Language::Finnish,
    "turkish" => Language::Turkish,
    "portuguese" => Language::Portuguese,
    "flemish" => Language::Flemish,
    "greek" => Language::Greek,
    "korean" => Language::Korean,
    "hun" => Language::Hungarian,
    "hundub" => Language::Hungarian,
    "hungarian" => Language::Hungarian,
};

/// Path segment names that reveal the media type of everything below them.
pub static MEDIA_TYPE_HINTS: phf::Map<&'static str, MediaType> = phf_map! {
    "tv" => MediaType::Tv,
    "series" => MediaType::Tv,
    "shows" => MediaType::Tv,
    "movie" => MediaType::Movie,
    "movies" => MediaType::Movie,
    "filme" => MediaType::Movie,
};

/// Look `input` up in `map` with an exact-token pass followed by a substring
/// pass over the joined form.
///
/// In the token pass the last matching token wins. In the substring pass the
/// longest contained key wins, ties broken by the lexicographically smallest
/// key. A substring hit overrides a token hit.
pub fn classify<V: Copy>(map: &phf::Map<&'static str, V>, input: &Normalized) -> Option<V> {
    let by_token = input.words().filter_map(|t| map.get(t).copied()).last();
    substring_match(map, input.joined()).or(by_token)
}

/// Find the best dictionary key contained in `joined`.
pub fn substring_match<V: Copy>(map: &phf::Map<&'static str, V>, joined: &str) -> Option<V> {
    map.entries()
        .filter(|(key, _)| key.len() >= MIN_SUBSTRING_KEY_LEN && joined.contains(**key))
        .min_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
        .map(|(_, value)| *value)
}
