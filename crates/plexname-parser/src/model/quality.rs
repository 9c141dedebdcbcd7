//! Quality-related enums for video resolution and source.

use super::ParseError;
use crate::dictionary;
use crate::lexer::clean;

/// Video resolution of the release.
///
/// Variants are ordered from lowest to highest; `None` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// No resolution detected
    #[default]
    None,
    /// 360p (640x360)
    _360p,
    /// 480p SD (640x480 or 848x480)
    _480p,
    /// 540p (qHD)
    _540p,
    /// 576p PAL SD
    _576p,
    /// 720p HD
    _720p,
    /// 1080p Full HD
    _1080p,
    /// 2160p Ultra HD (4K)
    _2160p,
}

impl Resolution {
    /// Every variant, in ascending order.
    pub const ALL: [Resolution; 8] = [
        Resolution::None,
        Resolution::_360p,
        Resolution::_480p,
        Resolution::_540p,
        Resolution::_576p,
        Resolution::_720p,
        Resolution::_1080p,
        Resolution::_2160p,
    ];

    /// Whether a resolution was detected.
    pub fn is_set(self) -> bool {
        self != Resolution::None
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::None => write!(f, "--"),
            Resolution::_360p => write!(f, "360p"),
            Resolution::_480p => write!(f, "480p"),
            Resolution::_540p => write!(f, "540p"),
            Resolution::_576p => write!(f, "576p"),
            Resolution::_720p => write!(f, "720p"),
            Resolution::_1080p => write!(f, "1080p"),
            Resolution::_2160p => write!(f, "2160p"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = clean(s);
        if key.is_empty() {
            return Ok(Resolution::None);
        }
        if let Some(res) = dictionary::RESOLUTIONS.get(key.as_str()) {
            return Ok(*res);
        }
        match key.as_str() {
            "4k" | "uhd" => Ok(Resolution::_2160p),
            _ => Err(ParseError::invalid("resolution", s)),
        }
    }
}

/// Source/origin of the media release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// No source detected
    #[default]
    None,
    /// Blu-ray or HD-DVD disc rip
    BluRay,
    /// DVD rip
    Dvd,
    /// TV rip (generic)
    Tv,
    /// HDTV broadcast capture
    Hdtv,
    /// Standard definition TV broadcast
    Sdtv,
    /// Pure digital source TV
    Pdtv,
    /// Web rip (capture from a streaming service)
    WebRip,
    /// Web download (untouched stream from a streaming service)
    WebDl,
    /// Digital satellite rip
    Dsr,
}

impl Source {
    /// Every variant, `None` first.
    pub const ALL: [Source; 10] = [
        Source::None,
        Source::BluRay,
        Source::Dvd,
        Source::Tv,
        Source::Hdtv,
        Source::Sdtv,
        Source::Pdtv,
        Source::WebRip,
        Source::WebDl,
        Source::Dsr,
    ];

    /// Whether a source was detected.
    pub fn is_set(self) -> bool {
        self != Source::None
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::None => write!(f, "--"),
            Source::BluRay => write!(f, "Blu-ray"),
            Source::Dvd => write!(f, "DVD"),
            Source::Tv => write!(f, "TV"),
            Source::Hdtv => write!(f, "HDTV"),
            Source::Sdtv => write!(f, "SDTV"),
            Source::Pdtv => write!(f, "PDTV"),
            Source::WebRip => write!(f, "WEB-Rip"),
            Source::WebDl => write!(f, "WEB-DL"),
            Source::Dsr => write!(f, "DSR"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = clean(s);
        if key.is_empty() {
            return Ok(Source::None);
        }
        if let Some(src) = dictionary::SOURCES.get(key.as_str()) {
            return Ok(*src);
        }
        Source::ALL
            .into_iter()
            .skip(1)
            .find(|src| clean(&src.to_string()) == key)
            .ok_or_else(|| ParseError::invalid("source", s))
    }
}
