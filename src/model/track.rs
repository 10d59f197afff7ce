//! Tracks and the badges scoped to them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named grouping of lesson units.
///
/// Declaration order is the display order of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    JavaScript,
}

impl Track {
    /// Every track, in curriculum order.
    pub const ALL: [Track; 3] = [Track::Html, Track::Css, Track::JavaScript];

    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
        }
    }

    /// The badge awarded once every unit of this track is complete.
    pub fn badge(self) -> Badge {
        match self {
            Self::Html => Badge::HtmlNovice,
            Self::Css => Badge::CssStylist,
            Self::JavaScript => Badge::JavaScriptNinja,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A track-completion badge. Each is held at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "HTML Novice")]
    HtmlNovice,
    #[serde(rename = "CSS Stylist")]
    CssStylist,
    #[serde(rename = "JavaScript Ninja")]
    JavaScriptNinja,
}

impl Badge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HtmlNovice => "HTML Novice",
            Self::CssStylist => "CSS Stylist",
            Self::JavaScriptNinja => "JavaScript Ninja",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Badge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTML Novice" => Ok(Self::HtmlNovice),
            "CSS Stylist" => Ok(Self::CssStylist),
            "JavaScript Ninja" => Ok(Self::JavaScriptNinja),
            other => Err(format!("unknown badge: {other}")),
        }
    }
}
