//! Visual theme of a Valentine page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Theme selected by the link creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Classic,
    Cute,
    Elegant,
}

/// Returned when a string names no known theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Cute, Theme::Elegant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Cute => "cute",
            Theme::Elegant => "elegant",
        }
    }

    /// Display name on the creation form.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Cute => "Cute",
            Theme::Elegant => "Elegant",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Classic => "Timeless red & white",
            Theme::Cute => "Playful pink vibes",
            Theme::Elegant => "Dark and gold",
        }
    }

    /// Comma-separated list of accepted theme names, for error messages.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Theme::Classic),
            "cute" => Ok(Theme::Cute),
            "elegant" => Ok(Theme::Elegant),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_themes() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Cute".parse::<Theme>().is_err());
    }

    #[test]
    fn test_parse_unknown_theme() {
        let err = "gothic".parse::<Theme>().unwrap_err();
        assert_eq!(err, UnknownTheme("gothic".to_string()));
    }

    #[test]
    fn test_names() {
        assert_eq!(Theme::names(), "classic, cute, elegant");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Theme::Elegant).unwrap();
        assert_eq!(json, "\"elegant\"");
    }
}
