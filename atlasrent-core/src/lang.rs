//! The closed set of presentation languages.

use serde::{Deserialize, Serialize};

/// A supported language. French is the default for every fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ar")]
    Ar,
}

impl Lang {
    pub const ALL: [Self; 3] = [Self::Fr, Self::En, Self::Ar];

    /// Two-letter code used on the wire and in `localStorage`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a stored or user-supplied code. Unsupported codes are rejected
    /// so callers can keep their current language unchanged.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Arabic is the one right-to-left language in the set.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lang;

    #[test]
    fn parse_accepts_only_supported_codes() {
        assert_eq!(Lang::parse("fr"), Some(Lang::Fr));
        assert_eq!(Lang::parse("en"), Some(Lang::En));
        assert_eq!(Lang::parse("ar"), Some(Lang::Ar));
        assert_eq!(Lang::parse("de"), None);
        assert_eq!(Lang::parse("FR"), None);
        assert_eq!(Lang::parse(""), None);
    }

    #[test]
    fn arabic_is_the_only_rtl_language() {
        assert!(Lang::Ar.is_rtl());
        assert!(!Lang::Fr.is_rtl());
        assert!(!Lang::En.is_rtl());
    }

    #[test]
    fn default_language_is_french() {
        assert_eq!(Lang::default(), Lang::Fr);
    }
}
