#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Az,
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Az, Language::En, Language::Ru];

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "az" | "AZ" => Some(Language::Az),
            "en" | "EN" => Some(Language::En),
            "ru" | "RU" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Stored preference, falling back to Azerbaijani for missing or unknown codes.
    #[inline]
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(Self::from_code).unwrap_or_default()
    }

    #[inline]
    pub fn code(self) -> &'static str {
        match self {
            Language::Az => "az",
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Attribute holding this language's text, e.g. `data-en`.
    #[inline]
    pub fn data_attribute(self) -> &'static str {
        match self {
            Language::Az => "data-az",
            Language::En => "data-en",
            Language::Ru => "data-ru",
        }
    }
}

/// Text from a `data-<lang>` attribute, or `None` to leave the element untouched.
#[inline]
pub fn translation(attr_value: Option<String>) -> Option<String> {
    attr_value.filter(|s| !s.is_empty())
}
