use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ─── Language ────────────────────────────────────────────────────────────────

/// UI language. Arabic is rendered right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn direction(self) -> TextDirection {
        if self.is_rtl() { TextDirection::Rtl } else { TextDirection::Ltr }
    }

    /// The language the toggle button switches to.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Label shown on the language button: the name of the *other* language.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::En => "العربية",
            Locale::Ar => "English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

// ─── Theme ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon on the theme button, hinting at the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised preference value `{0}`")]
pub struct UnknownValue(pub String);

// ─── Aggregate views ─────────────────────────────────────────────────────────

/// The persisted pair of site preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct SitePreferences {
    pub language: Locale,
    pub theme: Theme,
}

impl SitePreferences {
    pub fn chrome(&self) -> PageChrome {
        PageChrome {
            dir: self.language.direction(),
            lang: self.language,
            data_theme: self.theme,
            language_toggle_label: self.language.toggle_label().to_string(),
            theme_icon: self.theme.icon().to_string(),
        }
    }
}

/// Document-level attributes and button states implied by the preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageChrome {
    /// `dir` attribute of the root element
    pub dir: TextDirection,
    /// `lang` attribute of the root element
    pub lang: Locale,
    /// `data-theme` attribute of the root element
    pub data_theme: Theme,
    pub language_toggle_label: String,
    pub theme_icon: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PreferencesResponse {
    pub preferences: SitePreferences,
    pub chrome: PageChrome,
}

impl From<SitePreferences> for PreferencesResponse {
    fn from(preferences: SitePreferences) -> Self {
        Self {
            chrome: preferences.chrome(),
            preferences,
        }
    }
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PreferencesUpdate {
    pub language: Option<Locale>,
    pub theme: Option<Theme>,
}

/// `?lang=` override accepted by the calculator endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocaleQuery {
    /// Render messages in this language instead of the stored preference
    pub lang: Option<Locale>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_chrome() {
        let chrome = SitePreferences::default().chrome();
        assert_eq!(chrome.dir, TextDirection::Ltr);
        assert_eq!(chrome.lang, Locale::En);
        assert_eq!(chrome.language_toggle_label, "العربية");
        assert_eq!(chrome.theme_icon, "moon");
    }

    #[test]
    fn test_arabic_dark_chrome() {
        let prefs = SitePreferences { language: Locale::Ar, theme: Theme::Dark };
        let chrome = prefs.chrome();
        assert_eq!(chrome.dir, TextDirection::Rtl);
        assert_eq!(chrome.data_theme, Theme::Dark);
        assert_eq!(chrome.language_toggle_label, "English");
        assert_eq!(chrome.theme_icon, "sun");
    }

    #[test]
    fn test_toggles_are_involutions() {
        for locale in [Locale::En, Locale::Ar] {
            assert_ne!(locale.toggled(), locale);
            assert_eq!(locale.toggled().toggled(), locale);
        }
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!("ar".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("fr".parse::<Locale>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_value(SitePreferences { language: Locale::Ar, theme: Theme::Light }).unwrap();
        assert_eq!(json, serde_json::json!({ "language": "ar", "theme": "light" }));
    }
}
