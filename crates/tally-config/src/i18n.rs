//! Locale configuration for the request gate.
//!
//! # Environment Variables
//!
//! - `LOCALES`: comma separated supported locales (default: `en,sv`)
//! - `DEFAULT_LOCALE`: fallback locale (default: `en`)

use std::env;

use crate::parse_list;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct I18nConfig {
    pub locales: Vec<String>,
    pub default_locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string(), "sv".to_string()],
            default_locale: "en".to_string(),
        }
    }
}

impl I18nConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let locales = env::var("LOCALES")
            .map(|raw| parse_list(&raw))
            .ok()
            .filter(|locales| !locales.is_empty())
            .unwrap_or(defaults.locales);

        let default_locale = env::var("DEFAULT_LOCALE").unwrap_or(defaults.default_locale);

        Self::new(locales, default_locale)
    }

    /// Builds a config, making sure the default locale is one of the supported ones.
    pub fn new(mut locales: Vec<String>, default_locale: String) -> Self {
        if !locales.contains(&default_locale) {
            tracing::warn!(
                default_locale = %default_locale,
                "Default locale is not in LOCALES, adding it"
            );
            locales.push(default_locale.clone());
        }

        Self {
            locales,
            default_locale,
        }
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locales() {
        let config = I18nConfig::default();
        assert!(config.is_supported("en"));
        assert!(config.is_supported("sv"));
        assert!(!config.is_supported("de"));
        assert_eq!(config.default_locale, "en");
    }

    #[test]
    fn test_new_adds_missing_default() {
        let config = I18nConfig::new(vec!["sv".to_string()], "en".to_string());
        assert!(config.is_supported("en"));
        assert!(config.is_supported("sv"));
    }
}
