use crate::date::parse_locale;
use chrono::Locale;
use log::Level;
use std::str::FromStr;
use thiserror::Error;

pub const DATE_LOCALE_VAR: &str = "TRAILBUDDY_DATE_LOCALE";
pub const LOG_LEVEL_VAR: &str = "TRAILBUDDY_LOG_LEVEL";
/// `<meta name=..>` carrying the date locale from the server to the browser.
pub const DATE_LOCALE_META: &str = "trailbuddy-date-locale";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown locale {0:?} in TRAILBUDDY_DATE_LOCALE")]
    UnknownLocale(String),
    #[error("invalid log level {0:?} in TRAILBUDDY_LOG_LEVEL, expected error, warn, info, debug or trace")]
    InvalidLogLevel(String),
}

/// Server-side settings, provided to every render through context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub date_locale: Locale,
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_locale: Locale::en_US,
            log_level: Level::Warn,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(DATE_LOCALE_VAR).filter(|v| !v.trim().is_empty()) {
            settings.date_locale = parse_locale(&raw).ok_or(ConfigError::UnknownLocale(raw))?;
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            settings.log_level =
                Level::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw))?;
        }

        Ok(settings)
    }

    /// Settings for a browser render, from the locale tag the server wrote
    /// into the page. Falls back to the default when missing or unknown.
    pub fn from_locale_tag(tag: Option<&str>) -> Self {
        let mut settings = Settings::default();
        match tag.map(|tag| (tag, parse_locale(tag))) {
            Some((_, Some(locale))) => settings.date_locale = locale,
            Some((tag, None)) => log::warn!("unknown date locale {:?} in page, using default", tag),
            None => {}
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Settings::from_vars(vars(&[])), Ok(Settings::default()));
    }

    #[test]
    fn reads_locale_and_level() {
        let settings = Settings::from_vars(vars(&[
            (DATE_LOCALE_VAR, "en-CA"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.date_locale, Locale::en_CA);
        assert_eq!(settings.log_level, Level::Debug);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings =
            Settings::from_vars(vars(&[(DATE_LOCALE_VAR, " "), (LOG_LEVEL_VAR, "")])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn locale_tag_round_trips_to_browser_settings() {
        let tag = crate::date::locale_tag(Locale::en_CA);
        assert_eq!(Settings::from_locale_tag(Some(&tag)).date_locale, Locale::en_CA);
        assert_eq!(Settings::from_locale_tag(Some("nope")), Settings::default());
        assert_eq!(Settings::from_locale_tag(None), Settings::default());
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            Settings::from_vars(vars(&[(DATE_LOCALE_VAR, "klingon")])),
            Err(ConfigError::UnknownLocale("klingon".to_string()))
        );
        assert_eq!(
            Settings::from_vars(vars(&[(LOG_LEVEL_VAR, "loud")])),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }
}
