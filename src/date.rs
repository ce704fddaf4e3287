//! The "last updated" line.

use chrono::{DateTime, Locale, TimeZone, Utc};
use std::fmt::Display;

/// Today's UTC date in `locale`'s preferred date representation.
///
/// UTC so server and browser renders agree regardless of either timezone.
pub fn current_date(locale: Locale) -> String {
    format_date(&Utc::now(), locale)
}

pub fn format_date<Tz>(now: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format_localized("%x", locale).to_string()
}

/// POSIX name of `locale`, e.g. `en_CA`. Inverse of [`parse_locale`].
pub fn locale_tag(locale: Locale) -> String {
    format!("{locale:?}")
}

/// Accepts both `en_CA` and `en-CA`.
pub fn parse_locale(raw: &str) -> Option<Locale> {
    let normalized = raw.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).ok()
}
