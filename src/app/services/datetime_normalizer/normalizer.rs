//! Ordered-format timestamp normalizer
//!
//! Formats are tried strictly in configuration order and the first match
//! wins, so an ambiguous string always resolves the same way.

use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use crate::config::validate_timestamp_pattern;
use crate::constants::DEFAULT_TIMESTAMP_FORMATS;
use crate::{Error, Result};

/// One accepted timestamp layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    pattern: String,
    /// False for date-only patterns, which parse to midnight
    has_time: bool,
}

impl TimestampFormat {
    /// Validate a chrono strftime pattern
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        validate_timestamp_pattern(&pattern)?;
        let has_time = pattern_has_time(&pattern);

        Ok(Self { pattern, has_time })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// Parse `value` with this layout only
    pub fn parse(&self, value: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
        if self.has_time {
            NaiveDateTime::parse_from_str(value, &self.pattern)
        } else {
            NaiveDate::parse_from_str(value, &self.pattern)
                .map(|date| date.and_time(NaiveTime::MIN))
        }
    }

    /// Render `value` with this layout
    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.pattern).to_string()
    }
}

/// Converts raw timestamp strings into comparable date-times
#[derive(Debug, Clone)]
pub struct DateTimeNormalizer {
    formats: Vec<TimestampFormat>,
}

impl DateTimeNormalizer {
    /// Build a normalizer from patterns in priority order
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let formats = patterns
            .into_iter()
            .map(TimestampFormat::new)
            .collect::<Result<Vec<_>>>()?;

        if formats.is_empty() {
            return Err(Error::configuration(
                "At least one timestamp format is required",
            ));
        }

        Ok(Self { formats })
    }

    /// Normalizer over the built-in format list
    pub fn with_default_formats() -> Self {
        Self {
            formats: DEFAULT_TIMESTAMP_FORMATS
                .iter()
                .map(|pattern| TimestampFormat {
                    pattern: pattern.to_string(),
                    has_time: pattern_has_time(pattern),
                })
                .collect(),
        }
    }

    pub fn formats(&self) -> &[TimestampFormat] {
        &self.formats
    }

    /// Normalize an optional raw value
    ///
    /// Absent or blank input is `Ok(None)`, not an error; callers decide
    /// whether a missing timestamp disqualifies the record.
    pub fn normalize(&self, raw: Option<&str>) -> Result<Option<NaiveDateTime>> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => self.parse(value).map(Some),
            None => Ok(None),
        }
    }

    /// Parse a non-empty value with the first matching format
    pub fn parse(&self, raw: &str) -> Result<NaiveDateTime> {
        let cleaned = collapse_whitespace(raw);
        if cleaned.is_empty() {
            return Err(Error::timestamp_parsing(raw, "value is empty"));
        }

        self.parse_cleaned(&cleaned).map(|(_, parsed)| parsed)
    }

    /// Pattern that `raw` would be parsed with, if any
    pub fn matching_format(&self, raw: &str) -> Option<&str> {
        self.parse_cleaned(&collapse_whitespace(raw))
            .ok()
            .map(|(format, _)| format.pattern())
    }

    /// Parse with one explicit pattern, bypassing the ordered list
    pub fn parse_with(pattern: &str, raw: &str) -> Result<NaiveDateTime> {
        let format = TimestampFormat::new(pattern)?;
        format
            .parse(&collapse_whitespace(raw))
            .map_err(|e| Error::timestamp_parsing(raw, format!("'{}': {}", pattern, e)))
    }

    fn parse_cleaned(&self, cleaned: &str) -> Result<(&TimestampFormat, NaiveDateTime)> {
        for format in &self.formats {
            match format.parse(cleaned) {
                Ok(parsed) => {
                    trace!("'{}' matched format '{}'", cleaned, format.pattern());
                    return Ok((format, parsed));
                }
                Err(e) => trace!("'{}' rejected by '{}': {}", cleaned, format.pattern(), e),
            }
        }

        Err(Error::timestamp_parsing(
            cleaned,
            format!(
                "no accepted format matched (tried {})",
                self.formats
                    .iter()
                    .map(|f| format!("'{}'", f.pattern()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        ))
    }
}

impl Default for DateTimeNormalizer {
    fn default() -> Self {
        Self::with_default_formats()
    }
}

/// Trim and reduce inner whitespace runs to one space
fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn pattern_has_time(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour | Numeric::Hour12 | Numeric::Minute | Numeric::Second
                    | Numeric::Timestamp,
                _
            ) | Item::Fixed(
                Fixed::LowerAmPm | Fixed::UpperAmPm | Fixed::RFC2822 | Fixed::RFC3339
            )
        )
    })
}
