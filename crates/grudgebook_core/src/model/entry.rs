//! Entry record and date-key model.
//!
//! # Responsibility
//! - Define the journal entry wire shape (`id` + `text`).
//! - Enforce strict `YYYY-MM-DD` date-key parsing and calendar ordering.
//!
//! # Invariants
//! - A `DateKey` only ever holds a real calendar date.
//! - `DateKey` ordering is calendar ordering by construction.
//! - Entry ids are opaque strings minted once at creation time.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Zero-padded ISO shape required for bucket keys. Chrono alone would
/// accept unpadded variants like `2024-3-1`, which must stay invalid.
static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key regex"));

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Stable identifier for one journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = String;

/// Parse failure for date-key input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Input does not match zero-padded `YYYY-MM-DD`.
    MalformedShape(String),
    /// Input matches the shape but names no real calendar date.
    InvalidDate(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedShape(value) => {
                write!(f, "date key `{value}` is not in YYYY-MM-DD form")
            }
            Self::InvalidDate(value) => {
                write!(f, "date key `{value}` is not a valid calendar date")
            }
        }
    }
}

impl Error for DateKeyError {}

/// Calendar date identifying one bucket of entries.
///
/// Serializes as the ISO `YYYY-MM-DD` string because it is the JSON object
/// key of the persisted mapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Returns the key rendered for the grouped view header (`DD.MM.YYYY`).
    pub fn display_format(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    /// Returns the underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !DATE_KEY_RE.is_match(value) {
            return Err(DateKeyError::MalformedShape(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DateKeyError::InvalidDate(value.to_string()))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

/// One grievance record filed under a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Creation-time-derived id, unique across the whole journal.
    pub id: EntryId,
    /// Trimmed, non-blank body text.
    pub text: String,
}

impl Entry {
    /// Creates an entry from an already-minted id and already-trimmed text.
    pub fn new(id: impl Into<EntryId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
