// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Article catalog: the JSON document the index is built from.
//!
//! On disk the catalog is an object mapping category names to arrays of
//! positional records:
//!
//! ```json
//! { "tech": [["Title", "slug", "", "2024-01-05T10:00:00Z", "Summary"]] }
//! ```
//!
//! Records are decoded into [`ArticleRecord`] so nothing downstream indexes
//! into raw arrays.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};

const TITLE: usize = 0;
const SLUG: usize = 1;
const RESERVED: usize = 2;
const PUBLISHED: usize = 3;
const SUMMARY: usize = 4;

/// Minimum number of positional fields a record needs to be listed.
pub const REQUIRED_FIELDS: usize = 5;

/// Shown instead of a date when a record has no timestamp.
pub const MISSING_DATE: &str = "N/A";

/// Path reported in parse errors for catalogs decoded from memory.
pub const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog {0:?} not found")]
    NotFound(PathBuf),

    #[error("cannot read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog schema violation in {category:?} entry {index}: {reason}")]
    Schema {
        /// Empty for violations at the top level.
        category: String,
        index: usize,
        reason: String,
    },
}

impl CatalogError {
    fn schema(category: &str, index: usize, reason: impl Into<String>) -> Self {
        CatalogError::Schema {
            category: category.to_string(),
            index,
            reason: reason.into(),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    /// Third positional field; carried along but never interpreted.
    pub reserved: Option<Value>,
    /// Raw ISO-8601 timestamp as stored in the catalog.
    pub published: Option<String>,
    pub summary: Option<String>,
    /// Number of positional fields present in the source array.
    pub field_count: usize,
}

/// A named group of records, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub records: Vec<ArticleRecord>,
}

/// The whole catalog. Category order is the key order of the source object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Read and decode the catalog at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::decode(&text, path)?;

        let categories = catalog.categories.len();
        diagnostics::debug!("decoded catalog with {categories} categories", categories: categories);
        Ok(catalog)
    }

    /// Decode catalog JSON held in memory. Parse errors name `<inline>` as the path.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Self::decode(text, Path::new(INLINE_SOURCE))
    }

    fn decode(text: &str, path: &Path) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(value)
    }

    /// Decode an already-parsed JSON document.
    ///
    /// Categories whose value is not a non-empty array are skipped.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Object(map) = value else {
            return Err(CatalogError::schema("", 0, "top level is not a JSON object"));
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, entries) in map {
            let entries = match entries {
                Value::Array(entries) if !entries.is_empty() => entries,
                _ => {
                    diagnostics::debug!("skipping category {name}: not a non-empty array", name: name.as_str());
                    continue;
                }
            };

            let records = entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| ArticleRecord::from_value(&name, index, entry))
                .collect::<Result<Vec<_>, _>>()?;

            categories.push(Category { name, records });
        }

        Ok(Catalog { categories })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl ArticleRecord {
    fn from_value(category: &str, index: usize, value: Value) -> Result<Self, CatalogError> {
        let Value::Array(fields) = value else {
            return Err(CatalogError::schema(category, index, "entry is not an array"));
        };

        let text = |pos: usize, what: &str| -> Result<Option<String>, CatalogError> {
            match fields.get(pos) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(CatalogError::schema(
                    category,
                    index,
                    format!("{} (field {}) must be a string, found {}", what, pos, other),
                )),
            }
        };

        let record = ArticleRecord {
            title: text(TITLE, "title")?,
            slug: text(SLUG, "slug")?,
            reserved: fields.get(RESERVED).cloned(),
            published: text(PUBLISHED, "timestamp")?,
            summary: text(SUMMARY, "summary")?,
            field_count: fields.len(),
        };

        if record.is_qualifying() && (record.title.is_none() || record.slug.is_none()) {
            return Err(CatalogError::schema(
                category,
                index,
                "entry with a summary must have a title and a slug",
            ));
        }

        Ok(record)
    }

    /// Listed entries have all positional fields and a non-blank summary.
    pub fn is_qualifying(&self) -> bool {
        self.field_count >= REQUIRED_FIELDS
            && self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Ordering key: the publication time, or the earliest representable
    /// instant when the timestamp is missing or unparsable.
    pub fn sort_key(&self) -> DateTime<Utc> {
        if self.field_count <= PUBLISHED {
            return DateTime::<Utc>::MIN_UTC;
        }
        self.published
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(parse_timestamp)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// First ten characters of the stored timestamp (the `YYYY-MM-DD` part),
    /// or [`MISSING_DATE`].
    pub fn date_prefix(&self) -> &str {
        match self.published.as_deref() {
            Some(raw) if !raw.is_empty() => match raw.char_indices().nth(10) {
                Some((end, _)) => &raw[..end],
                None => raw,
            },
            _ => MISSING_DATE,
        }
    }
}

/// Parse an ISO-8601 date or date-time.
///
/// Dates are `YYYY-MM-DD` or `YYYYMMDD`. An optional time follows a `T` or a
/// space as `HH`, `HH:MM`, `HH:MM:SS`, `HHMM` or `HHMMSS`, then an optional
/// `±HH:MM`, `±HHMM` or `±HH` offset. A `Z` means UTC. Everything from the
/// first `.` on is dropped, so fractional seconds (and any offset written
/// after them) are ignored. Values without a zone are taken as UTC.
/// Fields must have their exact widths; surrounding whitespace is rejected.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let iso = raw.replace('Z', "+00:00");
    let iso = match iso.find('.') {
        Some(dot) => &iso[..dot],
        None => iso.as_str(),
    };

    let (date, rest) = split_date(iso)?;
    if rest.is_empty() {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    let rest = rest.strip_prefix(['T', ' '])?;
    let (time, offset) = match rest.find(['+', '-']) {
        Some(sign) => (&rest[..sign], Some(&rest[sign..])),
        None => (rest, None),
    };
    let naive = date.and_time(parse_time(time)?);

    match offset {
        None => Some(naive.and_utc()),
        Some(offset) => parse_offset(offset)?
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Fixed-width run of ASCII digits.
fn digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn split_date(s: &str) -> Option<(NaiveDate, &str)> {
    let (year, month, day, rest) = if s.as_bytes().get(4) == Some(&b'-') {
        if s.as_bytes().get(7) != Some(&b'-') {
            return None;
        }
        (s.get(..4)?, s.get(5..7)?, s.get(8..10)?, s.get(10..)?)
    } else {
        (s.get(..4)?, s.get(4..6)?, s.get(6..8)?, s.get(8..)?)
    };
    let date = NaiveDate::from_ymd_opt(
        i32::try_from(digits(year, 4)?).ok()?,
        digits(month, 2)?,
        digits(day, 2)?,
    )?;
    Some((date, rest))
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let (h, m, sec) = if s.contains(':') {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [h, m] => (*h, *m, "00"),
            [h, m, sec] => (*h, *m, *sec),
            _ => return None,
        }
    } else {
        match s.len() {
            2 => (s, "00", "00"),
            4 => (s.get(..2)?, s.get(2..)?, "00"),
            6 => (s.get(..2)?, s.get(2..4)?, s.get(4..)?),
            _ => return None,
        }
    };
    NaiveTime::from_hms_opt(digits(h, 2)?, digits(m, 2)?, digits(sec, 2)?)
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let body = &s[1..];
    let (h, m) = match body.len() {
        2 => (body, "00"),
        4 => (body.get(..2)?, body.get(2..)?),
        5 if body.as_bytes()[2] == b':' => (body.get(..2)?, body.get(3..)?),
        _ => return None,
    };
    let (h, m) = (digits(h, 2)?, digits(m, 2)?);
    if h > 23 || m > 59 {
        return None;
    }
    let seconds = i32::try_from(h * 3600 + m * 60).ok()?;
    FixedOffset::east_opt(sign * seconds)
}
