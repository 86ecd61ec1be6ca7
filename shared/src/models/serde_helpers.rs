//! Serde helpers for dashboard payloads
//!
//! The forms post numbers as strings (and sometimes strings as numbers),
//! leave untouched inputs as `""`, and echo back dates in the
//! `DD/MM/YYYY` format the listings render. These helpers normalise all of
//! that at the deserialization boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// Display format used by the dashboard for dates
pub const DATE_FR_FORMAT: &str = "%d/%m/%Y";

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

/// `Option<String>` accepting strings or numbers; blank input is `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => None,
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
        Some(Scalar::Str(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    })
}

/// `Option<i32>` accepting integers or numeric strings; blank input is `None`.
pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("integer out of range: {n}"))),
        Some(Scalar::Float(f)) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => {
            Ok(Some(f as i32))
        }
        Some(Scalar::Float(f)) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        Some(Scalar::Str(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected an integer, got {trimmed:?}")))
        }
    }
}

/// Parse a date typed as `YYYY-MM-DD`, `DD/MM/YYYY` or an ISO timestamp.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    // ISO timestamps: keep the calendar part only
    let day = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(day, DATE_FR_FORMAT))
        .ok()
}

/// Render a date as `DD/MM/YYYY`
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format(DATE_FR_FORMAT).to_string()
}

/// Lenient `Option<NaiveDate>` input: blank is `None`, unparseable is an error.
pub mod flexible_date {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_flexible_date(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {s:?}"))),
        }
    }
}

/// `NaiveDate` rendered as `DD/MM/YYYY`
pub mod date_fr {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format_date_fr(*date))
    }
}

/// `Option<NaiveDate>` rendered as `DD/MM/YYYY`
pub mod option_date_fr {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => s.serialize_some(&format_date_fr(*date)),
            None => s.serialize_none(),
        }
    }
}
