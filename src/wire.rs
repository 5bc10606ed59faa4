//! Wire encoding for Harvest payloads.
//!
//! Field names are lowercase with underscores on the wire and every record
//! declares `rename_all = "snake_case"`, so no field carries its own rename.
//! Date-valued fields pick their precision through the codec module named
//! after the field: `spent_date` is a bare `YYYY-MM-DD` date, `created_at` and
//! `updated_at` are UTC timestamps. Hours and rates are decimals written as
//! JSON numbers.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DecodeError, HarvestError, INVALID_FORMAT_PREFIX};

pub const BARE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, HarvestError> {
    serde_json::to_vec(value).map_err(|err| HarvestError::InvalidRequest(err.to_string()))
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::from)
}

pub fn format_bare_date(date: &NaiveDate) -> String {
    date.format(BARE_DATE_FORMAT).to_string()
}

pub fn parse_bare_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, BARE_DATE_FORMAT).ok()
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if !value.ends_with('Z') {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn invalid_format(field: &str, raw: &str) -> String {
    format!("{INVALID_FORMAT_PREFIX}{field}`: {raw:?}")
}

macro_rules! string_codec {
    ($field:ident, $ty:ty, $format:path, $parse:path) => {
        pub mod $field {
            use serde::{Deserialize, Deserializer, Serializer};

            pub fn serialize<S: Serializer>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$format(value))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $parse(&raw).ok_or_else(|| {
                    serde::de::Error::custom(super::invalid_format(stringify!($field), &raw))
                })
            }
        }
    };
}

string_codec!(spent_date, chrono::NaiveDate, super::format_bare_date, super::parse_bare_date);
string_codec!(created_at, chrono::DateTime<chrono::Utc>, super::format_timestamp, super::parse_timestamp);
string_codec!(updated_at, chrono::DateTime<chrono::Utc>, super::format_timestamp, super::parse_timestamp);

fn decimal_from_number(number: &serde_json::Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// True when the JSON number written for `value` reads back as exactly `value`.
pub fn is_exact_on_wire(value: &Decimal) -> bool {
    number_from_decimal(value).is_some()
}

fn number_from_decimal(value: &Decimal) -> Option<serde_json::Number> {
    // Always an f64 so whole hours keep their fractional marker (8.0).
    let float = f64::from_str(&value.to_string()).ok()?;
    let number = serde_json::Number::from_f64(float)?;
    (decimal_from_number(&number)? == *value).then_some(number)
}

/// Decimal quantities (hours, rates) as JSON numbers.
pub mod decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        super::number_from_decimal(value)
            .ok_or_else(|| {
                serde::ser::Error::custom(format!("decimal {value} has no exact JSON number"))
            })?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        super::decimal_from_number(&number).ok_or_else(|| {
            serde::de::Error::custom(format!("number {number} does not fit a decimal"))
        })
    }
}

/// Optional decimal quantities; `null` and an absent key both decode to `None`.
pub mod decimal_option {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::decimal::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        let number = Option::<serde_json::Number>::deserialize(deserializer)?;
        number
            .map(|number| {
                super::decimal_from_number(&number).ok_or_else(|| {
                    serde::de::Error::custom(format!("number {number} does not fit a decimal"))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    struct Sample {
        #[serde(with = "spent_date")]
        spent_date: NaiveDate,
        #[serde(with = "created_at")]
        created_at: DateTime<Utc>,
        #[serde(with = "decimal")]
        hours: Decimal,
        #[serde(default, with = "decimal_option", skip_serializing_if = "Option::is_none")]
        hourly_rate: Option<Decimal>,
    }

    fn sample() -> Sample {
        Sample {
            spent_date: NaiveDate::from_ymd_opt(2017, 3, 21).unwrap(),
            created_at: Utc.with_ymd_and_hms(2017, 6, 26, 21, 52, 18).unwrap(),
            hours: Decimal::new(8, 0),
            hourly_rate: None,
        }
    }

    #[test]
    fn dates_use_their_own_precision() {
        let value: serde_json::Value = serde_json::from_slice(&encode(&sample()).unwrap()).unwrap();
        assert_eq!(value["spent_date"], "2017-03-21");
        assert_eq!(value["created_at"], "2017-06-26T21:52:18Z");
    }

    #[test]
    fn whole_hours_keep_fraction_marker() {
        let text = String::from_utf8(encode(&sample()).unwrap()).unwrap();
        assert!(text.contains("\"hours\":8.0"), "{text}");
    }

    #[test]
    fn absent_and_null_optionals_decode_the_same() {
        let absent: Sample = decode(
            br#"{"spent_date":"2017-03-21","created_at":"2017-06-26T21:52:18Z","hours":8.0}"#,
        )
        .unwrap();
        let null: Sample = decode(
            br#"{"spent_date":"2017-03-21","created_at":"2017-06-26T21:52:18Z","hours":8.0,"hourly_rate":null}"#,
        )
        .unwrap();
        assert_eq!(absent, null);
        assert_eq!(absent, sample());
    }

    #[test]
    fn fractional_hours_survive_round_trip() {
        let mut value = sample();
        value.hours = Decimal::new(125, 2);
        value.hourly_rate = Some(Decimal::new(1001, 1));
        let back: Sample = decode(&encode(&value).unwrap()).unwrap();
        assert_eq!(back, value);
        assert_eq!(back.hours.to_string(), "1.25");
    }

    #[test]
    fn over_precise_hours_are_not_encoded() {
        let mut value = sample();
        value.hours = Decimal::from_str("1.000000000000000000001").unwrap();
        assert!(!is_exact_on_wire(&value.hours));
        assert!(matches!(encode(&value), Err(HarvestError::InvalidRequest(_))));
    }

    #[test]
    fn exact_decimals_are_accepted() {
        for text in ["8", "7.5", "0.1", "23.99", "100.0"] {
            assert!(is_exact_on_wire(&Decimal::from_str(text).unwrap()), "{text}");
        }
    }

    #[test]
    fn zero_hours_round_trip() {
        let mut value = sample();
        value.hours = Decimal::ZERO;
        let back: Sample = decode(&encode(&value).unwrap()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn bare_date_with_time_is_rejected() {
        let err = decode::<Sample>(
            br#"{"spent_date":"2017-03-21T00:00:00Z","created_at":"2017-06-26T21:52:18Z","hours":1.0}"#,
        )
        .unwrap_err();
        assert_eq!(err, DecodeError::InvalidFormat("spent_date".to_string()));
    }

    #[test]
    fn timestamp_without_utc_designator_is_rejected() {
        let err = decode::<Sample>(
            br#"{"spent_date":"2017-03-21","created_at":"2017-06-26 21:52:18","hours":1.0}"#,
        )
        .unwrap_err();
        assert_eq!(err, DecodeError::InvalidFormat("created_at".to_string()));
    }

    #[test]
    fn missing_field_is_named() {
        let err = decode::<Sample>(br#"{"spent_date":"2017-03-21","hours":1.0}"#).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("created_at".to_string()));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            decode::<Sample>(b"not json"),
            Err(DecodeError::Malformed(_))
        ));
    }
}
