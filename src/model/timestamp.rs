//! Lenient ISO-8601 timestamp parsing shared by token handling and record decoding.
//!
//! The API mixes RFC 3339 instants (`2025-01-01T10:00:00Z`, `...+02:00`) with naive local
//! timestamps (`2025-01-01T10:00:00.123`), and some fields drop the seconds or the time
//! entirely (`2025-01-01T10:00Z`, `2025-01-01`). Naive values are read as UTC and bare dates
//! as midnight UTC.

// crates.io
use serde::{Deserializer, de::Error as _};
use time::{Date, PrimitiveDateTime, format_description::well_known::Rfc3339, macros};
// self
use crate::_prelude::*;

/// Parses an ISO-8601 timestamp, accepting `Z`, numeric offsets, or no offset at all.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
	let raw = raw.trim();

	if raw.is_empty() {
		return None;
	}

	let normalized = match raw.as_bytes().get(10) {
		Some(b' ') => format!("{}T{}", &raw[..10], &raw[11..]),
		_ => raw.to_owned(),
	};

	if let Ok(instant) = OffsetDateTime::parse(&normalized, &Rfc3339) {
		return Some(instant);
	}

	// Shorter forms: seconds may be missing and `Z` stands for a zero offset.
	let offset_form = match normalized.strip_suffix(['Z', 'z']) {
		Some(local) => format!("{local}+00:00"),
		None => normalized.clone(),
	};

	if let Ok(instant) = OffsetDateTime::parse(
		&offset_form,
		macros::format_description!(
			"[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]][offset_hour sign:mandatory]:[offset_minute]"
		),
	) {
		return Some(instant);
	}

	if let Ok(local) = PrimitiveDateTime::parse(
		&normalized,
		macros::format_description!(
			"[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
		),
	) {
		return Some(local.assume_utc());
	}

	Date::parse(&normalized, macros::format_description!("[year]-[month]-[day]"))
		.ok()
		.map(|date| date.midnight().assume_utc())
}

/// Serde adapter for required timestamp fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;

	parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`")))
}

/// Serde adapter for nullable timestamp fields.
pub mod option {
	// crates.io
	use serde::de::Error as _;
	// self
	use super::*;

	/// Deserializes `null`/missing as `None` and anything else as a timestamp.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<String>::deserialize(deserializer)? {
			Some(raw) => parse_timestamp(&raw)
				.map(Some)
				.ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`"))),
			None => Ok(None),
		}
	}

	/// Deserializes an optional list of timestamps.
	pub fn deserialize_vec<'de, D>(
		deserializer: D,
	) -> Result<Option<Vec<OffsetDateTime>>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<Vec<String>>::deserialize(deserializer)? {
			Some(values) => values
				.iter()
				.map(|raw| {
					parse_timestamp(raw)
						.ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`")))
				})
				.collect::<Result<Vec<_>, _>>()
				.map(Some),
			None => Ok(None),
		}
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn accepts_utc_designator_offsets_and_naive_values() {
		assert_eq!(parse_timestamp("2025-01-01T10:00:00Z"), Some(datetime!(2025-01-01 10:00 UTC)));
		assert_eq!(
			parse_timestamp("2025-01-01T12:00:00+02:00"),
			Some(datetime!(2025-01-01 10:00 UTC))
		);
		assert_eq!(parse_timestamp("2025-01-01T10:00:00"), Some(datetime!(2025-01-01 10:00 UTC)));
		assert_eq!(
			parse_timestamp("2025-01-01 10:00:00.250"),
			Some(datetime!(2025-01-01 10:00:00.25 UTC))
		);
	}

	#[test]
	fn accepts_minute_precision_and_date_only_values() {
		assert_eq!(parse_timestamp("2025-06-01T14:00Z"), Some(datetime!(2025-06-01 14:00 UTC)));
		assert_eq!(
			parse_timestamp("2025-06-01T16:00+02:00"),
			Some(datetime!(2025-06-01 14:00 UTC))
		);
		assert_eq!(parse_timestamp("2025-06-01T14:00"), Some(datetime!(2025-06-01 14:00 UTC)));
		assert_eq!(parse_timestamp("2025-06-01 14:00"), Some(datetime!(2025-06-01 14:00 UTC)));
		assert_eq!(parse_timestamp("2025-06-01"), Some(datetime!(2025-06-01 0:00 UTC)));
	}

	#[test]
	fn rejects_garbage() {
		assert_eq!(parse_timestamp("invalid-date"), None);
		assert_eq!(parse_timestamp(""), None);
		assert_eq!(parse_timestamp("2025-13-45T99:00:00Z"), None);
		assert_eq!(parse_timestamp("2025-06-01T14Z"), None);
		assert_eq!(parse_timestamp("2025-06-01Z"), None);
	}
}
