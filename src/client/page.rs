//! Page envelope handling for list endpoints.
//!
//! The canonical envelope is `{currentPage, pageSize, rowCount, pageCount, data}` with zero-indexed
//! pages, so the last page is the one where `currentPage + 1 >= pageCount`. Some deployments answer
//! with partial envelopes or a bare array instead; those pages are read leniently and the end of
//! the listing is inferred from the record count.

// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct EnvelopeHeader {
	current_page: i64,
	page_size: i64,
	row_count: i64,
	page_count: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bounds {
	Strict { current_page: i64, page_count: i64 },
	Loose { current_page: Option<i64>, page_count: Option<i64> },
}

/// One decoded page: raw records plus what is known about the page position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Page {
	pub(crate) records: Vec<Value>,
	bounds: Bounds,
}
impl Page {
	/// Reads a page body, trying the full envelope first.
	pub(crate) fn parse(value: Value) -> Self {
		let header = match &value {
			Value::Object(object) if object.get("data").is_some_and(Value::is_array) =>
				EnvelopeHeader::deserialize(&value).ok(),
			_ => None,
		};

		match (value, header) {
			(Value::Object(mut object), Some(header)) => Self {
				records: take_data(&mut object),
				bounds: Bounds::Strict {
					current_page: header.current_page,
					page_count: header.page_count,
				},
			},
			(Value::Object(mut object), None) => {
				tracing::debug!("Page envelope is incomplete, reading it leniently.");

				let bounds = Bounds::Loose {
					current_page: object.get("currentPage").and_then(Value::as_i64),
					page_count: object.get("pageCount").and_then(Value::as_i64),
				};

				Self { records: take_data(&mut object), bounds }
			},
			(Value::Array(records), _) => {
				tracing::debug!("List endpoint returned a bare array.");

				Self { records, bounds: Bounds::Loose { current_page: None, page_count: None } }
			},
			(other, _) => {
				tracing::warn!(kind = json_kind(&other), "List endpoint returned no records.");

				Self {
					records: Vec::new(),
					bounds: Bounds::Loose { current_page: None, page_count: None },
				}
			},
		}
	}

	/// Decides whether no further page should be requested after this one.
	pub(crate) fn is_last(&self, size: u32) -> bool {
		if self.records.is_empty() {
			return true;
		}

		match self.bounds {
			Bounds::Strict { current_page, page_count }
			| Bounds::Loose { current_page: Some(current_page), page_count: Some(page_count) } =>
				current_page.saturating_add(1) >= page_count,
			Bounds::Loose { .. } => self.records.len() < size as usize,
		}
	}
}

fn take_data(object: &mut Map<String, Value>) -> Vec<Value> {
	match object.remove("data") {
		Some(Value::Array(records)) => records,
		_ => Vec::new(),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
