//! Binary downloads (documents, photo archives).

// crates.io
use uuid::Uuid;
// self
use crate::_prelude::*;

/// Identifier a [`Blob`] was requested with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlobId {
	/// Document identifier.
	Uuid(Uuid),
	/// Numeric identifier, e.g. the campaign of a photo export.
	Int(i64),
	/// Any other textual identifier.
	Text(String),
}
impl Display for BlobId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			BlobId::Uuid(id) => Display::fmt(id, f),
			BlobId::Int(id) => Display::fmt(id, f),
			BlobId::Text(id) => f.write_str(id),
		}
	}
}
impl From<Uuid> for BlobId {
	fn from(value: Uuid) -> Self {
		Self::Uuid(value)
	}
}
impl From<i64> for BlobId {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}
impl From<String> for BlobId {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<&str> for BlobId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

/// Downloaded file together with its transfer metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
	/// Identifier the download was requested with.
	pub id: BlobId,
	/// File name from `Content-Disposition`, or `unknown`.
	pub file_name: String,
	/// Media type from `Content-Type`, or `application/octet-stream`.
	pub content_type: String,
	/// Raw file content.
	pub content: Vec<u8>,
}
impl Blob {
	/// Content length in bytes.
	pub fn size(&self) -> usize {
		self.content.len()
	}
}
impl Debug for Blob {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Blob")
			.field("id", &self.id)
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("size", &self.size())
			.finish()
	}
}
