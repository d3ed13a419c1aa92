//! Binary downloads: documents, thumbnails, and photo archives.

// crates.io
use uuid::Uuid;
// self
use crate::{
	_prelude::*,
	client::{ApiClient, InstallationFilter, installations},
	http::{ApiHttpClient, ApiRequest, ApiResponse},
	model::{Blob, BlobId},
	obs::{self, FlowKind},
};

const UNKNOWN_FILE_NAME: &str = "unknown";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extracts the file name from a `Content-Disposition` value.
///
/// Takes the text after the first `filename=` up to the next `;`, trimming whitespace and then
/// surrounding quotes. Returns `unknown` when no usable name is present.
pub fn extract_filename(content_disposition: Option<&str>) -> String {
	content_disposition
		.and_then(|value| value.split_once("filename="))
		.map(|(_, rest)| rest.split(';').next().unwrap_or_default())
		.map(|name| name.trim().trim_matches('"'))
		.filter(|name| !name.is_empty())
		.unwrap_or(UNKNOWN_FILE_NAME)
		.to_owned()
}

fn into_blob(id: BlobId, response: ApiResponse) -> Blob {
	let file_name = extract_filename(response.header("Content-Disposition"));
	let content_type =
		response.header("Content-Type").unwrap_or(DEFAULT_CONTENT_TYPE).to_owned();

	Blob { id, file_name, content_type, content: response.body }
}

impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Downloads a document, or its thumbnail when `thumbnail` is set.
	pub async fn fetch_document(&self, document_id: Uuid, thumbnail: bool) -> Result<Blob> {
		obs::observe(FlowKind::Document, "fetch_document", self.download(document_id, thumbnail))
			.await
	}

	/// Exports installation photos of a campaign as an archive.
	///
	/// `all` asks for every photo instead of the reviewed selection.
	pub async fn export_photos(
		&self,
		campaign_id: i64,
		all: bool,
		filter: &InstallationFilter,
	) -> Result<Blob> {
		let export = self.download_photos(campaign_id, all, filter);

		obs::observe(FlowKind::PhotoExport, "export_photos", export).await
	}

	async fn download(&self, document_id: Uuid, thumbnail: bool) -> Result<Blob> {
		let path = if thumbnail {
			format!("/cm/documents/{document_id}/thumbnail")
		} else {
			format!("/cm/documents/{document_id}")
		};
		let request = ApiRequest::get(self.endpoint(&path)?).query("skipValidation", "true");
		let blob = into_blob(document_id.into(), self.send(request).await?);

		tracing::debug!(%document_id, thumbnail, size = blob.size(), "Fetched document.");

		Ok(blob)
	}

	async fn download_photos(
		&self,
		campaign_id: i64,
		all: bool,
		filter: &InstallationFilter,
	) -> Result<Blob> {
		let path = format!("{}/photos", installations::summary_path(campaign_id));
		let request = ApiRequest::post(self.endpoint(&path)?)
			.query("all", if all { "true" } else { "false" })
			.json(filter)?;
		let blob = into_blob(campaign_id.into(), self.send(request).await?);

		tracing::debug!(campaign_id, all, size = blob.size(), "Exported photos.");

		Ok(blob)
	}
}
