//! `GET /cm/campaigns` with page walking.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	client::{ApiClient, decode_json, decode_value, page::Page},
	error::ClientConfigError,
	http::{ApiHttpClient, ApiRequest},
	model::Campaign,
	obs::{self, FlowKind},
};

const CAMPAIGNS_PATH: &str = "/cm/campaigns";

/// Parameters of a campaign listing.
///
/// Defaults: 250 records per page starting at page 0, ordered by `created desc`, related
/// entities expanded, and every remaining page fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCampaigns {
	size: u32,
	page: u32,
	order_by: String,
	expand: bool,
	fetch_all: bool,
	params: Vec<(String, String)>,
}
impl ListCampaigns {
	/// Default number of records per page.
	pub const DEFAULT_SIZE: u32 = 250;
	/// Default sort order.
	pub const DEFAULT_ORDER_BY: &'static str = "created desc";

	/// Creates a listing with the default parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records per page.
	pub fn size(mut self, size: u32) -> Self {
		self.size = size;

		self
	}

	/// Zero-indexed page to start from.
	pub fn page(mut self, page: u32) -> Self {
		self.page = page;

		self
	}

	/// Sort expression, e.g. `created desc`.
	pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
		self.order_by = order_by.into();

		self
	}

	/// Whether related entities (rows, contacts, status) are embedded.
	pub fn expand(mut self, expand: bool) -> Self {
		self.expand = expand;

		self
	}

	/// Whether to keep requesting pages after the first one.
	pub fn fetch_all(mut self, fetch_all: bool) -> Self {
		self.fetch_all = fetch_all;

		self
	}

	/// Adds a passthrough query parameter; a key matching a standard parameter overrides it.
	///
	/// `page` sets the start page instead, so the page walk still advances. A value that is
	/// not a page number is ignored with a warning.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let (key, value) = (key.into(), value.into());

		if key == "page" {
			match value.trim().parse() {
				Ok(page) => self.page = page,
				Err(_) => tracing::warn!(value = %value, "Ignoring non-numeric page parameter."),
			}

			return self;
		}

		self.params.push((key, value));

		self
	}

	fn query_pairs(&self, page: u32) -> Vec<(String, String)> {
		let mut pairs = vec![
			("size".to_owned(), self.size.to_string()),
			("page".to_owned(), page.to_string()),
			("orderby".to_owned(), self.order_by.clone()),
			("expand".to_owned(), self.expand.to_string()),
		];

		for (key, value) in &self.params {
			match pairs.iter_mut().find(|(existing, _)| existing == key) {
				Some(pair) => pair.1 = value.clone(),
				None => pairs.push((key.clone(), value.clone())),
			}
		}

		pairs
	}
}
impl Default for ListCampaigns {
	fn default() -> Self {
		Self {
			size: Self::DEFAULT_SIZE,
			page: 0,
			order_by: Self::DEFAULT_ORDER_BY.to_owned(),
			expand: true,
			fetch_all: true,
			params: Vec::new(),
		}
	}
}

impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists campaigns, following pages until the listing ends when `fetch_all` is set.
	///
	/// Records keep the order they were received in: page by page, then within each page.
	pub async fn list_campaigns(&self, request: &ListCampaigns) -> Result<Vec<Campaign>> {
		obs::observe(FlowKind::ListCampaigns, "list_campaigns", self.collect_campaigns(request))
			.await
	}

	async fn collect_campaigns(&self, request: &ListCampaigns) -> Result<Vec<Campaign>> {
		if request.size == 0 {
			return Err(ClientConfigError::ZeroPageSize.into());
		}

		let url = self.endpoint(CAMPAIGNS_PATH)?;
		let mut campaigns = Vec::new();
		let mut page = request.page;

		loop {
			let mut call = ApiRequest::get(url.clone()).accept_json();

			for (key, value) in request.query_pairs(page) {
				call = call.query(&key, &value);
			}

			let response = self.send(call).await?;
			let body = Page::parse(decode_json::<Value>(&url, &response.body)?);
			let is_last = body.is_last(request.size);
			let records = decode_value::<Vec<Campaign>>(&url, Value::Array(body.records))?;

			tracing::debug!(page, records = records.len(), is_last, "Fetched campaign page.");

			campaigns.extend(records);

			if !request.fetch_all || is_last {
				break;
			}

			match page.checked_add(1) {
				Some(next) => page = next,
				None => break,
			}
		}

		tracing::info!(campaigns = campaigns.len(), "Listed campaigns.");

		Ok(campaigns)
	}
}
