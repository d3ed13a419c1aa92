//! Demonstrates logging in and walking a paginated campaign listing against a local mock of the
//! gateway with the default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use poscore_client::{
	ApiClient, TokenManager,
	auth::Credentials,
	client::ListCampaigns,
	config::ClientConfig,
	http::ReqwestHttpClient,
	reqwest::Client,
};

fn campaign(id: i64) -> serde_json::Value {
	json!({
		"id": id,
		"name": format!("Demo campaign {id}"),
		"created": "2025-02-01T08:30:00",
		"from": "2025-03-01T00:00:00Z",
		"to": "2025-03-31T00:00:00Z",
		"currency": "EUR",
		"campaignLocks": [],
		"isCanceled": false,
		"cmContactId": 1,
		"companyId": 1,
		"invCustomerId": 1,
		"campCustomerId": 1,
		"amSaleId": 1,
		"invoiceStatus": 0,
		"totalAmount": 990.0,
		"campaignStatusValue": 2,
		"limigoUseCustomerFrom": false,
		"flags": [],
		"useRetailerAutoApproval": false
	})
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/gate/api/v1/account/login");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "accessToken": "demo-access", "expires_in": 900 }));
		})
		.await;

	for page in 0..2_i64 {
		server
			.mock_async(move |when, then| {
				when.method(GET)
					.path("/gate/api/v1/cm/campaigns")
					.query_param("page", page.to_string());
				then.status(200).json_body(json!({
					"currentPage": page,
					"pageSize": 2,
					"rowCount": 4,
					"pageCount": 2,
					"data": [campaign(page * 2 + 1), campaign(page * 2 + 2)]
				}));
			})
			.await;
	}

	let credentials = Credentials::new("demo-user", "demo-password")?
		.with_base_url_str(&server.url("/gate/api/v1"))?;
	let config = ClientConfig::builder().request_timeout(time::Duration::seconds(10)).build()?;
	let http_client = ReqwestHttpClient::with_client(Client::builder().build()?);
	let token_manager =
		<TokenManager<ReqwestHttpClient>>::with_http_client(credentials, config, http_client);
	let client = ApiClient::new(token_manager);
	let campaigns = client.list_campaigns(&ListCampaigns::new().size(2)).await?;

	for campaign in &campaigns {
		println!("#{} {} ({} - {}).", campaign.id, campaign.name, campaign.date_from, campaign.date_to);
	}

	login_mock.assert_async().await;

	Ok(())
}
