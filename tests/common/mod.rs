#![allow(dead_code)]

// crates.io
use httpmock::{Mock, prelude::*};
use serde_json::{Value, json};
// self
use poscore_client::{
	ApiClient, TokenManager, auth::Credentials, config::ClientConfig, http::ReqwestHttpClient,
};

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "hunter2";
pub const BASE_PATH: &str = "/gate/api/v1";

pub fn path(endpoint: &str) -> String {
	format!("{BASE_PATH}{endpoint}")
}

pub fn credentials(server: &MockServer) -> Credentials {
	Credentials::new(USERNAME, PASSWORD)
		.and_then(|credentials| credentials.with_base_url_str(&server.url(BASE_PATH)))
		.expect("Mock server base URL should be accepted.")
}

pub fn token_manager(server: &MockServer) -> TokenManager<ReqwestHttpClient> {
	TokenManager::new(credentials(server), ClientConfig::default())
}

pub fn api_client(server: &MockServer) -> ApiClient<ReqwestHttpClient> {
	ApiClient::new(token_manager(server))
}

/// Mocks a successful login returning `access` valid for `expires_in` seconds.
pub async fn mock_login<'a>(
	server: &'a MockServer,
	access: &str,
	refresh: Option<&str>,
	expires_in: i64,
) -> Mock<'a> {
	let mut body = json!({ "accessToken": access, "expires_in": expires_in });

	if let Some(refresh) = refresh {
		body["refreshToken"] = json!(refresh);
	}

	server
		.mock_async(|when, then| {
			when.method(POST)
				.path(path("/account/login"))
				.json_body(json!({ "username": USERNAME, "password": PASSWORD }));
			then.status(200).header("content-type", "application/json").json_body(body);
		})
		.await
}

pub fn campaign(id: i64) -> Value {
	json!({
		"id": id,
		"name": format!("Campaign {id}"),
		"created": "2025-02-01T08:30:00",
		"from": "2025-03-01T00:00:00Z",
		"to": "2025-03-31T00:00:00Z",
		"currency": "CZK",
		"campaignLocks": [],
		"isCanceled": false,
		"cmContactId": 1,
		"companyId": 2,
		"invCustomerId": 3,
		"campCustomerId": 4,
		"amSaleId": 5,
		"invoiceStatus": 0,
		"totalAmount": 100.0,
		"campaignStatusValue": 3,
		"limigoUseCustomerFrom": false,
		"flags": [],
		"useRetailerAutoApproval": false
	})
}

pub fn campaign_page(current_page: i64, page_count: i64, ids: impl IntoIterator<Item = i64>) -> Value {
	let data = ids.into_iter().map(campaign).collect::<Vec<_>>();

	json!({
		"currentPage": current_page,
		"pageSize": data.len(),
		"rowCount": data.len() as i64 * page_count,
		"pageCount": page_count,
		"data": data
	})
}
