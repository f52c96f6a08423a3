//! Blocking client for the parts of the TMDB v3 API this tool talks to.
//!
//! Reads (`search/multi`, `item_status`) only carry the `api_key` query
//! parameter; account and list writes also send the bearer token.

use crate::config::Credentials;
use crate::error::{Result, SyncError};
use crate::models::{Account, MediaList};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

pub const API_BASE_URL: &str = "https://api.themoviedb.org/3";
const ACCOUNT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// One entry of a `search/multi` response, before filtering by media type.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    #[serde(default)]
    pub media_type: Option<String>,
    // Movies use "title", TV and people use "name"
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateListResponse {
    // The new list id lives here, not under "id"
    list_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    id: Option<u64>,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemStatusResponse {
    #[serde(default)]
    item_present: bool,
}

pub struct TmdbClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl TmdbClient {
    /// Uses `api_base_url` from the credentials when set, TMDB otherwise.
    pub fn new(credentials: Credentials) -> Self {
        let base_url = credentials
            .api_base_url
            .clone()
            .unwrap_or_else(|| API_BASE_URL.to_string());
        Self::with_base_url(credentials, base_url)
    }

    /// Points the client at another server, used by the tests.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    fn get_request(&self, slug: &str, query: &[(&str, &str)]) -> RequestBuilder {
        debug!(endpoint = slug, "GET");
        self.client
            .get(self.url(slug))
            .query(&[("api_key", self.credentials.api_key.as_str())])
            .query(query)
    }

    fn post_request(&self, slug: &str, body: serde_json::Value) -> RequestBuilder {
        debug!(endpoint = slug, "POST");
        self.authorize(
            self.client
                .post(self.url(slug))
                .query(&[("api_key", self.credentials.api_key.as_str())])
                .json(&body),
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.credentials.bearer_token)
    }

    /// Looks up the account that owns the bearer token.
    pub fn account(&self) -> Result<Account> {
        debug!(endpoint = "account", "GET");
        let response = self
            .authorize(self.client.get(self.url("account")))
            .timeout(ACCOUNT_TIMEOUT)
            .send()?;
        let body = error_for_status(response)?.text()?;

        let account: AccountResponse = parse_body(&body)?;
        match account.id {
            Some(id) => Ok(Account {
                id,
                username: account.username,
            }),
            None => Err(SyncError::InvalidResponse(format!(
                "no 'id' in account response: {}",
                body
            ))),
        }
    }

    pub fn search_multi(&self, title: &str) -> Result<Vec<SearchHit>> {
        let response = self
            .get_request("search/multi", &[("query", title)])
            .send()?;
        let page: ResultsPage<SearchHit> = decode(error_for_status(response)?)?;
        Ok(page.results)
    }

    pub fn account_lists(&self) -> Result<Vec<MediaList>> {
        let slug = format!("account/{}/lists", self.credentials.account_id);
        let response = self.authorize(self.get_request(&slug, &[])).send()?;
        let page: ResultsPage<MediaList> = decode(error_for_status(response)?)?;
        Ok(page.results)
    }

    /// Creates a list and returns its id.
    pub fn create_list(&self, name: &str, description: &str) -> Result<u64> {
        let body = json!({
            "name": name,
            "description": description,
            "language": "en",
        });
        let response = self.post_request("list", body).send()?;
        let text = error_for_status(response)?.text()?;

        let created: CreateListResponse = parse_body(&text)?;
        created.list_id.ok_or_else(|| {
            SyncError::InvalidResponse(format!(
                "list creation response has no 'list_id': {}",
                text
            ))
        })
    }

    /// Any status other than 200 counts as "not present".
    pub fn item_status(&self, list_id: u64, media_id: u64) -> Result<bool> {
        let media_id = media_id.to_string();
        let response = self
            .get_request(
                &format!("list/{}/item_status", list_id),
                &[("media_id", media_id.as_str())],
            )
            .send()?;

        if response.status() != StatusCode::OK {
            debug!(status = %response.status(), list_id, "item_status not OK, assuming absent");
            return Ok(false);
        }
        let status: ItemStatusResponse = decode(response)?;
        Ok(status.item_present)
    }

    /// Only a 201 counts as success.
    pub fn add_item(&self, list_id: u64, media_id: u64) -> Result<()> {
        let response = self
            .post_request(
                &format!("list/{}/add_item", list_id),
                json!({ "media_id": media_id }),
            )
            .send()?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }
        Err(SyncError::RemoteService {
            status,
            body: error_body(response),
        })
    }
}

fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(SyncError::RemoteService {
        status,
        body: error_body(response),
    })
}

fn error_body(response: Response) -> String {
    let status = response.status();
    response.text().unwrap_or_else(|e| {
        debug!(%status, error = %e, "could not read error response body");
        String::new()
    })
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    parse_body(&body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| SyncError::InvalidResponse(format!("JSON parse error: {}", e)))
}
