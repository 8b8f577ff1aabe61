//! HTTP API Client
//!
//! `gloo-net` implementation of the journal API contract.

use async_trait::async_trait;
use chrono::NaiveDate;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use reflections::api::dto::{
    error_for_status, Ack, EntriesResponse, InsightsResponse, LoginResponse, SaveEntryRequest,
    StatsResponse, SummaryResponse, UsersResponse,
};
use reflections::api::{
    admin_user_path, date_segment, AdminStats, ClientError, ClientResult, Credentials, Entry,
    HealthResponse, JournalApi, Registration, User, DEFAULT_API_BASE,
};
use reflections::Session;

/// localStorage key holding an API base override
const API_URL_KEY: &str = "reflections_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(API_URL_KEY, &normalize(url));
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn transport(err: gloo_net::Error) -> ClientError {
    web_sys::console::error_1(&format!("Request failed: {}", err).into());
    ClientError::Transport(err.to_string())
}

/// Journal REST API client. No timeout is applied.
#[derive(Debug, Clone)]
pub struct GlooClient {
    base_url: String,
}

impl GlooClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize(base_url),
        }
    }

    /// Client for whatever base URL is currently configured
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }
}

async fn fetch<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
    let response = builder.send().await.map_err(transport)?;
    decode(response).await
}

async fn fetch_json<T: DeserializeOwned, B: Serialize>(builder: RequestBuilder, body: &B) -> ClientResult<T> {
    let request = builder
        .json(body)
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    let response = request.send().await.map_err(transport)?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(transport)?;

    if !ok {
        return Err(error_for_status(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl JournalApi for GlooClient {
    async fn health(&self) -> ClientResult<HealthResponse> {
        fetch(Request::get(&self.url("/health"))).await
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<Session> {
        let response: LoginResponse =
            fetch_json(Request::post(&self.url("/auth/login")), credentials).await?;
        response.into_session(&credentials.username)
    }

    async fn register(&self, registration: &Registration) -> ClientResult<()> {
        let ack: Ack = fetch_json(Request::post(&self.url("/auth/register")), registration).await?;
        ack.into_result()
    }

    async fn logout(&self, token: &str) -> ClientResult<()> {
        Self::authorized(Request::post(&self.url("/auth/logout")), token)
            .send()
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn entries(&self, token: &str, date: NaiveDate) -> ClientResult<Vec<Entry>> {
        let url = self.url(&format!("/entries/{}", date_segment(date)));
        let response: EntriesResponse = fetch(Self::authorized(Request::get(&url), token)).await?;
        Ok(response.entries)
    }

    async fn save_entry(
        &self,
        token: &str,
        date: NaiveDate,
        reflection: &str,
    ) -> ClientResult<Vec<Entry>> {
        let url = self.url(&format!("/entries/{}", date_segment(date)));
        let response: EntriesResponse = fetch_json(
            Self::authorized(Request::post(&url), token),
            &SaveEntryRequest { reflection },
        )
        .await?;
        Ok(response.entries)
    }

    async fn summary(&self, token: &str, date: NaiveDate) -> ClientResult<String> {
        let url = self.url(&format!("/summary/{}", date_segment(date)));
        let response: SummaryResponse = fetch(Self::authorized(Request::post(&url), token)).await?;
        response.into_text()
    }

    async fn insights(&self, token: &str, date: NaiveDate) -> ClientResult<String> {
        let url = self.url(&format!("/insights/{}", date_segment(date)));
        let response: InsightsResponse = fetch(Self::authorized(Request::post(&url), token)).await?;
        response.into_text()
    }

    async fn admin_stats(&self, token: &str) -> ClientResult<AdminStats> {
        let url = self.url("/admin/stats");
        let response: StatsResponse = fetch(Self::authorized(Request::get(&url), token)).await?;
        response.into_stats()
    }

    async fn admin_users(&self, token: &str) -> ClientResult<Vec<User>> {
        let url = self.url("/admin/users");
        let response: UsersResponse = fetch(Self::authorized(Request::get(&url), token)).await?;
        response.into_users()
    }

    async fn make_admin(&self, token: &str, username: &str) -> ClientResult<()> {
        let url = self.url(&admin_user_path(username, Some("make-admin")));
        let ack: Ack = fetch(Self::authorized(Request::post(&url), token)).await?;
        ack.into_result()
    }

    async fn remove_admin(&self, token: &str, username: &str) -> ClientResult<()> {
        let url = self.url(&admin_user_path(username, Some("remove-admin")));
        let ack: Ack = fetch(Self::authorized(Request::post(&url), token)).await?;
        ack.into_result()
    }

    async fn delete_user(&self, token: &str, username: &str) -> ClientResult<()> {
        let url = self.url(&admin_user_path(username, None));
        let ack: Ack = fetch(Self::authorized(Request::delete(&url), token)).await?;
        ack.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = GlooClient::new(" http://localhost:5000/api/ ");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/health"), "http://localhost:5000/api/health");
    }
}
