//! HTTP client for the ticketing REST API.

mod error;

pub use error::ApiError;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{AsRefStr, Display};

use crate::config::ApiConfig;
use crate::models::{
    ErrorResponse, Fixture, LoginRequest, LoginResponse, NewFixture, NewTeam, NewTicket, Team,
    Ticket, UserProfile,
};
use crate::session::SessionApi;

/// Collections that accept `DELETE /{resource}/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Teams,
    Matches,
    Tickets,
}

/// Thin client over the backend endpoints. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: build_http_client(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.endpoint(path));
        with_credentials(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: ErrorResponse::message_from_body(&body),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// `GET /users/me`: the profile bound to the current session cookie.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("users/me").await
    }

    /// `POST /users/login`: exchanges credentials for a session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post_json("users/login", request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// `POST /users/logout`. The body of the response is ignored.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "users/logout"))
            .await
            .map(|_| ())
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_json("teams").await
    }

    pub async fn list_fixtures(&self) -> Result<Vec<Fixture>, ApiError> {
        self.get_json("matches").await
    }

    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.get_json("tickets").await
    }

    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get_json("users").await
    }

    pub async fn add_team(&self, team: &NewTeam) -> Result<(), ApiError> {
        self.post_json("teams/add", team).await.map(|_| ())
    }

    pub async fn add_fixture(&self, fixture: &NewFixture) -> Result<(), ApiError> {
        self.post_json("matches/add", fixture).await.map(|_| ())
    }

    pub async fn add_ticket(&self, ticket: &NewTicket) -> Result<(), ApiError> {
        self.post_json("tickets/add", ticket).await.map(|_| ())
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", resource.as_ref(), id);
        self.send(self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }
}

#[async_trait(?Send)]
impl SessionApi for ApiClient {
    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        ApiClient::current_user(self).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

// Off the browser there is no ambient cookie jar, so keep one per client to
// carry the session cookie between requests.
#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to a client without a cookie store");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_map_to_collection_paths() {
        assert_eq!(Resource::Teams.as_ref(), "teams");
        assert_eq!(Resource::Matches.as_ref(), "matches");
        assert_eq!(Resource::Tickets.to_string(), "tickets");
    }

    #[test]
    fn clients_compare_by_configuration() {
        let a = ApiClient::new(ApiConfig::new("http://localhost:5000/"));
        let b = ApiClient::new(ApiConfig::new("http://localhost:5000"));
        let c = ApiClient::new(ApiConfig::new("http://localhost:6000"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
