//! HTTP client for the stage-based messaging service.

pub mod messages;
pub mod messagesets;
pub mod schedules;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};

use sbmctl_core::messaging::{
    ApiError, ApiResult, ListResponse, Message, MessageSet, Payload, Schedule,
    StageBasedMessagingApi,
};

/// Connection settings resolved once at process entry and passed into the
/// client constructor; core logic never reads the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
}

/// HTTP client for the stage-based messaging service API.
#[derive(Debug, Clone)]
pub struct SbmClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl SbmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Build a request with the token header applied when configured.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%url, "sending request");
        let builder = self.client.request(method, url);
        match &self.config.token {
            Some(token) => builder.header("Authorization", format!("Token {token}")),
            None => builder,
        }
    }

    /// Send a request, mapping connection-level failures.
    async fn send(&self, builder: RequestBuilder) -> ApiResult<reqwest::Response> {
        builder
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|err| ApiError::InvalidResponse(err.to_string()))
        } else if status.as_u16() == 404 {
            Err(ApiError::NotFound {
                resource: response.url().path().to_string(),
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(&self, response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 404 {
            Err(ApiError::NotFound {
                resource: response.url().path().to_string(),
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl StageBasedMessagingApi for SbmClient {
    async fn get_schedules(&self) -> ApiResult<ListResponse<Schedule>> {
        SbmClient::get_schedules(self).await
    }

    async fn get_messagesets(&self) -> ApiResult<ListResponse<MessageSet>> {
        SbmClient::get_messagesets(self).await
    }

    async fn get_messages(&self) -> ApiResult<ListResponse<Message>> {
        SbmClient::get_messages(self).await
    }

    async fn get_message(&self, id: u64) -> ApiResult<Message> {
        SbmClient::get_message(self, id).await
    }

    async fn create_message(&self, payload: &Payload) -> ApiResult<Message> {
        SbmClient::create_message(self, payload).await
    }

    async fn update_message(&self, id: u64, payload: &Payload) -> ApiResult<Message> {
        SbmClient::update_message(self, id, payload).await
    }

    async fn delete_message(&self, id: u64) -> ApiResult<()> {
        SbmClient::delete_message(self, id).await
    }
}
