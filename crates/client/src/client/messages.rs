//! Message API operations.

use reqwest::Method;

use sbmctl_core::messaging::{ApiResult, ListResponse, Message, Payload};

use super::SbmClient;

impl SbmClient {
    /// Lists all messages.
    pub async fn get_messages(&self) -> ApiResult<ListResponse<Message>> {
        let response = self.send(self.request(Method::GET, "/message/")).await?;
        self.handle_response(response).await
    }

    /// Gets a message by ID.
    pub async fn get_message(&self, id: u64) -> ApiResult<Message> {
        let response = self
            .send(self.request(Method::GET, &format!("/message/{id}/")))
            .await?;
        self.handle_response(response).await
    }

    /// Creates a message from a payload.
    pub async fn create_message(&self, payload: &Payload) -> ApiResult<Message> {
        let response = self
            .send(self.request(Method::POST, "/message/").json(payload))
            .await?;
        self.handle_response(response).await
    }

    /// Updates a message by ID. The service accepts partial bodies, so
    /// only the payload's fields change.
    pub async fn update_message(&self, id: u64, payload: &Payload) -> ApiResult<Message> {
        let response = self
            .send(self.request(Method::PATCH, &format!("/message/{id}/")).json(payload))
            .await?;
        self.handle_response(response).await
    }

    /// Deletes a message by ID.
    pub async fn delete_message(&self, id: u64) -> ApiResult<()> {
        let response = self
            .send(self.request(Method::DELETE, &format!("/message/{id}/")))
            .await?;
        self.handle_delete_response(response).await
    }
}
