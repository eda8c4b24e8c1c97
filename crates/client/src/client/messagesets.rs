//! Messageset API operations.

use reqwest::Method;

use sbmctl_core::messaging::{ApiResult, ListResponse, MessageSet};

use super::SbmClient;

impl SbmClient {
    /// Lists all messagesets.
    pub async fn get_messagesets(&self) -> ApiResult<ListResponse<MessageSet>> {
        let response = self.send(self.request(Method::GET, "/messageset/")).await?;
        self.handle_response(response).await
    }

    /// Gets a messageset by ID.
    pub async fn get_messageset(&self, id: u64) -> ApiResult<MessageSet> {
        let response = self
            .send(self.request(Method::GET, &format!("/messageset/{id}/")))
            .await?;
        self.handle_response(response).await
    }
}
