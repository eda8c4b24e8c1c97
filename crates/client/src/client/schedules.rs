//! Schedule API operations.

use reqwest::Method;

use sbmctl_core::messaging::{ApiResult, ListResponse, Schedule};

use super::SbmClient;

impl SbmClient {
    /// Lists all schedules.
    pub async fn get_schedules(&self) -> ApiResult<ListResponse<Schedule>> {
        let response = self.send(self.request(Method::GET, "/schedule/")).await?;
        self.handle_response(response).await
    }

    /// Gets a schedule by ID.
    pub async fn get_schedule(&self, id: u64) -> ApiResult<Schedule> {
        let response = self
            .send(self.request(Method::GET, &format!("/schedule/{id}/")))
            .await?;
        self.handle_response(response).await
    }
}
