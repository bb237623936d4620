//! Analytics Endpoint

use super::{ApiClient, ApiError};
use crate::models::Analytics;

impl ApiClient {
    /// `GET /analytics` (authenticated)
    pub async fn analytics(&self) -> Result<Analytics, ApiError> {
        self.get("/analytics").await
    }
}
