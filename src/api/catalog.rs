//! Catalog Endpoints
//!
//! Categories and subjects used to fill the select lists.

use super::{ApiClient, ApiError};
use crate::models::CatalogEntry;

impl ApiClient {
    pub async fn categories(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        self.get("/categories").await
    }

    pub async fn subjects(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        self.get("/subjects").await
    }
}
