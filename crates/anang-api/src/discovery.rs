//! Discovery categories and their entries.

use anang_core::entities::{CategoryList, EntryList};

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError};

const CATEGORIES: Messages = Messages {
    fallback: "Failed to load categories",
    by_status: &[],
};

const DATA: Messages = Messages {
    fallback: "Failed to load data",
    by_status: &[],
};

impl ApiClient {
    /// All discovery tabs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success status.
    pub async fn get_discovery_categories(&self) -> Result<CategoryList, ApiError> {
        let url = self.url("/api/discovery/categories");
        tracing::debug!(%url, "GET discovery categories");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &CATEGORIES).await
    }

    /// Entries of one category.
    ///
    /// # Errors
    ///
    /// [`ApiError::Precondition`] for an unknown category, otherwise
    /// [`ApiError`] on any non-success status.
    pub async fn get_discovery_data(&self, category_id: &str) -> Result<EntryList, ApiError> {
        let url = format!(
            "{}?category_id={}",
            self.url("/api/discovery/data"),
            urlencoding::encode(category_id)
        );
        tracing::debug!(%url, "GET discovery data");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &DATA).await
    }
}
