//! Verified business listing.

use anang_core::entities::BusinessList;

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError, fallback};

const LIST: Messages = Messages {
    fallback: "Failed to load businesses",
    by_status: &[],
};

impl ApiClient {
    /// Verified businesses, optionally filtered by category.
    ///
    /// Never fails: when the endpoint is unreachable or answers with an
    /// error, the bundled dataset is returned with `from_fallback` set.
    pub async fn get_verified_businesses(&self, category: Option<&str>) -> BusinessList {
        match self.fetch_businesses(category).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, ?category, "business listing unavailable, using bundled data");
                fallback::businesses(category)
            }
        }
    }

    async fn fetch_businesses(&self, category: Option<&str>) -> Result<BusinessList, ApiError> {
        let mut url = self.url("/api/businesses");
        if let Some(category) = category {
            url = format!("{url}?category={}", urlencoding::encode(category));
        }
        tracing::debug!(%url, "GET businesses");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &LIST).await
    }
}
