//! Discovery page: category tabs and the entries of the active tab.

use anang_api::{ApiClient, ApiError};
use anang_core::entities::{DiscoveryCategory, DiscoveryEntry, EntryList};
use anang_core::enums::CategoryType;

use crate::tasks::{Generation, Ticket};

/// An entries fetch that has been started but not yet applied.
#[derive(Debug)]
pub struct PendingEntries {
    ticket: Ticket,
    category_id: String,
}

impl PendingEntries {
    #[must_use]
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// Run the request. Does not touch the page; hand the result to
    /// [`DiscoveryPage::apply`].
    pub async fn fetch(self, api: &ApiClient) -> EntriesResult {
        let outcome = api.get_discovery_data(&self.category_id).await;
        EntriesResult {
            ticket: self.ticket,
            category_id: self.category_id,
            outcome,
        }
    }
}

/// Completed entries fetch, still tagged with its ticket.
#[derive(Debug)]
pub struct EntriesResult {
    ticket: Ticket,
    category_id: String,
    outcome: Result<EntryList, ApiError>,
}

#[derive(Debug)]
pub struct DiscoveryPage {
    api: ApiClient,
    generation: Generation,
    categories: Vec<DiscoveryCategory>,
    categories_loading: bool,
    categories_error: Option<String>,
    active: Option<String>,
    entries: Vec<DiscoveryEntry>,
    entries_loading: bool,
    entries_error: Option<String>,
}

impl DiscoveryPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            generation: Generation::new(),
            categories: Vec::new(),
            categories_loading: true,
            categories_error: None,
            active: None,
            entries: Vec::new(),
            entries_loading: false,
            entries_error: None,
        }
    }

    /// Load the tabs, select the first one, and load its entries.
    pub async fn mount(&mut self) {
        self.load_categories().await;
        if let Some(id) = self.active.clone()
            && let Some(pending) = self.begin_fetch(id)
        {
            let result = pending.fetch(&self.api).await;
            self.apply(result);
        }
    }

    /// Fetch the category list. Failure leaves no tabs and records the error.
    pub async fn load_categories(&mut self) {
        self.categories_loading = true;
        match self.api.get_discovery_categories().await {
            Ok(list) => {
                self.categories = list.categories;
                self.categories_error = None;
                if self.active.is_none() {
                    self.active = self.categories.first().map(|c| c.id.clone());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "discovery categories unavailable");
                self.categories.clear();
                self.categories_error = Some(e.to_string());
            }
        }
        self.categories_loading = false;
    }

    /// Switch tabs. Returns the fetch to run, or `None` when the tab is
    /// already active. Any fetch for the previous tab is superseded.
    pub fn select_category(&mut self, id: &str) -> Option<PendingEntries> {
        if self.active.as_deref() == Some(id) {
            return None;
        }
        self.active = Some(id.to_string());
        self.begin_fetch(id.to_string())
    }

    /// Switch tabs and load the new tab's entries.
    pub async fn show_category(&mut self, id: &str) {
        if let Some(pending) = self.select_category(id) {
            let result = pending.fetch(&self.api).await;
            self.apply(result);
        }
    }

    /// Re-fetch the active tab.
    pub async fn reload(&mut self) {
        if let Some(id) = self.active.clone()
            && let Some(pending) = self.begin_fetch(id)
        {
            let result = pending.fetch(&self.api).await;
            self.apply(result);
        }
    }

    fn begin_fetch(&mut self, category_id: String) -> Option<PendingEntries> {
        if self.generation.is_disposed() {
            return None;
        }
        self.entries_loading = true;
        self.entries_error = None;
        Some(PendingEntries {
            ticket: self.generation.begin(),
            category_id,
        })
    }

    /// Apply a finished fetch. Superseded results are dropped; returns
    /// whether the result was applied.
    pub fn apply(&mut self, result: EntriesResult) -> bool {
        if !result.ticket.is_current() {
            tracing::debug!(category = %result.category_id, "dropping superseded discovery result");
            return false;
        }
        match result.outcome {
            Ok(list) => {
                self.entries = list.entries;
                self.entries_error = None;
            }
            Err(e) => {
                self.entries.clear();
                self.entries_error = Some(e.to_string());
            }
        }
        self.entries_loading = false;
        true
    }

    /// Stop applying results for this page.
    pub fn dispose(&mut self) {
        self.generation.dispose();
        self.entries_loading = false;
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn categories(&self) -> &[DiscoveryCategory] {
        &self.categories
    }

    /// `(id, label)` for each tab.
    #[must_use]
    pub fn tabs(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .map(|c| (c.id.as_str(), c.label.as_str()))
            .collect()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Type of the active tab; food when unknown.
    #[must_use]
    pub fn active_kind(&self) -> CategoryType {
        self.categories
            .iter()
            .find(|c| Some(c.id.as_str()) == self.active.as_deref())
            .map(|c| c.kind)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn entries(&self) -> &[DiscoveryEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn is_loading_categories(&self) -> bool {
        self.categories_loading
    }

    #[must_use]
    pub const fn is_loading_entries(&self) -> bool {
        self.entries_loading
    }

    #[must_use]
    pub fn categories_error(&self) -> Option<&str> {
        self.categories_error.as_deref()
    }

    #[must_use]
    pub fn entries_error(&self) -> Option<&str> {
        self.entries_error.as_deref()
    }
}
