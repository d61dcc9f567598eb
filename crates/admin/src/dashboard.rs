//! Dashboard aggregation.
//!
//! Fetches the four collections concurrently and reduces them to counts
//! and the recent-activity feed. A load either fully succeeds and replaces
//! the snapshot, or fails and leaves the previous snapshot untouched.

use std::sync::Arc;

use chrono::Utc;
use myron_client::api::{ApiClient, ApiError};
use myron_client::resources::ResourceService;
use myron_core::activity::{build_snapshot, DashboardSnapshot};
use myron_core::models::{Category, Contact, Donation, Event};

pub struct DashboardAggregator {
    categories: Arc<dyn ResourceService<Category>>,
    donations: Arc<dyn ResourceService<Donation>>,
    events: Arc<dyn ResourceService<Event>>,
    contacts: Arc<dyn ResourceService<Contact>>,
    snapshot: DashboardSnapshot,
}

impl DashboardAggregator {
    pub fn new(
        categories: Arc<dyn ResourceService<Category>>,
        donations: Arc<dyn ResourceService<Donation>>,
        events: Arc<dyn ResourceService<Event>>,
        contacts: Arc<dyn ResourceService<Contact>>,
    ) -> Self {
        Self {
            categories,
            donations,
            events,
            contacts,
            snapshot: DashboardSnapshot::default(),
        }
    }

    /// Wire all four services to one REST client.
    pub fn from_api(api: &ApiClient) -> Self {
        Self::new(
            Arc::new(api.categories()),
            Arc::new(api.donations()),
            Arc::new(api.events()),
            Arc::new(api.contacts()),
        )
    }

    /// The last successfully loaded snapshot (all zeros before the first).
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    /// Fetch and aggregate without touching the stored snapshot.
    ///
    /// The four fetches run concurrently; the first failure aborts the
    /// whole aggregation.
    pub async fn fetch(&self) -> Result<DashboardSnapshot, ApiError> {
        let (categories, donations, events, contacts) = futures::try_join!(
            self.categories.list(),
            self.donations.list(),
            self.events.list(),
            self.contacts.list(),
        )?;

        Ok(build_snapshot(
            &categories,
            &donations,
            &events,
            &contacts,
            Utc::now(),
        ))
    }

    /// Reload the dashboard. Called on every navigation to it; nothing is
    /// cached between calls.
    pub async fn load(&mut self) -> Result<&DashboardSnapshot, ApiError> {
        match self.fetch().await {
            Ok(snapshot) => {
                tracing::debug!(
                    categories = snapshot.counts.categories,
                    donations = snapshot.counts.donations,
                    events = snapshot.counts.events,
                    contacts = snapshot.counts.contacts,
                    activity = snapshot.activity.len(),
                    "Dashboard loaded",
                );
                self.snapshot = snapshot;
                Ok(&self.snapshot)
            }
            Err(e) => {
                tracing::error!(error = %e, "Dashboard load failed");
                Err(e)
            }
        }
    }
}
