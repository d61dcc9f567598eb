//! Dashboard counts and the "recent activity" feed.
//!
//! The feed samples the head of each collection (in the order the backend
//! returned it), then ranks the samples newest first. Contacts have no
//! creation time, so they are stamped with the `now` passed in by the
//! caller and therefore always rank first. Because `now` changes on every
//! load, contact items have no stable position across loads.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Contact, Donation, Event};
use crate::navigation::Route;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DONATION_SAMPLE: usize = 2;
pub const EVENT_SAMPLE: usize = 2;
pub const CONTACT_SAMPLE: usize = 1;

/// Upper bound on the feed length.
pub const MAX_ACTIVITY_ITEMS: usize = 5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Donation,
    Event,
    Contact,
}

/// One derived feed entry. Not persisted and has no identity across loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub text: String,
    /// `None` when the source row had no usable `created_at`.
    pub time: Option<Timestamp>,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub categories: usize,
    pub donations: usize,
    pub events: usize,
    pub contacts: usize,
}

/// A dashboard stat card linking to its page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub route: Route,
}

impl DashboardCounts {
    pub fn stat_cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                title: "Categories",
                value: self.categories,
                route: Route::Categories,
            },
            StatCard {
                title: "Donations",
                value: self.donations,
                route: Route::Donations,
            },
            StatCard {
                title: "Events",
                value: self.events,
                route: Route::Events,
            },
            StatCard {
                title: "Contacts",
                value: self.contacts,
                route: Route::Contacts,
            },
        ]
    }
}

/// Everything the dashboard shows after one successful load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub counts: DashboardCounts,
    pub activity: Vec<ActivityItem>,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Build the activity feed from the fetched collections.
///
/// Items are sorted by `time` descending; items without a time keep their
/// relative order after all timestamped items. The result holds at most
/// [`MAX_ACTIVITY_ITEMS`] entries.
pub fn build_recent_activity(
    donations: &[Donation],
    events: &[Event],
    contacts: &[Contact],
    now: Timestamp,
) -> Vec<ActivityItem> {
    let mut activity = Vec::with_capacity(DONATION_SAMPLE + EVENT_SAMPLE + CONTACT_SAMPLE);

    activity.extend(donations.iter().take(DONATION_SAMPLE).map(|d| ActivityItem {
        text: format!("New donation \"{}\" added", d.title),
        time: d.created_at,
        kind: ActivityType::Donation,
    }));

    activity.extend(events.iter().take(EVENT_SAMPLE).map(|e| ActivityItem {
        text: format!("Event \"{}\" updated", e.title),
        time: e.created_at,
        kind: ActivityType::Event,
    }));

    activity.extend(contacts.iter().take(CONTACT_SAMPLE).map(|c| ActivityItem {
        text: format!("New contact from {}", c.name),
        time: Some(now),
        kind: ActivityType::Contact,
    }));

    // Stable sort; `Reverse` puts later times first and `None` last.
    activity.sort_by_key(|item| std::cmp::Reverse(item.time));
    activity.truncate(MAX_ACTIVITY_ITEMS);
    activity
}

/// Reduce the four collections to a snapshot.
pub fn build_snapshot(
    categories: &[Category],
    donations: &[Donation],
    events: &[Event],
    contacts: &[Contact],
    now: Timestamp,
) -> DashboardSnapshot {
    DashboardSnapshot {
        counts: DashboardCounts {
            categories: categories.len(),
            donations: donations.len(),
            events: events.len(),
            contacts: contacts.len(),
        },
        activity: build_recent_activity(donations, events, contacts, now),
    }
}
