//! Route table and sidebar entries of the admin shell.

use crate::resource::ResourceKind;

/// Brand shown at the top of the sidebar.
pub const BRAND: &str = "Myron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Categories,
    Donations,
    Events,
    Contacts,
}

/// Sidebar entries, top to bottom.
pub const SIDEBAR: [Route; 5] = [
    Route::Dashboard,
    Route::Categories,
    Route::Donations,
    Route::Events,
    Route::Contacts,
];

impl Route {
    /// Resolve a path. `/` redirects to the dashboard; unknown paths
    /// resolve to nothing. The leading slash is optional.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        match trimmed {
            "" | "dashboard" => Some(Self::Dashboard),
            "categories" => Some(Self::Categories),
            "donations" => Some(Self::Donations),
            "events" => Some(Self::Events),
            "contacts" => Some(Self::Contacts),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Categories => "/categories",
            Self::Donations => "/donations",
            Self::Events => "/events",
            Self::Contacts => "/contacts",
        }
    }

    pub fn sidebar_label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Categories => "Category",
            Self::Donations => "Donations",
            Self::Events => "Events",
            Self::Contacts => "Contacts",
        }
    }

    /// The resource a page manages; the dashboard manages none.
    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            Self::Dashboard => None,
            Self::Categories => Some(ResourceKind::Category),
            Self::Donations => Some(ResourceKind::Donation),
            Self::Events => Some(ResourceKind::Event),
            Self::Contacts => Some(ResourceKind::Contact),
        }
    }
}
