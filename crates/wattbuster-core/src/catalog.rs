//! Activity catalog.
//!
//! A closed set of digital activities, each with a fixed average power
//! draw. Ids coming from user input are parsed into [`Activity`], so an
//! unknown id is a checked `None` rather than a missing map entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Category an activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entertainment,
    Communication,
    Audio,
    Productivity,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Entertainment,
        Category::Communication,
        Category::Audio,
        Category::Productivity,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "entertainment",
            Category::Communication => "communication",
            Category::Audio => "audio",
            Category::Productivity => "productivity",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// A digital activity known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Youtube,
    Netflix,
    Gaming,
    Social,
    Email,
    VideoCalls,
    Music,
    Shopping,
    Tiktok,
    Podcast,
    Cloud,
    Search,
}

/// Static description of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityDefinition {
    pub activity: Activity,
    /// Stable string id, e.g. `"videocalls"`
    pub id: &'static str,
    /// Short name used in charts
    pub display_name: &'static str,
    /// Long name used in selectors
    pub label: &'static str,
    pub category: Category,
    /// Average draw while the activity runs
    pub watts_per_hour: f64,
    /// Energy-saving tip shown when the activity is selected
    pub tip: &'static str,
}

const CATALOG: [ActivityDefinition; 12] = [
    ActivityDefinition {
        activity: Activity::Youtube,
        id: "youtube",
        display_name: "YouTube",
        label: "Watching YouTube",
        category: Category::Entertainment,
        watts_per_hour: 150.0,
        tip: "Watching in 1080p instead of 4K saves 30% energy!",
    },
    ActivityDefinition {
        activity: Activity::Netflix,
        id: "netflix",
        display_name: "Netflix",
        label: "Streaming Netflix",
        category: Category::Entertainment,
        watts_per_hour: 200.0,
        tip: "Downloading shows for offline viewing uses 50% less energy!",
    },
    ActivityDefinition {
        activity: Activity::Gaming,
        id: "gaming",
        display_name: "Gaming",
        label: "Playing Video Games",
        category: Category::Entertainment,
        watts_per_hour: 300.0,
        tip: "Gaming in power-saving mode reduces energy by 25%!",
    },
    ActivityDefinition {
        activity: Activity::Social,
        id: "social",
        display_name: "Social Media",
        label: "Browsing Social Media",
        category: Category::Communication,
        watts_per_hour: 100.0,
        tip: "Dark mode reduces screen energy by 20%!",
    },
    ActivityDefinition {
        activity: Activity::Email,
        id: "email",
        display_name: "Email",
        label: "Sending Emails",
        category: Category::Communication,
        watts_per_hour: 50.0,
        tip: "Unsubscribing from newsletters saves server energy!",
    },
    ActivityDefinition {
        activity: Activity::VideoCalls,
        id: "videocalls",
        display_name: "Video Calls",
        label: "Video Calls",
        category: Category::Communication,
        watts_per_hour: 180.0,
        tip: "Turn off video when not needed to save 40% energy!",
    },
    ActivityDefinition {
        activity: Activity::Music,
        id: "music",
        display_name: "Music Streaming",
        label: "Music Streaming",
        category: Category::Audio,
        watts_per_hour: 80.0,
        tip: "Download playlists for offline listening to reduce streaming energy!",
    },
    ActivityDefinition {
        activity: Activity::Shopping,
        id: "shopping",
        display_name: "Online Shopping",
        label: "Online Shopping",
        category: Category::Productivity,
        watts_per_hour: 120.0,
        tip: "Make a wishlist to reduce browsing time and energy waste!",
    },
    ActivityDefinition {
        activity: Activity::Tiktok,
        id: "tiktok",
        display_name: "TikTok",
        label: "Watching TikTok",
        category: Category::Entertainment,
        watts_per_hour: 140.0,
        tip: "Set time limits to avoid endless scrolling and save energy!",
    },
    ActivityDefinition {
        activity: Activity::Podcast,
        id: "podcast",
        display_name: "Podcasts",
        label: "Listening to Podcasts",
        category: Category::Audio,
        watts_per_hour: 60.0,
        tip: "Audio-only content uses 70% less energy than video!",
    },
    ActivityDefinition {
        activity: Activity::Cloud,
        id: "cloud",
        display_name: "Cloud Sync",
        label: "Cloud Storage Sync",
        category: Category::Productivity,
        watts_per_hour: 90.0,
        tip: "Sync files during off-peak hours to reduce server load!",
    },
    ActivityDefinition {
        activity: Activity::Search,
        id: "search",
        display_name: "Web Search",
        label: "Web Searching",
        category: Category::Productivity,
        watts_per_hour: 70.0,
        tip: "Use specific keywords to find results faster and save energy!",
    },
];

impl Activity {
    pub const ALL: [Activity; 12] = [
        Activity::Youtube,
        Activity::Netflix,
        Activity::Gaming,
        Activity::Social,
        Activity::Email,
        Activity::VideoCalls,
        Activity::Music,
        Activity::Shopping,
        Activity::Tiktok,
        Activity::Podcast,
        Activity::Cloud,
        Activity::Search,
    ];

    /// Look up an activity by its string id. Case-insensitive.
    pub fn from_id(id: &str) -> Option<Activity> {
        let id = id.trim();
        CATALOG
            .iter()
            .find(|def| def.id.eq_ignore_ascii_case(id))
            .map(|def| def.activity)
    }

    pub fn definition(&self) -> &'static ActivityDefinition {
        // CATALOG is laid out in the same order as the enum variants.
        &CATALOG[*self as usize]
    }

    pub fn id(&self) -> &'static str {
        self.definition().id
    }

    pub fn display_name(&self) -> &'static str {
        self.definition().display_name
    }

    pub fn category(&self) -> Category {
        self.definition().category
    }

    pub fn watts_per_hour(&self) -> f64 {
        self.definition().watts_per_hour
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Activity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::from_id(s).ok_or_else(|| ValidationError::UnknownActivity(s.to_string()))
    }
}

/// Every activity definition, in catalog order.
pub fn all() -> &'static [ActivityDefinition] {
    &CATALOG
}

/// Activities in a category. `None` means every category.
pub fn filter_by_category(category: Option<Category>) -> Vec<&'static ActivityDefinition> {
    CATALOG
        .iter()
        .filter(|def| category.map_or(true, |c| def.category == c))
        .collect()
}

/// Watts-per-hour for a raw string id, or `None` when the id is unknown.
pub fn watts_per_hour(id: &str) -> Option<f64> {
    Activity::from_id(id).map(|a| a.watts_per_hour())
}
