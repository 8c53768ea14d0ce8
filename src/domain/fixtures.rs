//! Hard-coded demo data rendered by the console
//!
//! Nothing here is fetched or computed. Uptime and SEO score in particular are
//! static numbers, not measurements.

use serde::Serialize;

use super::post::{Post, PostStatus};

pub const DEMO_POSTS: &[Post] = &[
    Post {
        id: 1,
        title: "Port Expansion Announcement",
        status: PostStatus::Published,
        author: "Sijo Joseph",
        updated: "11 Nov 2025",
        tags: &["News", "Logistics"],
        cover: "https://images.unsplash.com/photo-1586521995568-39ab49c89a03?q=80&w=1200&auto=format&fit=crop",
    },
    Post {
        id: 2,
        title: "Sustainability Initiatives 2026",
        status: PostStatus::Draft,
        author: "Pushpa Rao",
        updated: "10 Nov 2025",
        tags: &["Sustainability", "Corporate"],
        cover: "https://images.unsplash.com/photo-1526498460520-4c246339dccb?q=80&w=1200&auto=format&fit=crop",
    },
    Post {
        id: 3,
        title: "New Customer Portal Walkthrough",
        status: PostStatus::Scheduled,
        author: "Binbish",
        updated: "08 Nov 2025",
        tags: &["Guide", "Portal"],
        cover: "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?q=80&w=1200&auto=format&fit=crop",
    },
];

pub const UPTIME: f64 = 99.9;
pub const SEO_SCORE: u16 = 92;

#[derive(Debug, Clone, Copy)]
pub struct Kpi {
    pub label: &'static str,
    pub value: u64,
    pub delta: &'static str,
}

pub const KPIS: &[Kpi] = &[
    Kpi { label: "Total Articles", value: 128, delta: "+8 this week" },
    Kpi { label: "Drafts", value: 17, delta: "-2 vs last week" },
    Kpi { label: "Scheduled", value: 9, delta: "+3 upcoming" },
    Kpi { label: "Media Items", value: 642, delta: "+31 added" },
];

/// Small label/value pairs overlaid on the hero banner
#[derive(Debug, Clone)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: String,
}

pub fn hero_stats() -> Vec<HeroStat> {
    vec![
        HeroStat { label: "Uptime", value: format!("{UPTIME}%") },
        HeroStat { label: "SEO Score", value: SEO_SCORE.to_string() },
        HeroStat { label: "This Week", value: "+18%".to_string() },
        HeroStat { label: "Approvals", value: "7 pending".to_string() },
    ]
}

pub const DIVISIONS: &[&str] = &["Ports", "Shipping", "Free Zones", "Logistics", "Oman Post"];

#[derive(Debug, Clone, Copy)]
pub struct TrafficPoint {
    pub month: &'static str,
    pub visits: u64,
    pub leads: u64,
}

pub const TRAFFIC: &[TrafficPoint] = &[
    TrafficPoint { month: "Jan", visits: 32_000, leads: 180 },
    TrafficPoint { month: "Feb", visits: 36_000, leads: 210 },
    TrafficPoint { month: "Mar", visits: 41_000, leads: 240 },
    TrafficPoint { month: "Apr", visits: 39_000, leads: 230 },
    TrafficPoint { month: "May", visits: 47_000, leads: 300 },
    TrafficPoint { month: "Jun", visits: 52_000, leads: 340 },
];

#[derive(Debug, Clone, Copy)]
pub struct ContentShare {
    pub name: &'static str,
    pub value: u64,
}

pub const CONTENT_MIX: &[ContentShare] = &[
    ContentShare { name: "News", value: 42 },
    ContentShare { name: "Pages", value: 28 },
    ContentShare { name: "Gallery", value: 18 },
    ContentShare { name: "Videos", value: 12 },
];

#[derive(Debug, Clone, Copy)]
pub struct DepartmentContent {
    pub dept: &'static str,
    pub published: u64,
    pub drafts: u64,
}

pub const DEPARTMENTS: &[DepartmentContent] = &[
    DepartmentContent { dept: "Ports", published: 18, drafts: 4 },
    DepartmentContent { dept: "Shipping", published: 14, drafts: 6 },
    DepartmentContent { dept: "Free Zones", published: 10, drafts: 3 },
    DepartmentContent { dept: "Logistics", published: 12, drafts: 2 },
    DepartmentContent { dept: "Oman Post", published: 9, drafts: 5 },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub actor: &'static str,
    pub action: &'static str,
    pub target: &'static str,
    pub time: &'static str,
}

pub const ACTIVITY_LOG: &[ActivityEntry] = &[
    ActivityEntry {
        id: 1,
        actor: "Sijo Joseph",
        action: "Published article",
        target: "Port Expansion Announcement",
        time: "2h ago",
    },
    ActivityEntry {
        id: 2,
        actor: "Pushpa Rao",
        action: "Saved draft",
        target: "Sustainability Initiatives 2026",
        time: "5h ago",
    },
    ActivityEntry {
        id: 3,
        actor: "Binbish",
        action: "Uploaded media",
        target: "customer-portal.png",
        time: "1 day ago",
    },
    ActivityEntry {
        id: 4,
        actor: "System",
        action: "SEO scan completed",
        target: "Sitewide",
        time: "2 days ago",
    },
    ActivityEntry {
        id: 5,
        actor: "Admin",
        action: "Removed media",
        target: "old-banner.jpg",
        time: "3 days ago",
    },
];

pub const HUBS: &[&str] = &["Ports", "Free Zones", "Logistics"];
pub const HUBS_MAP: &str =
    "https://images.unsplash.com/photo-1526779259212-939e64788e3c?q=80&w=2000&auto=format&fit=crop";

/// Prefilled editor form
#[derive(Debug, Clone, Copy)]
pub struct EditorDraft {
    pub title: &'static str,
    pub body: &'static str,
    pub tags: &'static str,
    pub status: PostStatus,
    pub preview: &'static str,
}

pub const EDITOR_DRAFT: EditorDraft = EditorDraft {
    title: "Logistics Innovation Summit Recap",
    body: "Asyad Group showcased advancements across ports, free zones, and integrated logistics...",
    tags: "news, corporate, logistics",
    status: PostStatus::Draft,
    preview: "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?q=80&w=1200&auto=format&fit=crop",
};

pub const UPLOAD_HINT: &str = "Drag & drop or click to upload (JPG/PNG up to 5MB)";
pub const QUICK_CREATE: &str = "Quick Create: News, Page, Gallery, Video";

pub const MEDIA_TILE_COUNT: usize = 8;

pub fn media_url(index: usize) -> String {
    format!("https://source.unsplash.com/random/600x400?logistics,port&sig={index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_post_ids_are_unique() {
        let ids: BTreeSet<u32> = DEMO_POSTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), DEMO_POSTS.len());
    }

    #[test]
    fn test_hero_stats_render_static_meters() {
        let stats = hero_stats();
        assert_eq!(stats[0].value, "99.9%");
        assert_eq!(stats[1].value, "92");
    }

    #[test]
    fn test_media_url_carries_index() {
        assert!(media_url(3).ends_with("sig=3"));
    }
}
