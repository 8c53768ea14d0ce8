//! Posts and the status/query filter over them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Published,
    Scheduled,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [
        PostStatus::Draft,
        PostStatus::Published,
        PostStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
            PostStatus::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "scheduled" => Ok(Self::Scheduled),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// Sidebar quick filter. `All` bypasses the status check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Draft,
    Published,
    Scheduled,
}

impl StatusFilter {
    /// Chip order as shown in the sidebar
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Published,
        StatusFilter::Draft,
        StatusFilter::Scheduled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Draft => "Draft",
            StatusFilter::Published => "Published",
            StatusFilter::Scheduled => "Scheduled",
        }
    }

    pub fn matches(&self, status: PostStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Draft => status == PostStatus::Draft,
            StatusFilter::Published => status == PostStatus::Published,
            StatusFilter::Scheduled => status == PostStatus::Scheduled,
        }
    }

    /// Next chip in sidebar order, wrapping around
    pub fn next(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

impl From<PostStatus> for StatusFilter {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => StatusFilter::Draft,
            PostStatus::Published => StatusFilter::Published,
            PostStatus::Scheduled => StatusFilter::Scheduled,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<PostStatus>().map(Self::from)
    }
}

/// A demo article. Fixture data only; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub status: PostStatus,
    pub author: &'static str,
    pub updated: &'static str,
    pub tags: &'static [&'static str],
    pub cover: &'static str,
}

/// Posts whose title contains `query` (case-insensitive) and whose status
/// passes `status`, in their original order.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str, status: StatusFilter) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .filter(|post| status.matches(post.status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::DEMO_POSTS;

    fn titles(posts: &[&Post]) -> Vec<&'static str> {
        posts.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_empty_query_and_all_returns_everything() {
        let result = filter_posts(DEMO_POSTS, "", StatusFilter::All);
        assert_eq!(result.len(), DEMO_POSTS.len());
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_draft_filter() {
        let result = filter_posts(DEMO_POSTS, "", StatusFilter::Draft);
        assert_eq!(titles(&result), vec!["Sustainability Initiatives 2026"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let result = filter_posts(DEMO_POSTS, "PORT", StatusFilter::All);
        assert!(titles(&result).contains(&"Port Expansion Announcement"));
        // "Portal" matches too
        assert!(titles(&result).contains(&"New Customer Portal Walkthrough"));
    }

    #[test]
    fn test_no_match() {
        assert!(filter_posts(DEMO_POSTS, "nonexistent-xyz", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_both_predicates_apply() {
        let result = filter_posts(DEMO_POSTS, "port", StatusFilter::Scheduled);
        assert_eq!(titles(&result), vec!["New Customer Portal Walkthrough"]);
        assert!(filter_posts(DEMO_POSTS, "sustainability", StatusFilter::Published).is_empty());
    }

    #[test]
    fn test_status_filter_cycle_follows_chip_order() {
        let mut filter = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                StatusFilter::Published,
                StatusFilter::Draft,
                StatusFilter::Scheduled,
                StatusFilter::All
            ]
        );
        assert_eq!(StatusFilter::All.prev(), StatusFilter::Scheduled);
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(" draft ".parse::<StatusFilter>().unwrap(), StatusFilter::Draft);
        assert_eq!(
            "Published".parse::<StatusFilter>().unwrap(),
            StatusFilter::Published
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }
}
