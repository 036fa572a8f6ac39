use serde::Serialize;

use crate::domain::{Platform, Post, PostAnalytics, engagement_rate};

/// Reach and engagement for one platform.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformPerformance {
    pub platform: Platform,
    pub label: &'static str,
    /// Posts targeting this platform, with or without analytics.
    pub posts: usize,
    pub reach: u64,
    pub interactions: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub total_reach: u64,
    pub total_interactions: u64,
    pub engagement_rate: f64,
    pub platforms: Vec<PlatformPerformance>,
    /// Posts with analytics, most viewed first.
    pub top_posts: Vec<Post>,
}

/// Sum the snapshots of every post that has one.
pub(crate) fn totals<'a>(posts: impl IntoIterator<Item = &'a Post>) -> PostAnalytics {
    posts
        .into_iter()
        .filter_map(|post| post.analytics)
        .fold(PostAnalytics::default(), |acc, a| PostAnalytics {
            views: acc.views + a.views,
            likes: acc.likes + a.likes,
            comments: acc.comments + a.comments,
            shares: acc.shares + a.shares,
        })
}

pub fn analytics_view(posts: &[Post]) -> AnalyticsView {
    let overall = totals(posts);

    let platforms = Platform::ALL
        .into_iter()
        .map(|platform| {
            let targeting: Vec<&Post> = posts.iter().filter(|p| p.targets(platform)).collect();
            let sum = totals(targeting.iter().copied());
            PlatformPerformance {
                platform,
                label: platform.label(),
                posts: targeting.len(),
                reach: sum.views,
                interactions: sum.interactions(),
                engagement_rate: sum.engagement_rate(),
            }
        })
        .collect();

    let mut top_posts: Vec<Post> = posts
        .iter()
        .filter(|p| p.analytics.is_some())
        .cloned()
        .collect();
    // Stable sort keeps collection order among equal view counts.
    top_posts.sort_by_key(|p| std::cmp::Reverse(p.analytics.map(|a| a.views).unwrap_or(0)));

    AnalyticsView {
        total_reach: overall.views,
        total_interactions: overall.interactions(),
        engagement_rate: engagement_rate(overall.interactions(), overall.views),
        platforms,
        top_posts,
    }
}
