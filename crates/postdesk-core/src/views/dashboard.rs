use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use super::analytics::totals;
use crate::domain::{ContentIdea, Post, PostId, PostStatus};

/// Posts listed under "Recent Activity".
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub scheduled_posts: usize,
    pub published_posts: usize,
    pub active_platforms: usize,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledSlot {
    pub post_id: PostId,
    pub scheduled_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub next_scheduled: Option<ScheduledSlot>,
    pub suggestions: Vec<ContentIdea>,
    pub recent_activity: Vec<Post>,
}

pub fn dashboard_view<Tz: TimeZone>(
    posts: &[Post],
    ideas: &[ContentIdea],
    now: &DateTime<Tz>,
) -> DashboardView {
    let now = now.with_timezone(&Utc);
    let count = |status: PostStatus| posts.iter().filter(|p| p.status == status).count();

    let active_platforms = posts
        .iter()
        .flat_map(|p| p.platforms.iter().copied())
        .collect::<HashSet<_>>()
        .len();

    let next_scheduled = posts
        .iter()
        .filter_map(|p| {
            let at = p.scheduled_date.filter(|at| *at > now)?;
            Some(ScheduledSlot {
                post_id: p.id.clone(),
                scheduled_date: at,
            })
        })
        .min_by_key(|slot| slot.scheduled_date);

    DashboardView {
        stats: DashboardStats {
            total_posts: posts.len(),
            scheduled_posts: count(PostStatus::Scheduled),
            published_posts: count(PostStatus::Published),
            active_platforms,
            engagement_rate: totals(posts).engagement_rate(),
        },
        next_scheduled,
        suggestions: ideas.iter().filter(|idea| idea.suggested).cloned().collect(),
        recent_activity: posts.iter().take(RECENT_ACTIVITY_LIMIT).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPost, Platform, Priority};
    use chrono::Duration;

    fn post(id: &str, platforms: Vec<Platform>, status: PostStatus) -> Post {
        let mut post = Post::create(NewPost::new(id, platforms), Utc::now()).unwrap();
        post.id = PostId::new(id);
        post.status = status;
        post
    }

    #[test]
    fn test_stats_and_recent_activity() {
        let posts = vec![
            post("4", vec![Platform::Twitter], PostStatus::Draft),
            post("3", vec![Platform::Twitter, Platform::Linkedin], PostStatus::Scheduled),
            post("2", vec![Platform::Facebook], PostStatus::Published),
            post("1", vec![Platform::Facebook], PostStatus::Scheduled),
        ];
        let ideas = vec![
            ContentIdea::new("1", "Mental Health Week", "Health", Priority::High, true),
            ContentIdea::new("2", "New Scanner", "Updates", Priority::Low, false),
        ];

        let view = dashboard_view(&posts, &ideas, &Utc::now());
        assert_eq!(view.stats.total_posts, 4);
        assert_eq!(view.stats.scheduled_posts, 2);
        assert_eq!(view.stats.published_posts, 1);
        assert_eq!(view.stats.active_platforms, 3);
        assert_eq!(view.stats.engagement_rate, 0.0);

        let recent: Vec<&str> = view.recent_activity.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(recent, vec!["4", "3", "2"]);

        assert_eq!(view.suggestions.len(), 1);
        assert_eq!(view.suggestions[0].id, "1");
    }

    #[test]
    fn test_next_scheduled_ignores_past_slots() {
        let now = Utc::now();
        let mut past = post("past", vec![Platform::Twitter], PostStatus::Scheduled);
        past.scheduled_date = Some(now - Duration::hours(1));
        let mut later = post("later", vec![Platform::Twitter], PostStatus::Scheduled);
        later.scheduled_date = Some(now + Duration::days(2));
        let mut soon = post("soon", vec![Platform::Twitter], PostStatus::Scheduled);
        soon.scheduled_date = Some(now + Duration::hours(3));

        let view = dashboard_view(&[past, later, soon.clone()], &[], &now);
        assert_eq!(
            view.next_scheduled,
            Some(ScheduledSlot {
                post_id: soon.id,
                scheduled_date: now + Duration::hours(3),
            })
        );
    }
}
