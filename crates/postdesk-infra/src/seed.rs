//! Sample posts and content ideas loaded at start-up.

use chrono::{DateTime, Duration, Utc};

use postdesk_core::domain::{
    ContentIdea, Platform, Post, PostAnalytics, PostId, PostStatus, Priority, WorkflowStage,
};

/// The three sample posts, dated relative to `now`.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: PostId::new("1"),
            content: "Join us for our Health Awareness Campaign! Learn about preventive care \
                      and wellness tips from our experts. #BharatLifeCare #HealthFirst"
                .to_string(),
            platforms: vec![Platform::Facebook, Platform::Instagram, Platform::Twitter],
            status: PostStatus::Scheduled,
            scheduled_date: Some(now + Duration::days(1)),
            published_date: None,
            images: vec!["health-campaign.jpg".to_string()],
            workflow_stage: WorkflowStage::Scheduling,
            approver: None,
            analytics: None,
        },
        Post {
            id: PostId::new("2"),
            content: "Our team of dedicated doctors and nurses are here to serve you 24/7. \
                      Your health is our priority! 🏥"
                .to_string(),
            platforms: vec![Platform::Instagram, Platform::Facebook],
            status: PostStatus::Published,
            scheduled_date: None,
            published_date: Some(now - Duration::days(2)),
            images: vec!["team-photo.jpg".to_string()],
            workflow_stage: WorkflowStage::Analytics,
            approver: None,
            analytics: Some(PostAnalytics {
                views: 15420,
                likes: 1243,
                comments: 87,
                shares: 156,
            }),
        },
        Post {
            id: PostId::new("3"),
            content: "Tips for maintaining a healthy lifestyle during monsoon season. \
                      Stay safe and healthy! 🌧️"
                .to_string(),
            platforms: vec![Platform::Twitter, Platform::Linkedin],
            status: PostStatus::Draft,
            scheduled_date: None,
            published_date: None,
            images: Vec::new(),
            workflow_stage: WorkflowStage::ContentCreation,
            approver: None,
            analytics: None,
        },
    ]
}

pub fn sample_ideas() -> Vec<ContentIdea> {
    vec![
        ContentIdea::new(
            "1",
            "Mental Health Awareness Week",
            "Health Education",
            Priority::High,
            true,
        ),
        ContentIdea::new(
            "2",
            "Patient Success Stories",
            "Testimonials",
            Priority::Medium,
            true,
        ),
        ContentIdea::new(
            "3",
            "New Medical Technology Announcement",
            "Updates",
            Priority::High,
            false,
        ),
        ContentIdea::new(
            "4",
            "Vaccination Drive Information",
            "Public Health",
            Priority::High,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use postdesk_core::views::{calendar_view, content_view};

    #[test]
    fn test_sample_posts_respect_stage_status_coupling() {
        for post in sample_posts(Utc::now()) {
            if let Some(status) = post.workflow_stage.status_override() {
                assert_eq!(post.status, status, "post {}", post.id);
            }
        }
    }

    #[test]
    fn test_scheduled_sample_shows_on_calendar_tomorrow() {
        let now = Utc::now();
        let view = calendar_view(&sample_posts(now), &now);

        let days: Vec<_> = view.days.iter().filter(|d| !d.posts.is_empty()).collect();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, (now + Duration::days(1)).date_naive());
        assert_eq!(days[0].posts[0].post_id, PostId::new("1"));
    }

    #[test]
    fn test_sample_posts_fill_each_content_column() {
        let view = content_view(&sample_posts(Utc::now()));
        assert!(view.buckets.iter().all(|b| b.count == 1));
    }
}
