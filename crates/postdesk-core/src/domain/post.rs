use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WorkflowStage;
use crate::error::DomainError;

/// Post identifier.
///
/// New ids are the creation time in milliseconds since the Unix epoch, so two
/// posts created in the same millisecond collide unless the store bumps one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Time-based id for a post created at `now`.
    pub fn from_time(now: DateTime<Utc>) -> Self {
        Self(now.timestamp_millis().to_string())
    }

    /// The next candidate id after a collision.
    pub fn successor(&self) -> Self {
        match self.0.parse::<i64>() {
            Ok(millis) => Self((millis + 1).to_string()),
            Err(_) => Self(format!("{}-1", self.0)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Target social network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("Unknown platform: {s}")))
    }
}

/// Publication status. Driven by the workflow stage, never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
            PostStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engagement snapshot for a published post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAnalytics {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl PostAnalytics {
    pub fn interactions(&self) -> u64 {
        self.likes + self.comments + self.shares
    }

    /// Interactions per view, as a percentage. Zero when there are no views.
    pub fn engagement_rate(&self) -> f64 {
        engagement_rate(self.interactions(), self.views)
    }
}

pub(crate) fn engagement_rate(interactions: u64, views: u64) -> f64 {
    if views == 0 {
        0.0
    } else {
        interactions as f64 / views as f64 * 100.0
    }
}

/// Post entity - a unit of social content moving through the editorial workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    pub images: Vec<String>,
    pub workflow_stage: WorkflowStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<PostAnalytics>,
}

/// Payload of the new-post form.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: String,
    pub platforms: Vec<Platform>,
    pub images: Vec<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(content: impl Into<String>, platforms: Vec<Platform>) -> Self {
        Self {
            content: content.into(),
            platforms,
            ..Self::default()
        }
    }
}

impl Post {
    /// Create a draft post from the form payload.
    ///
    /// Requires non-empty content and at least one platform. The new post
    /// always starts as a `draft` at `content-creation`.
    pub fn create(new_post: NewPost, now: DateTime<Utc>) -> Result<Self, DomainError> {
        if new_post.content.is_empty() || new_post.platforms.is_empty() {
            return Err(DomainError::Validation(
                "Please fill in content and select at least one platform".to_string(),
            ));
        }

        let mut platforms = Vec::with_capacity(new_post.platforms.len());
        for platform in new_post.platforms {
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }

        Ok(Self {
            id: PostId::from_time(now),
            content: new_post.content,
            platforms,
            status: PostStatus::Draft,
            scheduled_date: new_post.scheduled_date,
            published_date: None,
            images: new_post.images,
            workflow_stage: WorkflowStage::ContentCreation,
            approver: None,
            analytics: None,
        })
    }

    /// Overwrite the workflow stage, forcing the status the stage implies.
    pub fn move_to_stage(&mut self, stage: WorkflowStage) {
        self.workflow_stage = stage;
        if let Some(status) = stage.status_override() {
            self.status = status;
        }
    }

    pub fn targets(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

/// Put a freshly created post at the front of the collection.
pub fn prepend_post(posts: Vec<Post>, post: Post) -> Vec<Post> {
    let mut next = Vec::with_capacity(posts.len() + 1);
    next.push(post);
    next.extend(posts);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_create_forces_draft_at_content_creation() {
        let post = Post::create(
            NewPost::new("Monsoon safety tips", vec![Platform::Twitter]),
            now(),
        )
        .unwrap();

        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.workflow_stage, WorkflowStage::ContentCreation);
        assert_eq!(post.id, PostId::new(now().timestamp_millis().to_string()));
        assert!(post.approver.is_none());
        assert!(post.analytics.is_none());
    }

    #[test]
    fn test_create_rejects_empty_content() {
        let err = Post::create(NewPost::new("", vec![Platform::Facebook]), now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_create_rejects_missing_platforms() {
        let err = Post::create(NewPost::new("Hello", vec![]), now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_create_dedupes_platforms_keeping_order() {
        let post = Post::create(
            NewPost::new(
                "Hello",
                vec![Platform::Instagram, Platform::Facebook, Platform::Instagram],
            ),
            now(),
        )
        .unwrap();
        assert_eq!(post.platforms, vec![Platform::Instagram, Platform::Facebook]);
    }

    #[test]
    fn test_prepend_puts_new_post_first() {
        let first = Post::create(NewPost::new("a", vec![Platform::Twitter]), now()).unwrap();
        let mut second = first.clone();
        second.id = first.id.successor();

        let posts = prepend_post(vec![first.clone()], second.clone());
        assert_eq!(posts, vec![second, first]);
    }

    #[test]
    fn test_successor() {
        assert_eq!(PostId::new("41").successor(), PostId::new("42"));
        assert_eq!(PostId::new("abc").successor(), PostId::new("abc-1"));
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("LinkedIn".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_engagement_rate() {
        let analytics = PostAnalytics {
            views: 1000,
            likes: 50,
            comments: 20,
            shares: 30,
        };
        assert_eq!(analytics.interactions(), 100);
        assert!((analytics.engagement_rate() - 10.0).abs() < 1e-9);
        assert_eq!(PostAnalytics::default().engagement_rate(), 0.0);
    }

    #[test]
    fn test_serializes_wire_names() {
        let post = Post::create(NewPost::new("Hello", vec![Platform::Linkedin]), now()).unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["workflow_stage"], "content-creation");
        assert_eq!(json["platforms"][0], "linkedin");
        assert!(json.get("analytics").is_none());
    }
}
