use serde::Serialize;

use crate::domain::{Post, PostStatus};

/// Statuses shown on the content board, in column order.
const BOARD_STATUSES: [PostStatus; 3] = [
    PostStatus::Draft,
    PostStatus::Scheduled,
    PostStatus::Published,
];

#[derive(Debug, Clone, Serialize)]
pub struct StatusBucket {
    pub status: PostStatus,
    pub count: usize,
    pub posts: Vec<Post>,
}

/// Content board: posts split into draft, scheduled and published columns.
#[derive(Debug, Clone, Serialize)]
pub struct ContentView {
    pub buckets: Vec<StatusBucket>,
}

/// Failed posts belong to no column.
pub fn content_view(posts: &[Post]) -> ContentView {
    let buckets = BOARD_STATUSES
        .into_iter()
        .map(|status| {
            let posts: Vec<Post> = posts.iter().filter(|p| p.status == status).cloned().collect();
            StatusBucket {
                status,
                count: posts.len(),
                posts,
            }
        })
        .collect();

    ContentView { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPost, Platform, PostId};
    use chrono::Utc;
    use std::collections::HashSet;

    fn post(id: &str, status: PostStatus) -> Post {
        let mut post = Post::create(NewPost::new(id, vec![Platform::Twitter]), Utc::now()).unwrap();
        post.id = PostId::new(id);
        post.status = status;
        post
    }

    #[test]
    fn test_buckets_partition_posts() {
        let posts = vec![
            post("1", PostStatus::Scheduled),
            post("2", PostStatus::Draft),
            post("3", PostStatus::Published),
            post("4", PostStatus::Draft),
            post("5", PostStatus::Failed),
        ];

        let view = content_view(&posts);
        let statuses: Vec<PostStatus> = view.buckets.iter().map(|b| b.status).collect();
        assert_eq!(statuses, BOARD_STATUSES.to_vec());

        let mut seen = HashSet::new();
        for bucket in &view.buckets {
            assert_eq!(bucket.count, bucket.posts.len());
            for p in &bucket.posts {
                assert_eq!(p.status, bucket.status);
                assert!(seen.insert(p.id.clone()), "post {} in two buckets", p.id);
            }
        }
        assert_eq!(seen.len(), 4);
        assert!(!seen.contains(&PostId::new("5")));

        let drafts: Vec<&str> = view.buckets[0].posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(drafts, vec!["2", "4"]);
    }
}
