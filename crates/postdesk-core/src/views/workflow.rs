use serde::Serialize;

use crate::domain::{Post, WorkflowStage};

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowColumn {
    pub stage: WorkflowStage,
    pub label: &'static str,
    pub count: usize,
    pub posts: Vec<Post>,
    /// Stage the posts in this column can move to. Absent for the last column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_stage: Option<WorkflowStage>,
}

/// Pipeline board, one column per stage.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowView {
    pub columns: Vec<WorkflowColumn>,
}

pub fn workflow_view(posts: &[Post]) -> WorkflowView {
    let columns = WorkflowStage::ALL
        .into_iter()
        .map(|stage| {
            let posts: Vec<Post> = posts
                .iter()
                .filter(|p| p.workflow_stage == stage)
                .cloned()
                .collect();
            WorkflowColumn {
                stage,
                label: stage.label(),
                count: posts.len(),
                posts,
                next_stage: stage.next(),
            }
        })
        .collect();

    WorkflowView { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPost, Platform, PostId};
    use chrono::Utc;

    #[test]
    fn test_columns_follow_pipeline() {
        let mut review =
            Post::create(NewPost::new("r", vec![Platform::Twitter]), Utc::now()).unwrap();
        review.id = PostId::new("r");
        review.move_to_stage(WorkflowStage::Review);
        let draft = Post::create(NewPost::new("d", vec![Platform::Twitter]), Utc::now()).unwrap();

        let view = workflow_view(&[review, draft]);
        assert_eq!(view.columns.len(), 6);
        assert_eq!(view.columns[0].stage, WorkflowStage::ContentCreation);
        assert_eq!(view.columns[0].count, 1);
        assert_eq!(view.columns[1].posts[0].id, PostId::new("r"));
        assert_eq!(view.columns[1].next_stage, Some(WorkflowStage::Approval));
        assert_eq!(view.columns[5].next_stage, None);
        assert_eq!(view.columns[5].label, "Analytics");
    }
}
