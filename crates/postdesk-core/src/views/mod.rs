//! Read-only projections of the post collection, one per dashboard view.
//!
//! Every view is a pure function of the posts, the content ideas and the
//! current time. None of them mutate anything.

mod analytics;
mod calendar;
mod content;
mod dashboard;
mod workflow;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentIdea, Post};
use crate::error::DomainError;

pub use analytics::{AnalyticsView, PlatformPerformance, analytics_view};
pub use calendar::{
    CALENDAR_DAYS, CalendarDay, CalendarEntry, CalendarView, DAYS_BEFORE_TODAY, calendar_view,
};
pub use content::{ContentView, StatusBucket, content_view};
pub use dashboard::{
    DashboardStats, DashboardView, RECENT_ACTIVITY_LIMIT, ScheduledSlot, dashboard_view,
};
pub use workflow::{WorkflowColumn, WorkflowView, workflow_view};

/// View selector. The dashboard is shown first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Content,
    Calendar,
    Analytics,
    Workflow,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Content,
        View::Calendar,
        View::Analytics,
        View::Workflow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Content => "content",
            View::Calendar => "calendar",
            View::Analytics => "analytics",
            View::Workflow => "workflow",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "View",
                id: s.to_string(),
            })
    }
}

/// A rendered view, tagged with its selector on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    Dashboard(DashboardView),
    Content(ContentView),
    Calendar(CalendarView),
    Analytics(AnalyticsView),
    Workflow(WorkflowView),
}

/// Render the selected view over the current collection.
pub fn render_view<Tz: TimeZone>(
    view: View,
    posts: &[Post],
    ideas: &[ContentIdea],
    now: &DateTime<Tz>,
) -> ViewModel {
    match view {
        View::Dashboard => ViewModel::Dashboard(dashboard_view(posts, ideas, now)),
        View::Content => ViewModel::Content(content_view(posts)),
        View::Calendar => ViewModel::Calendar(calendar_view(posts, now)),
        View::Analytics => ViewModel::Analytics(analytics_view(posts)),
        View::Workflow => ViewModel::Workflow(workflow_view(posts)),
    }
}
