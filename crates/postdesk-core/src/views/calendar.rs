use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;

use crate::domain::{Post, PostId};

/// Number of days shown on the calendar grid.
pub const CALENDAR_DAYS: i64 = 35;
/// Days shown before today; the rest of the grid lies after it.
pub const DAYS_BEFORE_TODAY: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub post_id: PostId,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub posts: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub today: NaiveDate,
    pub days: Vec<CalendarDay>,
}

/// Bucket scheduled posts into the 35-day window around `now`.
///
/// Days are calendar days in `now`'s time zone.
pub fn calendar_view<Tz: TimeZone>(posts: &[Post], now: &DateTime<Tz>) -> CalendarView {
    let tz = now.timezone();
    let today = now.date_naive();

    let scheduled: Vec<(NaiveDate, CalendarEntry)> = posts
        .iter()
        .filter_map(|post| {
            let local = post.scheduled_date?.with_timezone(&tz);
            Some((
                local.date_naive(),
                CalendarEntry {
                    post_id: post.id.clone(),
                    time: local.time(),
                },
            ))
        })
        .collect();

    let days = (0..CALENDAR_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset - DAYS_BEFORE_TODAY);
            CalendarDay {
                date,
                is_today: date == today,
                posts: scheduled
                    .iter()
                    .filter(|(day, _)| *day == date)
                    .map(|(_, entry)| entry.clone())
                    .collect(),
            }
        })
        .collect();

    CalendarView { today, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPost, Platform};
    use chrono::{FixedOffset, Utc};

    fn scheduled(id: &str, at: DateTime<Utc>) -> Post {
        let mut post = Post::create(NewPost::new(id, vec![Platform::Facebook]), at).unwrap();
        post.id = PostId::new(id);
        post.scheduled_date = Some(at);
        post
    }

    fn buckets_of<'a>(view: &'a CalendarView, id: &str) -> Vec<&'a CalendarDay> {
        view.days
            .iter()
            .filter(|day| day.posts.iter().any(|e| e.post_id.as_str() == id))
            .collect()
    }

    #[test]
    fn test_window_bounds() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let view = calendar_view(&[], &now);

        assert_eq!(view.days.len(), 35);
        assert_eq!(view.days[0].date, NaiveDate::from_ymd_opt(2026, 9, 30).unwrap());
        assert_eq!(view.days[34].date, NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
        let today: Vec<_> = view.days.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, view.today);
        assert!(view.days[15].is_today);
    }

    #[test]
    fn test_post_lands_in_exactly_one_day() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let posts = vec![
            scheduled("tomorrow", Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 0).unwrap()),
            scheduled("midnight", Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap()),
        ];

        let view = calendar_view(&posts, &now);

        let days = buckets_of(&view, "tomorrow");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(days[0].posts[0].time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());

        let days = buckets_of(&view, "midnight");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    }

    #[test]
    fn test_unscheduled_and_out_of_window_posts_are_skipped() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let mut unscheduled = scheduled("draft", now);
        unscheduled.scheduled_date = None;
        let posts = vec![
            unscheduled,
            scheduled("far", Utc.with_ymd_and_hms(2026, 12, 25, 9, 0, 0).unwrap()),
            scheduled("past", Utc.with_ymd_and_hms(2026, 9, 29, 9, 0, 0).unwrap()),
        ];

        let view = calendar_view(&posts, &now);
        assert!(view.days.iter().all(|day| day.posts.is_empty()));
    }

    #[test]
    fn test_days_follow_the_viewer_time_zone() {
        // 22:30 UTC on the 15th is already the 16th in UTC+05:30.
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 6, 0, 0).unwrap().with_timezone(&ist);
        let posts = vec![scheduled(
            "evening",
            Utc.with_ymd_and_hms(2026, 10, 15, 22, 30, 0).unwrap(),
        )];

        let view = calendar_view(&posts, &now);
        let days = buckets_of(&view, "evening");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(days[0].posts[0].time, NaiveTime::from_hms_opt(4, 0, 0).unwrap());
    }
}
