//! Per-project performance report with member breakdowns and schedule
//! variance.

use crate::libs::aggregate;
use crate::libs::records::{ActivityEvent, ProjectRecord, TaskPriority, TaskRecord, TaskStatus};
use crate::libs::window::DateWindow;
use crate::store::{ActivityFilter, RecordStore, TaskFilter, TimeLogFilter};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Number of activity events kept in the report, newest first.
const RECENT_ACTIVITY_CAP: usize = 10;

/// Headline numbers for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub blocked_tasks: i64,
    /// `completed / total * 100` rounded, 0 when the project has no tasks.
    pub completion_percentage: i64,
    /// Minutes logged against project tasks within the window.
    pub minutes_logged: i64,
    /// Sum of `estimated_hours` across all tasks.
    pub estimated_hours: f64,
    /// `(actual - estimated) / estimated * 100` rounded; 0 when no
    /// estimate exists (the division is guarded, never NaN).
    pub time_variance: i64,
    /// `minutes_logged / completed_tasks`, 0 when nothing is completed.
    pub avg_completion_minutes: f64,
    /// Calendar days until the project end date, negative when overdue,
    /// `None` when the project has no end date.
    pub days_remaining: Option<i64>,
}

/// One status slice of the task breakdown. Percentages are rounded
/// independently and need not sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: TaskStatus,
    pub count: i64,
    pub percentage: i64,
}

/// One priority slice with its completion count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritySlice {
    pub priority: TaskPriority,
    pub count: i64,
    pub completed: i64,
}

/// Cumulative state of the project as of one window day: how many tasks
/// existed and how many were already completed by then. A reconstruction,
/// not a per-day delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub total: i64,
    pub completed: i64,
}

/// Per-member statistics. Members with zero activity are still included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStats {
    pub user_id: i64,
    pub full_name: String,
    pub role: String,
    pub tasks_assigned: i64,
    pub tasks_completed: i64,
    pub minutes_logged: i64,
    pub completion_rate: i64,
}

/// Complete per-project report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project: ProjectRecord,
    pub window: DateWindow,
    pub summary: ProjectSummary,
    pub status_breakdown: Vec<StatusSlice>,
    pub priority_breakdown: Vec<PrioritySlice>,
    pub progress: Vec<ProgressPoint>,
    pub members: Vec<MemberStats>,
    /// The 10 most recent events, newest first.
    pub recent_activity: Vec<ActivityEvent>,
}

impl ProjectReport {
    /// Builds the report for one project, or `Ok(None)` when the project
    /// does not exist. `now` anchors the days-remaining calculation and
    /// is passed explicitly rather than read from ambient state.
    pub async fn build<S: RecordStore>(
        store: &S,
        project_id: i64,
        window: DateWindow,
        now: DateTime<Utc>,
    ) -> Result<Option<Self>> {
        let task_filter = TaskFilter {
            project_id: Some(project_id),
            ..Default::default()
        };
        let activity_filter = ActivityFilter {
            project_id: Some(project_id),
        };

        let (projects, tasks, members, activity, users) = tokio::try_join!(
            store.fetch_projects(),
            store.fetch_tasks(&task_filter),
            store.fetch_project_members(project_id),
            store.fetch_activity(&activity_filter),
            store.fetch_users(),
        )?;

        let Some(project) = projects.into_iter().find(|p| p.id == project_id) else {
            debug!(project_id, "project report requested for unknown project");
            return Ok(None);
        };

        // Time logs can only be fetched once the task ids are known.
        let log_filter = TimeLogFilter {
            task_ids: Some(tasks.iter().map(|task| task.id).collect()),
            started_within: Some(window),
            ..Default::default()
        };
        let logs = store.fetch_time_logs(&log_filter).await?;

        let total_tasks = tasks.len() as i64;
        let completed_tasks = tasks.iter().filter(|task| task.is_completed()).count() as i64;
        let minutes_logged: i64 = logs.iter().map(|log| log.minutes()).sum();
        let estimated_hours: f64 = tasks.iter().filter_map(|task| task.estimated_hours).sum();
        let estimated_minutes = (estimated_hours * 60.0).round() as i64;
        let time_variance = if estimated_minutes == 0 {
            0
        } else {
            (((minutes_logged - estimated_minutes) as f64 / estimated_minutes as f64) * 100.0).round() as i64
        };

        let summary = ProjectSummary {
            total_tasks,
            completed_tasks,
            in_progress_tasks: tasks.iter().filter(|t| t.status == TaskStatus::InProgress).count() as i64,
            blocked_tasks: tasks.iter().filter(|t| t.status == TaskStatus::Blocked).count() as i64,
            completion_percentage: aggregate::percent(completed_tasks, total_tasks),
            minutes_logged,
            estimated_hours,
            time_variance,
            avg_completion_minutes: aggregate::ratio(minutes_logged, completed_tasks),
            days_remaining: project.end_date.map(|end| (end - now.date_naive()).num_days()),
        };

        let status_histogram = aggregate::status_histogram(tasks.iter());
        let status_breakdown = TaskStatus::ALL
            .iter()
            .map(|status| {
                let count = status_histogram.get(status).copied().unwrap_or(0);
                StatusSlice {
                    status: *status,
                    count,
                    percentage: aggregate::percent(count, total_tasks),
                }
            })
            .collect();

        let priority_breakdown = TaskPriority::ALL
            .iter()
            .map(|priority| PrioritySlice {
                priority: *priority,
                count: tasks.iter().filter(|t| t.priority == *priority).count() as i64,
                completed: tasks
                    .iter()
                    .filter(|t| t.priority == *priority && t.is_completed())
                    .count() as i64,
            })
            .collect();

        let progress = replay_progress(&tasks, &window);

        // Per-member rollups: one pass over tasks, one over logs.
        let mut assigned_by_user: HashMap<i64, i64> = HashMap::new();
        let mut completed_by_user: HashMap<i64, i64> = HashMap::new();
        for task in &tasks {
            if let Some(assignee) = task.assignee_id {
                *assigned_by_user.entry(assignee).or_default() += 1;
                if task.is_completed() {
                    *completed_by_user.entry(assignee).or_default() += 1;
                }
            }
        }
        let mut minutes_by_user: HashMap<i64, i64> = HashMap::new();
        for log in &logs {
            *minutes_by_user.entry(log.user_id).or_default() += log.minutes();
        }
        let user_index = aggregate::index_by(&users, |user| user.id);
        let member_stats = members
            .iter()
            .map(|member| {
                let assigned = assigned_by_user.get(&member.user_id).copied().unwrap_or(0);
                let completed = completed_by_user.get(&member.user_id).copied().unwrap_or(0);
                MemberStats {
                    user_id: member.user_id,
                    full_name: user_index
                        .get(&member.user_id)
                        .map(|user| user.full_name.clone())
                        .unwrap_or_default(),
                    role: member.role.clone(),
                    tasks_assigned: assigned,
                    tasks_completed: completed,
                    minutes_logged: minutes_by_user.get(&member.user_id).copied().unwrap_or(0),
                    completion_rate: aggregate::percent(completed, assigned),
                }
            })
            .collect();

        let mut recent_activity = activity;
        recent_activity.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_activity.truncate(RECENT_ACTIVITY_CAP);

        debug!(
            project_id,
            total_tasks,
            completed_tasks,
            minutes_logged,
            "built project report"
        );

        Ok(Some(ProjectReport {
            project,
            window,
            summary,
            status_breakdown,
            priority_breakdown,
            progress,
            members: member_stats,
            recent_activity,
        }))
    }
}

/// Replays task existence and completion cumulatively across the window.
/// Both event lists are sorted once, then consumed with advancing
/// cursors, so the replay is O(tasks log tasks + days).
fn replay_progress(tasks: &[TaskRecord], window: &DateWindow) -> Vec<ProgressPoint> {
    let mut created: Vec<NaiveDate> = tasks.iter().map(|task| task.created_on()).collect();
    created.sort_unstable();
    let mut completed: Vec<NaiveDate> = tasks.iter().filter_map(|task| task.completed_on()).collect();
    completed.sort_unstable();

    let mut progress = Vec::new();
    let (mut created_cursor, mut completed_cursor) = (0usize, 0usize);
    for day in window.days() {
        while created_cursor < created.len() && created[created_cursor] <= day {
            created_cursor += 1;
        }
        while completed_cursor < completed.len() && completed[completed_cursor] <= day {
            completed_cursor += 1;
        }
        progress.push(ProgressPoint {
            date: day,
            total: created_cursor as i64,
            completed: completed_cursor as i64,
        });
    }
    progress
}
