//! Per-user performance report.

use super::{into_day_series, DayBucket};
use crate::libs::aggregate;
use crate::libs::records::{TaskPriority, TaskRecord, TaskStatus, UserRecord};
use crate::libs::window::{DateWindow, WeekKey};
use crate::store::{RecordStore, TaskFilter, TimeLogFilter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Headline numbers for one user over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualSummary {
    /// Tasks completed within the window.
    pub tasks_completed: i64,
    /// Minutes logged within the window.
    pub minutes_logged: i64,
    /// Completions per window day, `completed / max(1, window_days)`,
    /// one decimal.
    pub avg_tasks_per_day: f64,
    /// `minutes_logged / tasks_completed`, 0 when nothing completed.
    pub avg_minutes_per_task: f64,
    /// All-time completed over all-time total, percent, rounded.
    /// 0 for a user with no tasks at all.
    pub completion_rate: i64,
}

/// One ISO week of activity. Weeks with zero activity are omitted from
/// the trend, unlike the daily series which is never gap-dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    pub week: WeekKey,
    pub tasks_completed: i64,
    pub minutes_logged: i64,
    pub avg_minutes_per_task: f64,
}

/// Contribution to one project within the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectContribution {
    pub project_id: i64,
    pub project_name: String,
    pub tasks_completed: i64,
    pub minutes_logged: i64,
}

/// Complete per-user report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualReport {
    pub user: UserRecord,
    pub window: DateWindow,
    pub summary: IndividualSummary,
    pub status_breakdown: BTreeMap<TaskStatus, i64>,
    pub priority_breakdown: BTreeMap<TaskPriority, i64>,
    /// Tasks completed per window day, gap-filled.
    pub daily_completions: Vec<DayBucket>,
    /// Minutes logged per window day, gap-filled.
    pub daily_minutes: Vec<DayBucket>,
    pub weekly_trend: Vec<WeeklyTrendPoint>,
    /// Top 5 projects by tasks completed; zero-activity entries dropped.
    pub top_projects: Vec<ProjectContribution>,
}

impl IndividualReport {
    /// Builds the report for one user, or `Ok(None)` when the user does
    /// not exist.
    pub async fn build<S: RecordStore>(store: &S, user_id: i64, window: DateWindow) -> Result<Option<Self>> {
        let window_filter = TaskFilter {
            involving_user: Some(user_id),
            created_within: Some(window),
            ..Default::default()
        };
        let all_filter = TaskFilter {
            involving_user: Some(user_id),
            ..Default::default()
        };
        let log_filter = TimeLogFilter {
            user_id: Some(user_id),
            started_within: Some(window),
            ..Default::default()
        };

        let (users, window_tasks, all_tasks, logs, projects) = tokio::try_join!(
            store.fetch_users(),
            store.fetch_tasks(&window_filter),
            store.fetch_tasks(&all_filter),
            store.fetch_time_logs(&log_filter),
            store.fetch_projects(),
        )?;

        let Some(user) = users.into_iter().find(|u| u.id == user_id) else {
            debug!(user_id, "individual report requested for unknown user");
            return Ok(None);
        };

        let completed: Vec<&TaskRecord> = window_tasks
            .iter()
            .filter(|task| task.completed_on().is_some_and(|day| window.contains(day)))
            .collect();
        let minutes_logged: i64 = logs.iter().map(|log| log.minutes()).sum();
        let all_time_completed = all_tasks.iter().filter(|task| task.is_completed()).count() as i64;

        let summary = IndividualSummary {
            tasks_completed: completed.len() as i64,
            minutes_logged,
            avg_tasks_per_day: aggregate::round1(completed.len() as f64 / window.num_days().max(1) as f64),
            avg_minutes_per_task: aggregate::ratio(minutes_logged, completed.len() as i64),
            completion_rate: aggregate::percent(all_time_completed, all_tasks.len() as i64),
        };

        let mut daily_completions = aggregate::day_buckets(&window);
        for task in &completed {
            if let Some(day) = task.completed_on() {
                aggregate::count_into(&mut daily_completions, day);
            }
        }
        let mut daily_minutes = aggregate::day_buckets(&window);
        for log in &logs {
            aggregate::add_into(&mut daily_minutes, log.started_on(), log.minutes());
        }

        // Weeks enter the trend only when something happened in them.
        let mut weekly: BTreeMap<WeekKey, (i64, i64)> = BTreeMap::new();
        for task in &completed {
            if let Some(day) = task.completed_on() {
                weekly.entry(WeekKey::of(day)).or_default().0 += 1;
            }
        }
        for log in &logs {
            weekly.entry(WeekKey::of(log.started_on())).or_default().1 += log.minutes();
        }
        let weekly_trend = weekly
            .into_iter()
            .map(|(week, (tasks, minutes))| WeeklyTrendPoint {
                week,
                tasks_completed: tasks,
                minutes_logged: minutes,
                avg_minutes_per_task: aggregate::ratio(minutes, tasks),
            })
            .collect();

        // Attribute logged minutes to projects through the task join,
        // built once as a lookup map.
        let task_index = aggregate::index_by(&all_tasks, |task| task.id);
        let project_index = aggregate::index_by(&projects, |project| project.id);
        let mut per_project: BTreeMap<i64, (i64, i64)> = BTreeMap::new();
        for task in &completed {
            per_project.entry(task.project_id).or_default().0 += 1;
        }
        for log in &logs {
            if let Some(task) = task_index.get(&log.task_id) {
                per_project.entry(task.project_id).or_default().1 += log.minutes();
            }
        }
        let mut top_projects: Vec<ProjectContribution> = per_project
            .into_iter()
            .filter(|(_, (tasks, minutes))| *tasks > 0 || *minutes > 0)
            .map(|(project_id, (tasks_completed, minutes_logged))| ProjectContribution {
                project_id,
                project_name: project_index
                    .get(&project_id)
                    .map(|project| project.name.clone())
                    .unwrap_or_default(),
                tasks_completed,
                minutes_logged,
            })
            .collect();
        aggregate::rank_desc(&mut top_projects, |entry| entry.tasks_completed);
        top_projects.truncate(5);

        debug!(
            user_id,
            days = window.num_days(),
            tasks_completed = summary.tasks_completed,
            minutes_logged = summary.minutes_logged,
            "built individual report"
        );

        Ok(Some(IndividualReport {
            user,
            window,
            summary,
            status_breakdown: aggregate::status_histogram(window_tasks.iter()),
            priority_breakdown: aggregate::priority_histogram(window_tasks.iter()),
            daily_completions: into_day_series(daily_completions),
            daily_minutes: into_day_series(daily_minutes),
            weekly_trend,
            top_projects,
        }))
    }
}
