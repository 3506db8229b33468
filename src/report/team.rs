//! Organization-wide rollup across every project and user.

use crate::libs::aggregate;
use crate::libs::records::{ProjectStatus, TaskStatus};
use crate::libs::window::DateWindow;
use crate::store::{RecordStore, TaskFilter, TimeLogFilter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Number of entries kept in the performer ranking.
const TOP_PERFORMER_CAP: usize = 10;

/// Org-wide headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub total_projects: i64,
    pub active_projects: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    /// Minutes logged within the window.
    pub minutes_logged: i64,
    /// Arithmetic mean of each project's own completion percentage.
    /// Every project carries equal weight regardless of task count; this
    /// is deliberately not a globally task-weighted ratio.
    pub avg_completion_percentage: i64,
}

/// One project's standing in the overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStanding {
    pub project_id: i64,
    pub name: String,
    pub status: ProjectStatus,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub completion_percentage: i64,
}

/// One user's standing in the performer ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerStanding {
    pub user_id: i64,
    pub full_name: String,
    /// Tasks completed within the window.
    pub tasks_completed: i64,
    /// Minutes logged within the window.
    pub minutes_logged: i64,
}

/// Complete team overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOverview {
    pub window: DateWindow,
    pub summary: TeamSummary,
    /// All projects, sorted descending by completion percentage.
    pub projects: Vec<ProjectStanding>,
    /// Top 10 users by tasks completed in the window.
    pub top_performers: Vec<PerformerStanding>,
    /// Org-wide task status distribution, all five values present.
    pub status_distribution: BTreeMap<TaskStatus, i64>,
}

impl TeamOverview {
    /// Builds the org-wide overview. Task counts reflect the current
    /// state of every non-deleted task; time logs and performer
    /// completions are scoped to the window.
    pub async fn build<S: RecordStore>(store: &S, window: DateWindow) -> Result<Self> {
        let log_filter = TimeLogFilter {
            started_within: Some(window),
            ..Default::default()
        };

        let task_filter = TaskFilter::default();
        let (projects, tasks, logs, users) = tokio::try_join!(
            store.fetch_projects(),
            store.fetch_tasks(&task_filter),
            store.fetch_time_logs(&log_filter),
            store.fetch_users(),
        )?;

        // Single pass over tasks feeds both the per-project and the
        // per-user rollups.
        let mut by_project: HashMap<i64, (i64, i64)> = HashMap::new();
        let mut completed_by_user: HashMap<i64, i64> = HashMap::new();
        for task in &tasks {
            let slot = by_project.entry(task.project_id).or_default();
            slot.0 += 1;
            if task.is_completed() {
                slot.1 += 1;
                if let (Some(assignee), Some(day)) = (task.assignee_id, task.completed_on()) {
                    if window.contains(day) {
                        *completed_by_user.entry(assignee).or_default() += 1;
                    }
                }
            }
        }
        let mut minutes_by_user: HashMap<i64, i64> = HashMap::new();
        for log in &logs {
            *minutes_by_user.entry(log.user_id).or_default() += log.minutes();
        }

        let mut standings: Vec<ProjectStanding> = projects
            .iter()
            .map(|project| {
                let (total, completed) = by_project.get(&project.id).copied().unwrap_or((0, 0));
                ProjectStanding {
                    project_id: project.id,
                    name: project.name.clone(),
                    status: project.status,
                    total_tasks: total,
                    completed_tasks: completed,
                    completion_percentage: aggregate::percent(completed, total),
                }
            })
            .collect();
        aggregate::rank_desc(&mut standings, |standing| standing.completion_percentage);

        let avg_completion_percentage = if standings.is_empty() {
            0
        } else {
            let sum: i64 = standings.iter().map(|s| s.completion_percentage).sum();
            (sum as f64 / standings.len() as f64).round() as i64
        };

        let mut top_performers: Vec<PerformerStanding> = users
            .iter()
            .map(|user| PerformerStanding {
                user_id: user.id,
                full_name: user.full_name.clone(),
                tasks_completed: completed_by_user.get(&user.id).copied().unwrap_or(0),
                minutes_logged: minutes_by_user.get(&user.id).copied().unwrap_or(0),
            })
            .collect();
        aggregate::rank_desc(&mut top_performers, |standing| standing.tasks_completed);
        top_performers.truncate(TOP_PERFORMER_CAP);

        let summary = TeamSummary {
            total_projects: projects.len() as i64,
            active_projects: projects.iter().filter(|p| p.status == ProjectStatus::Active).count() as i64,
            total_tasks: tasks.len() as i64,
            completed_tasks: tasks.iter().filter(|t| t.is_completed()).count() as i64,
            minutes_logged: logs.iter().map(|log| log.minutes()).sum(),
            avg_completion_percentage,
        };

        debug!(
            projects = summary.total_projects,
            tasks = summary.total_tasks,
            minutes_logged = summary.minutes_logged,
            "built team overview"
        );

        Ok(TeamOverview {
            window,
            summary,
            projects: standings,
            top_performers,
            status_distribution: aggregate::status_histogram(tasks.iter()),
        })
    }
}
