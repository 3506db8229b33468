//! Flat record types consumed by the reporting engine.
//!
//! All records are owned and mutated by the surrounding work-management
//! application; the engine only reads them. Soft-deleted rows carry a
//! `deleted_at` timestamp and are invisible to every fetch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Completed,
    Blocked,
}

impl TaskStatus {
    /// The fixed enumerated set, in display order. Histograms always emit
    /// every variant, zero-filled.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority assigned to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task row.
///
/// Invariant upstream: `completed_at` is set only when the status
/// transitioned to completed. The engine tolerates violations: a stray
/// `completed_at` on a non-completed row never counts as a completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: i64,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Calendar day (UTC) the task was completed on, if it is completed
    /// and the completion timestamp is present.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        if self.is_completed() {
            self.completed_at.map(|ts| ts.date_naive())
        } else {
            None
        }
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// A single time-log row. An open log has `ended_at = None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogRecord {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

impl TimeLogRecord {
    /// Normalized duration in minutes.
    ///
    /// `duration_minutes` wins when present and non-zero; otherwise the
    /// duration is derived as `floor((ended_at - started_at) / 60s)`.
    /// Open logs contribute 0 minutes to closed-duration sums.
    pub fn minutes(&self) -> i64 {
        match self.duration_minutes {
            Some(minutes) if minutes != 0 => minutes,
            _ => match self.ended_at {
                Some(ended_at) => ((ended_at - self.started_at).num_seconds() / 60).max(0),
                None => 0,
            },
        }
    }

    /// Calendar day (UTC) the log started on. Time logs are always
    /// bucketed by their start, never their end.
    pub fn started_on(&self) -> NaiveDate {
        self.started_at.date_naive()
    }
}

/// A user profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: i64,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Membership of a user in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_id: i64,
    pub user_id: i64,
    pub role: String,
}

/// A recorded activity event, scoped to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: i64,
    pub project_id: i64,
    pub user_id: i64,
    pub action: String,
    pub created_at: DateTime<Utc>,
}
