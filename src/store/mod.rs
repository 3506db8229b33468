//! Read-only record store boundary.
//!
//! The engine reaches the surrounding application's data exclusively
//! through the [`RecordStore`] trait. Filters are simple field-equality
//! and date-range predicates; anything richer belongs to the collaborator
//! behind the trait. A failed fetch aborts the whole report build and
//! surfaces to the caller: there are no retries and no partial reports.

pub mod memory;

use crate::libs::records::{ActivityEvent, ProjectMember, ProjectRecord, TaskRecord, TimeLogRecord, UserRecord};
use crate::libs::window::DateWindow;
use anyhow::Result;

/// Predicate set for task fetches. All set fields must match.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<i64>,
    pub assignee_id: Option<i64>,
    /// Matches tasks the user is either assignee or creator of.
    pub involving_user: Option<i64>,
    /// Restricts to tasks created within the window.
    pub created_within: Option<DateWindow>,
}

/// Predicate set for time-log fetches.
#[derive(Debug, Clone, Default)]
pub struct TimeLogFilter {
    pub user_id: Option<i64>,
    pub task_ids: Option<Vec<i64>>,
    /// Restricts to logs started within the window.
    pub started_within: Option<DateWindow>,
}

/// Predicate set for activity fetches.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    pub project_id: Option<i64>,
}

/// Read interface to the raw records.
///
/// Implementations must never return soft-deleted rows. Builders issue
/// independent fetches concurrently and suspend until all have returned.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn fetch_tasks(&self, filter: &TaskFilter) -> Result<Vec<TaskRecord>>;
    async fn fetch_time_logs(&self, filter: &TimeLogFilter) -> Result<Vec<TimeLogRecord>>;
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>>;
    async fn fetch_project_members(&self, project_id: i64) -> Result<Vec<ProjectMember>>;
    async fn fetch_activity(&self, filter: &ActivityFilter) -> Result<Vec<ActivityEvent>>;
}
