//! In-memory record store over a flat JSON dataset.
//!
//! Reference implementation of [`RecordStore`] used by the CLI and the
//! integration tests. Records live in plain vectors; filters are applied
//! with linear scans, which is fine at dataset scale. Soft-deleted tasks
//! and projects are invisible to every fetch.

use super::{ActivityFilter, RecordStore, TaskFilter, TimeLogFilter};
use crate::libs::records::{ActivityEvent, ProjectMember, ProjectRecord, TaskRecord, TimeLogRecord, UserRecord};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A complete flat dataset, the JSON shape the CLI consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub time_logs: Vec<TimeLogRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
    #[serde(default)]
    pub activity: Vec<ActivityEvent>,
}

/// [`RecordStore`] backed by an owned [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Dataset,
}

impl MemoryStore {
    pub fn new(data: Dataset) -> Self {
        MemoryStore { data }
    }

    /// Loads a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        let data: Dataset = serde_json::from_str(&text)?;
        Ok(MemoryStore::new(data))
    }
}

impl RecordStore for MemoryStore {
    async fn fetch_tasks(&self, filter: &TaskFilter) -> Result<Vec<TaskRecord>> {
        Ok(self
            .data
            .tasks
            .iter()
            .filter(|task| task.deleted_at.is_none())
            .filter(|task| filter.project_id.is_none_or(|id| task.project_id == id))
            .filter(|task| filter.assignee_id.is_none_or(|id| task.assignee_id == Some(id)))
            .filter(|task| {
                filter
                    .involving_user
                    .is_none_or(|id| task.assignee_id == Some(id) || task.created_by == Some(id))
            })
            .filter(|task| filter.created_within.is_none_or(|window| window.contains(task.created_on())))
            .cloned()
            .collect())
    }

    async fn fetch_time_logs(&self, filter: &TimeLogFilter) -> Result<Vec<TimeLogRecord>> {
        Ok(self
            .data
            .time_logs
            .iter()
            .filter(|log| filter.user_id.is_none_or(|id| log.user_id == id))
            .filter(|log| {
                filter
                    .task_ids
                    .as_ref()
                    .is_none_or(|ids| ids.contains(&log.task_id))
            })
            .filter(|log| filter.started_within.is_none_or(|window| window.contains(log.started_on())))
            .cloned()
            .collect())
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.data.users.clone())
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>> {
        Ok(self
            .data
            .projects
            .iter()
            .filter(|project| project.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn fetch_project_members(&self, project_id: i64) -> Result<Vec<ProjectMember>> {
        Ok(self
            .data
            .members
            .iter()
            .filter(|member| member.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn fetch_activity(&self, filter: &ActivityFilter) -> Result<Vec<ActivityEvent>> {
        Ok(self
            .data
            .activity
            .iter()
            .filter(|event| filter.project_id.is_none_or(|id| event.project_id == id))
            .cloned()
            .collect())
    }
}
