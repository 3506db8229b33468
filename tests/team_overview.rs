#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use worklens::libs::records::{
        ProjectRecord, ProjectStatus, TaskPriority, TaskRecord, TaskStatus, TimeLogRecord, UserRecord,
    };
    use worklens::libs::window::DateWindow;
    use worklens::report::team::TeamOverview;
    use worklens::store::memory::{Dataset, MemoryStore};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn user(id: i64, name: &str) -> UserRecord {
        UserRecord {
            id,
            full_name: name.to_string(),
            avatar_url: None,
        }
    }

    fn project(id: i64, name: &str, status: ProjectStatus) -> ProjectRecord {
        ProjectRecord {
            id,
            name: name.to_string(),
            status,
            start_date: None,
            end_date: None,
            deleted_at: None,
        }
    }

    fn task(id: i64, project_id: i64, status: TaskStatus, assignee: i64, completed: Option<DateTime<Utc>>) -> TaskRecord {
        TaskRecord {
            id,
            title: format!("Task {}", id),
            status,
            priority: TaskPriority::Medium,
            project_id,
            assignee_id: Some(assignee),
            created_by: Some(assignee),
            created_at: at(2026, 8, 1, 9),
            completed_at: completed,
            estimated_hours: None,
            deleted_at: None,
        }
    }

    fn window() -> DateWindow {
        DateWindow::new(day(2026, 8, 1), day(2026, 8, 31))
    }

    /// One fully completed project and one untouched project.
    fn scenario_store() -> MemoryStore {
        MemoryStore::new(Dataset {
            users: vec![user(1, "Alice Johnson"), user(2, "Brian Okafor")],
            projects: vec![
                project(10, "Apollo", ProjectStatus::Active),
                project(11, "Borealis", ProjectStatus::OnHold),
            ],
            tasks: vec![
                task(100, 10, TaskStatus::Completed, 1, Some(at(2026, 8, 10, 12))),
                task(101, 11, TaskStatus::Todo, 2, None),
            ],
            time_logs: vec![TimeLogRecord {
                id: 500,
                user_id: 1,
                task_id: 100,
                started_at: at(2026, 8, 10, 9),
                ended_at: None,
                duration_minutes: Some(45),
            }],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_average_completion_is_equal_weight_mean() {
        let store = scenario_store();
        let overview = TeamOverview::build(&store, window()).await.unwrap();

        // One project at 100%, one at 0%: the mean is 50, regardless of
        // how many tasks each project carries.
        assert_eq!(overview.summary.avg_completion_percentage, 50);
        assert_eq!(overview.summary.total_projects, 2);
        assert_eq!(overview.summary.active_projects, 1);
        assert_eq!(overview.summary.total_tasks, 2);
        assert_eq!(overview.summary.completed_tasks, 1);
        assert_eq!(overview.summary.minutes_logged, 45);
    }

    #[tokio::test]
    async fn test_projects_sorted_by_completion_descending() {
        let store = scenario_store();
        let overview = TeamOverview::build(&store, window()).await.unwrap();

        assert_eq!(overview.projects.len(), 2);
        assert_eq!(overview.projects[0].name, "Apollo");
        assert_eq!(overview.projects[0].completion_percentage, 100);
        assert_eq!(overview.projects[1].name, "Borealis");
        assert_eq!(overview.projects[1].completion_percentage, 0);
    }

    #[tokio::test]
    async fn test_top_performers_ranked_by_window_completions() {
        let store = scenario_store();
        let overview = TeamOverview::build(&store, window()).await.unwrap();

        assert_eq!(overview.top_performers[0].user_id, 1);
        assert_eq!(overview.top_performers[0].tasks_completed, 1);
        assert_eq!(overview.top_performers[0].minutes_logged, 45);
        assert_eq!(overview.top_performers[1].tasks_completed, 0);
    }

    #[tokio::test]
    async fn test_status_distribution_has_all_five_values() {
        let store = scenario_store();
        let overview = TeamOverview::build(&store, window()).await.unwrap();

        assert_eq!(overview.status_distribution.len(), 5);
        assert_eq!(overview.status_distribution[&TaskStatus::Completed], 1);
        assert_eq!(overview.status_distribution[&TaskStatus::Todo], 1);
        assert_eq!(overview.status_distribution[&TaskStatus::Review], 0);
    }

    #[tokio::test]
    async fn test_empty_organization_yields_zeros() {
        let store = MemoryStore::new(Dataset::default());
        let overview = TeamOverview::build(&store, window()).await.unwrap();

        assert_eq!(overview.summary.total_projects, 0);
        assert_eq!(overview.summary.avg_completion_percentage, 0);
        assert!(overview.projects.is_empty());
        assert!(overview.top_performers.is_empty());
        assert_eq!(overview.status_distribution.len(), 5);
    }

    #[tokio::test]
    async fn test_completions_outside_window_do_not_rank() {
        let mut store_data = Dataset {
            users: vec![user(1, "Alice Johnson")],
            projects: vec![project(10, "Apollo", ProjectStatus::Active)],
            tasks: vec![task(100, 10, TaskStatus::Completed, 1, Some(at(2026, 6, 1, 12)))],
            ..Default::default()
        };
        store_data.tasks.push(task(101, 10, TaskStatus::Completed, 1, Some(at(2026, 8, 5, 12))));
        let store = MemoryStore::new(store_data);
        let overview = TeamOverview::build(&store, window()).await.unwrap();

        // Both tasks count toward project completion, but only the
        // in-window completion ranks the performer.
        assert_eq!(overview.projects[0].completion_percentage, 100);
        assert_eq!(overview.top_performers[0].tasks_completed, 1);
    }
}
