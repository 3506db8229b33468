#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use worklens::libs::records::{TaskPriority, TaskRecord, TaskStatus, TimeLogRecord, UserRecord};
    use worklens::libs::window::{RollingPeriod, WindowSpec};
    use worklens::report::dashboard::{CallerContext, DashboardMetrics, DashboardScope};
    use worklens::store::memory::{Dataset, MemoryStore};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        at(2026, 8, 30, 12)
    }

    fn user(id: i64, name: &str) -> UserRecord {
        UserRecord {
            id,
            full_name: name.to_string(),
            avatar_url: None,
        }
    }

    fn task(id: i64, project_id: i64, assignee: i64, status: TaskStatus, completed: Option<DateTime<Utc>>) -> TaskRecord {
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

    fn log(id: i64, user_id: i64, task_id: i64, started: DateTime<Utc>, minutes: i64) -> TimeLogRecord {
        TimeLogRecord {
            id,
            user_id,
            task_id,
            started_at: started,
            ended_at: None,
            duration_minutes: Some(minutes),
        }
    }

    fn scenario_store() -> MemoryStore {
        MemoryStore::new(Dataset {
            users: vec![user(1, "Alice Johnson"), user(2, "Brian Okafor")],
            tasks: vec![
                task(100, 10, 1, TaskStatus::Completed, Some(at(2026, 8, 20, 12))),
                task(101, 10, 1, TaskStatus::InProgress, None),
                task(102, 11, 2, TaskStatus::Todo, None),
            ],
            time_logs: vec![
                log(500, 1, 100, at(2026, 8, 30, 9), 60),  // today
                log(501, 1, 100, at(2026, 8, 25, 9), 30),  // within 7 days
                log(502, 1, 101, at(2026, 8, 10, 9), 45),  // within 30 days
                log(503, 2, 102, at(2026, 8, 28, 9), 200), // another user
            ],
            ..Default::default()
        })
    }

    fn month() -> WindowSpec {
        WindowSpec::Rolling(RollingPeriod::Month)
    }

    #[tokio::test]
    async fn test_rolling_minute_totals_from_one_pass() {
        let store = scenario_store();
        let caller = CallerContext {
            user_id: 1,
            is_privileged: false,
        };
        let metrics = DashboardMetrics::build(&store, &caller, DashboardScope::Everyone, &month(), now())
            .await
            .unwrap();

        assert_eq!(metrics.scope, DashboardScope::User(1));
        assert_eq!(metrics.minutes_today, 60);
        assert_eq!(metrics.minutes_last_7_days, 90);
        assert_eq!(metrics.minutes_last_30_days, 135);
        assert_eq!(metrics.minutes_in_window, 135);
    }

    #[tokio::test]
    async fn test_non_privileged_caller_is_pinned_to_own_scope() {
        let store = scenario_store();
        let caller = CallerContext {
            user_id: 1,
            is_privileged: false,
        };
        // Requesting another user's scope is silently redirected.
        let metrics = DashboardMetrics::build(&store, &caller, DashboardScope::User(2), &month(), now())
            .await
            .unwrap();

        assert_eq!(metrics.scope, DashboardScope::User(1));
        assert_eq!(metrics.tasks_total, 2);
        assert_eq!(metrics.minutes_today, 60);
    }

    #[tokio::test]
    async fn test_privileged_caller_sees_requested_scope() {
        let store = scenario_store();
        let caller = CallerContext {
            user_id: 1,
            is_privileged: true,
        };
        let metrics = DashboardMetrics::build(&store, &caller, DashboardScope::User(2), &month(), now())
            .await
            .unwrap();

        assert_eq!(metrics.scope, DashboardScope::User(2));
        assert_eq!(metrics.tasks_total, 1);
        assert_eq!(metrics.minutes_last_7_days, 200);
        assert_eq!(metrics.minutes_today, 0);
    }

    #[tokio::test]
    async fn test_privileged_everyone_scope_covers_all_records() {
        let store = scenario_store();
        let caller = CallerContext {
            user_id: 1,
            is_privileged: true,
        };
        let metrics = DashboardMetrics::build(&store, &caller, DashboardScope::Everyone, &month(), now())
            .await
            .unwrap();

        assert_eq!(metrics.scope, DashboardScope::Everyone);
        assert_eq!(metrics.tasks_total, 3);
        assert_eq!(metrics.tasks_completed, 1);
        assert_eq!(metrics.minutes_last_30_days, 335);
        assert_eq!(metrics.status_breakdown.len(), 5);
        assert_eq!(metrics.status_breakdown[&TaskStatus::InProgress], 1);
    }

    #[tokio::test]
    async fn test_project_scope_joins_logs_through_tasks() {
        let store = scenario_store();
        let caller = CallerContext {
            user_id: 1,
            is_privileged: true,
        };
        let metrics = DashboardMetrics::build(&store, &caller, DashboardScope::Project(10), &month(), now())
            .await
            .unwrap();

        assert_eq!(metrics.scope, DashboardScope::Project(10));
        assert_eq!(metrics.tasks_total, 2);
        // Only logs against project 10 tasks count; user 2's log on
        // project 11 does not.
        assert_eq!(metrics.minutes_last_30_days, 135);
    }

    #[tokio::test]
    async fn test_custom_window_wider_than_thirty_days() {
        let store = scenario_store();
        let caller = CallerContext {
            user_id: 1,
            is_privileged: true,
        };
        let spec = WindowSpec::Custom {
            start: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        };
        let metrics = DashboardMetrics::build(&store, &caller, DashboardScope::Everyone, &spec, now())
            .await
            .unwrap();

        // The fetch window widens to cover the custom window, so the
        // window total can exceed the 30-day total.
        assert_eq!(metrics.minutes_in_window, 335);
        assert_eq!(metrics.minutes_last_30_days, 335);
        assert_eq!(metrics.minutes_today, 60);
    }
}
