//! Terminal table rendering for computed reports.
//!
//! The view consumes finished report values unchanged; nothing here
//! recomputes a number.

use crate::libs::formatter::{format_minutes, format_minutes_f64};
use crate::report::dashboard::DashboardMetrics;
use crate::report::individual::IndividualReport;
use crate::report::project::ProjectReport;
use crate::report::team::TeamOverview;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn individual(report: &IndividualReport) -> Result<()> {
        println!("\nReport for {} ({})", report.user.full_name, report.window);

        let mut table = Table::new();
        table.add_row(row!["COMPLETED", "TIME LOGGED", "AVG TASKS/DAY", "AVG TIME/TASK", "COMPLETION RATE"]);
        table.add_row(row![
            report.summary.tasks_completed,
            format_minutes(report.summary.minutes_logged),
            report.summary.avg_tasks_per_day,
            format_minutes_f64(report.summary.avg_minutes_per_task),
            format!("{}%", report.summary.completion_rate)
        ]);
        table.printstd();

        let mut statuses = Table::new();
        statuses.add_row(row!["STATUS", "TASKS"]);
        for (status, count) in &report.status_breakdown {
            statuses.add_row(row![status, count]);
        }
        statuses.printstd();

        if !report.top_projects.is_empty() {
            println!("\nTop projects:");
            let mut projects = Table::new();
            projects.add_row(row!["PROJECT", "COMPLETED", "TIME LOGGED"]);
            for entry in &report.top_projects {
                projects.add_row(row![
                    entry.project_name,
                    entry.tasks_completed,
                    format_minutes(entry.minutes_logged)
                ]);
            }
            projects.printstd();
        }

        Ok(())
    }

    pub fn project(report: &ProjectReport) -> Result<()> {
        println!("\nReport for project {} ({})", report.project.name, report.window);

        let mut table = Table::new();
        table.add_row(row!["TASKS", "COMPLETED", "IN PROGRESS", "BLOCKED", "PROGRESS", "TIME LOGGED", "VARIANCE"]);
        table.add_row(row![
            report.summary.total_tasks,
            report.summary.completed_tasks,
            report.summary.in_progress_tasks,
            report.summary.blocked_tasks,
            format!("{}%", report.summary.completion_percentage),
            format_minutes(report.summary.minutes_logged),
            format!("{}%", report.summary.time_variance)
        ]);
        table.printstd();

        if let Some(days) = report.summary.days_remaining {
            println!("Days remaining: {}", days);
        }

        let mut members = Table::new();
        members.add_row(row!["MEMBER", "ROLE", "ASSIGNED", "COMPLETED", "TIME LOGGED", "RATE"]);
        for member in &report.members {
            members.add_row(row![
                member.full_name,
                member.role,
                member.tasks_assigned,
                member.tasks_completed,
                format_minutes(member.minutes_logged),
                format!("{}%", member.completion_rate)
            ]);
        }
        members.printstd();

        Ok(())
    }

    pub fn team(report: &TeamOverview) -> Result<()> {
        println!("\nTeam overview ({})", report.window);

        let mut table = Table::new();
        table.add_row(row!["PROJECTS", "ACTIVE", "TASKS", "COMPLETED", "TIME LOGGED", "AVG COMPLETION"]);
        table.add_row(row![
            report.summary.total_projects,
            report.summary.active_projects,
            report.summary.total_tasks,
            report.summary.completed_tasks,
            format_minutes(report.summary.minutes_logged),
            format!("{}%", report.summary.avg_completion_percentage)
        ]);
        table.printstd();

        let mut projects = Table::new();
        projects.add_row(row!["PROJECT", "STATUS", "TASKS", "COMPLETED", "PROGRESS"]);
        for standing in &report.projects {
            projects.add_row(row![
                standing.name,
                standing.status,
                standing.total_tasks,
                standing.completed_tasks,
                format!("{}%", standing.completion_percentage)
            ]);
        }
        projects.printstd();

        println!("\nTop performers:");
        let mut performers = Table::new();
        performers.add_row(row!["MEMBER", "COMPLETED", "TIME LOGGED"]);
        for standing in &report.top_performers {
            performers.add_row(row![
                standing.full_name,
                standing.tasks_completed,
                format_minutes(standing.minutes_logged)
            ]);
        }
        performers.printstd();

        Ok(())
    }

    pub fn dashboard(metrics: &DashboardMetrics) -> Result<()> {
        println!("\nDashboard ({})", metrics.window);

        let mut table = Table::new();
        table.add_row(row!["TASKS", "COMPLETED", "TODAY", "LAST 7 DAYS", "LAST 30 DAYS"]);
        table.add_row(row![
            metrics.tasks_total,
            metrics.tasks_completed,
            format_minutes(metrics.minutes_today),
            format_minutes(metrics.minutes_last_7_days),
            format_minutes(metrics.minutes_last_30_days)
        ]);
        table.printstd();

        let mut statuses = Table::new();
        statuses.add_row(row!["STATUS", "TASKS"]);
        for (status, count) in &metrics.status_breakdown {
            statuses.add_row(row![status, count]);
        }
        statuses.printstd();

        Ok(())
    }
}
