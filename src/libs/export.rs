//! Report export for external analysis.
//!
//! Export is a pure serialization step: it consumes the already-computed
//! report object and writes it out unchanged. JSON preserves the full
//! report structure; CSV flattens the most tabular part of each report
//! into plain rows, with quoting applied only where a value needs it.

use crate::report::dashboard::DashboardMetrics;
use crate::report::individual::IndividualReport;
use crate::report::project::ProjectReport;
use crate::report::team::TeamOverview;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple parsers.
    Csv,
    /// Pretty-printed JSON preserving the full report structure.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes computed reports to disk in the configured format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without an explicit output path the file is
    /// named `<stem>_<timestamp>.<ext>` in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, stem: &str) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}_{}.{}",
                stem,
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });
        Exporter { format, output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn write_individual(&self, report: &IndividualReport) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(report),
            ExportFormat::Csv => self.write_csv(&daily_rows(report)),
        }
    }

    pub fn write_project(&self, report: &ProjectReport) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(report),
            ExportFormat::Csv => self.write_csv(&member_rows(report)),
        }
    }

    pub fn write_team(&self, report: &TeamOverview) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(report),
            ExportFormat::Csv => self.write_csv(&standing_rows(report)),
        }
    }

    pub fn write_dashboard(&self, metrics: &DashboardMetrics) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(metrics),
            ExportFormat::Csv => self.write_csv(&[dashboard_row(metrics)]),
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        fs::write(&self.output_path, serde_json::to_string_pretty(value)?)?;
        info!(path = %self.output_path.display(), "exported report as JSON");
        Ok(())
    }

    fn write_csv<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_path(&self.output_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!(path = %self.output_path.display(), rows = rows.len(), "exported report as CSV");
        Ok(())
    }
}

/// One day of an individual report, as a flat CSV row.
#[derive(Debug, Serialize)]
pub struct DailyActivityRow {
    pub date: NaiveDate,
    pub tasks_completed: i64,
    pub minutes_logged: i64,
}

/// One member of a project report, as a flat CSV row.
#[derive(Debug, Serialize)]
pub struct MemberRow {
    pub member: String,
    pub role: String,
    pub tasks_assigned: i64,
    pub tasks_completed: i64,
    pub minutes_logged: i64,
    pub completion_rate: i64,
}

/// One project of a team overview, as a flat CSV row.
#[derive(Debug, Serialize)]
pub struct StandingRow {
    pub project: String,
    pub status: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub completion_percentage: i64,
}

/// Dashboard metrics as a single flat CSV row.
#[derive(Debug, Serialize)]
pub struct DashboardRow {
    pub tasks_total: i64,
    pub tasks_completed: i64,
    pub minutes_today: i64,
    pub minutes_last_7_days: i64,
    pub minutes_last_30_days: i64,
}

fn daily_rows(report: &IndividualReport) -> Vec<DailyActivityRow> {
    report
        .daily_completions
        .iter()
        .zip(report.daily_minutes.iter())
        .map(|(completions, minutes)| DailyActivityRow {
            date: completions.date,
            tasks_completed: completions.value,
            minutes_logged: minutes.value,
        })
        .collect()
}

fn member_rows(report: &ProjectReport) -> Vec<MemberRow> {
    report
        .members
        .iter()
        .map(|member| MemberRow {
            member: member.full_name.clone(),
            role: member.role.clone(),
            tasks_assigned: member.tasks_assigned,
            tasks_completed: member.tasks_completed,
            minutes_logged: member.minutes_logged,
            completion_rate: member.completion_rate,
        })
        .collect()
}

fn standing_rows(report: &TeamOverview) -> Vec<StandingRow> {
    report
        .projects
        .iter()
        .map(|standing| StandingRow {
            project: standing.name.clone(),
            status: standing.status.to_string(),
            total_tasks: standing.total_tasks,
            completed_tasks: standing.completed_tasks,
            completion_percentage: standing.completion_percentage,
        })
        .collect()
}

fn dashboard_row(metrics: &DashboardMetrics) -> DashboardRow {
    DashboardRow {
        tasks_total: metrics.tasks_total,
        tasks_completed: metrics.tasks_completed,
        minutes_today: metrics.minutes_today,
        minutes_last_7_days: metrics.minutes_last_7_days,
        minutes_last_30_days: metrics.minutes_last_30_days,
    }
}
