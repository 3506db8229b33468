//! # Worklens - Work Management Analytics
//!
//! An analytics and reporting engine for team work-management data.
//! Given raw task and time-log records, it computes individual, project,
//! and team-wide performance reports plus live dashboard metrics.
//!
//! ## Features
//!
//! - **Individual Reports**: Per-user completion rates, daily activity, and weekly trends
//! - **Project Reports**: Schedule variance, member breakdowns, and progress replay
//! - **Team Overview**: Cross-project rollups, rankings, and status distribution
//! - **Dashboard Metrics**: Role-scoped rolling statistics (today / 7 days / 30 days)
//! - **Data Export**: CSV and JSON export of any computed report
//!
//! The engine never writes: all records are owned by the surrounding
//! application and reached through the read-only [`store::RecordStore`]
//! trait. Every report is a pure function of its inputs plus fresh fetch
//! results, so identical inputs always produce identical reports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklens::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod report;
pub mod store;
