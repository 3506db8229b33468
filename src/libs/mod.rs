//! Core library modules for the worklens engine.
//!
//! - **Records**: the flat task, time-log, user, and project row types
//! - **Window**: date window resolution and gap-filled calendar buckets
//! - **Aggregate**: pure reducers folding record lists into rollups
//! - **Export / View / Formatter**: consumers of the computed reports

pub mod aggregate;
pub mod export;
pub mod formatter;
pub mod records;
pub mod view;
pub mod window;
