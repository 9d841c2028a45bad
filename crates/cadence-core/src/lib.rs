//! # Cadence Core Library
//!
//! Turns abstract recurrence rules ("every 2 weeks on Monday and Friday",
//! "monthly on the last Friday") into concrete calendar days.
//!
//! ## Features
//!
//! - **Typed Rules**: daily, weekly, monthly and yearly rules with intervals,
//!   weekday sets and by-date or by-weekday-position monthly patterns
//! - **Bounded Generation**: day-by-day scans with an iteration cap, so even
//!   rules that can never match terminate
//! - **Descriptions**: plain-English summaries of a rule
//! - **Editing**: a rule editor that keeps its preview in step with every change
//!
//! All dates are timezone-naive calendar days ([`chrono::NaiveDate`]).
//!
//! ## Core Modules
//!
//! - [`models`]: Rule data model and generation results
//! - [`pattern`]: Whether a single day is an occurrence of a rule
//! - [`recurrence`]: Occurrence generation and windowed queries
//! - [`format`]: Human-readable rule descriptions
//! - [`range`]: Calendar-day range checks
//! - [`editor`]: Rule editor with derived previews
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::{describe, generate, RecurrenceRule};
//! use chrono::{NaiveDate, Weekday};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let rule = RecurrenceRule::weekly(start)
//!     .with_days_of_week(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
//!
//! let result = generate(&rule, 3).unwrap();
//! assert_eq!(result.dates[2], NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
//! assert_eq!(describe(&rule), "Weekly on Monday, Wednesday, Friday");
//! ```

pub mod editor;
pub mod error;
pub mod format;
pub mod models;
pub mod pattern;
pub mod range;
pub mod recurrence;

pub use editor::RuleEditor;
pub use error::CoreError;
pub use format::describe;
pub use models::{
    Frequency, GeneratedDates, MonthlyPattern, RecurrenceRule, Termination, WeekOfMonth,
};
pub use range::{is_in_range, AsCalendarDay};
pub use recurrence::{generate, preview, GenerationConfig, RecurrenceManager};
