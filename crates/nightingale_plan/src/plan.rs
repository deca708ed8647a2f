//! Generated plan records and the session plan log.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One generated action plan.
///
/// # Examples
///
/// ```
/// use nightingale_plan::PlanRecord;
///
/// let record = PlanRecord::new("2026-08-21".to_string(), "夜勤の引き継ぎを短縮する。".to_string());
/// assert_eq!(record.date(), "2026-08-21");
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PlanRecord {
    /// Generation date, `%Y-%m-%d`
    date: String,
    /// The generated plan text
    content: String,
}

impl PlanRecord {
    /// Creates a record with an explicit date.
    pub fn new(date: String, content: String) -> Self {
        Self { date, content }
    }

    /// Creates a record dated today.
    pub fn today(content: String) -> Self {
        Self::new(Local::now().format("%Y-%m-%d").to_string(), content)
    }
}

/// Session-scoped, append-only log of generated plans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanLog {
    records: Vec<PlanRecord>,
}

impl PlanLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: PlanRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[PlanRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&PlanRecord> {
        self.records.last()
    }
}
