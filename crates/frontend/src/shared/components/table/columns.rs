//! Column and cell descriptions consumed by `TableContainer`

use crate::shared::list_utils::Sortable;
use chrono::{DateTime, Utc};
use std::hash::Hash;

/// How a column presents its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Row selection checkbox, keyed by `TableRecord::record_key`
    Selection,
    /// Primary text of the row, search matches highlighted
    Link,
    Text,
    Number,
    Status,
    /// Relative time with the absolute time as a tooltip
    Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: CellKind,
    pub sortable: bool,
    pub min_width: f64,
}

impl ColumnDescriptor {
    pub const fn new(id: &'static str, title: &'static str, kind: CellKind) -> Self {
        Self {
            id,
            title,
            kind,
            sortable: !matches!(kind, CellKind::Selection),
            min_width: 100.0,
        }
    }

    pub const fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(u64),
    Status { label: &'static str, active: bool },
    Timestamp(DateTime<Utc>),
    Empty,
}

/// A row the table can key, sort and render
pub trait TableRecord: Sortable + Clone + PartialEq + Send + Sync + 'static {
    type Key: Clone + Eq + Hash + Send + Sync + 'static;

    fn record_key(&self) -> Self::Key;

    fn cell_value(&self, column_id: &str) -> CellValue;
}
