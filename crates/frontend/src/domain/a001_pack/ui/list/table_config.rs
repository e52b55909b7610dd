use crate::shared::components::table::{CellKind, CellValue, ColumnDescriptor, TableRecord};
use crate::shared::list_utils::Sortable;
use chrono::{DateTime, Utc};
use contracts::domain::a001_pack::{Pack, PackId, PackStatus};
use std::cmp::Ordering;

pub const SELECTION_COLUMN: &str = "selection";
pub const NAME_COLUMN: &str = "name";

const SELECTION: ColumnDescriptor = ColumnDescriptor::new(SELECTION_COLUMN, "", CellKind::Selection).min_width(40.0);

const PACK_COLUMNS: [ColumnDescriptor; 5] = [
    ColumnDescriptor::new(NAME_COLUMN, "Name", CellKind::Link).min_width(200.0),
    ColumnDescriptor::new("query_count", "Queries", CellKind::Number),
    ColumnDescriptor::new("status", "Status", CellKind::Status),
    ColumnDescriptor::new("total_hosts_count", "Hosts", CellKind::Number),
    ColumnDescriptor::new("updated_at", "Last modified", CellKind::Timestamp).min_width(140.0),
];

/// Display record of one pack
#[derive(Debug, Clone, PartialEq)]
pub struct PackRow {
    pub id: PackId,
    pub name: String,
    pub query_count: u32,
    pub status: PackStatus,
    pub total_hosts_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl From<&Pack> for PackRow {
    fn from(pack: &Pack) -> Self {
        Self {
            id: pack.id,
            name: pack.name.clone(),
            query_count: pack.query_count,
            status: pack.status(),
            total_hosts_count: pack.total_hosts_count,
            updated_at: pack.updated_at,
        }
    }
}

impl Sortable for PackRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "query_count" => self.query_count.cmp(&other.query_count),
            "status" => self.status.cmp(&other.status),
            "total_hosts_count" => self.total_hosts_count.cmp(&other.total_hosts_count),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

impl TableRecord for PackRow {
    type Key = PackId;

    fn record_key(&self) -> PackId {
        self.id
    }

    fn cell_value(&self, column_id: &str) -> CellValue {
        match column_id {
            NAME_COLUMN => CellValue::Text(self.name.clone()),
            "query_count" => CellValue::Number(self.query_count as u64),
            "status" => CellValue::Status {
                label: self.status.label(),
                active: self.status == PackStatus::Enabled,
            },
            "total_hosts_count" => CellValue::Number(self.total_hosts_count as u64),
            "updated_at" => CellValue::Timestamp(self.updated_at),
            _ => CellValue::Empty,
        }
    }
}

/// Columns of the packs table.
///
/// Observers get no selection column, and with it no bulk actions.
pub fn generate_table_headers(is_only_observer: bool) -> Vec<ColumnDescriptor> {
    let mut columns = Vec::with_capacity(PACK_COLUMNS.len() + 1);
    if !is_only_observer {
        columns.push(SELECTION);
    }
    columns.extend(PACK_COLUMNS);
    columns
}

/// One row per pack, same order
pub fn generate_data_set(packs: &[Pack]) -> Vec<PackRow> {
    packs.iter().map(PackRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pack(id: u32, name: &str, disabled: bool) -> Pack {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut pack = Pack::new_for_insert(PackId(id), name.to_string(), String::new(), at);
        pack.disabled = disabled;
        pack
    }

    fn ids(columns: &[ColumnDescriptor]) -> Vec<&'static str> {
        columns.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_full_column_set() {
        assert_eq!(
            ids(&generate_table_headers(false)),
            vec!["selection", "name", "query_count", "status", "total_hosts_count", "updated_at"]
        );
    }

    #[test]
    fn test_observer_columns_are_strict_subset() {
        let full = generate_table_headers(false);
        let observer = generate_table_headers(true);
        assert!(observer.len() < full.len());
        assert!(observer.iter().all(|c| full.contains(c)));
        assert!(observer.iter().all(|c| c.kind != CellKind::Selection));
    }

    #[test]
    fn test_headers_are_deterministic() {
        assert_eq!(generate_table_headers(true), generate_table_headers(true));
        assert_eq!(generate_table_headers(false), generate_table_headers(false));
    }

    #[test]
    fn test_data_set_keeps_order_and_status() {
        let packs = vec![pack(2, "b", true), pack(1, "a", false)];
        let rows = generate_data_set(&packs);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![PackId(2), PackId(1)]);
        assert_eq!(rows[0].status, PackStatus::Disabled);
        assert_eq!(rows[1].status, PackStatus::Enabled);
        assert!(generate_data_set(&[]).is_empty());
    }

    #[test]
    fn test_rows_do_not_depend_on_observer_flag() {
        let packs = vec![pack(1, "Pack A", false), pack(2, "pack B", true)];
        // Rows come from the packs alone; only the columns follow the flag.
        assert_eq!(generate_data_set(&packs), generate_data_set(&packs.clone()));
        assert_ne!(generate_table_headers(true), generate_table_headers(false));
    }

    #[test]
    fn test_cell_values() {
        let row = PackRow::from(&pack(1, "Pack A", true));
        assert_eq!(row.cell_value("name"), CellValue::Text("Pack A".into()));
        assert_eq!(
            row.cell_value("status"),
            CellValue::Status { label: "Disabled", active: false }
        );
        assert_eq!(row.cell_value("selection"), CellValue::Empty);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let a = PackRow::from(&pack(1, "alpha", false));
        let b = PackRow::from(&pack(2, "Beta", false));
        assert_eq!(a.compare_by_field(&b, "name"), Ordering::Less);
    }
}
