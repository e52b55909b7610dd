pub mod action_button;
pub mod columns;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_container;
pub mod table_header_checkbox;

pub use action_button::{ActionButton, ButtonVariant, SelectAction};
pub use columns::{CellKind, CellValue, ColumnDescriptor, TableRecord};
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_container::{QueryChange, TableContainer};
pub use table_header_checkbox::TableHeaderCheckbox;
