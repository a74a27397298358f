/// Data layer: directory listing, CSV loading, and the table model.
///
/// Architecture:
/// ```text
///   CSV_DIR
///      │
///      ▼
///   ┌──────────┐
///   │ listing  │  read_dir → sorted `.csv` names
///   └──────────┘
///      │  (operator picks one)
///      ▼
///   ┌──────────┐
///   │  loader  │  parse file → Table
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  Table   │  typed columns, Vec<Vec<CellValue>>
///   └──────────┘
/// ```

pub mod error;
pub mod listing;
pub mod loader;
pub mod model;
