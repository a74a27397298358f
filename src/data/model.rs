use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single parsed field
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the common dataframe dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Field spellings treated as missing values.
const NULL_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

impl CellValue {
    /// Guess the type of a raw CSV field.
    pub fn infer(s: &str) -> CellValue {
        if s.is_empty() || NULL_MARKERS.contains(&s) {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        match s {
            "true" | "True" | "TRUE" => CellValue::Bool(true),
            "false" | "False" | "FALSE" => CellValue::Bool(false),
            _ => CellValue::String(s.to_string()),
        }
    }

    /// The type this single value would give a column on its own.
    fn column_type(&self) -> ColumnType {
        match self {
            CellValue::String(_) => ColumnType::String,
            CellValue::Integer(_) => ColumnType::Integer,
            CellValue::Float(_) => ColumnType::Float,
            CellValue::Bool(_) => ColumnType::Bool,
            CellValue::Null => ColumnType::Empty,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred dtype of a whole column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every cell is null.
    Empty,
    Bool,
    Integer,
    Float,
    String,
}

impl ColumnType {
    /// Widen two types to one that can hold both.
    fn unify(self, other: ColumnType) -> ColumnType {
        use ColumnType::*;
        match (self, other) {
            (Empty, t) | (t, Empty) => t,
            (a, b) if a == b => a,
            (Integer, Float) | (Float, Integer) => Float,
            _ => String,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Empty => "empty",
            ColumnType::Bool => "bool",
            ColumnType::Integer => "int",
            ColumnType::Float => "float",
            ColumnType::String => "str",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub dtype: ColumnType,
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// A fully materialised CSV file: named, typed columns and all data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    /// Row-major cells; every row has exactly `columns.len()` entries.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Infer column types and coerce the cells to match.
    ///
    /// Integer cells in a float column become floats. In a string column
    /// every non-null cell keeps its original text.
    pub fn from_raw(names: Vec<String>, raw_rows: Vec<Vec<String>>) -> Self {
        let mut dtypes = vec![ColumnType::Empty; names.len()];
        let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(raw_rows.len());

        for raw in &raw_rows {
            let row: Vec<CellValue> = raw.iter().map(|s| CellValue::infer(s)).collect();
            for (dtype, cell) in dtypes.iter_mut().zip(&row) {
                *dtype = dtype.unify(cell.column_type());
            }
            rows.push(row);
        }

        for (row, raw) in rows.iter_mut().zip(&raw_rows) {
            for (col, cell) in row.iter_mut().enumerate() {
                *cell = coerce(std::mem::replace(cell, CellValue::Null), dtypes[col], &raw[col]);
            }
        }

        let columns = names
            .into_iter()
            .zip(dtypes)
            .map(|(name, dtype)| Column { name, dtype })
            .collect();

        Table { columns, rows }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

fn coerce(cell: CellValue, dtype: ColumnType, raw: &str) -> CellValue {
    match (cell, dtype) {
        (CellValue::Null, _) => CellValue::Null,
        (CellValue::Integer(i), ColumnType::Float) => CellValue::Float(i as f64),
        (CellValue::String(s), ColumnType::String) => CellValue::String(s),
        (_, ColumnType::String) => CellValue::String(raw.to_string()),
        (cell, _) => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn infers_cell_values() {
        assert_eq!(CellValue::infer(""), CellValue::Null);
        assert_eq!(CellValue::infer("NA"), CellValue::Null);
        assert_eq!(CellValue::infer("42"), CellValue::Integer(42));
        assert_eq!(CellValue::infer("-1.5"), CellValue::Float(-1.5));
        assert_eq!(CellValue::infer("True"), CellValue::Bool(true));
        assert_eq!(CellValue::infer("false"), CellValue::Bool(false));
        assert_eq!(CellValue::infer("abc"), CellValue::String("abc".into()));
    }

    #[test]
    fn mixed_integer_and_float_column_widens_to_float() {
        let table = Table::from_raw(
            strings(&["v"]),
            vec![strings(&["1"]), strings(&["2.5"]), strings(&[""])],
        );
        assert_eq!(table.columns[0].dtype, ColumnType::Float);
        assert_eq!(
            table.rows.iter().map(|r| r[0].clone()).collect::<Vec<_>>(),
            vec![CellValue::Float(1.0), CellValue::Float(2.5), CellValue::Null]
        );
    }

    #[test]
    fn mixed_text_column_keeps_raw_text() {
        let table = Table::from_raw(
            strings(&["code"]),
            vec![strings(&["007"]), strings(&["x1"])],
        );
        assert_eq!(table.columns[0].dtype, ColumnType::String);
        assert_eq!(table.rows[0][0], CellValue::String("007".into()));
        assert_eq!(table.rows[1][0], CellValue::String("x1".into()));
    }

    #[test]
    fn all_null_column_is_empty() {
        let table = Table::from_raw(
            strings(&["a", "b"]),
            vec![strings(&["1", ""]), strings(&["2", "NaN"])],
        );
        assert_eq!(table.columns[0].dtype, ColumnType::Integer);
        assert_eq!(table.columns[1].dtype, ColumnType::Empty);
        assert_eq!(table.len(), 2);
        assert_eq!(table.n_columns(), 2);
    }

    #[test]
    fn null_cells_display_blank() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Float(0.5).to_string(), "0.5");
    }

    #[test]
    fn whole_floats_keep_a_decimal_point() {
        assert_eq!(CellValue::Float(1.0).to_string(), "1.0");
        assert_eq!(CellValue::Float(-3.0).to_string(), "-3.0");
        assert_eq!(CellValue::Integer(1).to_string(), "1");
    }
}
