use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod normalize;

pub use normalize::{NumericEntry, Record, TableLayout, normalize};

pub const LONG_HEADER_SENTINEL: &str = "Obligation";
pub const SHORT_HEADER_SENTINEL: &str = "Short Name";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl RawTable {
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column).and_then(cell_text)
    }

    #[cfg(test)]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn append_column(&mut self, name: &str, values: Vec<Value>) {
        let width = self.columns.len();
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.resize(width, Value::Null);
            row.push(value);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderForm {
    Long,
    Short,
    None,
}

impl HeaderForm {
    pub fn detect(table: &RawTable) -> Self {
        match table.cell_text(0, 0).as_deref().map(str::trim) {
            Some(LONG_HEADER_SENTINEL) => Self::Long,
            Some(SHORT_HEADER_SENTINEL) => Self::Short,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::None => "none",
        }
    }

    pub fn header_rows(self) -> usize {
        match self {
            Self::Long => 7,
            Self::Short => 1,
            Self::None => 0,
        }
    }
}

pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

pub fn load_table(path: &Path) -> Result<RawTable> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let table: RawTable = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse table {}", path.display()))?;

    if table.columns.is_empty() {
        bail!("table has no columns: {}", path.display());
    }

    if let Some((index, row)) = table
        .rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() > table.columns.len())
    {
        bail!(
            "row {} of {} has {} cells but only {} columns are declared",
            index,
            path.display(),
            row.len(),
            table.columns.len()
        );
    }

    Ok(table)
}

#[cfg(test)]
pub(crate) fn record_from_pairs(pairs: &[(&str, &str)]) -> Record {
    let catalog = crate::catalog::SchemaCatalog::ihfc_2024();
    let table = RawTable {
        columns: pairs.iter().map(|(column, _)| column.to_string()).collect(),
        rows: vec![
            pairs
                .iter()
                .map(|(_, value)| Value::String(value.to_string()))
                .collect(),
        ],
    };

    let normalized = normalize(&table, &catalog, false).expect("fixture table should normalize");
    normalized
        .records
        .into_iter()
        .next()
        .expect("fixture table should yield one record")
}
