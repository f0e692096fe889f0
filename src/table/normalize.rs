use std::collections::BTreeMap;

use anyhow::{Context, Result};
use regex::Regex;

use super::{HeaderForm, RawTable};
use crate::catalog::{
    Applicability, FieldCode, FieldKind, HeaderProfile, Obligation, SchemaCatalog,
};

#[derive(Debug, Clone, PartialEq)]
pub enum NumericEntry {
    Value(f64),
    Invalid(String),
}

// An empty sequence means the cell was missing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Numeric(Vec<NumericEntry>),
    Categorical(Vec<String>),
    Date(Vec<String>),
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Numeric(entries) => entries.is_empty(),
            Self::Categorical(terms) | Self::Date(terms) => terms.is_empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub row: usize,
    pub source_index: usize,
    pub id: Option<String>,
    values: BTreeMap<FieldCode, FieldValue>,
}

impl Record {
    pub fn value(&self, code: FieldCode) -> Option<&FieldValue> {
        self.values.get(&code)
    }

    pub fn is_missing(&self, code: FieldCode) -> bool {
        self.value(code).is_none_or(FieldValue::is_missing)
    }

    pub fn is_present(&self, code: FieldCode) -> bool {
        !self.is_missing(code)
    }

    pub fn numeric_entries(&self, code: FieldCode) -> &[NumericEntry] {
        match self.value(code) {
            Some(FieldValue::Numeric(entries)) => entries,
            _ => &[],
        }
    }

    pub fn numbers(&self, code: FieldCode) -> impl Iterator<Item = f64> + '_ {
        self.numeric_entries(code)
            .iter()
            .filter_map(|entry| match entry {
                NumericEntry::Value(value) => Some(*value),
                NumericEntry::Invalid(_) => None,
            })
    }

    pub fn any_number(&self, code: FieldCode, predicate: impl Fn(f64) -> bool) -> bool {
        self.numbers(code).any(predicate)
    }

    pub fn has_number(&self, code: FieldCode) -> bool {
        self.numbers(code).next().is_some()
    }

    pub fn terms(&self, code: FieldCode) -> &[String] {
        match self.value(code) {
            Some(FieldValue::Categorical(terms)) | Some(FieldValue::Date(terms)) => terms,
            _ => &[],
        }
    }

    pub fn has_term(&self, code: FieldCode, term: &str) -> bool {
        self.terms(code).iter().any(|value| value == term)
    }

    pub fn has_any_term(&self, code: FieldCode, terms: &[&str]) -> bool {
        self.terms(code)
            .iter()
            .any(|value| terms.contains(&value.as_str()))
    }

    pub fn mentions(&self, code: FieldCode, needle: &str) -> bool {
        self.terms(code).iter().any(|value| value.contains(needle))
    }
}

#[derive(Debug, Clone)]
pub struct TableLayout {
    pub form: HeaderForm,
    pub total_rows: usize,
}

impl TableLayout {
    pub fn is_header_row(&self, index: usize) -> bool {
        index < self.form.header_rows()
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub layout: TableLayout,
    pub catalog: SchemaCatalog,
    pub records: Vec<Record>,
}

pub fn normalize(
    table: &RawTable,
    catalog: &SchemaCatalog,
    use_table_header: bool,
) -> Result<NormalizedTable> {
    let pattern =
        Regex::new(r"^\s*([PpCc])(\d{1,4})\s*$").context("failed to compile field code regex")?;

    let field_columns = table
        .columns
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            parse_field_code(name, &pattern)
                .filter(|code| catalog.contains(*code))
                .map(|code| (index, code))
        })
        .collect::<Vec<(usize, FieldCode)>>();

    let form = HeaderForm::detect(table);
    let catalog = if use_table_header && form == HeaderForm::Long {
        catalog.with_header_profile(&header_profile(table, &field_columns))
    } else {
        catalog.clone()
    };

    let skip = form.header_rows().min(table.rows.len());
    let records = (skip..table.rows.len())
        .enumerate()
        .map(|(position, source_index)| {
            let mut values = BTreeMap::new();
            for (column, code) in &field_columns {
                let Some(spec) = catalog.get(*code) else {
                    continue;
                };
                let text = table.cell_text(source_index, *column);
                values.insert(*code, coerce(spec.kind, text.as_deref()));
            }

            Record {
                row: position + 1,
                source_index,
                id: table
                    .cell_text(source_index, 0)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty()),
                values,
            }
        })
        .collect();

    Ok(NormalizedTable {
        layout: TableLayout {
            form,
            total_rows: table.rows.len(),
        },
        catalog,
        records,
    })
}

fn parse_field_code(name: &str, pattern: &Regex) -> Option<FieldCode> {
    let captures = pattern.captures(name)?;
    let number = captures.get(2)?.as_str().parse::<u16>().ok()?;
    match captures.get(1)?.as_str() {
        "P" | "p" => Some(FieldCode::parent(number)),
        _ => Some(FieldCode::child(number)),
    }
}

// The long-form header keeps obligation in its first row and domain
// applicability in its second.
fn header_profile(table: &RawTable, field_columns: &[(usize, FieldCode)]) -> HeaderProfile {
    let mut profile = HeaderProfile::default();
    for (column, code) in field_columns {
        let obligation = table
            .cell_text(0, *column)
            .map(|value| Obligation::from_header_cell(&value))
            .unwrap_or(Obligation::Optional);
        let applicability = table
            .cell_text(1, *column)
            .map(|value| Applicability::from_header_cell(&value))
            .unwrap_or_default();
        profile.fields.insert(*code, (obligation, applicability));
    }
    profile
}

fn sub_values(text: Option<&str>) -> Vec<&str> {
    text.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty() && !part.eq_ignore_ascii_case("nan"))
            .collect()
    })
    .unwrap_or_default()
}

fn coerce(kind: FieldKind, text: Option<&str>) -> FieldValue {
    let parts = sub_values(text);
    match kind {
        FieldKind::Numeric(_) => FieldValue::Numeric(
            parts
                .into_iter()
                .map(|part| match part.parse::<f64>() {
                    Ok(value) => NumericEntry::Value(value),
                    Err(_) => NumericEntry::Invalid(part.to_string()),
                })
                .collect(),
        ),
        FieldKind::Categorical(_) => {
            FieldValue::Categorical(parts.into_iter().map(str::to_lowercase).collect())
        }
        FieldKind::Date => FieldValue::Date(parts.into_iter().map(str::to_lowercase).collect()),
    }
}
