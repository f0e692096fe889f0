use serde_json::Value;

use crate::commands::check::RecordErrors;
use crate::commands::score::ScoreResult;
use crate::table::{HeaderForm, RawTable, TableLayout};

pub const ERROR_COLUMN: &str = "Error";

const HEADER_FILLER: &str = "-";
const DESCRIPTION_ROW: usize = 3;
const SHORT_NAME_ROW: usize = 6;

pub struct ScoreColumn {
    pub name: &'static str,
    pub description: &'static str,
    pub short_name: &'static str,
    pub value: fn(&ScoreResult) -> String,
}

pub const SCORE_COLUMNS: [ScoreColumn; 4] = [
    ScoreColumn {
        name: "A9",
        description: "quality code",
        short_name: "Quality_Code",
        value: ScoreResult::combined_code,
    },
    ScoreColumn {
        name: "A10",
        description: "uncertainty quantification",
        short_name: "U-score",
        value: |result| result.uncertainty.grade.code().to_string(),
    },
    ScoreColumn {
        name: "A11",
        description: "methodological quality",
        short_name: "M-score",
        value: |result| result.methodology.grade.code(),
    },
    ScoreColumn {
        name: "A12",
        description: "perturbations effects",
        short_name: "P-flags",
        value: |result| result.perturbation.to_string(),
    },
];

impl ScoreColumn {
    fn header_label(&self, form: HeaderForm, row: usize) -> Value {
        let label = match (form, row) {
            (HeaderForm::Long, DESCRIPTION_ROW) => self.description,
            (HeaderForm::Long, SHORT_NAME_ROW) | (HeaderForm::Short, 0) => self.short_name,
            _ => HEADER_FILLER,
        };
        Value::String(label.to_string())
    }
}

// Places each value at its record's original row; header rows get `header`.
fn merge_by_position(
    layout: &TableLayout,
    header: impl Fn(usize) -> Value,
    entries: impl IntoIterator<Item = (usize, Value)>,
) -> Vec<Value> {
    let mut column = (0..layout.total_rows)
        .map(|index| {
            if layout.is_header_row(index) {
                header(index)
            } else {
                Value::Null
            }
        })
        .collect::<Vec<_>>();

    for (index, value) in entries {
        if let Some(slot) = column.get_mut(index) {
            *slot = value;
        }
    }
    column
}

pub fn compose_scores(table: &mut RawTable, layout: &TableLayout, results: &[ScoreResult]) {
    for spec in &SCORE_COLUMNS {
        let values = merge_by_position(
            layout,
            |row| spec.header_label(layout.form, row),
            results
                .iter()
                .map(|result| (result.source_index, Value::String((spec.value)(result)))),
        );
        table.append_column(spec.name, values);
    }
}

pub fn compose_errors(table: &mut RawTable, layout: &TableLayout, errors: &[RecordErrors]) {
    let values = merge_by_position(
        layout,
        |_| Value::Null,
        errors
            .iter()
            .map(|record| (record.source_index, Value::String(record.render()))),
    );
    table.append_column(ERROR_COLUMN, values);
}
