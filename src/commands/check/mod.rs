use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::catalog::codes::P12;
use crate::catalog::{FieldCode, FieldKind, FieldSpec, SchemaCatalog};
use crate::config::{CrossFieldMode, EngineConfig};
use crate::domain::{Classification, ClassificationIssue, DomainClass};
use crate::table::Record;

mod categorical;
mod date;
mod numeric;
mod run;

pub use self::run::{check_file, run};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MandatoryEmpty,
    DomainUnresolved,
    InvalidFormat,
    RangeViolation,
    CrossFieldInconsistency,
    VocabularyWarning,
}

impl ErrorKind {
    pub fn severity(self) -> u8 {
        match self {
            Self::MandatoryEmpty => 6,
            Self::DomainUnresolved => 5,
            Self::InvalidFormat => 4,
            Self::RangeViolation => 3,
            Self::CrossFieldInconsistency => 2,
            Self::VocabularyWarning => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: FieldCode,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    fn new(field: FieldCode, kind: ErrorKind, message: &str) -> Self {
        Self {
            field,
            kind,
            message: message.to_string(),
        }
    }

    pub fn mandatory_empty(field: FieldCode) -> Self {
        Self::new(field, ErrorKind::MandatoryEmpty, "Mandatory entry is empty!")
    }

    pub fn invalid_format(field: FieldCode) -> Self {
        Self::new(field, ErrorKind::InvalidFormat, "invalid format")
    }

    pub fn range_violated(field: FieldCode) -> Self {
        Self::new(field, ErrorKind::RangeViolation, "range violated")
    }

    pub fn vocabulary_warning(field: FieldCode) -> Self {
        Self::new(field, ErrorKind::VocabularyWarning, "vocabulary warning")
    }

    pub fn cross_field(field: FieldCode, message: &str) -> Self {
        Self::new(field, ErrorKind::CrossFieldInconsistency, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.message)
    }
}

// The verdict for one sub-value; empty when the sub-value is acceptable.
pub type Verdict = Vec<ValidationError>;

fn verdict_severity(verdict: &Verdict) -> u8 {
    verdict
        .iter()
        .map(|error| error.kind.severity())
        .max()
        .unwrap_or(0)
}

// Keeps the most severe sub-value verdict; earlier sub-values win ties.
pub fn worst_case(verdicts: impl IntoIterator<Item = Verdict>) -> Verdict {
    verdicts
        .into_iter()
        .fold(Vec::new(), |worst, verdict| {
            if verdict_severity(&verdict) > verdict_severity(&worst) {
                verdict
            } else {
                worst
            }
        })
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordErrors {
    pub row: usize,
    pub source_index: usize,
    pub id: Option<String>,
    pub errors: Vec<ValidationError>,
}

impl RecordErrors {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    // P fields before C fields, each by number; exact repeats collapse.
    pub fn render(&self) -> String {
        let mut ordered = self.errors.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|error| error.field);

        let mut seen = HashSet::new();
        ordered
            .into_iter()
            .map(ToString::to_string)
            .filter(|message| seen.insert(message.clone()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub struct FieldContext<'a> {
    pub record: &'a Record,
    pub classification: Classification,
    pub mode: CrossFieldMode,
}

impl FieldContext<'_> {
    pub fn requires(&self, spec: &FieldSpec) -> bool {
        spec.is_mandatory() && self.classification.requires(spec.applicability, self.mode)
    }

    pub fn is_probe(&self) -> bool {
        self.classification.class == DomainClass::ProbeSensing
    }

    pub fn missing_mandatory(&self, spec: &FieldSpec) -> Verdict {
        if self.requires(spec) {
            vec![ValidationError::mandatory_empty(spec.code)]
        } else {
            Vec::new()
        }
    }
}

pub struct Validator<'a> {
    catalog: &'a SchemaCatalog,
    mode: CrossFieldMode,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a SchemaCatalog, config: &EngineConfig) -> Self {
        Self {
            catalog,
            mode: config.cross_field_mode,
        }
    }

    pub fn validate(&self, record: &Record) -> RecordErrors {
        let classification = Classification::classify(record);
        let ctx = FieldContext {
            record,
            classification,
            mode: self.mode,
        };

        let mut errors = Vec::new();
        if let Some(issue) = classification.issue {
            let kind = match issue {
                ClassificationIssue::Missing => ErrorKind::MandatoryEmpty,
                ClassificationIssue::Unresolved | ClassificationIssue::Ambiguous => {
                    ErrorKind::DomainUnresolved
                }
            };
            errors.push(ValidationError::new(P12, kind, issue.message()));
        }

        for spec in self.catalog.numeric_fields() {
            if let FieldKind::Numeric(range) = spec.kind {
                errors.extend(numeric::check(&ctx, spec, range));
            }
        }
        for spec in self.catalog.categorical_fields() {
            errors.extend(categorical::check(&ctx, spec));
        }
        for spec in self.catalog.date_fields() {
            errors.extend(date::check(&ctx, spec));
        }

        RecordErrors {
            row: record.row,
            source_index: record.source_index,
            id: record.id.clone(),
            errors,
        }
    }

    pub fn validate_all(&self, records: &[Record]) -> Vec<RecordErrors> {
        records
            .iter()
            .map(|record| self.validate(record))
            .collect::<Vec<_>>()
    }
}
