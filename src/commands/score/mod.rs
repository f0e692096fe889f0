use serde::Serialize;

use crate::config::{CrossFieldMode, EngineConfig};
use crate::domain::Classification;
use crate::table::Record;

mod borehole;
mod decision;
mod methodology;
mod perturbation;
mod probe;
mod run;
mod terms;
mod uncertainty;
#[cfg(test)]
mod tests;

pub use self::methodology::{MethodologyScore, MethodologyScorer};
pub use self::perturbation::{PerturbationFlags, encode_perturbations};
pub use self::run::{run, score_file};
pub use self::uncertainty::{UncertaintyGrade, UncertaintyScore, score_uncertainty};

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub row: usize,
    pub source_index: usize,
    pub id: Option<String>,
    pub domain: Classification,
    pub uncertainty: UncertaintyScore,
    pub methodology: MethodologyScore,
    pub perturbation: PerturbationFlags,
}

impl ScoreResult {
    pub fn combined_code(&self) -> String {
        format!(
            "{}{}.{}",
            self.uncertainty.grade.code(),
            self.methodology.grade.code(),
            self.perturbation
        )
    }
}

pub struct Scorer {
    mode: CrossFieldMode,
    methodology: MethodologyScorer,
}

impl Scorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            mode: config.cross_field_mode,
            methodology: MethodologyScorer::new(),
        }
    }

    pub fn score(&self, record: &Record) -> ScoreResult {
        let domain = Classification::classify(record);
        ScoreResult {
            row: record.row,
            source_index: record.source_index,
            id: record.id.clone(),
            domain,
            uncertainty: score_uncertainty(record),
            methodology: self.methodology.score(record, &domain, self.mode),
            perturbation: encode_perturbations(record),
        }
    }

    pub fn score_all(&self, records: &[Record]) -> Vec<ScoreResult> {
        records
            .iter()
            .map(|record| self.score(record))
            .collect::<Vec<_>>()
    }
}
