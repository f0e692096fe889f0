use serde::{Serialize, Serializer};

use super::borehole::BoreholeScorer;
use super::decision::{RuleContext, SubScore};
use super::probe::ProbeScorer;
use crate::config::CrossFieldMode;
use crate::domain::{Classification, DomainClass};
use crate::table::Record;

pub trait SubScorer {
    fn temperature_gradient(&self, ctx: &RuleContext<'_>) -> SubScore;
    fn thermal_conductivity(&self, ctx: &RuleContext<'_>) -> SubScore;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodologyBand {
    M1,
    M2,
    M3,
    M4,
}

impl MethodologyBand {
    // Half-open bands; anything outside [0, 1.5) has no band.
    pub fn for_product(product: f64) -> Option<Self> {
        if (0.75..1.5).contains(&product) {
            Some(Self::M1)
        } else if (0.5..0.75).contains(&product) {
            Some(Self::M2)
        } else if (0.25..0.5).contains(&product) {
            Some(Self::M3)
        } else if (0.0..0.25).contains(&product) {
            Some(Self::M4)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M3 => "M3",
            Self::M4 => "M4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodologyGrade {
    pub band: Option<MethodologyBand>,
    pub indeterminate: bool,
}

impl MethodologyGrade {
    pub fn is_conclusive(&self) -> bool {
        self.band.is_some() && !self.indeterminate
    }

    pub fn code(&self) -> String {
        match self.band {
            Some(band) if self.indeterminate => format!("{}x", band.as_str()),
            Some(band) => band.as_str().to_string(),
            None => "Mx".to_string(),
        }
    }
}

impl Serialize for MethodologyGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

// Both sub-scores carry one decimal, so the product is exact at hundredths.
pub fn quality_product(gradient: Option<f64>, conductivity: Option<f64>) -> Option<f64> {
    match (gradient, conductivity) {
        (Some(t), Some(tc)) => Some((t * tc * 100.0).round() / 100.0),
        (Some(score), None) | (None, Some(score)) => Some(score),
        (None, None) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodologyScore {
    pub domain: DomainClass,
    pub gradient: SubScore,
    pub conductivity: SubScore,
    pub product: Option<f64>,
    pub grade: MethodologyGrade,
}

impl MethodologyScore {
    fn from_parts(domain: DomainClass, gradient: SubScore, conductivity: SubScore) -> Self {
        let product = quality_product(gradient.score, conductivity.score);
        let grade = MethodologyGrade {
            band: product.and_then(MethodologyBand::for_product),
            indeterminate: !gradient.is_complete() || !conductivity.is_complete(),
        };
        Self {
            domain,
            gradient,
            conductivity,
            product,
            grade,
        }
    }

    pub fn undetermined_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.gradient
            .undetermined
            .iter()
            .chain(self.conductivity.undetermined.iter())
            .copied()
    }
}

pub struct MethodologyScorer {
    probe: ProbeScorer,
    borehole: BoreholeScorer,
}

impl MethodologyScorer {
    pub fn new() -> Self {
        Self {
            probe: ProbeScorer::new(),
            borehole: BoreholeScorer::new(),
        }
    }

    pub fn scorer_for(&self, class: DomainClass) -> Option<&dyn SubScorer> {
        match class {
            DomainClass::ProbeSensing => Some(&self.probe),
            DomainClass::BoreholeMine => Some(&self.borehole),
            DomainClass::Indeterminate => None,
        }
    }

    pub fn score(
        &self,
        record: &Record,
        classification: &Classification,
        mode: CrossFieldMode,
    ) -> MethodologyScore {
        let Some(scorer) = self.scorer_for(classification.class) else {
            return MethodologyScore::from_parts(
                classification.class,
                SubScore::undefined(),
                SubScore::undefined(),
            );
        };

        let ctx = RuleContext::new(record, mode);
        MethodologyScore::from_parts(
            classification.class,
            scorer.temperature_gradient(&ctx),
            scorer.thermal_conductivity(&ctx),
        )
    }
}
