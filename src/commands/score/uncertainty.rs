use serde::Serialize;

use crate::catalog::codes::{C1, C2};
use crate::table::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum UncertaintyGrade {
    U1,
    U2,
    U3,
    U4,
    Ux,
}

impl UncertaintyGrade {
    pub const ALL: [UncertaintyGrade; 5] = [Self::U1, Self::U2, Self::U3, Self::U4, Self::Ux];

    pub fn code(self) -> &'static str {
        match self {
            Self::U1 => "U1",
            Self::U2 => "U2",
            Self::U3 => "U3",
            Self::U4 => "U4",
            Self::Ux => "Ux",
        }
    }

    pub fn rank(self) -> &'static str {
        match self {
            Self::U1 => "Excellent",
            Self::U2 => "Good",
            Self::U3 => "Ok",
            Self::U4 => "Poor",
            Self::Ux => "not determined / missing data",
        }
    }
}

// Boundary values 5, 15 and 25 fall into the lower grade.
pub fn grade_cov(cov_percent: Option<f64>) -> UncertaintyGrade {
    match cov_percent {
        None => UncertaintyGrade::Ux,
        Some(cov) if cov < 5.0 => UncertaintyGrade::U1,
        Some(cov) if (5.0..=15.0).contains(&cov) => UncertaintyGrade::U2,
        Some(cov) if cov > 15.0 && cov <= 25.0 => UncertaintyGrade::U3,
        Some(cov) if cov > 25.0 => UncertaintyGrade::U4,
        Some(_) => UncertaintyGrade::Ux,
    }
}

pub fn coefficient_of_variation(mean: f64, uncertainty: f64) -> Option<f64> {
    if mean == 0.0 || !mean.is_finite() || !uncertainty.is_finite() {
        return None;
    }
    Some(uncertainty.abs() / mean.abs() * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UncertaintyScore {
    pub cov_percent: Option<f64>,
    pub grade: UncertaintyGrade,
    pub rank: &'static str,
}

pub fn score_uncertainty(record: &Record) -> UncertaintyScore {
    let cov_percent = record
        .numbers(C1)
        .flat_map(|mean| {
            record
                .numbers(C2)
                .filter_map(move |uncertainty| coefficient_of_variation(mean, uncertainty))
        })
        .reduce(f64::max);

    let grade = grade_cov(cov_percent);
    UncertaintyScore {
        cov_percent,
        grade,
        rank: grade.rank(),
    }
}
