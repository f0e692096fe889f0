use std::fmt;

use serde::{Serialize, Serializer};

use super::terms::PRESENT_AND_CORRECTED;
use crate::catalog::FieldCode;
use crate::catalog::codes::{C13, C14, C15, C16, C17, C18, C19};
use crate::table::Record;

// sedimentation, erosion, topography/bathymetry, paleoclimate,
// water-temperature variation, fluid convection, heat refraction
pub const PHENOMENA: [(FieldCode, char); 7] = [
    (C13, 'S'),
    (C14, 'E'),
    (C15, 'T'),
    (C16, 'P'),
    (C17, 'V'),
    (C18, 'C'),
    (C19, 'R'),
];

const NOT_SIGNIFICANT: &[&str] = &["[present not significant]", "[present, not significant]"];
const NOT_RECOGNISED: &[&str] = &["[not recognised]", "[not recognized]"];

fn mentions_any(terms: &[String], needles: &[&str]) -> bool {
    terms
        .iter()
        .any(|term| needles.iter().any(|needle| term.contains(needle)))
}

pub fn flag_for_terms(terms: &[String], letter: char) -> char {
    if mentions_any(terms, &[PRESENT_AND_CORRECTED]) {
        letter.to_ascii_uppercase()
    } else if mentions_any(terms, &["[present and not corrected]"]) {
        letter.to_ascii_lowercase()
    } else if mentions_any(terms, NOT_SIGNIFICANT) {
        'X'
    } else if mentions_any(terms, NOT_RECOGNISED) {
        'x'
    } else {
        '-'
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerturbationFlags(String);

impl PerturbationFlags {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PerturbationFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PerturbationFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn encode_perturbations(record: &Record) -> PerturbationFlags {
    PerturbationFlags(
        PHENOMENA
            .iter()
            .map(|(code, letter)| flag_for_terms(record.terms(*code), *letter))
            .collect(),
    )
}
