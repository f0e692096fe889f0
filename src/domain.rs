use serde::Serialize;

use crate::catalog::codes::P12;
use crate::catalog::{Applicability, BOREHOLE_METHODS, PROBE_METHODS, UNRESOLVED_METHODS};
use crate::config::CrossFieldMode;
use crate::table::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainClass {
    BoreholeMine,
    ProbeSensing,
    Indeterminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationIssue {
    Missing,
    Unresolved,
    Ambiguous,
}

impl ClassificationIssue {
    pub fn message(self) -> &'static str {
        match self {
            Self::Missing => "Mandatory entry is empty; Quality Check is not possible!",
            Self::Unresolved | Self::Ambiguous => "Quality Check is not possible!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub class: DomainClass,
    pub issue: Option<ClassificationIssue>,
}

impl Classification {
    pub fn classify(record: &Record) -> Self {
        let terms = record.terms(P12);

        let issue = if terms.is_empty() {
            Some(ClassificationIssue::Missing)
        } else if record.has_any_term(P12, UNRESOLVED_METHODS) {
            Some(ClassificationIssue::Unresolved)
        } else if record.has_any_term(P12, BOREHOLE_METHODS)
            && record.has_any_term(P12, PROBE_METHODS)
        {
            Some(ClassificationIssue::Ambiguous)
        } else {
            None
        };

        if issue.is_some() {
            return Self {
                class: DomainClass::Indeterminate,
                issue,
            };
        }

        let first = terms[0].as_str();
        let class = if BOREHOLE_METHODS.contains(&first) {
            DomainClass::BoreholeMine
        } else if PROBE_METHODS.contains(&first) {
            DomainClass::ProbeSensing
        } else {
            DomainClass::Indeterminate
        };

        Self { class, issue: None }
    }

    pub fn is_unresolved(&self) -> bool {
        self.issue.is_some()
    }

    // Whether a field with this applicability is required for the record.
    pub fn requires(&self, applicability: Applicability, mode: CrossFieldMode) -> bool {
        match self.class {
            DomainClass::BoreholeMine => applicability.borehole,
            DomainClass::ProbeSensing => applicability.probe,
            DomainClass::Indeterminate if self.is_unresolved() => match mode {
                CrossFieldMode::Either => applicability.borehole || applicability.probe,
                CrossFieldMode::FirstOnly => applicability.borehole,
            },
            DomainClass::Indeterminate => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record_from_pairs;

    #[test]
    fn classifies_single_domain_terms() {
        let bore = Classification::classify(&record_from_pairs(&[("P12", "[Drilling]")]));
        assert_eq!(bore.class, DomainClass::BoreholeMine);
        assert_eq!(bore.issue, None);

        let probe =
            Classification::classify(&record_from_pairs(&[("P12", "[Probing (offshore-ocean)]")]));
        assert_eq!(probe.class, DomainClass::ProbeSensing);

        let legacy = Classification::classify(&record_from_pairs(&[(
            "P12",
            "[Probing (onshore/lake, river, etc.)]",
        )]));
        assert_eq!(legacy.class, DomainClass::ProbeSensing);
    }

    #[test]
    fn missing_unspecified_and_mixed_methods_are_unresolved() {
        let missing = Classification::classify(&record_from_pairs(&[("P12", "")]));
        assert_eq!(missing.class, DomainClass::Indeterminate);
        assert_eq!(missing.issue, Some(ClassificationIssue::Missing));

        let unspecified =
            Classification::classify(&record_from_pairs(&[("P12", "[Mining];[unspecified]")]));
        assert_eq!(unspecified.issue, Some(ClassificationIssue::Unresolved));

        let mixed = Classification::classify(&record_from_pairs(&[(
            "P12",
            "[Drilling];[Probing-Clustering]",
        )]));
        assert_eq!(mixed.class, DomainClass::Indeterminate);
        assert_eq!(mixed.issue, Some(ClassificationIssue::Ambiguous));
    }

    #[test]
    fn unknown_method_is_indeterminate_without_classification_issue() {
        let unknown = Classification::classify(&record_from_pairs(&[("P12", "[Dowsing]")]));
        assert_eq!(unknown.class, DomainClass::Indeterminate);
        assert!(!unknown.is_unresolved());
        assert!(!unknown.requires(Applicability::BOTH, CrossFieldMode::Either));
    }

    #[test]
    fn unresolved_records_follow_cross_field_mode() {
        let unresolved = Classification::classify(&record_from_pairs(&[("P12", "[unspecified]")]));
        assert!(unresolved.requires(Applicability::PROBE, CrossFieldMode::Either));
        assert!(!unresolved.requires(Applicability::PROBE, CrossFieldMode::FirstOnly));
        assert!(unresolved.requires(Applicability::BOREHOLE, CrossFieldMode::FirstOnly));
    }
}
