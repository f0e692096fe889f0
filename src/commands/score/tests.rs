use super::borehole::{BoreholeScorer, DEPTH_OVERRIDE_SCORE};
use super::decision::{Criterion, Rule, RuleContext, SubScore, Tally, Verdict};
use super::methodology::{MethodologyBand, MethodologyGrade, SubScorer, quality_product};
use super::perturbation::flag_for_terms;
use super::probe::ProbeScorer;
use super::uncertainty::{coefficient_of_variation, grade_cov};
use super::*;
use crate::config::{CrossFieldMode, EngineConfig};
use crate::domain::DomainClass;
use crate::table::record_from_pairs;

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("score should be defined");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn score(pairs: &[(&str, &str)]) -> ScoreResult {
    Scorer::new(&EngineConfig::default()).score(&record_from_pairs(pairs))
}

#[test]
fn cov_boundaries_belong_to_the_lower_grade() {
    assert_eq!(grade_cov(Some(4.99)), UncertaintyGrade::U1);
    assert_eq!(grade_cov(Some(5.0)), UncertaintyGrade::U2);
    assert_eq!(grade_cov(Some(15.0)), UncertaintyGrade::U2);
    assert_eq!(grade_cov(Some(15.01)), UncertaintyGrade::U3);
    assert_eq!(grade_cov(Some(25.0)), UncertaintyGrade::U3);
    assert_eq!(grade_cov(Some(25.01)), UncertaintyGrade::U4);
    assert_eq!(grade_cov(None), UncertaintyGrade::Ux);
    assert_eq!(UncertaintyGrade::Ux.rank(), "not determined / missing data");
}

#[test]
fn cov_is_undefined_for_zero_mean() {
    assert_eq!(coefficient_of_variation(0.0, 3.0), None);
    assert_eq!(coefficient_of_variation(-80.0, 4.0), Some(5.0));

    let zero_mean = score(&[("ID", "HF-1"), ("C1", "0"), ("C2", "3")]);
    assert_eq!(zero_mean.uncertainty.grade, UncertaintyGrade::Ux);

    let no_uncertainty = score(&[("ID", "HF-1"), ("C1", "60")]);
    assert_eq!(no_uncertainty.uncertainty.cov_percent, None);
}

#[test]
fn multi_valued_heat_flow_grades_the_worst_cov() {
    let result = score(&[("ID", "HF-1"), ("C1", "100; 50"), ("C2", "5")]);
    assert_close(result.uncertainty.cov_percent, 10.0);
    assert_eq!(result.uncertainty.grade, UncertaintyGrade::U2);
}

#[test]
fn methodology_bands_are_half_open() {
    assert_eq!(MethodologyBand::for_product(0.75), Some(MethodologyBand::M1));
    assert_eq!(MethodologyBand::for_product(1.49), Some(MethodologyBand::M1));
    assert_eq!(MethodologyBand::for_product(0.749999), Some(MethodologyBand::M2));
    assert_eq!(MethodologyBand::for_product(0.25), Some(MethodologyBand::M3));
    assert_eq!(MethodologyBand::for_product(0.0), Some(MethodologyBand::M4));
    assert_eq!(MethodologyBand::for_product(1.5), None);
    assert_eq!(MethodologyBand::for_product(-0.1), None);

    let grade = MethodologyGrade {
        band: Some(MethodologyBand::M2),
        indeterminate: true,
    };
    assert_eq!(grade.code(), "M2x");
    let missing = MethodologyGrade {
        band: None,
        indeterminate: true,
    };
    assert_eq!(missing.code(), "Mx");
}

#[test]
fn most_negative_candidate_wins() {
    let record = record_from_pairs(&[("ID", "HF-1")]);
    let ctx = RuleContext::new(&record, CrossFieldMode::Either);

    let criterion = Criterion::new(
        "C6",
        vec![
            Rule::new(-0.1, |_| true),
            Rule::new(-0.3, |_| true),
            Rule::new(0.1, |_| true),
            Rule::new(-0.6, |_| false),
        ],
    );
    assert_eq!(criterion.evaluate(&ctx), Verdict::Penalty(-0.3));

    let silent = Criterion::new("C6", vec![Rule::new(-0.2, |_| false)]);
    assert_eq!(silent.evaluate(&ctx), Verdict::Undetermined);
}

#[test]
fn probe_record_scores_m1_without_indeterminate_suffix() {
    let result = score(&[
        ("ID", "HF-7"),
        ("P12", "[Probing (offshore-ocean)]"),
        ("P6", "3000"),
        ("C6", "5"),
        ("C23", "5"),
        ("C37", "6"),
        ("C42", "[Actual heat-flow location]"),
        ("C43", "[Lab - point source]"),
        ("C44", "[Saturated measured]"),
        ("C45", "[Replicated in-situ (pT)]"),
        ("C47", "4"),
    ]);

    assert_eq!(result.domain.class, DomainClass::ProbeSensing);
    assert_close(result.methodology.gradient.score, 1.1);
    assert_close(result.methodology.conductivity.score, 1.0);
    assert_close(result.methodology.product, 1.1);
    assert_eq!(result.methodology.grade.code(), "M1");
    assert_eq!(result.combined_code(), "UxM1.-------");
}

#[test]
fn probe_literature_location_leaves_sample_count_undetermined() {
    let result = score(&[
        ("ID", "HF-8"),
        ("P12", "[Probing-Clustering]"),
        ("C42", "[Literature-unspecified]"),
        ("C43", "[Probe - pulse technique]"),
        ("C45", "[Actual in-situ (pT) conditions]"),
        ("C47", "12"),
    ]);

    assert_close(result.methodology.gradient.score, 0.2);
    assert_close(result.methodology.conductivity.score, 1.0);
    assert_eq!(result.methodology.conductivity.undetermined, vec!["C47"]);
    assert_eq!(result.methodology.grade.code(), "M4x");
}

#[test]
fn probe_tilt_correction_flag_clears_the_tilt_penalty() {
    let record = record_from_pairs(&[
        ("ID", "HF-9"),
        ("P6", "2000"),
        ("C6", "12"),
        ("C23", "0"),
        ("C12", "[Tilt corrected]"),
        ("C37", "2"),
    ]);
    let ctx = RuleContext::new(&record, CrossFieldMode::Either);

    let gradient = ProbeScorer::new().temperature_gradient(&ctx);
    // -0.1 depth, +0.1 penetration, 0 tilt, -0.1 points
    assert_close(gradient.score, 0.9);
    assert!(gradient.undetermined.is_empty());
}

fn borehole_gradient(pairs: &[(&str, &str)], mode: CrossFieldMode) -> Option<f64> {
    let record = record_from_pairs(pairs);
    BoreholeScorer::new()
        .temperature_gradient(&RuleContext::new(&record, mode))
        .score
}

#[test]
fn borehole_gradient_tiers_follow_marker_and_point_count() {
    let either = CrossFieldMode::Either;
    assert_close(
        borehole_gradient(&[("ID", "B"), ("C31", "[SUR]"), ("C32", "[cBHT]")], either),
        0.7,
    );
    assert_close(
        borehole_gradient(&[("ID", "B"), ("C31", "[LOGeq]"), ("C37", "20")], either),
        1.1,
    );
    assert_close(
        borehole_gradient(&[("ID", "B"), ("C31", "[LOGpert]"), ("C37", "20")], either),
        0.9,
    );
    assert_close(
        borehole_gradient(&[("ID", "B"), ("C31", "[BHT]"), ("C37", "8")], either),
        0.7,
    );
    assert_close(
        borehole_gradient(&[("ID", "B"), ("C31", "[LOGeq]"), ("C37", "1")], either),
        0.4,
    );
}

#[test]
fn borehole_gradient_marker_follows_cross_field_mode() {
    let pairs = [("ID", "B"), ("C32", "[LOGeq]"), ("C37", "20")];
    assert_close(borehole_gradient(&pairs, CrossFieldMode::Either), 1.1);
    assert_close(borehole_gradient(&pairs, CrossFieldMode::FirstOnly), 0.4);
}

#[test]
fn missing_depth_interval_overrides_borehole_conductivity() {
    let scorer = BoreholeScorer::new();

    let no_depth = record_from_pairs(&[("ID", "B"), ("C41", "[Core samples]")]);
    let overridden =
        scorer.thermal_conductivity(&RuleContext::new(&no_depth, CrossFieldMode::Either));
    assert_eq!(overridden.score, Some(DEPTH_OVERRIDE_SCORE));
    assert!(overridden.undetermined.is_empty());

    let bottom_only = record_from_pairs(&[("ID", "B"), ("C41", "[Core samples]"), ("C5", "900")]);
    let evaluated =
        scorer.thermal_conductivity(&RuleContext::new(&bottom_only, CrossFieldMode::Either));
    assert_close(evaluated.score, 0.9);
    assert_eq!(evaluated.undetermined, vec!["C42", "C44", "C45"]);

    let first_only =
        scorer.thermal_conductivity(&RuleContext::new(&bottom_only, CrossFieldMode::FirstOnly));
    assert_eq!(first_only.score, Some(DEPTH_OVERRIDE_SCORE));
}

#[test]
fn complete_borehole_record_combines_both_sub_scores() {
    let result = score(&[
        ("ID", "HF-10"),
        ("P12", "[Drilling]"),
        ("C1", "100"),
        ("C2", "2"),
        ("C4", "100"),
        ("C31", "[LOGeq]"),
        ("C37", "20"),
        ("C41", "[In-situ probe]"),
        ("C42", "[Actual heat-flow location]"),
        ("C44", "[Saturated measured]"),
        ("C45", "[Corrected in-situ (pT)]"),
        ("C47", "20"),
        ("C13", "[Present and corrected]"),
    ]);

    assert_eq!(result.domain.class, DomainClass::BoreholeMine);
    assert_close(result.methodology.product, 1.21);
    assert_eq!(result.combined_code(), "U1M1.S------");
}

#[test]
fn unresolved_domain_yields_mx() {
    let result = score(&[
        ("ID", "HF-11"),
        ("P12", "[unspecified]"),
        ("P6", "3000"),
        ("C37", "6"),
    ]);

    assert_eq!(result.domain.class, DomainClass::Indeterminate);
    assert_eq!(result.methodology.product, None);
    assert_eq!(result.methodology.grade.code(), "Mx");
}

#[test]
fn perturbation_flags_ignore_case_and_keep_phenomenon_order() {
    let result = score(&[
        ("ID", "HF-12"),
        ("C19", "[whatever]"),
        ("C17", "[not recognized]"),
        ("C16", "[Not Recognised]"),
        ("C15", "[Present, not significant]"),
        ("C14", "[present and NOT corrected]"),
        ("C13", "[PRESENT AND CORRECTED]"),
    ]);
    assert_eq!(result.perturbation.as_str(), "SeXxx--");
}

#[test]
fn perturbation_precedence_applies_across_sub_values() {
    let terms = vec![
        "[not recognised]".to_string(),
        "[present and corrected]".to_string(),
    ];
    assert_eq!(flag_for_terms(&terms, 'V'), 'V');
    assert_eq!(flag_for_terms(&[], 'V'), '-');
    assert_eq!(
        flag_for_terms(&["[present not significant]".to_string()], 'R'),
        'X'
    );
}

#[test]
fn tally_sums_tenths_exactly() {
    let mut tally = Tally::new();
    for _ in 0..5 {
        tally.record("C44", Verdict::Penalty(-0.1));
    }
    assert_eq!(tally.finish().score, Some(0.5));

    assert_eq!(quality_product(Some(0.5), Some(0.5)), Some(0.25));
    assert_eq!(quality_product(Some(1.1), Some(1.1)), Some(1.21));
    assert_eq!(quality_product(Some(0.7), None), Some(0.7));
}

#[test]
fn exact_band_edges_grade_into_the_higher_band() {
    let quarter = score(&[
        ("ID", "HF-13"),
        ("P12", "[Drilling]"),
        ("C4", "100"),
        ("C31", "[CPD]"),
        ("C37", "8"),
        ("C41", "[Cutting samples]"),
        ("C42", "[Actual heat-flow location]"),
        ("C44", "[Dry measured]"),
        ("C45", "[Recorded ambient pT conditions]"),
        ("C47", "20"),
    ]);
    assert_eq!(quarter.methodology.gradient.score, Some(0.5));
    assert_eq!(quarter.methodology.conductivity.score, Some(0.5));
    assert_eq!(quarter.methodology.product, Some(0.25));
    assert_eq!(quarter.methodology.grade.code(), "M3");

    let half = score(&[
        ("ID", "HF-14"),
        ("P12", "[Drilling]"),
        ("C4", "100"),
        ("C31", "[CPD]"),
        ("C37", "8"),
        ("C41", "[Core samples]"),
        ("C42", "[Actual heat-flow location]"),
        ("C44", "[Saturated measured]"),
        ("C45", "[Corrected in-situ (pT)]"),
        ("C47", "20"),
    ]);
    assert_eq!(half.methodology.product, Some(0.5));
    assert_eq!(half.methodology.grade.code(), "M2");
}

fn with_overrides<'a>(
    base: &[(&'a str, &'a str)],
    overrides: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let mut pairs = base.to_vec();
    for (column, value) in overrides {
        match pairs.iter_mut().find(|(existing, _)| *existing == *column) {
            Some(pair) => pair.1 = *value,
            None => pairs.push((*column, *value)),
        }
    }
    pairs
}

fn gradient(result: &ScoreResult) -> &SubScore {
    &result.methodology.gradient
}

fn conductivity(result: &ScoreResult) -> &SubScore {
    &result.methodology.conductivity
}

// Every criterion in `base` contributes 0, so each case shows up as the
// difference from the base score of 1.0. An empty value clears the cell.
fn assert_penalties(
    base: &[(&str, &str)],
    part: fn(&ScoreResult) -> &SubScore,
    cases: &[(&str, &str, f64)],
) {
    for &(column, value, penalty) in cases {
        let result = score(&with_overrides(base, &[(column, value)]));
        let sub_score = part(&result);
        assert!(
            sub_score.undetermined.is_empty(),
            "{column}={value:?} left {:?} undetermined",
            sub_score.undetermined
        );
        let actual = sub_score.score.expect("sub-score should be defined") - 1.0;
        assert!(
            (actual - penalty).abs() < 1e-9,
            "{column}={value:?}: expected {penalty}, got {actual}"
        );
    }
}

const PROBE_BASE: &[(&str, &str)] = &[
    ("ID", "HF-20"),
    ("P12", "[Probing (offshore-ocean)]"),
    ("P6", "3000"),
    ("C6", "5"),
    ("C23", "5"),
    ("C37", "4"),
    ("C42", "[Actual heat-flow location]"),
    ("C43", "[Lab - point source]"),
    ("C44", "[Saturated measured]"),
    ("C45", "[Replicated in-situ (pT)]"),
    ("C47", "4"),
];

const BOREHOLE_BASE: &[(&str, &str)] = &[
    ("ID", "HF-21"),
    ("P12", "[Drilling]"),
    ("C4", "100"),
    ("C31", "[LOGeq]"),
    ("C37", "20"),
    ("C41", "[Core samples]"),
    ("C42", "[Actual heat-flow location]"),
    ("C44", "[Saturated measured]"),
    ("C45", "[Corrected in-situ (pT)]"),
    ("C47", "20"),
];

#[test]
fn probe_gradient_bands_include_their_edges() {
    assert_penalties(
        PROBE_BASE,
        gradient,
        &[
            ("P6", "", -0.2),
            ("P6", "1499", -0.2),
            ("P6", "1500", -0.1),
            ("P6", "2500", -0.1),
            ("P6", "2501", 0.0),
            ("P6", "-3000", 0.0),
            ("C6", "", -0.2),
            ("C6", "0.5", -0.2),
            ("C6", "1", -0.1),
            ("C6", "3", -0.1),
            ("C6", "3.5", 0.0),
            ("C6", "10", 0.0),
            ("C6", "10.5", 0.1),
            ("C23", "", -0.2),
            ("C23", "10", 0.0),
            ("C23", "10.5", -0.1),
            ("C23", "30", -0.1),
            ("C23", "30.5", -0.2),
            ("C37", "", -0.2),
            ("C37", "0.5", -0.2),
            ("C37", "1", -0.1),
            ("C37", "3", -0.1),
            ("C37", "5", 0.0),
            ("C37", "10", 0.1),
        ],
    );
}

#[test]
fn probe_conductivity_method_and_conditions_bands() {
    assert_penalties(
        PROBE_BASE,
        conductivity,
        &[
            ("C42", "[Other location]", -0.1),
            ("C44", "[Dry measured]", -0.2),
            ("C44", "[unspecified]", -0.2),
            ("C44", "[Saturated calculated]", -0.1),
            ("C44", "[Recovered]", 0.0),
            ("C43", "[unspecified]", -0.2),
            ("C43", "[Estimation - from mineral composition]", -0.2),
            ("C43", "[Estimation - from lithology and literature]", -0.1),
            ("C43", "[Probe - pulse technique]", 0.1),
            ("C45", "[Recorded ambient pT conditions]", -0.2),
            ("C45", "[Corrected in-situ (T)]", -0.1),
            ("C45", "[Corrected in-situ (pT)]", 0.0),
            ("C47", "", -0.2),
            ("C47", "0", -0.2),
            ("C47", "1", -0.2),
            ("C47", "2", -0.1),
            ("C47", "3", -0.1),
            ("C47", "3.5", 0.0),
        ],
    );

    let in_situ = score(&with_overrides(
        PROBE_BASE,
        &[
            ("C43", "[Probe - pulse technique]"),
            ("C45", "[Actual in-situ (pT) conditions]"),
        ],
    ));
    assert_close(in_situ.methodology.conductivity.score, 1.2);
}

#[test]
fn borehole_gradient_tiers_cover_every_marker_group() {
    let either = CrossFieldMode::Either;
    let cases = [
        (&[("C31", "[SUR]"), ("C32", "[CPD]")][..], 0.4),
        (&[("C31", "[SUR]"), ("C32", "[BHT]")][..], 0.5),
        (&[("C31", "[SUR]"), ("C32", "[cBHT]")][..], 0.7),
        (&[("C31", "[CPD]"), ("C37", "8")][..], 0.5),
        (&[("C31", "[BHT]"), ("C37", "3")][..], 0.7),
        (&[("C31", "[cBHT]"), ("C37", "14")][..], 0.9),
        (&[("C31", "[BHT]"), ("C37", "2")][..], 0.4),
        (&[("C31", "[LOGeq]"), ("C37", "15")][..], 0.4),
        (&[("C31", "[LOGeq]"), ("C37", "16")][..], 1.1),
        (&[("C31", "[LOGpert]"), ("C37", "15")][..], 0.4),
    ];

    for (cells, expected) in cases {
        let mut pairs = vec![("ID", "B")];
        pairs.extend_from_slice(cells);
        assert_close(borehole_gradient(&pairs, either), expected);
    }
}

#[test]
fn borehole_conductivity_bands() {
    assert_penalties(
        BOREHOLE_BASE,
        conductivity,
        &[
            ("C41", "[Assumed from literature]", -0.2),
            ("C41", "[Cutting samples]", -0.1),
            ("C41", "[In-situ probe]", 0.1),
            ("C42", "[Other location]", -0.1),
            ("C44", "[Dry measured]", -0.2),
            ("C44", "[Recovered]", -0.1),
            ("C44", "[Saturated calculated]", -0.1),
            ("C44", "[Saturated measured in-situ]", 0.0),
            ("C45", "[Unrecorded ambient pT conditions]", -0.2),
            ("C45", "[Replicated in-situ (p)]", -0.1),
            ("C45", "[Actual in-situ (pT) conditions]", 0.0),
            ("C47", "", -0.1),
            ("C47", "1", -0.1),
            ("C47", "15", -0.1),
            ("C47", "16", 0.0),
        ],
    );

    // literature location costs both C42 and C47
    assert_penalties(
        BOREHOLE_BASE,
        conductivity,
        &[("C42", "[Literature-unspecified]", -0.3)],
    );
}

#[test]
fn lab_method_without_known_saturation_is_undetermined() {
    for saturation in ["", "[Made up]"] {
        let result = score(&with_overrides(PROBE_BASE, &[("C44", saturation)]));
        assert_eq!(result.methodology.conductivity.undetermined, vec!["C43"]);
        assert_eq!(result.methodology.grade.code(), "M1x");
    }
}
