use super::decision::{Criterion, Rule, RuleContext, SubScore, Tally};
use super::methodology::SubScorer;
use super::terms::*;
use crate::catalog::codes::{C6, C11, C12, C17, C23, C37, C42, C43, C44, C45, C47, P6};

pub struct ProbeScorer {
    gradient: Vec<Criterion>,
    conductivity: Vec<Criterion>,
}

impl ProbeScorer {
    pub fn new() -> Self {
        Self {
            gradient: gradient_table(),
            conductivity: conductivity_table(),
        }
    }
}

impl SubScorer for ProbeScorer {
    fn temperature_gradient(&self, ctx: &RuleContext<'_>) -> SubScore {
        let mut tally = Tally::new();
        for criterion in &self.gradient {
            tally.apply(criterion, ctx);
        }
        tally.finish()
    }

    fn thermal_conductivity(&self, ctx: &RuleContext<'_>) -> SubScore {
        let mut tally = Tally::new();
        for criterion in &self.conductivity {
            tally.apply(criterion, ctx);
        }
        tally.finish()
    }
}

fn gradient_table() -> Vec<Criterion> {
    vec![
        // water depth
        Criterion::new(
            "P6",
            vec![
                Rule::new(-0.2, |ctx| {
                    ctx.missing_number(P6) || ctx.record.any_number(P6, |v| v.abs() < 1500.0)
                }),
                Rule::new(-0.1, |ctx| {
                    ctx.record
                        .any_number(P6, |v| (1500.0..=2500.0).contains(&v.abs()))
                }),
                Rule::new(0.0, |ctx| {
                    ctx.record.any_number(P6, |v| v.abs() > 2500.0)
                        || ctx.record.mentions(C17, PRESENT_AND_CORRECTED)
                }),
            ],
        ),
        // penetration depth
        Criterion::new(
            "C6",
            vec![
                Rule::new(-0.2, |ctx| {
                    ctx.missing_number(C6) || ctx.record.any_number(C6, |v| v < 1.0)
                }),
                Rule::new(-0.1, |ctx| {
                    ctx.record.any_number(C6, |v| (1.0..=3.0).contains(&v))
                }),
                Rule::new(0.0, |ctx| ctx.record.any_number(C6, |v| v > 3.0 && v <= 10.0)),
                Rule::new(0.1, |ctx| ctx.record.any_number(C6, |v| v > 10.0)),
            ],
        ),
        // tilt
        Criterion::new(
            "C23",
            vec![
                Rule::new(-0.2, |ctx| {
                    ctx.missing_number(C23) || ctx.record.any_number(C23, |v| v > 30.0)
                }),
                Rule::new(-0.1, |ctx| {
                    ctx.record.any_number(C23, |v| v > 10.0 && v <= 30.0)
                }),
                Rule::new(0.0, |ctx| {
                    ctx.record.any_number(C23, |v| v > 0.0 && v <= 10.0)
                        || ctx.record.mentions(C11, TILT_CORRECTED)
                        || ctx.record.mentions(C12, TILT_CORRECTED)
                }),
            ],
        ),
        // temperature points
        Criterion::new(
            "C37",
            vec![
                Rule::new(-0.2, |ctx| {
                    ctx.missing_number(C37) || ctx.record.any_number(C37, |v| v < 1.0)
                }),
                Rule::new(-0.1, |ctx| {
                    ctx.record.any_number(C37, |v| (1.0..=3.0).contains(&v))
                }),
                Rule::new(0.0, |ctx| ctx.record.any_number(C37, |v| v > 3.0 && v <= 5.0)),
                Rule::new(0.1, |ctx| ctx.record.any_number(C37, |v| v > 5.0)),
            ],
        ),
    ]
}

fn is_lab_method(ctx: &RuleContext<'_>) -> bool {
    ctx.record
        .terms(C43)
        .iter()
        .any(|term| term.starts_with(LAB_METHOD_PREFIX))
}

fn uses_literature_location(ctx: &RuleContext<'_>) -> bool {
    ctx.record.has_any_term(C42, LITERATURE_LOCATION)
}

fn conductivity_table() -> Vec<Criterion> {
    vec![
        Criterion::new(
            "C42",
            vec![
                Rule::new(-0.2, uses_literature_location),
                Rule::new(-0.1, |ctx| ctx.record.has_any_term(C42, OTHER_LOCATION)),
                Rule::new(0.0, |ctx| ctx.record.has_any_term(C42, ACTUAL_LOCATION)),
            ],
        ),
        // lab methods defer to the saturation state in C44
        Criterion::new(
            "C43",
            vec![
                Rule::new(-0.2, |ctx| {
                    is_lab_method(ctx) && ctx.record.has_any_term(C44, SATURATION_POOR)
                }),
                Rule::new(-0.1, |ctx| {
                    is_lab_method(ctx) && ctx.record.has_any_term(C44, SATURATION_CALCULATED)
                }),
                Rule::new(0.0, |ctx| {
                    is_lab_method(ctx) && ctx.record.has_any_term(C44, SATURATION_LAB_GOOD)
                }),
                Rule::new(-0.2, |ctx| ctx.record.has_any_term(C43, ESTIMATION_POOR)),
                Rule::new(-0.1, |ctx| ctx.record.has_any_term(C43, ESTIMATION_LITHOLOGY)),
                Rule::new(0.1, |ctx| ctx.record.has_term(C43, PROBE_PULSE)),
            ],
        ),
        Criterion::new(
            "C45",
            vec![
                Rule::new(-0.2, |ctx| ctx.record.has_any_term(C45, PT_AMBIENT)),
                Rule::new(-0.1, |ctx| ctx.record.has_any_term(C45, PT_PARTIAL)),
                Rule::new(0.0, |ctx| ctx.record.has_any_term(C45, PT_FULL)),
                Rule::new(0.1, |ctx| {
                    ctx.record.has_term(C45, PT_ACTUAL) && ctx.record.has_term(C43, PROBE_PULSE)
                }),
            ],
        ),
        // sample count is only graded for measured locations
        Criterion::new(
            "C47",
            vec![
                Rule::new(-0.2, |ctx| {
                    !uses_literature_location(ctx)
                        && (ctx.missing_number(C47)
                            || ctx.record.any_number(C47, |v| (0.0..=1.0).contains(&v)))
                }),
                Rule::new(-0.1, |ctx| {
                    !uses_literature_location(ctx)
                        && ctx.record.any_number(C47, |v| (2.0..=3.0).contains(&v))
                }),
                Rule::new(0.0, |ctx| {
                    !uses_literature_location(ctx) && ctx.record.any_number(C47, |v| v > 3.0)
                }),
            ],
        ),
    ]
}
