use super::decision::{
    Criterion, Rule, RuleContext, SubScore, Tally, Tier, TieredCriterion,
};
use super::methodology::SubScorer;
use super::terms::*;
use crate::catalog::codes::{C4, C5, C31, C32, C37, C41, C42, C44, C45, C47};
use crate::config::CrossFieldMode;

pub const DEPTH_OVERRIDE_SCORE: f64 = 0.1;
const GRADIENT_FALLBACK: f64 = -0.6;

pub struct BoreholeScorer {
    gradient: TieredCriterion,
    source: Criterion,
    location: Criterion,
    rest: Vec<Criterion>,
}

impl BoreholeScorer {
    pub fn new() -> Self {
        Self {
            gradient: gradient_tiers(),
            source: source_criterion(),
            location: location_criterion(),
            rest: vec![
                saturation_criterion(),
                conditions_criterion(),
                count_criterion(),
            ],
        }
    }
}

impl SubScorer for BoreholeScorer {
    fn temperature_gradient(&self, ctx: &RuleContext<'_>) -> SubScore {
        let mut tally = Tally::new();
        let (label, verdict) = self.gradient.evaluate(ctx);
        tally.record(label.unwrap_or("C31 or C32"), verdict);
        tally.finish()
    }

    fn thermal_conductivity(&self, ctx: &RuleContext<'_>) -> SubScore {
        let mut tally = Tally::new();
        tally.apply(&self.source, ctx);

        if depth_interval_missing(ctx) {
            return tally.finish_with(DEPTH_OVERRIDE_SCORE);
        }

        tally.apply(&self.location, ctx);
        for criterion in &self.rest {
            tally.apply(criterion, ctx);
        }
        tally.finish()
    }
}

fn depth_interval_missing(ctx: &RuleContext<'_>) -> bool {
    match ctx.mode {
        CrossFieldMode::Either => ctx.missing_number(C4) && ctx.missing_number(C5),
        CrossFieldMode::FirstOnly => ctx.missing_number(C4),
    }
}

fn surface_corrected(ctx: &RuleContext<'_>) -> bool {
    ctx.record.has_term(C31, SURFACE)
        && ctx
            .record
            .terms(C32)
            .iter()
            .any(|term| is_surface_correctable(term))
}

fn recognised_marker(ctx: &RuleContext<'_>) -> bool {
    ctx.marker_in(INDIRECT_MARKERS)
        || ctx.marker_in(PERTURBED_MARKERS)
        || ctx.marker_in(EQUILIBRIUM_MARKERS)
}

fn gradient_tiers() -> TieredCriterion {
    TieredCriterion {
        tiers: vec![
            // surface temperature combined with a single bottom estimate
            Tier {
                guard: surface_corrected,
                criterion: Criterion::new(
                    "C32",
                    vec![
                        Rule::new(-0.6, |ctx| ctx.record.has_any_term(C32, INDIRECT_MARKERS)),
                        Rule::new(-0.5, |ctx| {
                            ctx.record.has_any_term(C32, PERTURBED_POINT_MARKERS)
                        }),
                        Rule::new(-0.3, |ctx| {
                            ctx.record.has_any_term(C32, CORRECTED_POINT_MARKERS)
                        }),
                    ],
                ),
            },
            // densely sampled logs
            Tier {
                guard: |ctx| {
                    ctx.record.any_number(C37, |v| v > 15.0) && ctx.marker_in(LOG_MARKERS)
                },
                criterion: Criterion::new(
                    "C31 or C32",
                    vec![
                        Rule::new(-0.1, |ctx| ctx.marker_in(&[LOG_PERTURBED])),
                        Rule::new(0.1, |ctx| ctx.marker_in(LOG_EQUILIBRIUM_MARKERS)),
                    ],
                ),
            },
            Tier {
                guard: |ctx| {
                    ctx.record.any_number(C37, |v| v > 2.0 && v < 15.0) && recognised_marker(ctx)
                },
                criterion: Criterion::new(
                    "C31 or C32",
                    vec![
                        Rule::new(-0.5, |ctx| ctx.marker_in(INDIRECT_MARKERS)),
                        Rule::new(-0.3, |ctx| ctx.marker_in(PERTURBED_MARKERS)),
                        Rule::new(-0.1, |ctx| ctx.marker_in(EQUILIBRIUM_MARKERS)),
                    ],
                ),
            },
        ],
        fallback: GRADIENT_FALLBACK,
    }
}

fn source_criterion() -> Criterion {
    Criterion::new(
        "C41",
        vec![
            Rule::new(-0.2, |ctx| ctx.record.has_any_term(C41, SOURCE_POOR)),
            Rule::new(-0.1, |ctx| ctx.record.has_any_term(C41, SOURCE_FAIR)),
            Rule::new(0.0, |ctx| ctx.record.has_any_term(C41, SOURCE_CORE)),
            Rule::new(0.1, |ctx| ctx.record.has_any_term(C41, SOURCE_BEST)),
        ],
    )
}

fn location_criterion() -> Criterion {
    Criterion::new(
        "C42",
        vec![
            Rule::new(-0.2, |ctx| ctx.record.has_any_term(C42, LITERATURE_LOCATION)),
            Rule::new(-0.1, |ctx| ctx.record.has_any_term(C42, OTHER_LOCATION)),
            Rule::new(0.0, |ctx| ctx.record.has_any_term(C42, ACTUAL_LOCATION)),
        ],
    )
}

fn saturation_criterion() -> Criterion {
    Criterion::new(
        "C44",
        vec![
            Rule::new(-0.2, |ctx| ctx.record.has_any_term(C44, SATURATION_POOR)),
            Rule::new(-0.1, |ctx| ctx.record.has_any_term(C44, SATURATION_FAIR)),
            Rule::new(0.0, |ctx| ctx.record.has_any_term(C44, SATURATION_GOOD)),
        ],
    )
}

fn conditions_criterion() -> Criterion {
    Criterion::new(
        "C45",
        vec![
            Rule::new(-0.2, |ctx| ctx.record.has_any_term(C45, PT_AMBIENT)),
            Rule::new(-0.1, |ctx| ctx.record.has_any_term(C45, PT_PARTIAL)),
            Rule::new(0.0, |ctx| {
                ctx.record.has_any_term(C45, PT_FULL) || ctx.record.has_term(C45, PT_ACTUAL)
            }),
        ],
    )
}

fn count_criterion() -> Criterion {
    Criterion::new(
        "C47",
        vec![
            Rule::new(-0.1, |ctx| ctx.record.has_any_term(C42, LITERATURE_LOCATION)),
            Rule::new(-0.1, |ctx| {
                ctx.missing_number(C47) || ctx.record.any_number(C47, |v| (1.0..=15.0).contains(&v))
            }),
            Rule::new(0.0, |ctx| ctx.record.any_number(C47, |v| v > 15.0)),
        ],
    )
}
