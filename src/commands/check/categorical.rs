use super::{FieldContext, ValidationError, Verdict, worst_case};
use crate::catalog::FieldSpec;
use crate::catalog::codes::{C31, C32, C43, C45, C46, P12};
use crate::config::CrossFieldMode;

const EGRT_MARKER: &str = "[egrt]";
const PULSE_TECHNIQUE: &str = "[probe - pulse technique]";

// Conditions that need no pressure/temperature function.
const UNCORRECTED_CONDITIONS: &[&str] = &[
    "[recorded ambient pt conditions]",
    "[unrecorded ambient pt conditions]",
    "[actual in-situ (pt) conditions]",
    "[replicated in-situ (p)]",
    "[replicated in-situ (t)]",
    "[replicated in-situ (pt)]",
    "[unspecified]",
];
const OPEN_FUNCTIONS: &[&str] = &[
    "[unspecified]",
    "[site-specific experimental relationships]",
    "[other (specify in comments)]",
];

fn in_vocabulary(spec: &FieldSpec, term: &str) -> bool {
    spec.vocabulary().contains(&term)
}

pub(super) fn check(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    match spec.code {
        C43 if egrt_marker_present(ctx) => check_pulse_method(ctx, spec),
        C45 => check_conditions(ctx, spec),
        C46 if ctx.record.is_missing(C46) => missing_function(ctx, spec),
        _ => check_terms(ctx, spec),
    }
}

fn check_terms(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    let terms = ctx.record.terms(spec.code);
    if terms.is_empty() {
        // an empty P12 is already reported by the classification check
        if spec.code == P12 {
            return Vec::new();
        }
        return ctx.missing_mandatory(spec);
    }

    worst_case(terms.iter().map(|term| {
        if in_vocabulary(spec, term) {
            Vec::new()
        } else {
            vec![ValidationError::vocabulary_warning(spec.code)]
        }
    }))
}

fn egrt_marker_present(ctx: &FieldContext<'_>) -> bool {
    ctx.record.mentions(C31, EGRT_MARKER)
        || (ctx.mode == CrossFieldMode::Either && ctx.record.mentions(C32, EGRT_MARKER))
}

// Equilibrium ground-response tests can only be paired with the pulse
// technique.
fn check_pulse_method(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    let mismatch = || vec![ValidationError::cross_field(spec.code, "Please check TC method!")];
    let terms = ctx.record.terms(spec.code);
    if terms.is_empty() {
        return mismatch();
    }

    worst_case(terms.iter().map(|term| {
        if term == PULSE_TECHNIQUE {
            Vec::new()
        } else {
            mismatch()
        }
    }))
}

fn check_conditions(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    let terms = ctx.record.terms(C45);
    if terms.is_empty() {
        if ctx.record.is_present(C46) {
            return vec![ValidationError::cross_field(
                C45,
                "TC p-T conditions is missing!",
            )];
        }
        return ctx.missing_mandatory(spec);
    }

    worst_case(terms.iter().map(|term| {
        if !in_vocabulary(spec, term) {
            vec![ValidationError::vocabulary_warning(C45)]
        } else if function_matches(ctx, term) {
            Vec::new()
        } else {
            vec![ValidationError::cross_field(
                C46,
                "Please check TC p-T function!",
            )]
        }
    }))
}

fn function_matches(ctx: &FieldContext<'_>, condition: &str) -> bool {
    let functions = ctx.record.terms(C46);
    let any_prefix = |prefix: &str| functions.iter().any(|function| function.starts_with(prefix));

    if UNCORRECTED_CONDITIONS.contains(&condition) || functions.is_empty() {
        return true;
    }
    if ctx.record.has_any_term(C46, OPEN_FUNCTIONS) {
        return true;
    }

    match condition {
        "[corrected in-situ (p)]" => any_prefix("[p -"),
        "[corrected in-situ (t)]" => any_prefix("[t -"),
        "[corrected in-situ (pt)]" => {
            any_prefix("[pt -") || (any_prefix("[p -") && any_prefix("[t -"))
        }
        _ => false,
    }
}

// A pressure/temperature function is only expected once the conditions say
// a correction was applied or leave it open.
fn missing_function(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    let expects_function =
        ctx.record.mentions(C45, "corrected") || ctx.record.mentions(C45, "unspecified");
    if spec.is_mandatory() && expects_function {
        vec![ValidationError::mandatory_empty(C46)]
    } else {
        Vec::new()
    }
}
