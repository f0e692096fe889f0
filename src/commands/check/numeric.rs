use super::{FieldContext, ValidationError, Verdict, worst_case};
use crate::catalog::codes::{C4, C27, C29, C31, C32, P6};
use crate::catalog::{FieldSpec, NumericRange};
use crate::table::NumericEntry;

const CORRECTED_TOP: &[&str] = &["[sur]", "[clog]", "[cdts]", "[cbht]", "[crtd]", "[cht-ft]"];
const CORRECTED_BOTTOM: &[&str] = &["[clog]", "[cdts]", "[cbht]", "[crtd]", "[cht-ft]"];
const CORRECTION_HINT: &str = "or C32 should be corrected!";

fn has_corrected_marker(ctx: &FieldContext<'_>) -> bool {
    ctx.record.has_any_term(C31, CORRECTED_TOP) || ctx.record.has_any_term(C32, CORRECTED_BOTTOM)
}

// Bottom-hole temperature readings need a correction marker once a top
// temperature is reported alongside them.
fn correction_hint(ctx: &FieldContext<'_>) -> Verdict {
    if has_corrected_marker(ctx) {
        Vec::new()
    } else {
        vec![ValidationError::cross_field(C31, CORRECTION_HINT)]
    }
}

pub(super) fn check(ctx: &FieldContext<'_>, spec: &FieldSpec, range: NumericRange) -> Verdict {
    let entries = ctx.record.numeric_entries(spec.code);
    if entries.is_empty() {
        return missing(ctx, spec);
    }

    worst_case(entries.iter().map(|entry| match entry {
        NumericEntry::Invalid(_) => vec![ValidationError::invalid_format(spec.code)],
        NumericEntry::Value(value) if !range.contains(*value) => {
            vec![ValidationError::range_violated(spec.code)]
        }
        NumericEntry::Value(_) if spec.code == C29 && ctx.record.is_present(C27) => {
            correction_hint(ctx)
        }
        NumericEntry::Value(_) => Vec::new(),
    }))
}

fn missing(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    if spec.code == C27 && spec.is_mandatory() {
        let mut verdict = vec![ValidationError::mandatory_empty(C27)];
        if ctx.record.is_present(C29) {
            verdict.extend(correction_hint(ctx));
        }
        return verdict;
    }

    if spec.code == C4 && ctx.is_probe() && ctx.record.is_present(P6) {
        return Vec::new();
    }

    ctx.missing_mandatory(spec)
}
