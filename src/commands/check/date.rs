use chrono::NaiveDate;

use super::{FieldContext, ValidationError, Verdict, worst_case};
use crate::catalog::FieldSpec;

const UNSPECIFIED: &str = "[unspecified]";
const YEAR_ONLY_SENTINEL: &str = "99";

fn earliest_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1900, 1, 1)
}

// `YYYY-MM`, or a value ending in "99" that only carries its year.
pub fn parse_survey_date(value: &str) -> Option<NaiveDate> {
    if value.ends_with(YEAR_ONLY_SENTINEL) {
        let year = value.get(..4)?.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

pub(super) fn check(ctx: &FieldContext<'_>, spec: &FieldSpec) -> Verdict {
    let values = ctx.record.terms(spec.code);
    if values.is_empty() {
        return ctx.missing_mandatory(spec);
    }

    worst_case(values.iter().map(|value| {
        if value == UNSPECIFIED {
            return Vec::new();
        }
        match (parse_survey_date(value), earliest_date()) {
            (Some(date), Some(earliest)) if date >= earliest => Vec::new(),
            (Some(_), _) => vec![ValidationError::range_violated(spec.code)],
            (None, _) => vec![ValidationError::invalid_format(spec.code)],
        }
    }))
}
