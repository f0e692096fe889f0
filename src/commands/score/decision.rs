use serde::Serialize;

use crate::catalog::FieldCode;
use crate::catalog::codes::{C31, C32};
use crate::config::CrossFieldMode;
use crate::table::Record;

pub struct RuleContext<'a> {
    pub record: &'a Record,
    pub mode: CrossFieldMode,
}

impl<'a> RuleContext<'a> {
    pub fn new(record: &'a Record, mode: CrossFieldMode) -> Self {
        Self { record, mode }
    }

    pub fn missing_number(&self, code: FieldCode) -> bool {
        !self.record.has_number(code)
    }

    // Temperature method markers live in C31 (top) and C32 (bottom).
    pub fn marker_in(&self, terms: &[&str]) -> bool {
        self.record.has_any_term(C31, terms)
            || (self.mode == CrossFieldMode::Either && self.record.has_any_term(C32, terms))
    }
}

pub type Predicate = fn(&RuleContext<'_>) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub penalty: f64,
    pub holds: Predicate,
}

impl Rule {
    pub fn new(penalty: f64, holds: Predicate) -> Self {
        Self { penalty, holds }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Penalty(f64),
    Undetermined,
}

pub fn least_penalty(candidates: impl IntoIterator<Item = f64>) -> Option<f64> {
    candidates.into_iter().reduce(f64::min)
}

#[derive(Debug, Clone)]
pub struct Criterion {
    pub label: &'static str,
    pub rules: Vec<Rule>,
}

impl Criterion {
    pub fn new(label: &'static str, rules: Vec<Rule>) -> Self {
        Self { label, rules }
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        least_penalty(
            self.rules
                .iter()
                .filter(|rule| (rule.holds)(ctx))
                .map(|rule| rule.penalty),
        )
        .map_or(Verdict::Undetermined, Verdict::Penalty)
    }
}

#[derive(Debug, Clone)]
pub struct Tier {
    pub guard: Predicate,
    pub criterion: Criterion,
}

// First tier whose guard holds decides; no tier at all yields the fallback.
#[derive(Debug, Clone)]
pub struct TieredCriterion {
    pub tiers: Vec<Tier>,
    pub fallback: f64,
}

impl TieredCriterion {
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> (Option<&'static str>, Verdict) {
        self.tiers
            .iter()
            .find(|tier| (tier.guard)(ctx))
            .map(|tier| (Some(tier.criterion.label), tier.criterion.evaluate(ctx)))
            .unwrap_or((None, Verdict::Penalty(self.fallback)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScore {
    pub score: Option<f64>,
    pub undetermined: Vec<&'static str>,
}

impl SubScore {
    pub fn undefined() -> Self {
        Self {
            score: None,
            undetermined: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.score.is_some() && self.undetermined.is_empty()
    }
}

pub const BASE_SCORE: f64 = 1.0;

// Penalties are whole tenths; summing them as integers keeps scores such as
// 0.5 exact.
fn to_tenths(value: f64) -> i32 {
    (value * 10.0).round() as i32
}

#[derive(Debug)]
pub struct Tally {
    tenths: i32,
    undetermined: Vec<&'static str>,
}

impl Tally {
    pub fn new() -> Self {
        Self {
            tenths: to_tenths(BASE_SCORE),
            undetermined: Vec::new(),
        }
    }

    pub fn record(&mut self, label: &'static str, verdict: Verdict) {
        match verdict {
            Verdict::Penalty(penalty) => self.tenths += to_tenths(penalty),
            Verdict::Undetermined => self.undetermined.push(label),
        }
    }

    pub fn score(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn apply(&mut self, criterion: &Criterion, ctx: &RuleContext<'_>) {
        self.record(criterion.label, criterion.evaluate(ctx));
    }

    pub fn finish(self) -> SubScore {
        SubScore {
            score: Some(self.score()),
            undetermined: self.undetermined,
        }
    }

    pub fn finish_with(self, score: f64) -> SubScore {
        SubScore {
            score: Some(score),
            undetermined: self.undetermined,
        }
    }
}
