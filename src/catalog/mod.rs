use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

mod geochronology;
mod lithology;
pub mod vocabulary;

use self::codes::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Parent,
    Child,
}

impl Section {
    pub fn letter(self) -> char {
        match self {
            Self::Parent => 'P',
            Self::Child => 'C',
        }
    }
}

// Ordering is all parent codes before all child codes, then ascending number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldCode {
    section: Section,
    number: u16,
}

impl FieldCode {
    pub const fn parent(number: u16) -> Self {
        Self {
            section: Section::Parent,
            number,
        }
    }

    pub const fn child(number: u16) -> Self {
        Self {
            section: Section::Child,
            number,
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section.letter(), self.number)
    }
}

impl Serialize for FieldCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub mod codes {
    use super::FieldCode;

    pub const P1: FieldCode = FieldCode::parent(1);
    pub const P2: FieldCode = FieldCode::parent(2);
    pub const P4: FieldCode = FieldCode::parent(4);
    pub const P5: FieldCode = FieldCode::parent(5);
    pub const P6: FieldCode = FieldCode::parent(6);
    pub const P7: FieldCode = FieldCode::parent(7);
    pub const P9: FieldCode = FieldCode::parent(9);
    pub const P10: FieldCode = FieldCode::parent(10);
    pub const P11: FieldCode = FieldCode::parent(11);
    pub const P12: FieldCode = FieldCode::parent(12);
    pub const P13: FieldCode = FieldCode::parent(13);

    pub const C1: FieldCode = FieldCode::child(1);
    pub const C2: FieldCode = FieldCode::child(2);
    pub const C3: FieldCode = FieldCode::child(3);
    pub const C4: FieldCode = FieldCode::child(4);
    pub const C5: FieldCode = FieldCode::child(5);
    pub const C6: FieldCode = FieldCode::child(6);
    pub const C11: FieldCode = FieldCode::child(11);
    pub const C12: FieldCode = FieldCode::child(12);
    pub const C13: FieldCode = FieldCode::child(13);
    pub const C14: FieldCode = FieldCode::child(14);
    pub const C15: FieldCode = FieldCode::child(15);
    pub const C16: FieldCode = FieldCode::child(16);
    pub const C17: FieldCode = FieldCode::child(17);
    pub const C18: FieldCode = FieldCode::child(18);
    pub const C19: FieldCode = FieldCode::child(19);
    pub const C21: FieldCode = FieldCode::child(21);
    pub const C22: FieldCode = FieldCode::child(22);
    pub const C23: FieldCode = FieldCode::child(23);
    pub const C24: FieldCode = FieldCode::child(24);
    pub const C25: FieldCode = FieldCode::child(25);
    pub const C26: FieldCode = FieldCode::child(26);
    pub const C27: FieldCode = FieldCode::child(27);
    pub const C28: FieldCode = FieldCode::child(28);
    pub const C29: FieldCode = FieldCode::child(29);
    pub const C30: FieldCode = FieldCode::child(30);
    pub const C31: FieldCode = FieldCode::child(31);
    pub const C32: FieldCode = FieldCode::child(32);
    pub const C33: FieldCode = FieldCode::child(33);
    pub const C34: FieldCode = FieldCode::child(34);
    pub const C35: FieldCode = FieldCode::child(35);
    pub const C36: FieldCode = FieldCode::child(36);
    pub const C37: FieldCode = FieldCode::child(37);
    pub const C38: FieldCode = FieldCode::child(38);
    pub const C39: FieldCode = FieldCode::child(39);
    pub const C40: FieldCode = FieldCode::child(40);
    pub const C41: FieldCode = FieldCode::child(41);
    pub const C42: FieldCode = FieldCode::child(42);
    pub const C43: FieldCode = FieldCode::child(43);
    pub const C44: FieldCode = FieldCode::child(44);
    pub const C45: FieldCode = FieldCode::child(45);
    pub const C46: FieldCode = FieldCode::child(46);
    pub const C47: FieldCode = FieldCode::child(47);
    pub const C48: FieldCode = FieldCode::child(48);
}

pub const BOREHOLE_METHODS: &[&str] = &[
    "[drilling]",
    "[drilling-clustering]",
    "[mining]",
    "[tunneling]",
    "[gtm]",
    "[indirect (gtm-bsr-cpd-etc.)]",
];

// The slash-separated spellings come from the 2023 template.
pub const PROBE_METHODS: &[&str] = &[
    "[probing (onshore-lake-river-etc.)]",
    "[probing (offshore-ocean)]",
    "[probing-clustering]",
    "[probing (onshore/lake, river, etc.)]",
    "[probing (offshore/ocean)]",
];

pub const UNRESOLVED_METHODS: &[&str] = &["[other (specify in comments)]", "[unspecified]"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Numeric(NumericRange),
    Categorical(&'static [&'static str]),
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Obligation {
    Mandatory,
    Situational,
    Optional,
}

impl Obligation {
    pub fn from_header_cell(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "M" => Self::Mandatory,
            "S" => Self::Situational,
            _ => Self::Optional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Applicability {
    pub borehole: bool,
    pub probe: bool,
}

impl Applicability {
    pub const BOTH: Self = Self {
        borehole: true,
        probe: true,
    };
    pub const BOREHOLE: Self = Self {
        borehole: true,
        probe: false,
    };
    pub const PROBE: Self = Self {
        borehole: false,
        probe: true,
    };
    pub const NONE: Self = Self {
        borehole: false,
        probe: false,
    };

    // Header cells carry letters such as "B", "S" or "B/S".
    pub fn from_header_cell(raw: &str) -> Self {
        let upper = raw.to_ascii_uppercase();
        Self {
            borehole: upper.contains('B'),
            probe: upper.contains('S'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub code: FieldCode,
    pub kind: FieldKind,
    pub obligation: Obligation,
    pub applicability: Applicability,
}

impl FieldSpec {
    pub fn is_mandatory(&self) -> bool {
        self.obligation == Obligation::Mandatory
    }

    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Categorical(terms) => terms,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeaderProfile {
    pub fields: BTreeMap<FieldCode, (Obligation, Applicability)>,
}

#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    fields: BTreeMap<FieldCode, FieldSpec>,
}

impl SchemaCatalog {
    pub fn ihfc_2024() -> Self {
        let numeric = [
            (P1, NumericRange::new(-999999.9, 999999.9)),
            (P2, NumericRange::new(0.0, 999999.9)),
            (P4, NumericRange::new(-90.0, 90.0)),
            (P5, NumericRange::new(-180.0, 180.0)),
            (P6, NumericRange::new(-12000.0, 9000.0)),
            (P10, NumericRange::new(-12000.0, 9000.0)),
            (P11, NumericRange::new(-12000.0, 9000.0)),
            (C1, NumericRange::new(-999999.9, 999999.9)),
            (C2, NumericRange::new(0.0, 999999.9)),
            (C4, NumericRange::new(0.0, 19999.9)),
            (C5, NumericRange::new(0.0, 19999.9)),
            (C6, NumericRange::new(0.0, 999.9)),
            (C22, NumericRange::new(0.0, 99.99)),
            (C23, NumericRange::new(0.0, 99.99)),
            (C24, NumericRange::new(-273.15, 999.99)),
            (C27, NumericRange::new(-99999.99, 99999.99)),
            (C28, NumericRange::new(-99999.99, 99999.99)),
            (C29, NumericRange::new(-99999.99, 99999.99)),
            (C30, NumericRange::new(-99999.99, 99999.99)),
            (C33, NumericRange::new(0.0, 99999.0)),
            (C34, NumericRange::new(0.0, 99999.0)),
            (C37, NumericRange::new(0.0, 999999.0)),
            (C39, NumericRange::new(0.0, 99.99)),
            (C40, NumericRange::new(0.0, 99.99)),
            (C47, NumericRange::new(0.0, 9999.0)),
        ];

        let categorical: [(FieldCode, &'static [&'static str]); 28] = [
            (P7, vocabulary::ENVIRONMENT),
            (P9, vocabulary::CORRECTED_HEAT_FLOW),
            (P12, vocabulary::EXPLORATION_METHOD),
            (P13, vocabulary::EXPLORATION_PURPOSE),
            (C3, vocabulary::HEAT_FLOW_METHOD),
            (C11, vocabulary::PROBE_PT_CONDITIONS),
            (C12, vocabulary::PROBE_CORRECTION),
            (C13, vocabulary::PERTURBATION),
            (C14, vocabulary::PERTURBATION),
            (C15, vocabulary::PERTURBATION),
            (C16, vocabulary::PERTURBATION),
            (C17, vocabulary::PERTURBATION),
            (C18, vocabulary::PERTURBATION),
            (C19, vocabulary::PERTURBATION),
            (C21, vocabulary::PROBE_TYPE),
            (C25, lithology::LITHOLOGY),
            (C26, geochronology::GEOCHRONOLOGY),
            (C31, vocabulary::TEMPERATURE_METHOD_TOP),
            (C32, vocabulary::TEMPERATURE_METHOD_BOTTOM),
            (C35, vocabulary::TEMPERATURE_CORRECTION),
            (C36, vocabulary::TEMPERATURE_CORRECTION),
            (C41, vocabulary::TC_SOURCE),
            (C42, vocabulary::TC_LOCATION),
            (C43, vocabulary::TC_METHOD),
            (C44, vocabulary::TC_SATURATION),
            (C45, vocabulary::TC_PT_CONDITIONS),
            (C46, vocabulary::TC_PT_FUNCTION),
            (C48, vocabulary::TC_STRATEGY),
        ];

        let mut fields = BTreeMap::new();
        for (code, range) in numeric {
            fields.insert(code, default_spec(code, FieldKind::Numeric(range)));
        }
        for (code, terms) in categorical {
            fields.insert(code, default_spec(code, FieldKind::Categorical(terms)));
        }
        fields.insert(C38, default_spec(C38, FieldKind::Date));

        Self { fields }
    }

    pub fn with_header_profile(&self, profile: &HeaderProfile) -> Self {
        let mut fields = self.fields.clone();
        for (code, (obligation, applicability)) in &profile.fields {
            if let Some(spec) = fields.get_mut(code) {
                spec.obligation = *obligation;
                spec.applicability = *applicability;
            }
        }
        Self { fields }
    }

    pub fn get(&self, code: FieldCode) -> Option<&FieldSpec> {
        self.fields.get(&code)
    }

    pub fn contains(&self, code: FieldCode) -> bool {
        self.fields.contains_key(&code)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields()
            .filter(|spec| matches!(spec.kind, FieldKind::Numeric(_)))
    }

    pub fn categorical_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields()
            .filter(|spec| matches!(spec.kind, FieldKind::Categorical(_)))
    }

    pub fn date_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields().filter(|spec| spec.kind == FieldKind::Date)
    }
}

fn default_spec(code: FieldCode, kind: FieldKind) -> FieldSpec {
    let (obligation, applicability) = default_obligation(code);
    FieldSpec {
        code,
        kind,
        obligation,
        applicability,
    }
}

fn default_obligation(code: FieldCode) -> (Obligation, Applicability) {
    match code {
        P1 | P4 | P5 | P6 | P7 | P12 | C1 | C3 | C4 | C13 | C14 | C15 | C16 | C17 | C18 | C19
        | C37 | C41 | C42 | C43 | C44 | C45 | C46 | C47 => {
            (Obligation::Mandatory, Applicability::BOTH)
        }
        C5 | C31 | C32 => (Obligation::Mandatory, Applicability::BOREHOLE),
        C6 => (Obligation::Mandatory, Applicability::PROBE),
        C23 => (Obligation::Situational, Applicability::PROBE),
        _ => (Obligation::Optional, Applicability::NONE),
    }
}
