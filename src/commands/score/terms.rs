// Term sets shared by the methodology tables. Legacy spellings from the 2023
// template sit next to their 2024 counterparts.

pub const LITERATURE_LOCATION: &[&str] = &["[literature-unspecified]", "[literature/unspecified]"];
pub const OTHER_LOCATION: &[&str] = &["[other location]"];
pub const ACTUAL_LOCATION: &[&str] = &["[actual heat-flow location]"];

pub const PROBE_PULSE: &str = "[probe - pulse technique]";

pub const SATURATION_POOR: &[&str] = &[
    "[dry measured]",
    "[unspecified]",
    "[other (specify)]",
    "[other (specify in comments)]",
];
pub const SATURATION_CALCULATED: &[&str] = &["[saturated calculated]"];
pub const SATURATION_LAB_GOOD: &[&str] = &["[saturated measured]", "[recovered]"];
pub const SATURATION_FAIR: &[&str] = &["[recovered]", "[saturated calculated]"];
pub const SATURATION_GOOD: &[&str] = &["[saturated measured in-situ]", "[saturated measured]"];

pub const PT_AMBIENT: &[&str] = &[
    "[recorded ambient pt conditions]",
    "[unrecorded ambient pt conditions]",
    "[unspecified]",
];
pub const PT_PARTIAL: &[&str] = &[
    "[replicated in-situ (p)]",
    "[corrected in-situ (p)]",
    "[replicated in-situ (t)]",
    "[corrected in-situ (t)]",
];
pub const PT_FULL: &[&str] = &["[replicated in-situ (pt)]", "[corrected in-situ (pt)]"];
pub const PT_ACTUAL: &str = "[actual in-situ (pt) conditions]";

pub const TILT_CORRECTED: &str = "[tilt corrected]";
pub const PRESENT_AND_CORRECTED: &str = "[present and corrected]";

pub const LAB_METHOD_PREFIX: &str = "[lab";
pub const ESTIMATION_POOR: &[&str] = &[
    "[unspecified]",
    "[estimation - from chlorine content]",
    "[estimation - from water content/porosity]",
    "[estimation - from water content-porosity]",
    "[estimation - from mineral composition]",
];
pub const ESTIMATION_LITHOLOGY: &[&str] = &["[estimation - from lithology and literature]"];

pub const SOURCE_POOR: &[&str] = &[
    "[mineral computation]",
    "[assumed from literature]",
    "[other (specify)]",
    "[other (specify in comments)]",
    "[unspecified]",
];
pub const SOURCE_FAIR: &[&str] = &[
    "[cutting samples]",
    "[outcrop samples]",
    "[well-log interpretation]",
];
pub const SOURCE_CORE: &[&str] = &["[core samples]"];
pub const SOURCE_BEST: &[&str] = &["[in-situ probe]", "[core-log integration]"];

// Temperature method markers. DST, cDST and RTDc are the older names of
// HT-FT, cHT-FT and cRTD; ODDT is a historic misspelling of ODTT.
pub const SURFACE: &str = "[sur]";
pub const INDIRECT_MARKERS: &[&str] = &["[cpd]", "[xen]", "[gtm]", "[bsr]"];
pub const PERTURBED_POINT_MARKERS: &[&str] = &["[bht]", "[dst]", "[ht-ft]", "[rtdpert]"];
pub const CORRECTED_POINT_MARKERS: &[&str] = &[
    "[cbht]",
    "[cdst]",
    "[cht-ft]",
    "[rtdeq]",
    "[rtdc]",
    "[crtd]",
    "[odtt-pc]",
    "[odtt-tp]",
    "[oddt-pc]",
    "[oddt-tp]",
];
pub const LOG_PERTURBED: &str = "[logpert]";
pub const LOG_MARKERS: &[&str] = &["[logpert]", "[logeq]", "[clog]", "[dtseq]", "[cdts]"];
pub const LOG_EQUILIBRIUM_MARKERS: &[&str] = &["[logeq]", "[clog]", "[dtseq]", "[cdts]"];
pub const PERTURBED_MARKERS: &[&str] = &[
    "[logpert]",
    "[dtspert]",
    "[bht]",
    "[dst]",
    "[ht-ft]",
    "[rtdpert]",
    "[blk]",
];
pub const EQUILIBRIUM_MARKERS: &[&str] = &[
    "[logeq]",
    "[clog]",
    "[dtseq]",
    "[cdts]",
    "[cbht]",
    "[cdst]",
    "[cht-ft]",
    "[rtdeq]",
    "[rtdc]",
    "[crtd]",
    "[odtt-pc]",
    "[odtt-tp]",
    "[oddt-pc]",
    "[oddt-tp]",
];

pub fn is_surface_correctable(term: &str) -> bool {
    INDIRECT_MARKERS.contains(&term)
        || PERTURBED_POINT_MARKERS.contains(&term)
        || CORRECTED_POINT_MARKERS.contains(&term)
}
