// Controlled vocabularies of the IHFC Global Heat Flow Database, 2024 release.
// Terms are stored lowercased; cell values are lowercased before comparison.

pub const ENVIRONMENT: &[&str] = &[
    "[onshore (continental)]",
    "[onshore (lake-river-etc.)]",
    "[offshore (continental)]",
    "[offshore (marine)]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const CORRECTED_HEAT_FLOW: &[&str] = &["[yes]", "[no]", "[unspecified]"];

pub const EXPLORATION_METHOD: &[&str] = &[
    "[drilling]",
    "[mining]",
    "[tunneling]",
    "[gtm]",
    "[indirect (gtm-bsr-cpd-etc.)]",
    "[probing (onshore-lake-river-etc.)]",
    "[probing (offshore-ocean)]",
    "[drilling-clustering]",
    "[probing-clustering]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const EXPLORATION_PURPOSE: &[&str] = &[
    "[hydrocarbon]",
    "[underground storage]",
    "[geothermal]",
    "[groundwater]",
    "[mapping]",
    "[research]",
    "[mining]",
    "[tunneling]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const HEAT_FLOW_METHOD: &[&str] = &[
    "[interval method]",
    "[bullard method]",
    "[boot-strapping method]",
    "[other numerical computations]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const PROBE_PT_CONDITIONS: &[&str] = &[
    "[considered - p]",
    "[considered - t]",
    "[considered - pt]",
    "[not considered]",
    "[unspecified]",
];

pub const PROBE_CORRECTION: &[&str] = &[
    "[tilt corrected]",
    "[drift corrected]",
    "[not corrected]",
    "[corrected (specify in comments)]",
    "[unspecified]",
];

pub const PERTURBATION: &[&str] = &[
    "[present and corrected]",
    "[present and not corrected]",
    "[present not significant]",
    "[not recognized]",
    "[unspecified]",
];

pub const PROBE_TYPE: &[&str] = &[
    "[single steel probe (bullard)]",
    "[single steel probe (bullard) in-situ tc]",
    "[violin-bow probe (lister)]",
    "[outrigger probe (von herzen) in-situ tc]",
    "[outrigger probe (haenel) in-situ tc]",
    "[outrigger probe (ewing) with corer]",
    "[outrigger probe (ewing) without corer]",
    "[outrigger probe (lister) with corer]",
    "[outrigger probe (autonomous) without corer]",
    "[outrigger probe (autonomous) with corer]",
    "[submersible probe]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const TEMPERATURE_METHOD_TOP: &[&str] = &[
    "[logeq]",
    "[logpert]",
    "[clog]",
    "[dtseq]",
    "[dtspert]",
    "[cdts]",
    "[bht]",
    "[cbht]",
    "[ht-ft]",
    "[cht-ft]",
    "[rtdeq]",
    "[rtdpert]",
    "[crtd]",
    "[cpd]",
    "[xen]",
    "[gtm]",
    "[bsr]",
    "[blk]",
    "[odtt-pc]",
    "[odtt-tp]",
    "[sur]",
    "[grt]",
    "[egrt]",
    "[unspecified]",
    "[other (specify in comments)]",
];

pub const TEMPERATURE_METHOD_BOTTOM: &[&str] = &[
    "[logeq]",
    "[logpert]",
    "[clog]",
    "[dtseq]",
    "[dtspert]",
    "[cdts]",
    "[bht]",
    "[cbht]",
    "[ht-ft]",
    "[cht-ft]",
    "[rtdeq]",
    "[rtdpert]",
    "[crtd]",
    "[cpd]",
    "[xen]",
    "[gtm]",
    "[bsr]",
    "[blk]",
    "[odtt-pc]",
    "[odtt-tp]",
    "[grt]",
    "[egrt]",
    "[unspecified]",
    "[other (specify in comments)]",
];

pub const TEMPERATURE_CORRECTION: &[&str] = &[
    "[horner plot]",
    "[cylinder source method]",
    "[line source explosion method]",
    "[inverse numerical modelling]",
    "[other published correction (specify in comments)]",
    "[unspecified]",
    "[not corrected]",
    "[aapg correction]",
    "[harrison correction]",
];

pub const TC_SOURCE: &[&str] = &[
    "[in-situ probe]",
    "[core-log integration]",
    "[core samples]",
    "[cutting samples]",
    "[outcrop samples]",
    "[well-log interpretation]",
    "[mineral computation]",
    "[assumed from literature]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const TC_LOCATION: &[&str] = &[
    "[actual heat-flow location]",
    "[other location]",
    "[literature-unspecified]",
    "[unspecified]",
];

pub const TC_METHOD: &[&str] = &[
    "[lab - point source]",
    "[lab - line source - full space]",
    "[lab - line source - half space]",
    "[lab - plane source - full space]",
    "[lab - plane source - half space]",
    "[lab - other (specify in comments)]",
    "[probe - pulse technique]",
    "[well-log - deterministic approach]",
    "[well-log - empirical equation]",
    "[estimation - from chlorine content]",
    "[estimation - from water content-porosity]",
    "[estimation - from lithology and literature]",
    "[estimation - from mineral composition]",
    "[unspecified]",
];

pub const TC_SATURATION: &[&str] = &[
    "[saturated measured in-situ]",
    "[recovered]",
    "[saturated measured]",
    "[saturated calculated]",
    "[dry measured]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const TC_PT_CONDITIONS: &[&str] = &[
    "[unrecorded ambient pt conditions]",
    "[recorded ambient pt conditions]",
    "[actual in-situ (pt) conditions]",
    "[replicated in-situ (p)]",
    "[replicated in-situ (t)]",
    "[replicated in-situ (pt)]",
    "[corrected in-situ (p)]",
    "[corrected in-situ (t)]",
    "[corrected in-situ (pt)]",
    "[unspecified]",
];

pub const TC_PT_FUNCTION: &[&str] = &[
    "[t - birch & clark (1940)]",
    "[t - tikhomirov (1968)]",
    "[t - kutas & gordienko (1971)]",
    "[t - anand et al. (1973)]",
    "[t - haenel & zoth (1973)]",
    "[t - blesch et al. (1983)]",
    "[t - sekiguchi (1984)]",
    "[t - chapman et al. (1984)]",
    "[t - zoth & haenel (1988)]",
    "[t - somerton (1992)]",
    "[t - sass et al. (1992)]",
    "[t - funnell et al. (1996)]",
    "[t - kukkonen et al. (1999)]",
    "[t - seipold (2001)]",
    "[t - vosteen & schellschmidt (2003)]",
    "[t - sun et al. (2017)]",
    "[t - miranda et al. (2018)]",
    "[t - ratcliffe (1960)]",
    "[p - bridgman (1924)]",
    "[p - sibbitt (1975)]",
    "[p - kukkonen et al. (1999)]",
    "[p - seipold (2001)]",
    "[p - durutürk et al. (2002)]",
    "[p - demirci et al. (2004)]",
    "[p - görgülü et al. (2008)]",
    "[p - fuchs & förster (2014)]",
    "[pt - ratcliffe (1960)]",
    "[pt - buntebarth (1991)]",
    "[pt - chapman & furlong (1992)]",
    "[pt - emirov et al. (1997)]",
    "[pt - abdulagatov et al. (2006)]",
    "[pt - emirov & ramazanova (2007)]",
    "[pt - abdulagatova et al. (2009)]",
    "[pt - ramazanova & emirov (2010)]",
    "[pt - ramazanova & emirov (2012)]",
    "[pt - emirov et al. (2017)]",
    "[pt - hyndman et al. (1974)]",
    "[pt - langseth (1965)]",
    "[site-specific experimental relationships]",
    "[other (specify in comments)]",
    "[unspecified]",
];

pub const TC_STRATEGY: &[&str] = &[
    "[random or periodic depth sampling]",
    "[characterize formation conductivities]",
    "[well log interpretation]",
    "[computation from probe sensing]",
    "[other (specify in comments)]",
    "[unspecified]",
];
