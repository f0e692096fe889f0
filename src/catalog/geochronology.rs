pub const GEOCHRONOLOGY: &[&str] = &[
    "aalenian",
    "aeronian",
    "albian",
    "anisian",
    "aptian",
    "aquitanian",
    "archean",
    "artinskian",
    "asselian",
    "bajocian",
    "barremian",
    "bartonian",
    "bashkirian",
    "bathonian",
    "berriasian",
    "burdigalian",
    "calabrian",
    "callovian",
    "calymmian",
    "cambrian",
    "cambrianseries2",
    "cambrianseries3",
    "cambrianstage10",
    "cambrianstage2",
    "cambrianstage3",
    "cambrianstage4",
    "cambrianstage5",
    "campanian",
    "capitanian",
    "carboniferous",
    "carnian",
    "cenomanian",
    "cenozoic",
    "changhsingian",
    "chattian",
    "middlepleistocene",
    "cisuralian",
    "coniacian",
    "cretaceous",
    "cryogenian",
    "danian",
    "dapingian",
    "darriwilian",
    "devonian",
    "drumian",
    "lowercretaceous",
    "lowerdevonian",
    "lowerjurassic",
    "lowermississippian",
    "lowerordovician",
    "lowerpennsylvanian",
    "lowertriassic",
    "ectasian",
    "ediacaran",
    "eifelian",
    "emsian",
    "eoarchean",
    "eocene",
    "famennian",
    "floian",
    "fortunian",
    "frasnian",
    "furongian",
    "gelasian",
    "givetian",
    "gorstian",
    "greenlandian",
    "guadalupian",
    "guzhangian",
    "gzhelian",
    "hadean",
    "hauterivian",
    "hettangian",
    "hirnantian",
    "holocene",
    "homerian",
    "induan",
    "ionian",
    "jiangshanian",
    "jurassic",
    "kasimovian",
    "katian",
    "kimmeridgian",
    "kungurian",
    "ladinian",
    "langhian",
    "uppercretaceous",
    "upperdevonian",
    "upperjurassic",
    "uppermississippian",
    "upperordovician",
    "upperpennsylvanian",
    "upperpleistocene",
    "uppertriassic",
    "llandovery",
    "lochkovian",
    "lopingian",
    "ludfordian",
    "ludlow",
    "lutetian",
    "maastrichtian",
    "meghalayan",
    "mesoarchean",
    "mesoproterozoic",
    "mesozoic",
    "messinian",
    "miaolingian",
    "middledevonian",
    "middlejurassic",
    "middlemississippian",
    "middleordovician",
    "middlepennsylvanian",
    "middletriassic",
    "miocene",
    "mississippian",
    "moscovian",
    "neoarchean",
    "neogene",
    "neoproterozoic",
    "norian",
    "northgrippian",
    "olenekian",
    "oligocene",
    "ordovician",
    "orosirian",
    "oxfordian",
    "paibian",
    "paleoarchean",
    "paleocene",
    "paleogene",
    "paleoproterozoic",
    "paleozoic",
    "pennsylvanian",
    "permian",
    "phanerozoic",
    "piacenzian",
    "pleistocene",
    "pliensbachian",
    "pliocene",
    "pragian",
    "precambrian",
    "priabonian",
    "pridoli",
    "proterozoic",
    "quaternary",
    "rhaetian",
    "rhuddanian",
    "rhyacian",
    "roadian",
    "rupelian",
    "sakmarian",
    "sandbian",
    "santonian",
    "selandian",
    "serpukhovian",
    "serravallian",
    "sheinwoodian",
    "siderian",
    "silurian",
    "sinemurian",
    "statherian",
    "stenian",
    "telychian",
    "terreneuvian",
    "thanetian",
    "tithonian",
    "toarcian",
    "tonian",
    "tortonian",
    "tournaisian",
    "tremadocian",
    "triassic",
    "turonian",
    "valanginian",
    "visean",
    "wenlock",
    "wordian",
    "wuchiapingian",
    "wuliuan",
    "ypresian",
    "zanclean",
];
