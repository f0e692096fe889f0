pub const LITHOLOGY: &[&str] = &[
    "acidic_igneous_material",
    "acidic_igneous_rock",
    "alkali_feldspar_granite",
    "alkali_feldspar_rhyolite",
    "alkali_feldspar_syenite",
    "alkali_feldspar_syenitic_rock",
    "alkali_feldspar_trachyte",
    "alkali_feldspar_trachytic_rock",
    "alkali-olivine_basalt",
    "amphibolite",
    "andesite",
    "anorthosite",
    "anorthositic_rock",
    "anthracite_coal",
    "anthropogenic_material",
    "anthropogenic_unconsolidated_material",
    "aphanite",
    "aplite",
    "arenite",
    "ash_and_lapilli",
    "ash_breccia_bomb_or_block_tephra",
    "ash_tuff_lapillistone_and_lapilli_tuff",
    "basalt",
    "basanite",
    "basanitic_foidite",
    "basic_igneous_material",
    "basic_igneous_rock",
    "bauxite",
    "biogenic_sediment",
    "biogenic_silica_sedimentary_rock",
    "bituminous_coal",
    "boninite",
    "boulder_gravel_size_sediment",
    "boundstone",
    "breccia",
    "breccia_gouge_series",
    "calcareous_carbonate_sediment",
    "calcareous_carbonate_sedimentary_material",
    "calcareous_carbonate_sedimentary_rock",
    "carbonate_mud",
    "carbonate_mudstone",
    "carbonate_ooze",
    "carbonate_rich_mud",
    "carbonate_rich_mudstone",
    "carbonate_sediment",
    "carbonate_sedimentary_material",
    "carbonate_sedimentary_rock",
    "carbonate_wackestone",
    "carbonatite",
    "cataclasite_series",
    "chalk",
    "chemical_sedimentary_material",
    "chlorite_actinolite_epidote_metamorphic_rock",
    "clastic_sediment",
    "clastic_sedimentary_material",
    "clastic_sedimentary_rock",
    "clay",
    "claystone",
    "coal",
    "cobble_gravel_size_sediment",
    "composite_genesis_material",
    "composite_genesis_rock",
    "compound_material",
    "clastic_conglomerate",
    "crystalline_carbonate",
    "dacite",
    "diamictite",
    "diamicton",
    "diorite",
    "dioritic_rock",
    "dioritoid",
    "doleritic_rock",
    "dolostone",
    "dolomitic_or_magnesian_sedimentary_material",
    "dolomitic_or_magnesian_sedimentary_rock",
    "dolomitic_sediment",
    "duricrust",
    "eclogite",
    "evaporite",
    "exotic_alkaline_rock",
    "exotic_composition_igneous_rock",
    "exotic_evaporite",
    "fault_related_material",
    "fine_grained_igneous_rock",
    "foid_bearing_alkali_feldspar_syenite",
    "foid_bearing_alkali_feldspar_trachyte",
    "foid_bearing_anorthosite",
    "foid_bearing_diorite",
    "foid_bearing_gabbro",
    "foid_bearing_latite",
    "foid_bearing_monzodiorite",
    "foid_bearing_monzogabbro",
    "foid_bearing_monzonite",
    "foid_bearing_syenite",
    "foid_bearing_trachyte",
    "foid_diorite",
    "foid_dioritoid",
    "foid_gabbro",
    "foid_gabbroid",
    "foid_monzodiorite",
    "foid_monzogabbro",
    "foid_monzosyenite",
    "foid_syenite",
    "foid_syenitoid",
    "foidite",
    "foiditoid",
    "foidolite",
    "foliated_metamorphic_rock",
    "fragmental_igneous_material",
    "fragmental_igneous_rock",
    "framestone",
    "gabbro",
    "gabbroic_rock",
    "gabbroid",
    "generic_conglomerate",
    "generic_mudstone",
    "generic_sandstone",
    "glass_rich_igneous_rock",
    "glassy_igneous_rock",
    "glaucophane_lawsonite_epidote_metamorphic_rock",
    "gneiss",
    "grainstone",
    "granite",
    "granitoid",
    "granodiorite",
    "granofels",
    "granulite",
    "gravel",
    "gravel_size_sediment",
    "rock_gypsum_or_anhydrite",
    "high_magnesium_fine_grained_igneous_rocks",
    "hornblendite",
    "hornfels",
    "hybrid_sediment",
    "hybrid_sedimentary_rock",
    "igneous_material",
    "igneous_rock",
    "impact_generated_material",
    "impure_calcareous_carbonate_sediment",
    "impure_carbonate_sediment",
    "impure_carbonate_sedimentary_rock",
    "impure_dolostone",
    "impure_dolomitic_sediment",
    "impure_limestone",
    "intermediate_composition_igneous_material",
    "intermediate_composition_igneous_rock",
    "iron_rich_sediment",
    "iron_rich_sedimentary_material",
    "iron_rich_sedimentary_rock",
    "kalsilitic_and_melilitic_rock",
    "komatiitic_rock",
    "latite",
    "latitic_rock",
    "lignite",
    "limestone",
    "marble",
    "material_formed_in_surficial_environment",
    "metamorphic_rock",
    "metasomatic_rock",
    "mica_schist",
    "migmatite",
    "monzodiorite",
    "monzodioritic_rock",
    "monzogabbro",
    "monzogabbroic_rock",
    "monzogranite",
    "monzonite",
    "monzonitic_rock",
    "mud",
    "mud_size_sediment",
    "clastic_mudstone",
    "mylonitic_rock",
    "natural_unconsolidated_material",
    "non_clastic_siliceous_sediment",
    "non_clastic_siliceous_sedimentary_material",
    "non_clastic_siliceous_sedimentary_rock",
    "ooze",
    "organic_bearing_mudstone",
    "organic_rich_sediment",
    "organic_rich_sedimentary_material",
    "organic_rich_sedimentary_rock",
    "orthogneiss",
    "packstone",
    "paragneiss",
    "peat",
    "pebble_gravel_size_sediment",
    "pegmatite",
    "peridotite",
    "phaneritic_igneous_rock",
    "phonolilte",
    "phonolitic_basanite",
    "phonolitic_foidite",
    "phonolitic_tephrite",
    "phonolitoid",
    "phosphate_rich_sediment",
    "phosphate_rich_sedimentary_material",
    "phosphorite",
    "phyllite",
    "phyllonite",
    "porphyry",
    "pure_calcareous_carbonate_sediment",
    "pure_carbonate_mudstone",
    "pure_carbonate_sediment",
    "pure_carbonate_sedimentary_rock",
    "pure_dolomitic_sediment",
    "pyroclastic_material",
    "pyroclastic_rock",
    "pyroxenite",
    "quartz_alkali_feldspar_syenite",
    "quartz_alkali_feldspar_trachyte",
    "quartz_anorthosite",
    "quartz_diorite",
    "quartz_gabbro",
    "quartz_latite",
    "quartz_monzodiorite",
    "quartz_monzogabbro",
    "quartz_monzonite",
    "quartz_rich_igneous_rock",
    "quartz_syenite",
    "quartz_trachyte",
    "quartzite",
    "residual_material",
    "rhyolite",
    "rhyolitoid",
    "rock",
    "rock_salt",
    "sand",
    "sand_size_sediment",
    "clastic_sandstone",
    "sapropel",
    "schist",
    "sediment",
    "sedimentary_material",
    "sedimentary_rock",
    "serpentinite",
    "shale",
    "silicate_mud",
    "silicate_mudstone",
    "siliceous_ooze",
    "silt",
    "siltstone",
    "skarn",
    "slate",
    "spilite",
    "syenite",
    "syenitic_rock",
    "syenitoid",
    "syenogranite",
    "tephra",
    "tephrite",
    "tephritic_foidite",
    "tephritic_phonolite",
    "tephritoid",
    "tholeiitic_basalt",
    "tonalite",
    "trachyte",
    "trachytic_rock",
    "trachytoid",
    "travertine",
    "tuff_breccia_agglomerate_or_pyroclastic_breccia",
    "tuffite",
    "ultrabasic_igneous_rock",
    "ultramafic_igneous_rock",
    "unconsolidated_material",
    "wacke",
];
