use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use super::{RecordErrors, Validator};
use crate::catalog::SchemaCatalog;
use crate::cli::CheckArgs;
use crate::compose::compose_errors;
use crate::config::EngineConfig;
use crate::table::{load_table, normalize};
use crate::util::{derived_output_path, write_json_pretty};

pub const OUTPUT_SUFFIX: &str = "vocab_check";

pub struct CheckOutcome {
    pub records: Vec<RecordErrors>,
    pub output_path: Option<PathBuf>,
}

impl CheckOutcome {
    pub fn records_with_errors(&self) -> usize {
        self.records
            .iter()
            .filter(|record| !record.is_clean())
            .count()
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    let config = EngineConfig::load(args.engine.config.as_deref(), args.engine.cross_field_mode)?;
    let catalog = SchemaCatalog::ihfc_2024();
    info!(
        inputs = args.engine.inputs.len(),
        cross_field_mode = config.cross_field_mode.as_str(),
        "vocabulary check started"
    );

    for input in &args.engine.inputs {
        check_file(input, args.engine.output_dir.as_deref(), &catalog, &config)?;
    }

    info!(inputs = args.engine.inputs.len(), "vocabulary check completed");
    Ok(())
}

// Clean tables produce no output file.
pub fn check_file(
    input: &Path,
    output_dir: Option<&Path>,
    catalog: &SchemaCatalog,
    config: &EngineConfig,
) -> Result<CheckOutcome> {
    let mut table = load_table(input)?;
    let normalized = normalize(&table, catalog, config.use_table_header)?;

    let validator = Validator::new(&normalized.catalog, config);
    let records = validator.validate_all(&normalized.records);
    let mut outcome = CheckOutcome {
        records,
        output_path: None,
    };

    if outcome.records_with_errors() == 0 {
        info!(
            source = %input.display(),
            records = outcome.records.len(),
            "no errors found, data is ready for quality scoring"
        );
        return Ok(outcome);
    }

    compose_errors(&mut table, &normalized.layout, &outcome.records);
    let output_path = derived_output_path(input, output_dir, OUTPUT_SUFFIX)?;
    write_json_pretty(&output_path, &table)?;
    info!(
        source = %input.display(),
        records = outcome.records.len(),
        records_with_errors = outcome.records_with_errors(),
        path = %output_path.display(),
        "wrote vocabulary check"
    );

    outcome.output_path = Some(output_path);
    Ok(outcome)
}
