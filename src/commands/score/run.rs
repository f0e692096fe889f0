use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use super::{ScoreResult, Scorer};
use crate::catalog::SchemaCatalog;
use crate::cli::ScoreArgs;
use crate::compose::compose_scores;
use crate::config::EngineConfig;
use crate::table::{HeaderForm, load_table, normalize};
use crate::util::{derived_output_path, write_json_pretty};

pub const OUTPUT_SUFFIX: &str = "scores_result";

pub struct ScoreOutcome {
    pub header_form: HeaderForm,
    pub results: Vec<ScoreResult>,
    pub output_path: PathBuf,
}

pub fn run(args: ScoreArgs) -> Result<()> {
    let config = EngineConfig::load(args.engine.config.as_deref(), args.engine.cross_field_mode)?;
    let catalog = SchemaCatalog::ihfc_2024();
    info!(
        inputs = args.engine.inputs.len(),
        cross_field_mode = config.cross_field_mode.as_str(),
        "scoring started"
    );

    for input in &args.engine.inputs {
        score_file(input, args.engine.output_dir.as_deref(), &catalog, &config)?;
    }

    info!(inputs = args.engine.inputs.len(), "scoring completed");
    Ok(())
}

pub fn score_file(
    input: &Path,
    output_dir: Option<&Path>,
    catalog: &SchemaCatalog,
    config: &EngineConfig,
) -> Result<ScoreOutcome> {
    let mut table = load_table(input)?;
    let normalized = normalize(&table, catalog, config.use_table_header)?;

    let results = Scorer::new(config).score_all(&normalized.records);
    compose_scores(&mut table, &normalized.layout, &results);

    let output_path = derived_output_path(input, output_dir, OUTPUT_SUFFIX)?;
    write_json_pretty(&output_path, &table)?;

    for result in &results {
        let labels = result.methodology.undetermined_labels().collect::<Vec<_>>();
        if !labels.is_empty() {
            debug!(
                row = result.row,
                criteria = %labels.join(", "),
                "undetermined methodology criteria"
            );
        }
    }

    let indeterminate = results
        .iter()
        .filter(|result| !result.methodology.grade.is_conclusive())
        .count();
    info!(
        source = %input.display(),
        records = results.len(),
        indeterminate,
        path = %output_path.display(),
        "wrote score results"
    );

    Ok(ScoreOutcome {
        header_form: normalized.layout.form,
        results,
        output_path,
    })
}
