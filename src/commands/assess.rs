use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::catalog::SchemaCatalog;
use crate::cli::AssessArgs;
use crate::commands::check::check_file;
use crate::commands::score::{ScoreResult, UncertaintyGrade, score_file};
use crate::config::EngineConfig;
use crate::model::{AssessedFile, AssessmentManifest, GradeCounts};
use crate::util::{derived_output_path, now_utc_string, sha256_file, write_json_pretty};

const MANIFEST_SUFFIX: &str = "assessment";

pub fn run(args: AssessArgs) -> Result<()> {
    let config = EngineConfig::load(args.engine.config.as_deref(), args.engine.cross_field_mode)?;
    let catalog = SchemaCatalog::ihfc_2024();
    let output_dir = args.engine.output_dir.as_deref();

    let mut files = Vec::with_capacity(args.engine.inputs.len());
    for input in &args.engine.inputs {
        files.push(assess_file(input, output_dir, &catalog, &config)?);
    }

    let manifest = AssessmentManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        cross_field_mode: config.cross_field_mode.as_str().to_string(),
        use_table_header: config.use_table_header,
        file_count: files.len(),
        files,
    };

    let manifest_path = match args.manifest_path {
        Some(path) => path,
        None => {
            let first = args
                .engine
                .inputs
                .first()
                .map(|input| input.as_path())
                .unwrap_or_else(|| Path::new("hfqa"));
            derived_output_path(first, output_dir, MANIFEST_SUFFIX)?
        }
    };

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote assessment manifest");
    info!(file_count = manifest.file_count, "assessment completed");

    Ok(())
}

fn assess_file(
    input: &Path,
    output_dir: Option<&Path>,
    catalog: &SchemaCatalog,
    config: &EngineConfig,
) -> Result<AssessedFile> {
    let source_sha256 = sha256_file(input)?;
    let scored = score_file(input, output_dir, catalog, config)?;
    let checked = check_file(input, output_dir, catalog, config)?;

    let records_with_errors = checked.records_with_errors();
    if records_with_errors > 0 {
        warn!(
            source = %input.display(),
            records_with_errors,
            "records need curation before their quality codes can be trusted"
        );
    }

    Ok(AssessedFile {
        source_path: input.display().to_string(),
        source_sha256,
        header_form: scored.header_form.as_str().to_string(),
        record_count: scored.results.len(),
        grade_counts: grade_counts(&scored.results),
        records_with_errors,
        scores_path: scored.output_path.display().to_string(),
        vocab_check_path: checked
            .output_path
            .map(|path| path.display().to_string()),
    })
}

pub fn grade_counts(results: &[ScoreResult]) -> GradeCounts {
    let mut uncertainty = UncertaintyGrade::ALL
        .iter()
        .map(|grade| (grade.code().to_string(), 0))
        .collect::<BTreeMap<_, _>>();
    let mut methodology = BTreeMap::new();

    for result in results {
        *uncertainty
            .entry(result.uncertainty.grade.code().to_string())
            .or_insert(0) += 1;
        *methodology
            .entry(result.methodology.grade.code())
            .or_insert(0) += 1;
    }

    GradeCounts {
        uncertainty,
        methodology,
    }
}

#[cfg(test)]
mod tests {
    use super::grade_counts;
    use crate::commands::score::Scorer;
    use crate::config::EngineConfig;
    use crate::table::record_from_pairs;

    #[test]
    fn grade_counts_include_empty_uncertainty_grades() {
        let records = vec![
            record_from_pairs(&[("ID", "HF-1"), ("C1", "100"), ("C2", "3")]),
            record_from_pairs(&[("ID", "HF-2"), ("C1", "100"), ("C2", "30")]),
            record_from_pairs(&[("ID", "HF-3"), ("C1", "0"), ("C2", "3")]),
        ];
        let results = Scorer::new(&EngineConfig::default()).score_all(&records);

        let counts = grade_counts(&results);
        assert_eq!(counts.uncertainty.get("U1"), Some(&1));
        assert_eq!(counts.uncertainty.get("U2"), Some(&0));
        assert_eq!(counts.uncertainty.get("U4"), Some(&1));
        assert_eq!(counts.uncertainty.get("Ux"), Some(&1));
        assert_eq!(counts.methodology.get("Mx"), Some(&3));
    }
}
