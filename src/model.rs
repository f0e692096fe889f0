use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeCounts {
    pub uncertainty: BTreeMap<String, usize>,
    pub methodology: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessedFile {
    pub source_path: String,
    pub source_sha256: String,
    pub header_form: String,
    pub record_count: usize,
    pub grade_counts: GradeCounts,
    pub records_with_errors: usize,
    pub scores_path: String,
    pub vocab_check_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub cross_field_mode: String,
    pub use_table_header: bool,
    pub file_count: usize,
    pub files: Vec<AssessedFile>,
}
