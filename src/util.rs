use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to open file for hashing: {}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];

    loop {
        let count = file
            .read(&mut buf)
            .with_context(|| format!("failed to read file for hashing: {}", path.display()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buf[..count]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create json file: {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("failed to write json file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize json file: {}", path.display()))?;

    Ok(())
}

// `<dir>/<stem>_<suffix>.json`, next to the input unless a directory is given.
pub fn derived_output_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid UTF-8 file stem: {}", input.display()))?;

    let directory = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    Ok(directory.join(format!("{stem}_{suffix}.json")))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::derived_output_path;

    #[test]
    fn output_path_uses_input_stem_and_suffix() {
        let next_to_input =
            derived_output_path(Path::new("data/hf_2024.json"), None, "scores_result")
                .expect("path");
        assert_eq!(next_to_input, Path::new("data/hf_2024_scores_result.json"));

        let redirected = derived_output_path(
            Path::new("data/hf_2024.json"),
            Some(Path::new("out")),
            "vocab_check",
        )
        .expect("path");
        assert_eq!(redirected, Path::new("out/hf_2024_vocab_check.json"));
    }
}
