// src/commands/report.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::core::config::{BuildEnvironment, ReportOptions};
use crate::core::models::TestRunResults;
use crate::reporting::{self, JsonlUploader, file_log};

/// File under `test_logs` receiving spooled dashboard uploads.
const UPLOAD_SPOOL_NAME: &str = "uploads.jsonl";

pub fn execute(
    results_path: PathBuf,
    test_type: String,
    test_package: String,
    annotations: Vec<String>,
    flakiness_server: Option<String>,
    out_dir: PathBuf,
) -> Result<()> {
    let content = fs::read_to_string(&results_path)
        .with_context(|| format!("Failed to read results file: {}", results_path.display()))?;
    let results: TestRunResults = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse results file: {}", results_path.display()))?;

    let options = ReportOptions {
        test_type,
        test_package,
        annotations,
        flakiness_server,
    };
    let env = BuildEnvironment::from_env(out_dir);
    let uploader = JsonlUploader::new(
        env.output_dir
            .join(file_log::LOG_DIR_NAME)
            .join(UPLOAD_SPOOL_NAME),
    );

    reporting::log_full(&results, &options, &env, &uploader)
}
