//! TOML scenario manifests: each file names a demo, optional options,
//! and the expected output. The runner compares the demo's declarative
//! output (trimmed) against the expectation and also checks that the
//! declarative and desugared forms agree.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DemoError;
use crate::registry::{DemoOptions, demo_output, parse_arm};

#[derive(Debug, Deserialize)]
pub struct ScenarioConfig {
    /// Human-readable scenario description.
    #[serde(default)]
    pub description: Option<String>,

    /// Demo name to run.
    pub demo: String,

    /// Conditional arm: "first" or "second".
    #[serde(default)]
    pub arm: Option<String>,

    /// Name for demos that introduce somebody.
    #[serde(default)]
    pub name: Option<String>,

    /// Inclusive loop bound for demos that loop.
    #[serde(default)]
    pub end: Option<i64>,

    /// Expected output (trimmed comparison).
    pub expect_output: String,
}

#[derive(Debug)]
pub struct ScenarioReport {
    pub path: PathBuf,
    pub description: Option<String>,
    pub passed: bool,
    /// Mismatch detail when the scenario failed.
    pub detail: Option<String>,
}

/// Run one scenario file.
pub fn run_file(path: &Path) -> Result<ScenarioReport, DemoError> {
    let content = fs::read_to_string(path)?;
    let config: ScenarioConfig = toml::from_str(&content).map_err(|e| DemoError::Manifest {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut opts = DemoOptions::default();
    if let Some(arm) = &config.arm {
        opts.arm = parse_arm(arm).ok_or_else(|| DemoError::UnknownArm(arm.clone()))?;
    }
    if let Some(name) = &config.name {
        opts.name = name.clone();
    }
    if let Some(end) = config.end {
        opts.end = end;
    }

    let (declarative, desugared) = demo_output(&config.demo, &opts)?;
    let detail = if declarative != desugared {
        Some(format!(
            "declarative and desugared forms disagree: {:?} vs {:?}",
            declarative, desugared
        ))
    } else if declarative.trim() != config.expect_output.trim() {
        Some(format!(
            "expected {:?}, got {:?}",
            config.expect_output.trim(),
            declarative.trim()
        ))
    } else {
        None
    };

    Ok(ScenarioReport {
        path: path.to_path_buf(),
        description: config.description,
        passed: detail.is_none(),
        detail,
    })
}

/// Run a single `.toml` file or every `.toml` file in a directory
/// (non-recursive, sorted by file name).
pub fn run_path(path: &Path) -> Result<Vec<ScenarioReport>, DemoError> {
    if !path.is_dir() {
        return Ok(vec![run_file(path)?]);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if entry_path.extension().is_some_and(|ext| ext == "toml") {
            files.push(entry_path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(DemoError::Manifest {
            path: path.display().to_string(),
            message: "no .toml scenario files found".to_string(),
        });
    }

    files.iter().map(|file| run_file(file)).collect()
}
