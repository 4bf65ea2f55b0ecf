//! Report output model for scenario runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Report status for a scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub failed_step: Option<String>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_run: usize,
    /// Reconciliation passes applied to the host
    pub passes: usize,
}

impl ScenarioReport {
    pub fn passed(steps_run: usize, passes: usize) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            failed_step: None,
            assertion: None,
            message: None,
            steps_run,
            passes,
        }
    }

    pub fn failed(
        step_index: usize,
        step: &str,
        assertion: String,
        message: String,
        passes: usize,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(step_index),
            failed_step: Some(step.to_string()),
            assertion: Some(assertion),
            message: Some(message),
            steps_run: step_index + 1,
            passes,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("writing report {}", path.display()))?;
        Ok(())
    }
}
