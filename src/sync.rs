use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::types::session::DayType;

pub const DAY_TYPE_ENV: &str = "DAY_TYPE";
pub const LABEL_ENV: &str = "DAY_TIPE";
pub const TRAINING_LABEL: &str = "TRAINING";

#[derive(Debug, Clone)]
pub struct SyncJob {
    program: PathBuf,
    args: Vec<String>,
    stdout_log: PathBuf,
    stderr_log: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub run_id: Uuid,
    pub day_type: DayType,
    pub label: String,
    pub success: bool,
    pub exit_code: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub log: String,
}

impl SyncJob {
    pub fn from_config(config: &SyncConfig) -> Result<Self, SyncError> {
        let program = config.program.clone().ok_or(SyncError::NotConfigured)?;
        let mut args = config.args.clone();
        if let Some(script) = &config.script {
            args.push(script.to_string_lossy().into_owned());
        }
        Ok(Self {
            program,
            args,
            stdout_log: config.stdout_log.clone(),
            stderr_log: config.stderr_log.clone(),
        })
    }

    pub fn run(&self, day_type: &DayType, label: &str) -> Result<SyncOutcome, SyncError> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let started = Instant::now();

        let stdout = create_log(&self.stdout_log)?;
        let stderr = create_log(&self.stderr_log)?;

        tracing::info!(
            "Sync run {} starting: {} ({}={}, {}={})",
            run_id,
            self.program.display(),
            DAY_TYPE_ENV,
            day_type,
            LABEL_ENV,
            label
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .env(DAY_TYPE_ENV, day_type.to_string())
            .env(LABEL_ENV, label)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(|source| SyncError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let success = status.success();
        let log_path = if success { &self.stdout_log } else { &self.stderr_log };
        let log = read_log(log_path);
        let duration_ms = started.elapsed().as_millis() as u64;

        if success {
            tracing::info!("Sync run {} finished in {} ms", run_id, duration_ms);
        } else {
            tracing::warn!(
                "Sync run {} failed with exit code {:?} after {} ms",
                run_id,
                status.code(),
                duration_ms
            );
        }

        Ok(SyncOutcome {
            run_id,
            day_type: day_type.clone(),
            label: label.to_string(),
            success,
            exit_code: status.code(),
            started_at,
            duration_ms,
            log,
        })
    }
}

pub fn sync_label(day_type: &DayType, opponent: Option<&str>) -> Result<String, SyncError> {
    if !day_type.is_match_day() {
        return Ok(TRAINING_LABEL.to_string());
    }
    opponent
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .ok_or(SyncError::MissingOpponent)
}

fn create_log(path: &Path) -> Result<File, SyncError> {
    File::create(path).map_err(|source| SyncError::Log {
        path: path.display().to_string(),
        source,
    })
}

// Undecodable bytes become U+FFFD.
fn read_log(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!("Could not read sync log {}: {}", path.display(), e);
            String::new()
        }
    }
}
