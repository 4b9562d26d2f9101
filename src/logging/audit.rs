//! Append-only audit trail with size limits and rotation.
//!
//! Records state-changing console actions (policy toggles, threshold edits)
//! as JSON lines. Per-file size limits with rotation keep the trail from
//! growing without bound.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to open audit log: {0}")]
    OpenError(#[from] std::io::Error),

    #[error("Failed to serialize audit entry: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Size limits for the audit trail.
#[derive(Debug, Clone)]
pub struct AuditLimits {
    /// Maximum size of a single log file in bytes before rotation.
    pub max_file_bytes: u64,
    /// Rotated files kept (audit.log.1 .. audit.log.N).
    pub max_rotated_files: u32,
}

impl Default for AuditLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024, // 10 MB
            max_rotated_files: 5,
        }
    }
}

/// Append-only audit trail with automatic rotation.
pub struct AuditTrail {
    path: PathBuf,
    limits: AuditLimits,
}

impl AuditTrail {
    /// Open (or create) the trail at the given path.
    pub fn open(path: &Path, limits: AuditLimits) -> Result<Self, AuditError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            limits,
        })
    }

    /// Record a console action.
    pub fn record(&self, action: &str, detail: &str) -> Result<(), AuditError> {
        self.rotate_if_needed()?;

        let entry = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "action": action,
            "detail": detail,
        });
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }

    fn rotate_if_needed(&self) -> Result<(), AuditError> {
        let size = match fs::metadata(&self.path) {
            Ok(m) => m.len(),
            Err(_) => return Ok(()), // File doesn't exist yet
        };

        if size < self.limits.max_file_bytes {
            return Ok(());
        }

        // Shift rotated files towards higher suffixes, dropping the oldest.
        for i in (1..=self.limits.max_rotated_files).rev() {
            let src = self.rotated_path(i);
            if !src.exists() {
                continue;
            }
            if i == self.limits.max_rotated_files {
                let _ = fs::remove_file(&src);
            } else {
                let _ = fs::rename(&src, self.rotated_path(i + 1));
            }
        }

        let _ = fs::rename(&self.path, self.rotated_path(1));
        File::create(&self.path)?;

        Ok(())
    }

    fn rotated_path(&self, n: u32) -> PathBuf {
        let name = self.path.file_name().unwrap_or_default().to_string_lossy();
        self.path.with_file_name(format!("{}.{}", name, n))
    }
}
