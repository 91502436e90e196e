// Checker invocation: temp file in, diagnostics out

use std::io::Write;
use std::process::Stdio;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use crate::config::CheckerConfig;
use crate::diagnostic::{ColonDelimitedParser, Diagnostic, DiagnosticParser};
use crate::error::{CheckError, Result};

/// Everything one checker run produced
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Parsed diagnostics, in emission order
    pub diagnostics: Vec<Diagnostic>,
    /// Exit code, `None` when the checker was killed by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output, logged at debug level
    pub stdout: String,
}

/// Runs the external checker against submitted source text
///
/// Holds no per-request state. One instance is shared across concurrent
/// requests; each call gets its own temporary file and child process.
#[derive(Clone)]
pub struct Checker {
    config: CheckerConfig,
    parser: Arc<dyn DiagnosticParser>,
}

impl std::fmt::Debug for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Checker {
    /// Checker reading `<path>:<line>:<column>:<message>` diagnostics
    pub fn new(config: CheckerConfig) -> Self {
        Self::with_parser(config, Arc::new(ColonDelimitedParser))
    }

    pub fn with_parser(config: CheckerConfig, parser: Arc<dyn DiagnosticParser>) -> Self {
        Self { config, parser }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check `code` and return its diagnostics
    pub async fn check(&self, code: &str) -> Result<Vec<Diagnostic>> {
        Ok(self.run(code).await?.diagnostics)
    }

    /// Check `code`, keeping the exit code and stdout alongside the diagnostics
    ///
    /// A non-zero exit is not an error. The temporary file is removed when this
    /// returns, whichever way it returns.
    pub async fn run(&self, code: &str) -> Result<CheckOutcome> {
        let source = self.write_source(code).await?;
        debug!(
            "Running {} on {} ({} bytes)",
            self.config.program,
            source.path().display(),
            code.len()
        );

        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.args)
            .arg(source.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CheckError::CheckerNotFound(self.config.program.clone())
            } else {
                CheckError::SpawnFailed(e.to_string())
            }
        })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| CheckError::Timeout(self.config.timeout_ms))??,
            None => child.wait_with_output().await?,
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostics = self.parser.parse(&stderr);

        debug!(
            "{} exited with {:?}: {} stderr lines, {} diagnostics",
            self.config.program,
            output.status.code(),
            stderr.lines().count(),
            diagnostics.len()
        );

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !stdout.is_empty() {
            debug!("{} stdout: {}", self.config.program, stdout.trim_end());
        }

        drop(source);

        Ok(CheckOutcome {
            diagnostics,
            exit_code: output.status.code(),
            stdout,
        })
    }

    /// Write `code` verbatim to a fresh temp file and sync it to disk
    async fn write_source(&self, code: &str) -> Result<NamedTempFile> {
        let suffix = format!(".{}", self.config.extension);
        let temp_dir = self.config.temp_dir.clone();
        let bytes = code.as_bytes().to_vec();

        tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
            let mut builder = tempfile::Builder::new();
            builder.prefix("leancheck-").suffix(&suffix);

            let mut file = match temp_dir {
                Some(dir) => builder.tempfile_in(dir)?,
                None => builder.tempfile()?,
            };
            file.write_all(&bytes)?;
            file.flush()?;
            file.as_file().sync_all()?;
            Ok(file)
        })
        .await
        .map_err(|e| CheckError::TempFile(std::io::Error::other(e)))?
        .map_err(CheckError::TempFile)
    }
}
