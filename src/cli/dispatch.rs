//! Mode dispatch

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use leancheck_api::{ApiConfig, ApiServer, CheckResponse};
use leancheck_core::{Checker, CheckerConfig, ConfigManager, ServiceConfig};

use crate::cli::{Args, Mode, EXIT_SUCCESS};

/// Run the selected mode, returning the process exit code
pub async fn run(args: Args) -> Result<i32> {
    let mut config = resolve_config(args.config.as_deref()).await?;

    match args.mode {
        Mode::Serve {
            host,
            port,
            checker,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(program) = checker {
                config.checker.program = program;
            }

            info!("Using checker {:?}", config.checker.program);
            let server = ApiServer::new(
                ApiConfig::from(&config.server),
                Checker::new(config.checker),
            );
            server.start().await?;
            Ok(EXIT_SUCCESS)
        }
        Mode::Check {
            file,
            checker,
            pretty,
        } => {
            if let Some(program) = checker {
                config.checker.program = program;
            }
            let mut stdout = std::io::stdout().lock();
            run_check(config.checker, &file, pretty, &mut stdout).await?;
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Defaults, then the optional config file, then `LEANCHECK_*` variables
pub async fn resolve_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let mut manager = match path {
        Some(path) => ConfigManager::with_config_file(path),
        None => ConfigManager::new(),
    };
    manager
        .load_config()
        .await
        .context("Failed to load configuration")?;
    manager
        .apply_env()
        .context("Failed to apply environment overrides")?;
    manager.validate()?;
    Ok(manager.into_config())
}

/// Check one file and write the JSON response to `out`
///
/// Succeeds whenever the checker ran, whatever it reported.
pub async fn run_check<W: Write>(
    config: CheckerConfig,
    file: &Path,
    pretty: bool,
    out: &mut W,
) -> Result<CheckResponse> {
    let code = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let outcome = Checker::new(config)
        .run(&code)
        .await
        .with_context(|| format!("Failed to check {}", file.display()))?;
    info!(
        "Checker exited with {:?}, {} diagnostics",
        outcome.exit_code,
        outcome.diagnostics.len()
    );

    let response = CheckResponse {
        errors: outcome.diagnostics,
    };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &response)?;
    } else {
        serde_json::to_writer(&mut *out, &response)?;
    }
    writeln!(out)?;

    Ok(response)
}
