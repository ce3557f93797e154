//! repo-pulse CLI entrypoint for GitHub repository activity.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use repo_pulse::{
    ActivityError, OctocrabTransport, OperationMode, PersonalAccessToken, PulseConfig,
    UpstreamTransport, WorkerPool,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::from(cli::exit_code(&error))
        }
    }
}

async fn run() -> Result<(), ActivityError> {
    let config = load_config()?;
    config.validate()?;
    init_logging(&config);

    let token = config
        .resolve_token()
        .map(PersonalAccessToken::new)
        .transpose()?;
    let transport: Arc<dyn UpstreamTransport> = Arc::new(OctocrabTransport::for_api_base(
        &config.api_base,
        token.as_ref(),
    )?);
    let pool = WorkerPool::new(config.concurrency);

    tracing::debug!(
        "starting {:?} with {} workers against {}",
        config.operation_mode(),
        pool.capacity(),
        config.api_base
    );

    match config.operation_mode() {
        OperationMode::ActivityPage => cli::activity::run_page(&config, transport, pool).await,
        OperationMode::FullActivity => cli::activity::run_full(&config, transport, pool).await,
        OperationMode::RepositoryPage => cli::repositories::run(&config, transport, pool).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ActivityError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PulseConfig, ActivityError> {
    PulseConfig::load().map_err(|error| ActivityError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// parseable; `RUST_LOG` overrides the configured level.
fn init_logging(config: &PulseConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .init();
    }
}
