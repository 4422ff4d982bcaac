//! CI/CD pipeline showcase entry point.

use std::ffi::OsString;
use std::path::Path;
use std::time::Instant;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use pipeline_showcase::api::{create_router, openapi, AppState, Route};
use pipeline_showcase::config::Config;
use pipeline_showcase::logging;
use pipeline_showcase::metrics;
use pipeline_showcase::probe;
use pipeline_showcase::utils::shutdown_signal;
use pipeline_showcase::ServiceError;

/// CI/CD pipeline showcase service.
#[derive(Parser, Debug)]
#[command(name = "pipeline-showcase")]
#[command(about = "Landing page and deployment metadata for the CI/CD pipeline demo")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true, env = "VERBOSE", value_parser = BoolishValueParser::new())]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "LOG_JSON", value_parser = BoolishValueParser::new())]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let process_start = Instant::now();

    // .env must be applied before clap reads VERBOSE / LOG_JSON
    let args = parse_args(None, std::env::args_os()).unwrap_or_else(|e| e.exit());

    // Initialize logging
    let rust_log = std::env::var("RUST_LOG").ok();
    logging::init(
        logging::env_filter(args.verbose, rust_log.as_deref()),
        args.json_logs,
    );

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::Serve { port }) => cmd_serve(port.or(args.port), process_start).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Openapi) => cmd_openapi(),
        None => cmd_serve(args.port, process_start).await,
    }
}

/// Load the `.env` file (default location unless `dotenv_path` is given), then parse arguments.
fn parse_args<I, T>(dotenv_path: Option<&Path>, args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match dotenv_path {
        Some(path) => dotenvy::from_path(path).ok(),
        None => dotenvy::dotenv().ok().map(|_| ()),
    };

    Args::try_parse_from(args)
}

/// Load and validate configuration, applying the CLI port override.
fn load_config(port_override: Option<u16>) -> pipeline_showcase::Result<Config> {
    let mut config = Config::load()?;

    if let Some(port) = port_override {
        config.port = port;
    }

    config.validate().map_err(ServiceError::InvalidConfig)?;
    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PIPELINE SHOWCASE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(None) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Environment: {}", config.app_env);
    match config.metrics_port {
        Some(port) => println!("  Metrics Port: {}", port),
        None => println!("  Metrics Port: disabled"),
    }
    println!(
        "  Log Filter: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| logging::DEFAULT_DIRECTIVES.to_string())
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    let json = openapi::openapi_json().map_err(ServiceError::from)?;
    println!("{}", json);
    Ok(())
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(port_override: Option<u16>, process_start: Instant) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = load_config(port_override).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(metrics_addr) = config.metrics_addr() {
        metrics::install_exporter(metrics_addr).map_err(ServiceError::from)?;
    }

    let app_state = AppState::new(config.app_env.clone()).started_at(process_start);

    let addr = config.socket_addr().map_err(ServiceError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await.map_err(ServiceError::from)?;

    log_banner(&config, &app_state);

    let router = create_router(app_state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::from)?;

    info!("Server stopped");
    Ok(())
}

/// Startup banner: address, start time, environment, runtime and endpoints.
fn log_banner(config: &Config, state: &AppState) {
    info!("=================================");
    info!("CI/CD Pipeline Application");
    info!("=================================");
    info!("Server running on {}:{}", config.host, config.port);
    info!("Started at: {}", state.catalog.project.deployment_date);
    info!("Environment: {}", config.app_env);
    info!("Runtime: {}", probe::runtime_version());
    info!("=================================");
    info!("Available endpoints:");
    for path in Route::paths() {
        info!("  - http://localhost:{}{}", config.port, path);
    }
    info!("=================================");
}
