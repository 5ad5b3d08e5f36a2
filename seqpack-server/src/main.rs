//! Echo server binary.

use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use seqpack::logging::{setup_logging, LogFormat};
use seqpack_server::api;
use seqpack_server::config::Settings;
use seqpack_server::context::ServerContext;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogOutputFormat {
    Json,
    Pretty,
}

/// Command line arguments for the echo server.
#[derive(Debug, Parser)]
#[clap(name = "seqpack-server")]
struct ServerArgs {
    /// Optional path to the configuration file. Values not set there fall
    /// back to the embedded defaults; environment variables override both.
    #[clap(short = 'c', long, required = false)]
    config: Option<PathBuf>,

    #[clap(short = 'o', long = "output-format", default_value = "json")]
    output_format: LogOutputFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();

    let format = match args.output_format {
        LogOutputFormat::Json => LogFormat::Json,
        LogOutputFormat::Pretty => LogFormat::Pretty,
    };
    setup_logging("info,seqpack=debug,seqpack_server=debug", format)?;

    let settings = Settings::new(args.config.as_deref())?;
    let addr = settings.server.socket_addr()?;
    let context = ServerContext::new(settings);

    // Print configuration.
    info!("Server context setup.");
    let context_string = serde_json::to_string_pretty(&context)?;
    info!(context_string);

    let (addr, server) = warp::serve(api::service(context))
        .try_bind_with_graceful_shutdown(addr, async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })?;

    info!("Server is running on http://{addr}");
    server.await;

    Ok(())
}
