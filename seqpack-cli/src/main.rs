//! Command line client for the seqpack experiment.
//!
//! Plays the part of the browser: generates identifiers, packs them into a
//! URL, restores them from a URL and sends them to the echo server.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqpack::client::{EchoClient, EchoSummary};
use seqpack::codec::{DeflateCodec, Lz4Codec};
use seqpack::ids::{self, GeneratorConfig, DEFAULT_COUNT, DEFAULT_MAX};
use seqpack::logging::{setup_logging, LogFormat};
use seqpack::selector::{CodecSelector, CompressionStats};
use seqpack::session::{Action, Session};
use seqpack::{url_state, Error};
use tracing::{error, info, warn};
use url::Url;

/// Number of identifiers shown when printing a session.
const PREVIEW_LEN: usize = 10;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogOutputFormat {
    Json,
    Pretty,
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[clap(name = "seqpack", version, about = "Pack identifier lists into URLs")]
struct Cli {
    #[clap(short = 'o', long = "output-format", default_value = "pretty", global = true)]
    output_format: LogOutputFormat,

    /// Base URL of the echo server.
    #[clap(
        long,
        env = "SEQPACK_SERVER_URL",
        default_value = "http://localhost:8000/",
        global = true
    )]
    server: Url,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random identifiers and write them, compressed, into a URL.
    Generate {
        /// Number of identifiers.
        #[clap(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        /// Largest identifier value.
        #[clap(long, default_value_t = DEFAULT_MAX)]
        max: u64,
        /// Seed for reproducible runs.
        #[clap(long)]
        seed: Option<u64>,
        /// Page URL the state is written into.
        #[clap(long, default_value = "http://localhost:5173/")]
        base_url: Url,
        /// DEFLATE compression level, 0 to 9.
        #[clap(long, default_value_t = 9)]
        deflate_level: u32,
        /// Write the identifiers uncompressed as repeated `companySeq`
        /// parameters and send them with `GET /test`.
        #[clap(long)]
        legacy: bool,
        /// Restore from the written URL and send the result to the server.
        #[clap(long)]
        send: bool,
        /// Print the compression statistics as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Restore the identifiers carried by a URL.
    Restore {
        /// URL with `q` and `method`, or legacy `companySeq`, parameters.
        url: Url,
    },
    /// Restore the identifiers carried by a URL and send them to the server.
    Send {
        /// URL with `q` and `method`, or legacy `companySeq`, parameters.
        url: Url,
        /// Send the identifiers as query parameters with `GET /test`.
        #[clap(long)]
        legacy: bool,
    },
    /// Check that the echo server is up.
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = match cli.output_format {
        LogOutputFormat::Json => LogFormat::Json,
        LogOutputFormat::Pretty => LogFormat::Pretty,
    };
    if let Err(error) = setup_logging("warn,seqpack=info", format) {
        eprintln!("failed to set up logging: {error}");
    }

    let client = EchoClient::new(cli.server);
    match run(cli.command, &client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, client: &EchoClient) -> Result<(), Error> {
    match command {
        Command::Generate {
            count,
            max,
            seed,
            base_url,
            deflate_level,
            legacy,
            send,
            json,
        } => {
            let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let generated = ids::generate(&mut rng, GeneratorConfig { count, max });

            let url = if legacy {
                url_state::write_raw(&base_url, &generated)
            } else {
                let selector = CodecSelector::new(vec![
                    Box::new(DeflateCodec::with_level(deflate_level)),
                    Box::new(Lz4Codec),
                ]);
                let session =
                    Session::new(base_url).apply(&selector, Action::Generate(generated))?;
                match (session.stats(), json) {
                    (Some(stats), true) => print_json(stats, session.url()),
                    (Some(stats), false) => print_stats(stats, session.url()),
                    (None, _) => println!("no identifiers generated"),
                }
                session.url().clone()
            };
            println!("{url}");

            if send {
                // Only the URL crosses over, as on a page reload.
                submit(client, &Session::load(url)?, legacy).await?;
            }
        }
        Command::Restore { url } => {
            let session = Session::load(url)?;
            print_session(&session);
        }
        Command::Send { url, legacy } => {
            let session = Session::load(url)?;
            info!(count = session.ids().len(), "sending restored identifiers");
            submit(client, &session, legacy).await?;
        }
        Command::Health => {
            let health = client.health().await?;
            println!("{}", health.message);
        }
    }

    Ok(())
}

async fn submit(client: &EchoClient, session: &Session, legacy: bool) -> Result<(), Error> {
    let summary = if legacy {
        client.submit_query(session.ids()).await?
    } else {
        client.submit(&session.delimited()).await?
    };
    print_summary(&summary);
    Ok(())
}

fn print_json(stats: &CompressionStats, url: &Url) {
    match serde_json::to_string_pretty(stats) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            warn!(%error, "could not serialize statistics, printing a table instead");
            print_stats(stats, url);
        }
    }
}

fn print_stats(stats: &CompressionStats, url: &Url) {
    println!("{:<16}{:>10}", "original", stats.original_length);
    for entry in &stats.encoded {
        let marker = if entry.codec == stats.selected { "  (selected)" } else { "" };
        println!("{:<16}{:>10}{marker}", entry.codec.as_str(), entry.length);
    }
    println!("{:<16}{:>9.1}%", "ratio", stats.ratio() * 100.0);
    println!("{:<16}{:>10}", "url length", url.as_str().len());
}

fn print_session(session: &Session) {
    let ids = session.ids();
    let preview = &ids[..ids.len().min(PREVIEW_LEN)];
    println!("count: {}", ids.len());
    println!("first: {preview:?}");
}

fn print_summary(summary: &EchoSummary) {
    if let (Some(count), Some(values)) = (summary.count, &summary.company_seqs) {
        println!("server count: {count}");
        println!("server first: {}", values.join(", "));
    }
    println!("server message: {}", summary.message);
}
