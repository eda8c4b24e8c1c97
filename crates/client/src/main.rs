//! sbmctl CLI entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sbmctl_client::cli::{Cli, Commands, OutputFormat};
use sbmctl_client::client::{ClientConfig, SbmClient};
use sbmctl_client::codec::InputSource;
use sbmctl_client::confirm::TerminalGate;
use sbmctl_client::error::Result;
use sbmctl_client::output::{human, json};
use sbmctl_core::messaging::{self, build_payload, BatchResult, WriteOp};

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sbmctl_client=warn,sbmctl_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        base_url,
        token,
        format,
        quiet,
        command,
    } = cli;
    let client = SbmClient::new(ClientConfig { base_url, token });

    match command {
        Commands::SbmSchedules => {
            let schedules = client.get_schedules().await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&schedules)),
                OutputFormat::Summary => {
                    println!("{}", human::format_schedules(&schedules.results))
                }
            }
        }
        Commands::SbmMessagesets => {
            let messagesets = client.get_messagesets().await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&messagesets)),
                OutputFormat::Summary => {
                    println!("{}", human::format_messagesets(&messagesets.results))
                }
            }
        }
        Commands::SbmMessages { message } => {
            let messages = match message {
                Some(id) => vec![client.get_message(id).await?],
                None => client.get_messages().await?.results,
            };
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&messages)),
                OutputFormat::Summary => println!("{}", human::format_messages(&messages)),
            }
        }
        Commands::SbmMessagesDelete { message, yes } => {
            let gate = TerminalGate::new(yes);
            let result = messaging::delete_messages(&client, message, &gate).await?;
            print_batch(format, quiet, &result, "deleted");
        }
        Commands::SbmMessagesImport { csv, json } => {
            run_write(format, quiet, &client, WriteOp::Create, csv, json).await?;
        }
        Commands::SbmMessagesUpdate { csv, json } => {
            run_write(format, quiet, &client, WriteOp::Update, csv, json).await?;
        }
    }

    Ok(())
}

/// Shared import/update pipeline: select the source, parse every record
/// up front, shape payloads, then run the batch.
async fn run_write(
    format: OutputFormat,
    quiet: bool,
    client: &SbmClient,
    op: WriteOp,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let source = InputSource::from_flags(csv, json)?;
    let records = source.read_records()?;
    let contract = source.contract(op);
    let payloads: Vec<_> = records
        .iter()
        .map(|record| build_payload(record, contract))
        .collect();
    let result = messaging::write_messages(client, op, &payloads).await?;
    print_batch(format, quiet, &result, human::write_verb(op));
    Ok(())
}

fn print_batch(format: OutputFormat, quiet: bool, result: &BatchResult, verb: &str) {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(result)),
        OutputFormat::Summary if quiet => {
            println!("{}", human::format_batch_counts(result, verb))
        }
        OutputFormat::Summary => println!("{}", human::format_batch(result, verb)),
    }
}
