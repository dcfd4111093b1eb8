use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use trafficsplit::application::traffic_split::TrafficSplit;
use trafficsplit::config::{GatewayWeightConfig, SplitConfig};
use trafficsplit::domain::ports::RandomSourceBox;
use trafficsplit::infrastructure::gateways::GatewayRegistry;
use trafficsplit::infrastructure::random::{SeededRandom, ThreadRandom};
use trafficsplit::interfaces::csv::load_writer::{GatewayLoad, LoadWriter};
use trafficsplit::interfaces::csv::payment_reader::PaymentReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file
    input: PathBuf,

    /// JSON file listing gateways and their weights
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gateway weight as <gateway>=<weight>. Repeatable; appended after --config entries.
    #[arg(long = "split")]
    splits: Vec<GatewayWeightConfig>,

    /// Seed for reproducible routing decisions
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SplitConfig::from_path(path).into_diagnostic()?,
        None => SplitConfig::default(),
    };
    config.extend(cli.splits);

    let random: RandomSourceBox = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let registry = GatewayRegistry::with_default_gateways();
    let split =
        TrafficSplit::from_config_with_random_source(&config, &registry, random).into_diagnostic()?;

    // Route payments
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    let mut routed: u64 = 0;
    let mut skipped: u64 = 0;
    for payment in reader.payments() {
        match payment {
            Ok(payment) => {
                split.route(payment).await.into_diagnostic()?;
                routed += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error reading payment");
                skipped += 1;
            }
        }
    }
    tracing::info!(
        routed,
        skipped,
        total_weight = split.total_weight(),
        "routing finished"
    );

    // Entries sharing a gateway code share one gateway, and so one counter
    let loads = config
        .gateways
        .iter()
        .zip(split.entries())
        .map(|(entry, (gateway, weight))| GatewayLoad {
            gateway: entry.gateway_code().unwrap_or_default().to_string(),
            weight: weight.value(),
            traffic_load: gateway.traffic_load(),
        });

    let stdout = io::stdout();
    let mut writer = LoadWriter::new(stdout.lock());
    writer.write_loads(loads).into_diagnostic()?;

    Ok(())
}
