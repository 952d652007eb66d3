use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wallet_flow::report::{ActionSnapshot, build_report};
use wallet_flow::{Dependencies, FlowError};

/// Main entry point for the wallet-flow reporter.
///
/// Initializes dotenv and tracing, loads the entity registry, reads the
/// wallet-action snapshot named on the command line and prints the derived
/// report as JSON.
///
/// # Returns
///
/// A `Result` indicating success or a `FlowError` if loading or deriving
/// fails.
fn main() -> Result<(), FlowError> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dependencies = Dependencies::new()?;

    let snapshot_path = std::env::args()
        .nth(1)
        .expect("usage: wallet-flow <snapshot.json>");
    let raw = std::fs::read_to_string(&snapshot_path)?;
    let snapshot: ActionSnapshot = serde_json::from_str(&raw)?;

    let report = build_report(&snapshot, dependencies.registry.as_ref())?;
    info!(
        progress = report.progress,
        stepping = report.stepping,
        "derived wallet-flow report"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
