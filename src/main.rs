use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use log::info;
use places_collector::{
    api::params::DEFAULT_RESULTS,
    collector::DEFAULT_DELAY,
    config::{Config, API_KEY_VAR},
    error::AppError,
    output::write_csv,
    searches::{load_searches, DEFAULT_SEARCHES, TEST_LOCATIONS},
    stats::RunStats,
    Collector, LocatorClient,
};

const DIAGNOSTIC_RADIUS_M: u32 = 500;

#[derive(Parser, Debug)]
#[command(version, about = "Collects places from the Yandex Locator API into a CSV file")]
struct Args {
    /// Output CSV file
    #[arg(short, long, default_value = "data/yandex_locator_data.csv")]
    output: PathBuf,

    /// JSON file with searches to run instead of the built-in list
    #[arg(short, long)]
    searches: Option<PathBuf>,

    /// Pause between upstream calls, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Skip the diagnostic coordinate search
    #[arg(long)]
    skip_test: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(AppError::MissingApiKey(var)) => {
            println!("API key not found in environment or .env file");
            println!("Add {}=<your key> to the .env file", var);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("API key found: {}", config.masked_api_key());

    let searches = match &args.searches {
        Some(path) => load_searches(path)?,
        None => DEFAULT_SEARCHES.clone(),
    };

    let client = LocatorClient::new(&config)?;
    let collector = Collector::new(client, Duration::from_millis(args.delay_ms));

    if !args.skip_test {
        if let Some(location) = TEST_LOCATIONS.first() {
            println!("\nTest: {}", location.name);
            let test_records = collector
                .find_by_coordinates(location.coordinates, DIAGNOSTIC_RADIUS_M, DEFAULT_RESULTS)
                .await;
            if test_records.is_empty() {
                println!("Test search returned no objects");
            } else {
                println!("Test search succeeded. Objects found: {}", test_records.len());
            }
            collector.pause().await;
        }
    }

    println!("\nCollecting data");
    info!("Running {} searches", searches.len());
    let records = collector.collect(&searches).await;

    if records.is_empty() {
        println!("No data collected, check {} and the search parameters.", API_KEY_VAR);
        return Ok(());
    }

    write_csv(&records, &args.output)?;

    println!("\nStatistics");
    print!("{}", RunStats::from_records(&records));

    Ok(())
}
