use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use counterkit::telemetry::init_tracing;
use counterkit::{Command, Harness, HarnessInput, HttpDataPort, HttpPortConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs the counter, validators and data port once", long_about = None)]
struct Args {
    /// URL fetched by the data port
    #[arg(short, long, default_value_t = String::from("http://127.0.0.1:8080/data"))]
    url: String,
    #[arg(short, long, default_value_t = 10)]
    timeout_secs: u64,
    /// JSON array of counter commands, e.g. '["Increment","Decrement"]'
    #[arg(short, long, default_value_t = String::from("[]"))]
    script: String,
    #[arg(short, long, default_value_t = String::new())]
    email: String,
    #[arg(short, long, default_value_t = String::new())]
    phone: String,
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let _guard = init_tracing(&args.log_dir)?;

    let config = HttpPortConfig::new(args.url).with_timeout(Duration::from_secs(args.timeout_secs));
    let harness = Harness::new(Arc::new(HttpDataPort::new(config)?));
    let input = HarnessInput {
        script: Command::parse_script(&args.script)?,
        email: args.email,
        phone: args.phone,
    };

    let report = harness.run_or_report(&input).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
