mod menu;
mod network;
mod validation;

use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server host name or host:port to send requests to
    #[arg(short = 's', long, default_value = "127.0.0.1")]
    server: String,

    /// Seconds to wait for a response before giving up (0 = wait forever)
    #[arg(short = 't', long, default_value = "0")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Starting password generation client...");

    let client = network::Client::new(&args.server, args.timeout).await?;
    client.run().await?;

    Ok(())
}
