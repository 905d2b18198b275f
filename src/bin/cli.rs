//! RecordCat CLI Client
//!
//! Command-line interface for interacting with a RecordCat server.

use clap::{Parser, Subcommand};
use recordcat::Record;

/// RecordCat CLI
#[derive(Parser, Debug)]
#[command(name = "recordcat-cli")]
#[command(about = "CLI for the RecordCat record catalog")]
#[command(version)]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every record
    List,

    /// Get a record by id
    Get {
        /// The record id
        id: String,
    },

    /// Add a record
    Add {
        /// The record id
        id: String,

        /// Title
        title: String,

        /// Artist
        artist: String,

        /// Price
        price: f64,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match run(args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

/// Execute one command; `Ok(false)` means the server answered with an error
async fn run(args: Args) -> Result<bool, reqwest::Error> {
    let client = reqwest::Client::new();
    let base = args.server.trim_end_matches('/');

    let request = match args.command {
        Commands::List => client.get(format!("{}/records", base)),
        Commands::Get { id } => client.get(format!("{}/records/{}", base, id)),
        Commands::Add {
            id,
            title,
            artist,
            price,
        } => client
            .post(format!("{}/records", base))
            .json(&Record::new(id, title, artist, price)),
    };

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        println!("{}", body);
    } else {
        eprintln!("{} {}", status.as_u16(), body);
    }

    Ok(status.is_success())
}
