use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "contacts-cli")]
#[command(about = "Command-line client for the address book service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8282")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every person in the address book
    List,
    /// Show one person
    Get { id: u64 },
    /// Add a person
    Create { name: String },
    /// Replace the name of an existing person
    Update { id: u64, name: String },
    /// Remove a person
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{}/contacts", base)).send().await?,
        Commands::Get { id } => {
            client
                .get(format!("{}/contacts/person/{}", base, id))
                .send()
                .await?
        }
        Commands::Create { name } => {
            client
                .post(format!("{}/contacts", base))
                .json(&json!({ "name": name }))
                .send()
                .await?
        }
        Commands::Update { id, name } => {
            client
                .put(format!("{}/contacts/person/{}", base, id))
                .json(&json!({ "name": name }))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(format!("{}/contacts/person/{}", base, id))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: address book returned status {}", status);
        std::process::exit(1);
    }

    if let Some(location) = res.headers().get(reqwest::header::LOCATION) {
        println!("Location: {}", location.to_str()?);
    }

    let text = res.text().await?;
    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
