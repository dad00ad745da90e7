use clap::Parser;
use earn_scout::application::top_earn::PROGRESS_NOTICE;
use earn_scout::cli::commands::{Cli, Commands};
use earn_scout::config::logging::init_logging;
use earn_scout::config::settings::Settings;
use earn_scout::domain::values::asset::normalize_asset;
use earn_scout::EarnScout;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let scout = EarnScout::new(&settings);
    info!(exchanges = ?scout.exchanges(), "earn-scout ready");

    if let Err(e) = run_command(&scout, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(scout: &EarnScout, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Start => {
            println!("{}", scout.greeting());
        }
        Commands::TopEarn { asset, json } => {
            if json {
                let asset = match asset {
                    Some(raw) => normalize_asset(&raw)?,
                    None => None,
                };
                let offers = scout.top_offers(asset.as_deref()).await;
                println!("{}", serde_json::to_string_pretty(&offers)?);
            } else {
                eprintln!("{PROGRESS_NOTICE}");
                println!("{}", scout.top_earn_for_input(asset.as_deref()).await);
            }
        }
        Commands::Handle { text } => {
            println!("{}", scout.handle_command(&text).await?);
        }
    }
    Ok(())
}
