use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "earn-scout",
    about = "Best-paying Simple Earn offers across crypto exchanges"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the greeting and available commands
    Start,
    /// Show the top offers by APR
    TopEarn {
        /// Optional asset ticker (e.g. BTC, USDT); case-insensitive
        asset: Option<String>,
        /// Print the ranked offers as JSON instead of the text reply
        #[arg(long)]
        json: bool,
    },
    /// Answer a raw chat command, e.g. "/top_earn btc"
    Handle { text: String },
}
