use anyhow::Result;
use clap::Parser;
use log::info;
use variant_snake::game::{GameConfig, Variant};
use variant_snake::logging;
use variant_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "variant_snake")]
#[command(version, about = "Snake in the terminal, classic or extra")]
struct Cli {
    /// Ruleset: "extra" cuts the snake where it bites itself instead of
    /// ending the game; any other value, or none, plays classic snake
    #[arg(allow_hyphen_values = true)]
    variant: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A second argument is a usage error; clap reports it and exits here
    let cli = Cli::parse();
    let variant = Variant::from_arg(cli.variant.as_deref());

    let log_path = logging::init_logger()?;
    info!("starting {:?} game, logging to {}", variant, log_path.display());

    let mut human_mode = HumanMode::new(GameConfig::new(variant));
    human_mode.run().await?;

    Ok(())
}
