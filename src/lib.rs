pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, TokenNames};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Prices {
        json: bool,
    },
    Convert {
        from: String,
        to: String,
        amount: String,
        json: bool,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Swaprate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let feed = providers::SwitcheoPriceFeed::new(config.switcheo_base_url());
    let names = TokenNames::new(&config.display_names);

    match command {
        AppCommand::Prices { json } => {
            cli::prices::run(&feed, &names, &config.reference_currency, json).await
        }
        AppCommand::Convert {
            from,
            to,
            amount,
            json,
        } => {
            let request = ConversionRequest::new(&from, &to, &amount);
            cli::convert::run(&feed, &names, &request, json).await
        }
    }
}
