use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use swaprate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for swaprate::AppCommand {
    fn from(cmd: Commands) -> swaprate::AppCommand {
        match cmd {
            Commands::Prices { json } => swaprate::AppCommand::Prices { json },
            Commands::Convert {
                from,
                to,
                amount,
                json,
            } => swaprate::AppCommand::Convert {
                from,
                to,
                amount,
                json,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List tokens with their latest feed price
    Prices {
        /// Print the price table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount of one token into another
    Convert {
        /// Token to pay with
        from: String,
        /// Token to receive
        to: String,
        /// Amount of the token to pay with
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => swaprate::cli::setup::setup(),
        Some(cmd) => swaprate::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
