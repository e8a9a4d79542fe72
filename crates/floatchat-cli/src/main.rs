mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use floatchat_core::Config;

#[derive(Parser)]
#[command(name = "floatchat")]
#[command(about = "Ocean data assistant demo", long_about = None)]
struct Cli {
    /// Override the simulated reply delay (milliseconds)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,
    /// Seed for the mock data generators
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat next to the dashboard
    Chat,
    /// Ask a single question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the monitoring dashboard
    Dashboard {
        /// Time range: 1h, 1d, 7d, 30d or 90d
        #[arg(long)]
        range: Option<String>,
        /// Region: global, atlantic, pacific, indian, arctic or southern
        #[arg(long)]
        region: Option<String>,
    },
    /// List mock float positions from the data explorer
    Explorer {
        /// Number of floats to generate
        #[arg(short, long, default_value_t = 20)]
        count: usize,
        /// Export as CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Browse the dataset catalog
    Datasets {
        /// Search name and description
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category: all, core, biogeochemical, deep, realtime, trajectory, metadata
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(delay_ms) = cli.delay_ms {
        config.reply_delay_ms = delay_ms;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Chat => commands::chat::chat_command(&config).await,
        Commands::Ask { text, json } => {
            commands::ask::ask_command(&config, &text.join(" "), json).await
        }
        Commands::Dashboard { range, region } => {
            commands::dashboard::dashboard_command(&config, range.as_deref(), region.as_deref())
        }
        Commands::Explorer { count, csv } => {
            commands::explorer::explorer_command(&config, count, csv)
        }
        Commands::Datasets { search, category } => {
            commands::datasets::datasets_command(&search, &category)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::handle_config_path(),
            ConfigAction::Show => commands::config::handle_config_show(&config),
        },
    }
}
