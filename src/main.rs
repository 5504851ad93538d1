use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use newsprobe::config::Config;
use newsprobe::inference::Predictor;

/// newsprobe: classify news text as FAKE or REAL.
///
/// Embeds the text with a pretrained model and runs a pretrained
/// logistic regression over the embedding.
#[derive(Parser)]
#[command(name = "newsprobe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the prediction page
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides NEWSPROBE_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides NEWSPROBE_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Classify a single piece of text ("-" reads stdin)
    Predict {
        /// The news text to classify
        text: String,
    },

    /// Download the ONNX sentence embedding model (~90 MB)
    DownloadModel,

    /// Show configured model artifacts and the classifier shape
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsprobe=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            info!("Loading models...");
            let predictor = Predictor::from_config(&config)?;
            newsprobe::web::run_server(config, predictor).await?;
        }

        Commands::Predict { text } => {
            let config = Config::load()?;
            let text = if text == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                buf
            } else {
                text
            };

            let predictor = Predictor::from_config(&config)?;
            let verdict = predictor.predict(&text).await?;
            newsprobe::output::terminal::display_verdict(&text, &verdict);
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            let model_dir = &config.model_dir;

            println!("Downloading ONNX embedding model...");
            println!("  Destination: {}", model_dir.display());

            newsprobe::embedding::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("You can now run `newsprobe serve` or `newsprobe predict \"...\"`.");
        }

        Commands::Status => {
            let config = Config::load()?;
            newsprobe::status::show(&config)?;
        }
    }

    Ok(())
}
