mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::{read_json, ClassifierKind, Engine, TierArg};
use config::{RegkompassConfig, DEFAULT_CONFIG_PATH};
use regkompass_compliance::OrganizationProfile;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regkompass", about = "Regkompass: multi-framework compliance assessment")]
struct Cli {
    /// Path to config file (defaults to regkompass.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect registered frameworks
    Frameworks {
        #[command(subcommand)]
        action: FrameworkAction,
    },
    /// Rank every framework by relevance for an organisation profile
    Relevance {
        /// JSON file with the organisation profile
        #[arg(long)]
        profile: PathBuf,
    },
    /// Run a statutory threshold classifier
    Classify {
        #[arg(value_enum)]
        classifier: ClassifierKind,
        /// JSON file with the classifier's facts
        #[arg(long)]
        facts: PathBuf,
    },
    /// Score answers for one framework
    Score {
        framework: String,
        /// JSON file with an array of answers
        #[arg(long)]
        answers: PathBuf,
        /// Treat the answers as yes/partial/no quick-check answers
        #[arg(long)]
        quick_check: bool,
        #[arg(long, value_enum, default_value_t = TierArg::Full)]
        tier: TierArg,
    },
    /// Show the overlaps of one framework, highest first
    Overlaps { framework: String },
    /// Show the overlap edges among the given frameworks
    Synergies {
        #[arg(required = true)]
        frameworks: Vec<String>,
    },
    /// Summary, combined cost estimate and roadmap across frameworks
    Plan {
        /// Directory holding one `<framework>.json` answers file per framework
        #[arg(long)]
        answers_dir: PathBuf,
        #[arg(required = true)]
        frameworks: Vec<String>,
    },
}

#[derive(Subcommand)]
enum FrameworkAction {
    /// List registered frameworks
    List,
    /// Print the full config of one framework
    Show { framework: String },
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RegkompassConfig::load(path).await?,
        None => RegkompassConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH)).await?,
    };
    init_tracing(config.logging.json);
    debug!(?config, "Config loaded");

    let engine = Engine::builtin()?;

    let output = match cli.command {
        Commands::Frameworks { action } => match action {
            FrameworkAction::List => engine.list_frameworks(),
            FrameworkAction::Show { framework } => engine.show_framework(&framework)?,
        },
        Commands::Relevance { profile } => {
            let profile: OrganizationProfile = read_json(&profile).await?;
            engine.relevance(&profile)?
        }
        Commands::Classify { classifier, facts } => {
            let facts: Value = read_json(&facts).await?;
            engine.classify(classifier, facts)?
        }
        Commands::Score {
            framework,
            answers,
            quick_check,
            tier,
        } => {
            let answers: Value = read_json(&answers).await?;
            engine.score(&framework, answers, quick_check, tier)?
        }
        Commands::Overlaps { framework } => engine.overlaps(&framework)?,
        Commands::Synergies { frameworks } => engine.synergies(&frameworks)?,
        Commands::Plan {
            answers_dir,
            frameworks,
        } => {
            engine
                .plan(&answers_dir, &frameworks, &config.planning_settings())
                .await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
