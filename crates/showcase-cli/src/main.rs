use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showcase_core::{Appearance, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "sds-showcase")]
#[command(author, version, about = "Terminal showcase for the Simple Design System")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Force an appearance for this session (not persisted)
    #[arg(short = 't', long = "theme", value_enum)]
    theme: Option<ThemeArg>,

    /// Disable all animations
    #[arg(long = "reduce-motion")]
    reduce_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the showcase
    Run,
    /// List appearances and the stored preference
    Themes,
    /// Print the configuration file path
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Appearance {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Appearance::Light,
            ThemeArg::Dark => Appearance::Dark,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging; stderr so the alternate screen stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if cli.reduce_motion {
        config.motion.enabled = false;
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.theme.map(Into::into)),
        Some(Commands::Themes) => commands::themes::run(&config),
        Some(Commands::Config) => commands::config::run(),
    }
}
