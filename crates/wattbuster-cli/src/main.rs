use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "wattbuster-cli", version, about = "WattBuster CLI")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the activity catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Record today's activities
    Track(commands::track::TrackArgs),
    /// Show a gauge for the current daily energy
    Visualize(commands::visualize::VisualizeArgs),
    /// Analytics dashboard over a file of daily entries
    Analyze(commands::analyze::AnalyzeArgs),
    /// Color theme preference
    Theme {
        #[command(subcommand)]
        action: Option<commands::theme::ThemeAction>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Track(args) => commands::track::run(args),
        Commands::Visualize(args) => commands::visualize::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
