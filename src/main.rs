use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally_cli::cli::{
    handle_eval_command, handle_report_command, handle_tip_command, run_session, EvalArgs,
    ReportArgs, Session, TipArgs,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};

/// Environment variable holding the tracing filter, e.g. `TALLY_LOG=debug`
const LOG_ENV: &str = "TALLY_LOG";

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal budget tracker and tip calculator",
    long_about = "Tally tracks income and categorized expenses for a single budget \
                  session and splits bills with tip. Amounts accept simple arithmetic \
                  such as \"40*52/12\" or \"(1200+300)/12\"."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an arithmetic amount expression
    #[command(alias = "calc")]
    Eval(EvalArgs),

    /// Calculate a tip and split the bill
    Tip(TipArgs),

    /// Start an interactive budget session
    #[command(alias = "budget")]
    Session,

    /// Show tables and summary for a JSON export
    Report(ReportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Eval(args)) => {
            handle_eval_command(&settings, args)?;
        }
        Some(Commands::Tip(args)) => {
            handle_tip_command(&settings, args)?;
        }
        Some(Commands::Session) => {
            let interactive = io::stdin().is_terminal();
            let mut session = Session::new(settings, &paths);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut session, stdin.lock(), &mut stdout, interactive)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Tally at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Default categories:");
            for name in &settings.default_categories {
                println!("  - {}", name);
            }
            println!();
            println!("Run 'tally session' to start budgeting.");
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Default tip:         {}%", settings.default_tip_percent);
            println!(
                "  Tip presets:         {}",
                settings
                    .tip_presets
                    .iter()
                    .map(|p| format!("{}%", p))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("  Max tip (warning):   {}%", settings.max_tip_percent);
            println!("  Export format:       {}", settings.export_format.extension());
            println!(
                "  Default categories:  {}",
                settings.default_categories.join(", ")
            );
        }
        None => {
            println!("Tally - terminal budget tracker and tip calculator");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally session' to start an interactive budget.");
        }
    }

    Ok(())
}
