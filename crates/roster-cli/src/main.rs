use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use roster_core::RosterError;
use roster_core::config::DashboardConfig;
use roster_core::employee::EmployeeId;
use roster_core::feedback::FeedbackKind;
use roster_core::state::Theme;
use roster_infrastructure::{ConfigService, RosterPaths};

mod commands;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - browse, filter and bookmark the employee roster", long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the visible roster; filter flags are applied and remembered
    List {
        #[arg(long)]
        search: Option<String>,
        /// Department name or "All"
        #[arg(long)]
        department: Option<String>,
        /// Rating 1-5 or "All"
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Dashboard summary
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Department breakdown, rating distribution and top performers
    Analytics {
        #[arg(long)]
        json: bool,
    },
    /// Employee profile
    Show {
        id: EmployeeId,
        #[arg(long)]
        json: bool,
    },
    /// Manage bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Show or set the theme
    Theme { theme: Option<Theme> },
    /// Show or clear the department and rating filters
    Filters {
        #[command(subcommand)]
        action: FilterAction,
    },
    /// Add an employee to this session's roster
    Add(commands::add::AddArgs),
    /// Submit feedback about an employee
    Feedback {
        id: EmployeeId,
        #[arg(long, default_value_t = FeedbackKind::General)]
        kind: FeedbackKind,
        #[arg(long)]
        message: String,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// Bookmarked employees
    List,
    Add {
        #[arg(value_parser = employee_id_parser())]
        id: EmployeeId,
    },
    Remove {
        #[arg(value_parser = employee_id_parser())]
        id: EmployeeId,
    },
    Toggle {
        #[arg(value_parser = employee_id_parser())]
        id: EmployeeId,
    },
}

/// Employee ids are positive; 0 would be stored but never reloaded.
fn employee_id_parser() -> clap::builder::RangedI64ValueParser<EmployeeId> {
    clap::value_parser!(EmployeeId).range(1..)
}

#[derive(Subcommand)]
enum FilterAction {
    Show,
    /// Reset department and rating to "All" (keeps the search term)
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn init_tracing(verbose: bool, config: &DashboardConfig) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .init();
}

async fn run(cli: Cli, config_service: ConfigService, config: DashboardConfig) -> Result<()> {
    let paths = match &config.storage.state_dir {
        Some(dir) => RosterPaths::new().with_storage_dir(dir),
        None => RosterPaths::new(),
    };
    let ctx = commands::AppContext::open(config, paths)?;

    match cli.command {
        Commands::List {
            search,
            department,
            rating,
            json,
        } => commands::list::run(&ctx, search, department, rating, json).await?,
        Commands::Stats { json } => commands::stats::summary(&ctx, json).await?,
        Commands::Analytics { json } => commands::stats::analytics(&ctx, json).await?,
        Commands::Show { id, json } => commands::show::run(&ctx, id, json).await?,
        Commands::Bookmarks { action } => match action {
            BookmarkAction::List => commands::bookmarks::list(&ctx).await?,
            BookmarkAction::Add { id } => commands::bookmarks::add(&ctx, id),
            BookmarkAction::Remove { id } => commands::bookmarks::remove(&ctx, id),
            BookmarkAction::Toggle { id } => commands::bookmarks::toggle(&ctx, id),
        },
        Commands::Theme { theme } => commands::theme::run(&ctx, theme),
        Commands::Filters { action } => match action {
            FilterAction::Show => commands::filters::show(&ctx),
            FilterAction::Clear => commands::filters::clear(&ctx),
        },
        Commands::Add(args) => commands::add::run(&ctx, args).await?,
        Commands::Feedback { id, kind, message } => {
            commands::feedback::run(&ctx, id, kind, message).await?
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init(&config_service)?,
            ConfigAction::Show => commands::config::show(&config_service, ctx.config())?,
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => match ConfigService::new(&RosterPaths::new()) {
            Ok(service) => service,
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        },
    };
    let config = match config_service.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose, &config);

    match run(cli, config_service, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            let is_fetch = e
                .downcast_ref::<RosterError>()
                .is_some_and(RosterError::is_fetch);
            if is_fetch {
                eprintln!(
                    "{}",
                    "The employee list could not be loaded. Check your connection and run the command again."
                        .yellow()
                );
            }
            ExitCode::FAILURE
        }
    }
}
