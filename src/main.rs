use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use playmoney::audit::AuditLogger;
use playmoney::cli::{
    handle_category_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_income_command, handle_split_command, handle_summary_command,
    CategoryCommands, ExpenseCommands, ExportFormat, IncomeCommands,
};
use playmoney::config::{paths::BudgetPaths, settings::Settings};
use playmoney::services::BudgetService;
use playmoney::storage::{needs_initialization, JsonFileStore};

#[derive(Parser)]
#[command(
    name = "playmoney",
    author = "Kaylee Beyene",
    version,
    about = "Monthly budget calculator: see what's left to play with",
    long_about = "playmoney normalizes recurring bills of any cadence to a monthly \
                  figure, groups them into categories, and shows how much of your \
                  monthly income is left over as play money."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new budget with starter categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show income, monthly totals and play money
    Summary,

    /// Show how income splits across categories
    Split,

    /// Export the budget
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    playmoney::logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = JsonFileStore::new(paths.data_dir());
    let audit = AuditLogger::new(paths.audit_log());
    let mut service = BudgetService::load(store);
    if settings.audit_enabled {
        service = service.with_audit(audit.clone());
    }

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing playmoney at: {}", paths.base_dir().display());
            paths.ensure_directories()?;

            let created = if needs_initialization(service.store()) {
                service.seed_defaults()?
            } else {
                0
            };
            settings.save(&paths)?;
            println!("Initialization complete!");

            if created > 0 {
                println!();
                println!("Starter categories have been created:");
                for category in service.categories() {
                    println!("  - {}", category.name);
                }
            }
            println!();
            println!("Run 'playmoney income set <amount>' to enter your monthly income.");
        }
        Some(Commands::Config) => {
            println!("playmoney Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default cadence: {}", settings.default_cadence);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&service, &settings)?;
        }
        Some(Commands::Split) => {
            handle_split_command(&service, &settings)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(service.budget(), format, output, pretty)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
        }
        None => {
            println!("playmoney - monthly budget calculator");
            println!();
            println!("Run 'playmoney --help' for usage information.");
            println!("Run 'playmoney summary' to see your play money.");
        }
    }

    Ok(())
}
