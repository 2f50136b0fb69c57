//! DishMenu CLI
//!
//! Command-line interface for the dish menu database

use clap::{Parser, Subcommand};
use dishmenu_core::logging_facility::{self, Profile};

mod commands;

use commands::ConnectionArgs;

#[derive(Debug, Parser)]
#[command(name = "dishmenu")]
#[command(about = "DishMenu - persist and query menu dishes", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full walkthrough (default)
    Demo(commands::demo::DemoArgs),
    /// Drop and recreate the schema, erasing all dishes
    Init,
    /// Check that the database is reachable
    Check,
    /// Add one dish
    Add(commands::dishes::AddArgs),
    /// Add dishes from a JSON file in one transaction
    Import(commands::dishes::ImportArgs),
    /// Show dishes whose name contains a text fragment
    Search(commands::dishes::SearchArgs),
    /// Show one dish by id
    Get(commands::dishes::GetArgs),
    /// Show the most recently added dish
    Latest,
    /// Show all dishes
    List,
    /// Show how many dishes are stored
    Count,
}

fn init_logging(verbose: u8, log_json: bool) {
    let profile = if log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    match verbose {
        0 => logging_facility::init(profile),
        1 => logging_facility::init_with_filter(profile, "dishmenu=debug"),
        _ => logging_facility::init_with_filter(profile, "dishmenu=trace"),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let command = cli
        .command
        .unwrap_or(Commands::Demo(commands::demo::DemoArgs::default()));

    let result = match command {
        Commands::Demo(args) => commands::demo::execute(&cli.connection, args),
        Commands::Init => commands::schema::execute_init(&cli.connection),
        Commands::Check => commands::schema::execute_check(&cli.connection),
        Commands::Add(args) => commands::dishes::execute_add(&cli.connection, args),
        Commands::Import(args) => commands::dishes::execute_import(&cli.connection, args),
        Commands::Search(args) => commands::dishes::execute_search(&cli.connection, args),
        Commands::Get(args) => commands::dishes::execute_get(&cli.connection, args),
        Commands::Latest => commands::dishes::execute_latest(&cli.connection),
        Commands::List => commands::dishes::execute_list(&cli.connection),
        Commands::Count => commands::dishes::execute_count(&cli.connection),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
