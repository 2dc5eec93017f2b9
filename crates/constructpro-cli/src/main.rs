//! ConstructPro CLI
//!
//! Command-line front end for the admin panels

use clap::{Parser, Subcommand};
use constructpro_core::logging::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "constructpro")]
#[command(about = "ConstructPro - Admin panel management", long_about = None)]
struct Cli {
    /// Data directory holding the panel database
    /// (default: $CONSTRUCTPRO_DATA_DIR, then .constructpro/)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit JSON logs instead of human-readable output
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a panel page from its query string and render it
    Page(commands::page::PageArgs),
    /// Banner panel operations
    Banner(commands::banner::BannerArgs),
    /// Career panel operations
    Career(commands::career::CareerArgs),
    /// Contact panel operations
    Contact(commands::contact::ContactArgs),
    /// Project panel operations
    Project(commands::project::ProjectArgs),
    /// Reset collections to their seed datasets
    Seed(commands::seed::SeedArgs),
    /// Session operations
    Auth(commands::auth::AuthArgs),
}

fn main() {
    let cli = Cli::parse();

    logging::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let ctx = commands::Ctx::new(cli.data_dir);

    let result = match cli.command {
        Commands::Page(args) => commands::page::execute(args, &ctx),
        Commands::Banner(args) => commands::banner::execute(args, &ctx),
        Commands::Career(args) => commands::career::execute(args, &ctx),
        Commands::Contact(args) => commands::contact::execute(args, &ctx),
        Commands::Project(args) => commands::project::execute(args, &ctx),
        Commands::Seed(args) => commands::seed::execute(args, &ctx),
        Commands::Auth(args) => commands::auth::execute(args, &ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
