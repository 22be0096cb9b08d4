//! City Mover CLI
//!
//! Command-line front end for browsing and managing rental listings

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use citymover_core::errors::ExError;
use citymover_core::logging_facility::{self, Profile};
use citymover_engine::{messages, Database};

mod commands;

use commands::Context;

#[derive(Debug, Parser)]
#[command(name = "citymover")]
#[command(about = "City Mover - find a home in a new city", long_about = None)]
struct Cli {
    /// Database file (defaults to $CITYMOVER_DATA_DIR/city_app.db or ./city_app.db)
    #[arg(long, global = true, env = "CITYMOVER_DB")]
    db: Option<PathBuf>,

    /// Logging profile: dev or prod
    #[arg(long, global = true, value_name = "PROFILE")]
    log: Option<Profile>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the schema and seed data
    Init,
    /// Check credentials and show the landing screen
    Login(commands::account::LoginArgs),
    /// Create an account
    Signup(commands::account::SignupArgs),
    /// List cities
    Cities,
    /// Show the area picker for a city
    Areas(commands::browse::AreasArgs),
    /// Browse listings by city and area
    Browse(commands::browse::BrowseArgs),
    /// List every listing in a city, or one owner's listings
    Listings(commands::browse::ListingsArgs),
    /// Show one listing
    Show(commands::browse::ShowArgs),
    /// Post a new listing
    Post(commands::listing::PostArgs),
    /// Edit one of your listings
    Edit(commands::listing::EditArgs),
    /// Delete one of your listings
    Delete(commands::listing::DeleteArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log.unwrap_or(Profile::Production));

    let ctx = Context {
        db: Database::locate(cli.db.as_deref()),
        json: cli.json,
    };

    // Runs before every command; failures leave an empty file and continue
    let init = ctx.db.initialize();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&ctx, &init),
        Commands::Login(args) => commands::account::login(&ctx, args),
        Commands::Signup(args) => commands::account::signup(&ctx, args),
        Commands::Cities => commands::browse::cities(&ctx),
        Commands::Areas(args) => commands::browse::areas(&ctx, args),
        Commands::Browse(args) => commands::browse::browse(&ctx, args),
        Commands::Listings(args) => commands::browse::listings(&ctx, args),
        Commands::Show(args) => commands::browse::show(&ctx, args),
        Commands::Post(args) => commands::listing::post(&ctx, args),
        Commands::Edit(args) => commands::listing::edit(&ctx, args),
        Commands::Delete(args) => commands::listing::delete(&ctx, args),
    };

    if let Err(e) = result {
        match e.downcast_ref::<ExError>() {
            Some(ex) => eprintln!("Error [{}]: {}", ex.code(), messages::user_message(ex)),
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
