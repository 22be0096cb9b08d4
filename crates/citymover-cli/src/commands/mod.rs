//! Subcommand implementations

use clap::Args;
use citymover_core::User;
use citymover_core_types::Sensitive;
use citymover_engine::{login, Database};
use serde::Serialize;

pub mod account;
pub mod browse;
pub mod init;
pub mod listing;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Shared state for one invocation
pub struct Context {
    pub db: Database,
    pub json: bool,
}

impl Context {
    /// Print `value` as JSON, or run `human` for text output
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> CliResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

/// Owner credentials for write commands
#[derive(Debug, Args)]
pub struct Credentials {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

impl Credentials {
    pub fn authenticate(self, db: &Database) -> Result<User, Box<dyn std::error::Error>> {
        let session = login(db, &self.username, &Sensitive::new(self.password))?;
        Ok(session.user)
    }
}
