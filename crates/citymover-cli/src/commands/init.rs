//! Usage: citymover init

use citymover_engine::InitOutcome;

use super::{CliResult, Context};

pub fn execute(ctx: &Context, outcome: &InitOutcome) -> CliResult {
    ctx.emit(outcome, |outcome| match outcome {
        InitOutcome::Ready(report) => {
            println!("✓ Database ready: {}", ctx.db.path().display());
            println!(
                "  cities added: {}, demo accounts added: {}",
                report.cities_inserted, report.demo_users_inserted
            );
        }
        InitOutcome::Fallback { error } => {
            println!("! Initialization failed: {}", error);
            println!("  Empty database file left at {}", ctx.db.path().display());
        }
    })?;

    if outcome.is_ready() {
        Ok(())
    } else {
        Err("database initialization failed".into())
    }
}
