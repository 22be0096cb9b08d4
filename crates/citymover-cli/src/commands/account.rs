//! Usage: citymover login|signup --username <NAME> --password <PW>

use clap::Args;
use citymover_core::rules::SignupForm;
use citymover_core_types::Sensitive;
use citymover_engine::{messages, Session};

use super::{CliResult, Context};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    /// user, owner or admin
    #[arg(long, default_value = "user")]
    pub role: String,
}

fn print_session(session: &Session) {
    println!(
        "{} (id {}, {}) -> {}",
        session.user.username,
        session.user.id,
        session.user.role,
        session.route.path()
    );
}

pub fn login(ctx: &Context, args: LoginArgs) -> CliResult {
    let session = citymover_engine::login(&ctx.db, &args.username, &Sensitive::new(args.password))?;
    ctx.emit(&session, print_session)
}

pub fn signup(ctx: &Context, args: SignupArgs) -> CliResult {
    let form = SignupForm {
        username: args.username,
        password: Sensitive::new(args.password),
        role: args.role,
    };
    let session = citymover_engine::signup(&ctx.db, form)?;
    ctx.emit(&session, |session| {
        println!("{}", messages::SIGNUP_OK);
        print_session(session);
    })
}
