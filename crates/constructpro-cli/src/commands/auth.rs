//! Session commands
//!
//! Usage: constructpro auth <login|logout|status>

use clap::{Args, Subcommand};

use super::{CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in and persist the session
    Login(LoginArgs),
    /// Clear the persisted session
    Logout,
    /// Show the current session
    Status,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Admin email address
    #[arg(long)]
    pub email: String,

    /// Password (presence check only; not stored)
    #[arg(long)]
    pub password: String,
}

/// Execute auth command
pub fn execute(args: AuthArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;

    match args.command {
        AuthCommand::Login(login_args) => {
            let session =
                constructpro_store::session::login(&conn, &login_args.email, &login_args.password)?;
            println!("Logged in as {}", session.email);
        }
        AuthCommand::Logout => {
            if constructpro_store::session::logout(&conn)? {
                println!("Logged out");
            } else {
                println!("Not logged in");
            }
        }
        AuthCommand::Status => match constructpro_store::session::status(&conn) {
            Some(session) => println!(
                "Logged in as {} since {}",
                session.email,
                session.logged_in_at.format("%Y-%m-%d %H:%M")
            ),
            None => println!("Not logged in"),
        },
    }

    Ok(())
}
