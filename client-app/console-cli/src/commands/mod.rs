//! Command handlers

mod admin;
mod assets;
mod auth;
mod notifications;
mod showrooms;

use anyhow::anyhow;

use console_core::error::DomainError;
use console_core::views::Notice;

use crate::app::App;
use crate::cli::Command;
use crate::render;

pub async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => auth::login(app, &email, &password).await,
        Command::Onboard { company, name, email, password } => {
            auth::onboard(app, company, name, email, password).await
        }
        Command::Logout => auth::logout(app).await,
        Command::Whoami => auth::whoami(app).await,
        Command::Nav { check } => auth::navigation(app, check.as_deref()).await,
        Command::Dashboard => admin::dashboard(app).await,
        Command::Assets(cmd) => assets::run(app, cmd).await,
        Command::Showrooms(cmd) => showrooms::run(app, cmd).await,
        Command::Clients(cmd) => admin::clients(app, cmd).await,
        Command::Roles => admin::roles(app).await,
        Command::Notifications(cmd) => notifications::run(app, cmd).await,
    }
}

/// Prints queued notices, then hands back the service result. A
/// `DomainError` returned from here has already been shown to the user.
fn settle<T>(notices: Vec<Notice>, result: Result<T, DomainError>) -> anyhow::Result<T> {
    render::notices(&notices);
    Ok(result?)
}

/// Wraps an error that has not been shown yet.
fn unreported(context: &str, error: DomainError) -> anyhow::Error {
    anyhow!("{}: {}", context, error.user_message())
}
