use console_core::domain::{CreateClientRequest, UpdateClientRequest};
use console_core::repositories::DashboardRepository;

use crate::app::App;
use crate::cli::ClientCommand;
use crate::commands::{settle, unreported};
use crate::render;

pub async fn dashboard(app: &App) -> anyhow::Result<()> {
    app.require_access("/dashboard").await?;
    let stats = app
        .dashboard()
        .stats()
        .await
        .map_err(|e| unreported("Failed to load dashboard", e))?;

    if app.json {
        render::json(&stats)
    } else {
        render::dashboard(&stats);
        Ok(())
    }
}

pub async fn clients(app: &App, command: ClientCommand) -> anyhow::Result<()> {
    app.require_access("/clients").await?;

    match command {
        ClientCommand::List(args) => {
            let service = app.clients(args.page, args.per_page);
            let result = service.refresh().await;
            settle(service.drain_notices(), result)?;
            if let Some(query) = &args.query {
                service.search(query);
            }
            let page = service.page();
            if app.json {
                render::json(&page.items)
            } else {
                render::clients(&page);
                Ok(())
            }
        }
        ClientCommand::Create { name, slug, email } => {
            let request = CreateClientRequest::new(&name, slug.as_deref(), email.as_deref());
            let service = app.clients(1, 1);
            let result = service.create(request).await;
            let client = settle(service.drain_notices(), result)?;
            println!("{} ({})", client.id, client.slug);
            Ok(())
        }
        ClientCommand::Update { id, name, email, active } => {
            let request = UpdateClientRequest { name, email, is_active: active };
            let service = app.clients(1, 1);
            let result = service.update(&id, request).await;
            settle(service.drain_notices(), result)?;
            Ok(())
        }
        ClientCommand::Delete { id } => {
            let service = app.clients(1, 1);
            let result = service.delete(&id).await;
            settle(service.drain_notices(), result)
        }
    }
}

pub async fn roles(app: &App) -> anyhow::Result<()> {
    app.require_access("/roles").await?;
    let service = app.clients(1, 1);
    let result = service.roles().await;
    let roles = settle(service.drain_notices(), result)?;

    if app.json {
        render::json(&roles)
    } else {
        render::roles(&roles);
        Ok(())
    }
}
