use console_core::domain::{AuthContext, OnboardRequest};
use tracing::info;

use crate::app::App;
use crate::commands::unreported;
use crate::render;

pub async fn login(app: &App, email: &str, password: &str) -> anyhow::Result<()> {
    let session = app
        .auth()
        .login(email, password)
        .await
        .map_err(|e| unreported("Sign-in failed", e))?;
    println!("Signed in as {}", session.user.email);
    Ok(())
}

pub async fn onboard(
    app: &App,
    company_name: String,
    name: String,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let request = OnboardRequest { company_name, name, email, password };
    let session = app
        .auth()
        .onboard(request)
        .await
        .map_err(|e| unreported("Onboarding failed", e))?;
    println!("Client created. Signed in as {}", session.user.email);
    Ok(())
}

pub async fn logout(app: &App) -> anyhow::Result<()> {
    app.auth()
        .logout()
        .await
        .map_err(|e| unreported("Sign-out failed", e))?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(app: &App) -> anyhow::Result<()> {
    let session = app.require_session().await?;
    if app.json {
        return render::json(&session.user);
    }

    let ctx = session.auth_context();
    let user = &session.user;
    println!("{} <{}>", if user.name.is_empty() { &user.id } else { &user.name }, user.email);
    if let Some(role) = &user.role {
        println!("  role:        {}", role.code);
    }
    if let Some(client_id) = &user.client_id {
        println!("  client:      {}", client_id);
    }
    let permissions: Vec<&str> = ctx.permission_codes.iter().map(String::as_str).collect();
    println!("  permissions: {}", if permissions.is_empty() { "-".to_string() } else { permissions.join(", ") });
    println!("  signed in:   {}", session.created_at.to_rfc3339());
    Ok(())
}

pub async fn navigation(app: &App, check: Option<&str>) -> anyhow::Result<()> {
    let session = app.session().await?;
    let ctx = session
        .as_ref()
        .map(|s| s.auth_context())
        .unwrap_or_else(AuthContext::anonymous);

    if let Some(path) = check {
        let allowed = app.navigation().can_access(&ctx, path);
        info!(path, allowed, "Navigation access check");
        println!("{} {}", path, if allowed { "allowed" } else { "denied" });
        return Ok(());
    }

    let groups = app.navigation().visible_for(&ctx);
    if app.json {
        render::json(&groups)
    } else {
        render::navigation(&groups);
        Ok(())
    }
}
