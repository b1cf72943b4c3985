use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use console_core::repositories::NotificationRepository;
use console_core::services::NotificationStore;

use crate::app::App;
use crate::cli::NotificationCommand;
use crate::commands::unreported;
use crate::render;

pub async fn run(app: &App, command: NotificationCommand) -> anyhow::Result<()> {
    app.require_session().await?;
    let store = app.notifications();

    match command {
        NotificationCommand::List => {
            let snapshot = store
                .refresh()
                .await
                .map_err(|e| unreported("Failed to load notifications", e))?;
            if app.json {
                render::json(&snapshot.items)
            } else {
                render::notifications(&snapshot.items, snapshot.unread);
                Ok(())
            }
        }
        NotificationCommand::Read { id } => {
            store
                .mark_read(&id)
                .await
                .map_err(|e| unreported("Failed to mark notification", e))?;
            Ok(())
        }
        NotificationCommand::ReadAll => {
            store
                .mark_all_read()
                .await
                .map_err(|e| unreported("Failed to mark notifications", e))?;
            println!("All notifications marked as read");
            Ok(())
        }
        NotificationCommand::Watch { interval } => {
            let secs = interval
                .unwrap_or(app.config.notifications.poll_interval_secs)
                .max(1);
            watch(app, store, Duration::from_secs(secs)).await
        }
    }
}

async fn watch<R>(
    app: &App,
    store: Arc<NotificationStore<R>>,
    period: Duration,
) -> anyhow::Result<()>
where
    R: NotificationRepository + 'static,
{
    let poller = Arc::clone(&store).spawn_polling(period);
    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    let mut last_synced = None;
    let mut last_error = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticker.tick() => {
                let snapshot = store.snapshot();

                if snapshot.last_error != last_error {
                    if let Some(error) = &snapshot.last_error {
                        eprintln!("[error] {}", error);
                    }
                    last_error = snapshot.last_error.clone();
                }
                if snapshot.last_synced.is_none() || snapshot.last_synced == last_synced {
                    continue;
                }

                if last_synced.is_none() {
                    render::notifications(&snapshot.items, snapshot.unread);
                } else {
                    for n in snapshot.items.iter().filter(|n| snapshot.fresh.contains(&n.id)) {
                        if app.json {
                            render::json(n)?;
                        } else {
                            println!("* {} {}", n.title, n.message);
                        }
                    }
                }
                last_synced = snapshot.last_synced;
            }
        }
    }

    poller.abort();
    info!("Notification watch stopped");
    Ok(())
}
