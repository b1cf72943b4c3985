use std::path::Path;

use anyhow::{bail, Context};

use console_core::views::{Gallery, Notice, PendingFile, UploadQueue};

use crate::app::App;
use crate::cli::{AssetCommand, ListArgs};
use crate::commands::{settle, unreported};
use crate::{input, render};

const SCREEN: &str = "/assets";

pub async fn run(app: &App, command: AssetCommand) -> anyhow::Result<()> {
    app.require_access(SCREEN).await?;

    match command {
        AssetCommand::List(args) => list(app, args).await,
        AssetCommand::Get { id, reveal } => {
            let service = app.assets(1, 1);
            let result = service.get(&id).await;
            let asset = settle(service.drain_notices(), result)?;
            if app.json {
                render::json(&asset)
            } else {
                render::asset_detail(&asset, reveal);
                Ok(())
            }
        }
        AssetCommand::Create { asset, showroom } => {
            let form = input::asset_form(&asset, showroom.as_deref())
                .map_err(|e| unreported("Invalid asset", e))?;
            let service = app.assets(1, 1);
            let result = service.create(&form).await;
            let created = settle(service.drain_notices(), result)?;
            println!("{}", created.id);
            Ok(())
        }
        AssetCommand::Update { id, changes } => {
            let service = app.assets(1, 1);
            let result = service
                .edit(&id, |form| input::patch_asset(form, &changes))
                .await;
            settle(service.drain_notices(), result)?;
            Ok(())
        }
        AssetCommand::Delete { id } => {
            let service = app.assets(1, 1);
            let result = service.delete(&id).await;
            settle(service.drain_notices(), result)
        }
        AssetCommand::Files { id } => {
            let service = app.assets(1, 1);
            let result = service.files(&id).await;
            let files = settle(service.drain_notices(), result)?;
            if app.json {
                render::json(&files)
            } else {
                render::files(&files, &Gallery::new(&files));
                Ok(())
            }
        }
        AssetCommand::Upload { id, files } => upload(app, &id, &files).await,
        AssetCommand::DeleteFile { id, file_id } => delete_file(app, &id, &file_id).await,
        AssetCommand::Image { id, file, index, step } => {
            let service = app.assets(1, 1);
            let result = service.files(&id).await;
            let files = settle(service.drain_notices(), result)?;

            let mut gallery = Gallery::new(&files);
            let opened = match &file {
                Some(file_id) => gallery.open_file(file_id),
                None => gallery.open(index),
            };
            if !opened {
                bail!("Asset {} has no such image", id);
            }
            for _ in 0..step.unsigned_abs() {
                if step > 0 {
                    gallery.next();
                } else {
                    gallery.previous();
                }
            }

            if app.json {
                render::json(&gallery.current())
            } else {
                render::image(&gallery);
                Ok(())
            }
        }
    }
}

/// Deletes an attachment and reports which image a viewer open on it
/// would land on.
async fn delete_file(app: &App, id: &str, file_id: &str) -> anyhow::Result<()> {
    let service = app.assets(1, 1);
    let result = service.files(id).await;
    let files = settle(service.drain_notices(), result)?;
    let mut gallery = Gallery::new(&files);
    let was_image = gallery.open_file(file_id);

    let result = service.delete_file(id, file_id).await;
    settle(service.drain_notices(), result)?;

    gallery.remove(file_id);
    if was_image && !app.json {
        match gallery.current() {
            Some(next) => println!("Viewer moves to {} ({})", next.file_name, next.id),
            None => println!("No images left on asset {}", id),
        }
    }
    Ok(())
}

async fn list(app: &App, args: ListArgs) -> anyhow::Result<()> {
    let service = app.assets(args.page, args.per_page);
    let result = service.refresh().await;
    settle(service.drain_notices(), result)?;

    if let Some(query) = &args.query {
        service.search(query);
        service.go_to_page(args.page);
    }
    let page = service.page();
    if app.json {
        render::json(&page.items)
    } else {
        render::assets(&page);
        Ok(())
    }
}

async fn read_file(path: &Path) -> anyhow::Result<PendingFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;
    Ok(PendingFile::new(name, bytes))
}

async fn upload(app: &App, id: &str, paths: &[std::path::PathBuf]) -> anyhow::Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(read_file(path).await?);
    }

    let mut queue = UploadQueue::new(app.config.uploads.max_file_bytes);
    let rejected = queue
        .select(files)
        .map_err(|e| unreported("Cannot select files", e))?;
    let skipped: Vec<Notice> = rejected.iter().map(|e| Notice::from_error("Skipped", e)).collect();
    render::notices(&skipped);

    if queue.pending().is_empty() {
        bail!("Nothing to upload");
    }

    let service = app.assets(1, 1);
    let result = service.upload(id, &mut queue).await;
    let uploaded = settle(service.drain_notices(), result)?;
    if app.json {
        render::json(&uploaded)
    } else {
        render::files(&uploaded, &Gallery::new(&uploaded));
        Ok(())
    }
}
