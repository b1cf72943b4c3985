use crate::app::App;
use crate::cli::{ListArgs, ShowroomCommand};
use crate::commands::{settle, unreported};
use crate::{input, render};

const SCREEN: &str = "/showrooms";

pub async fn run(app: &App, command: ShowroomCommand) -> anyhow::Result<()> {
    app.require_access(SCREEN).await?;

    match command {
        ShowroomCommand::List(args) => list(app, args).await,
        ShowroomCommand::Get { id } => {
            let service = app.showrooms(1, 1);
            let result = service.get(&id).await;
            let showroom = settle(service.drain_notices(), result)?;
            if app.json {
                render::json(&showroom)
            } else {
                render::showroom_detail(&showroom);
                Ok(())
            }
        }
        ShowroomCommand::Create { showroom } => {
            let form = input::showroom_form(&showroom).map_err(|e| unreported("Invalid showroom", e))?;
            let service = app.showrooms(1, 1);
            let result = service.create(&form).await;
            let created = settle(service.drain_notices(), result)?;
            println!("{}", created.id);
            Ok(())
        }
        ShowroomCommand::Update { id, changes } => {
            let service = app.showrooms(1, 1);
            let result = service
                .edit(&id, |form| input::patch_showroom(form, &changes))
                .await;
            settle(service.drain_notices(), result)?;
            Ok(())
        }
        ShowroomCommand::Delete { id } => {
            let service = app.showrooms(1, 1);
            let result = service.delete(&id).await;
            settle(service.drain_notices(), result)
        }
        ShowroomCommand::Assets { id } => {
            let service = app.showrooms(1, 1);
            let result = service.assets(&id).await;
            let assets = settle(service.drain_notices(), result)?;
            if app.json {
                render::json(&assets)
            } else {
                for asset in &assets {
                    println!("{:<26} {:<32} {}", asset.id, asset.name, asset.kind.as_str());
                }
                println!("-- {} asset(s)", assets.len());
                Ok(())
            }
        }
        ShowroomCommand::AddAsset { id, asset } => {
            let form = input::asset_form(&asset, Some(&id)).map_err(|e| unreported("Invalid asset", e))?;
            let service = app.showrooms(1, 1);
            let result = service.add_asset(&id, &form).await;
            let created = settle(service.drain_notices(), result)?;
            println!("{}", created.id);
            Ok(())
        }
        ShowroomCommand::UpdateAsset { id, asset_id, changes } => {
            let service = app.showrooms(1, 1);
            let result = service
                .edit_asset(&id, &asset_id, |form| input::patch_asset(form, &changes))
                .await;
            settle(service.drain_notices(), result)?;
            Ok(())
        }
        ShowroomCommand::RemoveAsset { id, asset_id } => {
            let service = app.showrooms(1, 1);
            let result = service.remove_asset(&id, &asset_id).await;
            settle(service.drain_notices(), result)
        }
    }
}

async fn list(app: &App, args: ListArgs) -> anyhow::Result<()> {
    let service = app.showrooms(args.page, args.per_page);
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
        render::showrooms(&page);
        Ok(())
    }
}
