//! Terminal output

use serde::Serialize;

use console_core::domain::{
    Asset, AssetFile, Client, DashboardStats, NavGroup, NavItem, Notification, Role, Showroom,
};
use console_core::views::{Gallery, Notice, NoticeLevel, Page};

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn notices(notices: &[Notice]) {
    for notice in notices {
        let tag = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        eprintln!("[{}] {}", tag, notice.message);
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn footer<T>(page: &Page<T>) {
    println!(
        "-- page {}/{} ({} record{})",
        page.page,
        page.total_pages,
        page.total,
        if page.total == 1 { "" } else { "s" }
    );
}

pub fn assets(page: &Page<Asset>) {
    println!("{:<26} {:<32} {:<11} {:>6}", "ID", "NAME", "TYPE", "FIELDS");
    for asset in &page.items {
        println!(
            "{:<26} {:<32} {:<11} {:>6}",
            truncate(&asset.id, 26),
            truncate(&asset.name, 32),
            asset.kind.as_str(),
            asset.fields.len()
        );
    }
    footer(page);
}

pub fn asset_detail(asset: &Asset, reveal: bool) {
    println!("{} ({})", asset.name, asset.id);
    println!("  type:        {}", asset.kind.as_str());
    if let Some(description) = &asset.description {
        println!("  description: {}", description);
    }
    if let Some(showroom_id) = &asset.showroom_id {
        println!("  showroom:    {}", showroom_id);
    }
    if !asset.fields.is_empty() {
        println!("  fields:");
        for field in &asset.fields {
            let value = if reveal { field.value.clone() } else { field.display_value() };
            println!("    {:<20} {:<9} {}", field.key, field.field_type.as_str(), value);
        }
    }
    if !asset.files.is_empty() {
        println!("  files:       {}", asset.files.len());
    }
}

pub fn files(files: &[AssetFile], gallery: &Gallery) {
    println!("{:<26} {:<40} {:>10} {}", "ID", "NAME", "SIZE", "");
    for file in files {
        let size = file.size.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
        let marker = if file.is_image() { "image" } else { "" };
        println!("{:<26} {:<40} {:>10} {}", truncate(&file.id, 26), truncate(&file.file_name, 40), size, marker);
    }
    println!("-- {} file(s), {} image(s)", files.len(), gallery.images().len());
}

pub fn image(gallery: &Gallery) {
    let (Some(file), Some(position)) = (gallery.current(), gallery.position()) else {
        println!("Gallery closed");
        return;
    };
    println!("[{}/{}] {} ({})", position + 1, gallery.images().len(), file.file_name, file.id);
    if let Some(mime) = &file.mime_type {
        println!("  type: {}", mime);
    }
    if let Some(url) = &file.url {
        println!("  url:  {}", url);
    }
}

pub fn showrooms(page: &Page<Showroom>) {
    println!("{:<26} {:<28} {:<9} {:<20} {:<6}", "ID", "NAME", "TYPE", "LOCATION", "ACTIVE");
    for showroom in &page.items {
        println!(
            "{:<26} {:<28} {:<9} {:<20} {:<6}",
            truncate(&showroom.id, 26),
            truncate(&showroom.name, 28),
            showroom.kind.as_str(),
            truncate(showroom.location.as_deref().unwrap_or("-"), 20),
            if showroom.is_active { "yes" } else { "no" }
        );
    }
    footer(page);
}

pub fn showroom_detail(showroom: &Showroom) {
    println!("{} ({})", showroom.name, showroom.id);
    println!("  type:     {}", showroom.kind.as_str());
    println!("  active:   {}", showroom.is_active);
    if let Some(location) = &showroom.location {
        println!("  location: {}", location);
    }
    if let Some(template) = &showroom.template {
        println!("  template: {}", template);
    }
    for size in &showroom.sizes {
        println!(
            "  size:     {} {}x{} {} ({} sq {})",
            size.label,
            size.width,
            size.height,
            size.unit,
            size.area(),
            size.unit
        );
    }
    for meta in &showroom.meta_fields {
        println!("  meta:     {} = {}", meta.key, meta.value);
    }
}

pub fn clients(page: &Page<Client>) {
    println!("{:<26} {:<28} {:<24} {:<6}", "ID", "NAME", "SLUG", "ACTIVE");
    for client in &page.items {
        println!(
            "{:<26} {:<28} {:<24} {:<6}",
            truncate(&client.id, 26),
            truncate(&client.name, 28),
            truncate(&client.slug, 24),
            if client.is_active { "yes" } else { "no" }
        );
    }
    footer(page);
}

pub fn roles(roles: &[Role]) {
    for role in roles {
        println!("{:<14} {}", role.code, role.name);
        if !role.permissions.is_empty() {
            println!("{:<14} {}", "", role.permissions.join(", "));
        }
    }
}

pub fn notifications(items: &[Notification], unread: usize) {
    for n in items {
        let marker = if n.is_read { " " } else { "*" };
        println!("{} {:<26} {}", marker, truncate(&n.id, 26), n.title);
        if !n.message.is_empty() {
            println!("  {:<26} {}", "", n.message);
        }
    }
    println!("-- {} unread", unread);
}

pub fn dashboard(stats: &DashboardStats) {
    println!("Assets:        {}", stats.assets);
    println!("Showrooms:     {}", stats.showrooms);
    println!("Clients:       {}", stats.clients);
    println!("Unread alerts: {}", stats.unread_notifications);
}

fn nav_item(item: &NavItem, depth: usize) {
    println!("{}{:<24} {}", "  ".repeat(depth + 1), item.title, item.path);
    for child in &item.children {
        nav_item(child, depth + 1);
    }
}

pub fn navigation(groups: &[NavGroup]) {
    for group in groups {
        println!("{}", group.name);
        for item in &group.items {
            nav_item(item, 0);
        }
    }
}
