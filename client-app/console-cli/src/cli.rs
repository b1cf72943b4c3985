use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "showroom-console",
    version,
    about = "Showroom Console - asset, showroom and client administration"
)]
pub struct Cli {
    /// Print records as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session locally
    Login {
        email: String,
        #[arg(long, env = "CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register a new client together with its owner account
    Onboard {
        #[arg(long)]
        company: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the sidebar entries visible to the current user
    Nav {
        /// Only report whether this path is reachable
        #[arg(long)]
        check: Option<String>,
    },
    /// Dashboard counters
    Dashboard,
    #[command(subcommand)]
    Assets(AssetCommand),
    #[command(subcommand)]
    Showrooms(ShowroomCommand),
    #[command(subcommand)]
    Clients(ClientCommand),
    /// List roles and their permissions
    Roles,
    #[command(subcommand)]
    Notifications(NotificationCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Case-insensitive filter
    #[arg(long, short)]
    pub query: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = 20)]
    pub per_page: u32,
}

/// Asset attributes shared by create and update
#[derive(Args, Debug, Clone)]
pub struct AssetArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// credential, text or file
    #[arg(long, default_value = "credential")]
    pub kind: String,
    /// Field as `key=value` or `key:type=value` (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

/// Asset members to change. Anything not given keeps its stored value.
#[derive(Args, Debug, Clone, Default)]
pub struct AssetPatchArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Pass an empty string to clear
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub kind: Option<String>,
    /// Set a field as `key=value` or `key:type=value`; an existing key is
    /// updated in place (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
    /// Remove the field with this key (repeatable)
    #[arg(long = "drop-field")]
    pub drop_fields: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum AssetCommand {
    List(ListArgs),
    Get {
        id: String,
        /// Show secret field values
        #[arg(long)]
        reveal: bool,
    },
    Create {
        #[command(flatten)]
        asset: AssetArgs,
        #[arg(long)]
        showroom: Option<String>,
    },
    Update {
        id: String,
        #[command(flatten)]
        changes: AssetPatchArgs,
    },
    Delete {
        id: String,
    },
    /// List attachments
    Files {
        id: String,
    },
    /// Attach local files
    Upload {
        id: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    DeleteFile {
        id: String,
        file_id: String,
    },
    /// Show one image attachment and where it sits among the others
    Image {
        id: String,
        /// Open on this attachment id instead of an index
        #[arg(long, conflicts_with = "index")]
        file: Option<String>,
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Move forward (or backward when negative), wrapping around
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i32,
    },
}

/// Showroom attributes shared by create and update
#[derive(Args, Debug, Clone)]
pub struct ShowroomArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub location: Option<String>,
    /// physical or virtual
    #[arg(long, default_value = "physical")]
    pub kind: String,
    #[arg(long)]
    pub template: Option<String>,
    /// Size as `label=WIDTHxHEIGHT[:unit]` (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,
    /// Meta field as `key=value` (repeatable)
    #[arg(long = "meta")]
    pub meta: Vec<String>,
}

/// Showroom members to change. Anything not given keeps its stored value.
#[derive(Args, Debug, Clone, Default)]
pub struct ShowroomPatchArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Pass an empty string to clear
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub kind: Option<String>,
    /// Pass an empty string to clear
    #[arg(long)]
    pub template: Option<String>,
    /// Set a size as `label=WIDTHxHEIGHT[:unit]`; an existing label is
    /// updated in place (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,
    /// Set a meta field as `key=value` (repeatable)
    #[arg(long = "meta")]
    pub meta: Vec<String>,
    /// Remove the size with this label (repeatable)
    #[arg(long = "drop-size")]
    pub drop_sizes: Vec<String>,
    /// Remove the meta field with this key (repeatable)
    #[arg(long = "drop-meta")]
    pub drop_meta: Vec<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum ShowroomCommand {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        #[command(flatten)]
        showroom: ShowroomArgs,
    },
    Update {
        id: String,
        #[command(flatten)]
        changes: ShowroomPatchArgs,
    },
    Delete {
        id: String,
    },
    /// Assets placed in a showroom
    Assets {
        id: String,
    },
    AddAsset {
        id: String,
        #[command(flatten)]
        asset: AssetArgs,
    },
    UpdateAsset {
        id: String,
        asset_id: String,
        #[command(flatten)]
        changes: AssetPatchArgs,
    },
    RemoveAsset {
        id: String,
        asset_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    List(ListArgs),
    Create {
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotificationCommand {
    List,
    Read {
        id: String,
    },
    ReadAll,
    /// Poll and print notifications as they arrive (Ctrl-C to stop)
    Watch {
        /// Poll interval in seconds (defaults to notifications.poll_interval_secs)
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeatable_fields() {
        let cli = Cli::parse_from([
            "showroom-console",
            "assets",
            "create",
            "--name",
            "Router",
            "-f",
            "ssid=guest",
            "-f",
            "pass:password=hunter2",
        ]);
        match cli.command {
            Command::Assets(AssetCommand::Create { asset, showroom }) => {
                assert_eq!(asset.fields.len(), 2);
                assert_eq!(asset.kind, "credential");
                assert!(showroom.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_image_step_accepts_negative_values() {
        let cli = Cli::parse_from(["showroom-console", "assets", "image", "a1", "--file", "f2", "--step", "-1"]);
        match cli.command {
            Command::Assets(AssetCommand::Image { file, step, .. }) => {
                assert_eq!(file.as_deref(), Some("f2"));
                assert_eq!(step, -1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_update_flags_are_optional() {
        let cli = Cli::parse_from(["showroom-console", "assets", "update", "a1", "--name", "Renamed"]);
        match cli.command {
            Command::Assets(AssetCommand::Update { id, changes }) => {
                assert_eq!(id, "a1");
                assert_eq!(changes.name.as_deref(), Some("Renamed"));
                assert!(changes.kind.is_none());
                assert!(changes.fields.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["showroom-console", "showrooms", "update", "s1", "--active", "false"]);
        match cli.command {
            Command::Showrooms(ShowroomCommand::Update { changes, .. }) => {
                assert_eq!(changes.active, Some(false));
                assert!(changes.name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
