//! Sidebar preview
//!
//! Reads a JSON store snapshot and prints the derived sidebar plus the channel
//! actions the user would be offered.
//!
//! ```bash
//! cargo run -p sidebar-preview -- snapshot.json --team-admin --pretty
//! ```
//!
//! Configuration (locale, name display, license and restrictions) is loaded
//! from environment variables or a `.env` file.

mod snapshot;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use sidebar_common::{
    init_tracing, AppConfig, AppError, AppResult, ErrorResponse, LogFormat, TracingConfig,
};
use sidebar_core::{ChannelPolicy, ChannelType};
use sidebar_service::{
    build_display_list, can_create, can_delete, can_manage, DisplayList, SidebarContextBuilder,
};
use tracing::{error, info};

use snapshot::Snapshot;

#[derive(Debug, Parser)]
#[command(name = "sidebar-preview", version, about = "Preview the channel sidebar for a store snapshot")]
struct Cli {
    /// Path to the JSON snapshot
    snapshot: PathBuf,

    /// Evaluate permissions as a team admin
    #[arg(long)]
    team_admin: bool,

    /// Evaluate permissions as a system admin
    #[arg(long)]
    system_admin: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Write logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Serialize)]
struct Preview {
    display_list: DisplayList,
    permissions: PermissionReport,
}

#[derive(Debug, Serialize)]
struct PermissionReport {
    can_create_public: bool,
    can_create_private: bool,
    channels: Vec<ChannelPermissions>,
}

#[derive(Debug, Serialize)]
struct ChannelPermissions {
    name: String,
    can_manage: bool,
    can_delete: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut tracing_config = if cli.verbose {
        TracingConfig::verbose()
    } else {
        TracingConfig::quiet()
    };
    if cli.json_logs {
        tracing_config = tracing_config.with_format(LogFormat::Json);
    }
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(&cli) {
        error!(error = %e, code = e.error_code(), "Preview failed");
        if let Ok(body) = serde_json::to_string(&ErrorResponse::from(&e)) {
            eprintln!("{body}");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    info!(env = ?config.app.env, licensed = config.policy.licensed, "Configuration loaded");

    let snapshot = Arc::new(Snapshot::load(&cli.snapshot)?);

    let mut builder = SidebarContextBuilder::from_config(&config.sidebar)
        .identity(snapshot.clone())
        .preferences(snapshot.clone())
        .teams(snapshot.clone());
    if let Some(locale) = snapshot.locale.clone() {
        builder = builder.locale(Arc::new(locale));
    }
    let ctx = builder.build().map_err(AppError::internal)?;

    let preview = Preview {
        display_list: build_display_list(&ctx, &snapshot.channels),
        permissions: permission_report(&config.policy, &snapshot, cli),
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&preview)?
    } else {
        serde_json::to_string(&preview)?
    };
    println!("{output}");

    Ok(())
}

fn permission_report(policy: &ChannelPolicy, snapshot: &Snapshot, cli: &Cli) -> PermissionReport {
    let (team_admin, system_admin) = (cli.team_admin, cli.system_admin);
    PermissionReport {
        can_create_public: can_create(policy, &ChannelType::Open, team_admin, system_admin),
        can_create_private: can_create(policy, &ChannelType::Private, team_admin, system_admin),
        channels: snapshot
            .channels
            .iter()
            .map(|channel| ChannelPermissions {
                name: channel.name.clone(),
                can_manage: can_manage(policy, channel, team_admin, system_admin),
                can_delete: can_delete(policy, channel, team_admin, system_admin),
            })
            .collect(),
    }
}
