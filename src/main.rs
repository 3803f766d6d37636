use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_registry_lib::modules::data_import::UploadedFile;
use client_registry_lib::shared::utils::logger::{init_logger, TimedOperation};
use client_registry_lib::shared::AppConfig;
use client_registry_lib::{log_info, AppServices};

const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Command-line front end for the client registry
#[derive(Parser, Debug)]
#[command(name = "client-registry")]
#[command(about = "Manage the client registry and bulk-import clients from CSV")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import clients from a Latin-1 CSV file (name, email, phone)
    Import {
        file: PathBuf,
    },
    /// List clients with their emails and phones
    List {
        /// Only show clients whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the signed-in owner's most recent import runs
    Runs {
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT, env = "IMPORT_HISTORY_LIMIT")]
        limit: i64,
    },
    /// Delete every client, email and phone
    DeleteAll {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let services = AppServices::from_config(&config).context("Failed to initialize services")?;

    match cli.command {
        Command::Import { file } => import(&services, &file).await,
        Command::List { search } => list(&services, search.as_deref()).await,
        Command::Runs { limit } => runs(&services, limit).await,
        Command::DeleteAll { yes } => delete_all(&services, yes).await,
    }
}

async fn import(services: &AppServices, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "import.csv".to_string());

    let timer = TimedOperation::new("csv_import");
    let summary = services
        .imports
        .import_csv(UploadedFile::csv(file_name, bytes), |percent| {
            log_info!("Import progress: {}%", percent);
        })
        .await?;
    timer.finish_with_info(&summary.to_string());

    println!("{}", summary);
    Ok(())
}

async fn list(services: &AppServices, search: Option<&str>) -> Result<()> {
    let clients = services.clients.list_clients(search).await?;
    for entry in &clients {
        println!(
            "{}\t{}\t{}\t{}",
            entry.client.id,
            entry.client.name,
            entry.email_values().join(", "),
            entry.phone_values().join(", ")
        );
    }
    println!("{} clients", clients.len());
    Ok(())
}

async fn runs(services: &AppServices, limit: i64) -> Result<()> {
    let Some(owner) = services.imports.current_owner().await? else {
        bail!("No active session; set ACCESS_TOKEN to a signed-in user's token");
    };

    for run in services.imports.recent_runs(owner, limit).await? {
        println!(
            "{}\t{}\t{}\t{}/{} imported, {} errors",
            run.created_at.format("%Y-%m-%d %H:%M:%S"),
            run.file_name,
            run.status,
            run.imported_count,
            run.total_records.map_or_else(|| "?".to_string(), |t| t.to_string()),
            run.error_count
        );
    }
    Ok(())
}

async fn delete_all(services: &AppServices, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("Refusing to delete all clients without --yes");
    }
    let removed = services.clients.delete_all_clients().await?;
    println!("Deleted {} clients", removed);
    Ok(())
}
