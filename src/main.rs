use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use urgelog::application::{init::init, journal, ConfigService};
use urgelog::cli::{format_entry, format_entry_list, Cli, Commands};
use urgelog::domain::Locale;
use urgelog::error::UrgelogError;
use urgelog::infrastructure::config::resolve_home;
use urgelog::infrastructure::storage::is_primary_available;
use urgelog::infrastructure::PrimaryStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr. `URGELOG_LOG` takes the usual filter syntax; without
/// it only warnings are shown, or debug output with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "urgelog=debug" } else { "urgelog=warn" };
    let filter = EnvFilter::try_from_env("URGELOG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), UrgelogError> {
    let home = resolve_home(cli.home)?;

    match cli.command {
        Commands::Init { locale, sync_dir } => {
            let locale = Locale::from_str(&locale).map_err(UrgelogError::Config)?;
            let config = init(&home, locale, sync_dir)?;

            println!("Initialized urgelog journal at {}", home.display());
            println!("Locale: {}", config.locale);
            if let Some(dir) = &config.sync_dir {
                println!("Synced folder: {}", dir.display());
            }
            Ok(())
        }
        Commands::Add { fields } => {
            let repo = journal::open(&home)?;
            let entry = repo.create_entry(&fields.into_draft()).await?;
            println!("Saved {} {}  ({})", entry.emoji, entry.title, entry.id);
            Ok(())
        }
        Commands::List { limit, json } => {
            let repo = journal::open(&home)?;
            let mut entries = repo.list_entries().await;
            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", format_entry_list(&entries));
                if entries.is_empty() {
                    println!();
                }
            }
            Ok(())
        }
        Commands::Show { id, json } => {
            let repo = journal::open(&home)?;
            let entry = repo
                .get_entry(&id)
                .await
                .ok_or_else(|| UrgelogError::EntryNotFound(id.clone()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                print!("{}", format_entry(&entry));
            }
            Ok(())
        }
        Commands::Edit { id, fields } => {
            let patch = fields.into_patch();
            if patch.is_empty() {
                return Err(UrgelogError::InvalidInput(
                    "Nothing to change. Pass at least one field, e.g. --thoughts".to_string(),
                ));
            }

            let repo = journal::open(&home)?;
            match repo.update_entry(&id, &patch).await? {
                Some(entry) => {
                    println!("Updated {} {}  ({})", entry.emoji, entry.title, entry.id);
                    Ok(())
                }
                None => Err(UrgelogError::EntryNotFound(id)),
            }
        }
        Commands::Delete { id } => {
            let repo = journal::open(&home)?;
            if repo.delete_entry(&id).await? {
                println!("Deleted {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }
        Commands::Backend => {
            let repo = journal::open(&home)?;
            let primary = repo.backend().primary();

            println!("active = {}", repo.active_backend());
            println!(
                "primary_available = {}",
                is_primary_available(primary)
            );
            println!(
                "host_version = {}",
                primary.host_version().unwrap_or_else(|| "none".to_string())
            );
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(home);

            if list {
                let config = service.list()?;
                println!("locale = {}", config.locale);
                println!(
                    "sync_dir = {}",
                    config
                        .sync_dir
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_default()
                );
                println!("max_value_len = {}", config.max_value_len);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: urgelog config [--list | <key> [<value>]]");
                println!("Valid keys: locale, sync_dir, max_value_len");
                Ok(())
            }
        }
    }
}
