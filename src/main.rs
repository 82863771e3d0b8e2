use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ladder_tracker::boards::{self, Leaderboard};
use ladder_tracker::config::AppConfig;
use ladder_tracker::models::{EntityId, LeaderboardEntry, LeaderboardKind, PlacementRecord};
use ladder_tracker::storage::{EntityType, JsonlReader, JsonlWriter, StorageConfig};

#[derive(Parser)]
#[command(name = "ladder-tracker")]
#[command(about = "Local competitive ladder tracker with ranked leaderboards")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a ranked leaderboard
    Board {
        /// Leaderboard type (USER, TEAM, XP-ALL, XP-MODE-<mode>, XP-WEAPON-<id>)
        #[arg(long, default_value = "USER")]
        kind: String,

        /// Max rows to print
        #[arg(long, default_value = "25")]
        limit: usize,
    },

    /// Print a player's peak powers
    Peaks {
        /// Player ID
        player_id: String,
    },

    /// Append records from a JSONL file into the data directory
    Import {
        /// Entity to import (placements, user-entries, team-entries)
        #[arg(long)]
        entity: String,

        /// Path to the JSONL file
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ladder-tracker v{}", env!("CARGO_PKG_VERSION"));

    // Config file is optional; CLI flags override it.
    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", cli.config))?
    } else {
        AppConfig::default()
    };

    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let storage = StorageConfig::new(data_dir);

    match cli.command {
        Commands::Serve { host, port } => {
            let state = ladder_tracker::api::state::AppState {
                storage: Arc::new(storage),
            };
            let app = ladder_tracker::api::build_router(state);
            let addr = format!(
                "{}:{}",
                host.unwrap_or(config.server.host),
                port.unwrap_or(config.server.port)
            );
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Board { kind, limit } => {
            let kind: LeaderboardKind = kind.parse()?;
            let mut board = boards::load(kind, &storage)?;
            let total = board.len();
            board.truncate(limit);

            println!("=== Leaderboard: {} ({} entries) ===\n", kind, total);
            match &board {
                Leaderboard::User(rows) => {
                    for row in rows {
                        println!(
                            "  #{:<4} {:<24} {:>8.1}",
                            row.placement_rank, row.entry.subject.username, row.entry.power
                        );
                    }
                }
                Leaderboard::Team(rows) => {
                    for row in rows {
                        println!(
                            "  #{:<4} {:<24} {:>8.1}  [{}]",
                            row.placement_rank,
                            row.entry.subject.team_name,
                            row.entry.power,
                            row.entry.subject.members.join(", ")
                        );
                    }
                }
                Leaderboard::Xp(rows) => {
                    for row in rows {
                        println!(
                            "  #{:<4} {:<24} {:>8.1}  ({}, weapon {})",
                            row.placement_rank,
                            row.entry.subject.player_name,
                            row.entry.power,
                            row.entry.subject.mode,
                            row.entry.subject.weapon
                        );
                    }
                }
            }
        }
        Commands::Peaks { player_id } => {
            let player_id = EntityId::from(player_id);
            let peaks = boards::player_peaks(&storage, &player_id)?;

            if peaks.is_empty() {
                println!("No placements recorded for player {}", player_id);
            } else {
                println!("=== Peak powers for {} ===\n", player_id);
                for (mode, power) in peaks.iter() {
                    println!("  {}  {:>8.1}", mode, power);
                }
            }
        }
        Commands::Import { entity, path } => {
            let entity: EntityType = entity.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let count = match entity {
                EntityType::Placement => {
                    import::<PlacementRecord>(&storage, entity, &path)?
                }
                EntityType::UserEntry => {
                    import::<LeaderboardEntry<ladder_tracker::models::UserRef>>(
                        &storage, entity, &path,
                    )?
                }
                EntityType::TeamEntry => {
                    import::<LeaderboardEntry<ladder_tracker::models::TeamRef>>(
                        &storage, entity, &path,
                    )?
                }
            };
            println!("Imported {} records into {}", count, entity.filename());
        }
    }

    Ok(())
}

/// Read a JSONL file and append its records to the data directory.
fn import<T>(storage: &StorageConfig, entity: EntityType, path: &str) -> Result<usize>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let reader = JsonlReader::<T>::new(PathBuf::from(path));
    if !reader.exists() {
        anyhow::bail!("No such file: {}", path);
    }
    let records = reader
        .read_all()
        .with_context(|| format!("Failed to read {}", path))?;
    let count = JsonlWriter::for_entity(storage, entity).append_batch(&records)?;
    Ok(count)
}
