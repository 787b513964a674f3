use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recommender::{RoomRecommender, ScoredRoom, UserPreferences, HISTORY_WINDOW};
use rooms::{Room, RoomCatalog, RoomId};
use std::path::PathBuf;

/// RoomRecs - Study Room Recommendation Engine
#[derive(Parser)]
#[command(name = "room-recs")]
#[command(about = "Study room recommendations from ranked preferences and visit history", long_about = None)]
struct Cli {
    /// Path to the room catalog JSON file
    #[arg(short, long, default_value = "data/rooms.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the free rooms in the catalog against a user's preferences
    Recommend {
        /// Building the user wants to study in
        #[arg(long)]
        building: String,

        /// Comma-separated feature names, most important first
        #[arg(long, default_value = "windows,outlets,tableType,classType,printer")]
        order: String,

        /// Comma-separated preference values, in the fixed field order
        /// outlets,windows,classType,printer,tableType
        #[arg(long, default_value = "true,false,Lecture,true,SmallDesk")]
        preferences: String,

        /// Comma-separated ids of the user's last 10 visited rooms
        #[arg(long)]
        history: String,

        /// Variety dial: 0 keeps the ranking deterministic, higher
        /// values add exploration noise
        #[arg(long, default_value = "0")]
        variety: f64,

        /// Seed the jitter RNG for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of recommendations to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// List all rooms in the catalog
    List,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = RoomCatalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load room catalog from {}", cli.catalog.display()))?;
    println!(
        "{} Loaded {} rooms from {}",
        "✓".green(),
        catalog.len(),
        cli.catalog.display()
    );

    match cli.command {
        Commands::Recommend {
            building,
            order,
            preferences,
            history,
            variety,
            seed,
            limit,
        } => handle_recommend(&catalog, building, order, preferences, history, variety, seed, limit),
        Commands::List => handle_list(&catalog),
    }
}

/// Handle the 'recommend' command
#[allow(clippy::too_many_arguments)]
fn handle_recommend(
    catalog: &RoomCatalog,
    building: String,
    order: String,
    preferences: String,
    history: String,
    variety: f64,
    seed: Option<u64>,
    limit: usize,
) -> Result<()> {
    let order_tokens: Vec<&str> = order.split(',').map(str::trim).collect();
    let preference_values: Vec<&str> = preferences.split(',').map(str::trim).collect();
    let prefs = UserPreferences::parse(&order_tokens, &preference_values, building)
        .context("Failed to parse preferences")?;

    let history_rooms = resolve_history(catalog, &history)?;
    let candidates: Vec<Room> = catalog.rooms().to_vec();

    let recommender = RoomRecommender::new();
    let ranked = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            recommender.recommend_with_rng(candidates, &prefs, &history_rooms, variety, &mut rng)?
        }
        None => recommender.recommend(candidates, &prefs, &history_rooms, variety)?,
    };

    print_recommendations(&ranked, limit);
    Ok(())
}

/// Resolve comma-separated history ids against the catalog
fn resolve_history(catalog: &RoomCatalog, history: &str) -> Result<Vec<Room>> {
    let ids: Vec<RoomId> = history
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse()
                .with_context(|| format!("Invalid room id in history: {token}"))
        })
        .collect::<Result<_>>()?;

    if ids.len() != HISTORY_WINDOW {
        return Err(anyhow!(
            "History must list exactly {} room ids, found {}",
            HISTORY_WINDOW,
            ids.len()
        ));
    }

    ids.into_iter()
        .map(|id| {
            catalog
                .get_room(id)
                .cloned()
                .ok_or_else(|| anyhow!("Room {} not found in catalog", id))
        })
        .collect()
}

/// Handle the 'list' command
fn handle_list(catalog: &RoomCatalog) -> Result<()> {
    for room in catalog.rooms() {
        println!(
            "{} {} — {} / {} / outlets: {} / windows: {} / printer: {}",
            "•".green(),
            format!("Room {}", room.id).bold(),
            room.building,
            room.class_type,
            room.outlets,
            room.windows,
            room.printer
        );
    }
    Ok(())
}

/// Print the ranked recommendations
fn print_recommendations(ranked: &[ScoredRoom], limit: usize) {
    if ranked.is_empty() {
        println!("{}", "No candidate rooms to rank".yellow());
        return;
    }

    println!("\n{}", "Recommended rooms:".bold().blue());
    for (idx, scored) in ranked.iter().take(limit).enumerate() {
        let room = &scored.room;
        println!(
            "{:>3}. {} in {} (weight {:.2}, deterministic rank {})",
            idx + 1,
            format!("Room {}", room.id).bold(),
            room.building,
            scored.weight,
            scored.original_rank
        );
        println!(
            "     {} / {} / outlets: {} / windows: {} / printer: {}",
            room.class_type, room.table_type, room.outlets, room.windows, room.printer
        );
    }
}
