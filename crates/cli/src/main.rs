//! MiniPlay economy command line interface
//!
//! Budget checks, charge quotes, rank payouts, game catalog search and the
//! daily login streak for the MPcoin reward economy.

mod store;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use miniplay_economy::{
    check_in, compute_credited_coins, filter_games, find_charge_option, format_count,
    format_countdown, parse_games_json, reward_for_rank, time_until_weekly_reset, BudgetState,
    DashboardConfig, DashboardSession, RankTier, Shelf, ALL_CATEGORIES, CHARGE_CATALOG,
    GAME_CATEGORIES,
};
use std::fs;
use std::path::{Path, PathBuf};
use store::JsonFileStore;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "miniplay")]
#[command(about = "MiniPlay MPcoin economy tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the weekly and achievement liability against the balance
    Budget(ConfigArgs),
    /// Commit the reward configuration; fails when over budget
    Save(ConfigArgs),
    /// Quote the coins credited for a charge
    Charge {
        /// Amount in won
        #[arg(long)]
        amount: u64,
        /// Bonus percent; defaults to the catalog bonus for the amount, else 0
        #[arg(long)]
        bonus: Option<u32>,
    },
    /// List the charge catalog
    Catalog,
    /// Show the tier and payout of a leaderboard rank
    Rank {
        rank: u32,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Run the daily login check-in
    CheckIn {
        /// JSON file holding the streak state
        #[arg(long)]
        state: PathBuf,
        /// Check-in date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Search and filter a game catalog file
    Games {
        /// JSON array of games
        #[arg(long)]
        file: PathBuf,
        /// Case-insensitive title search
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Time left until the weekly leaderboard reset
    ResetCountdown,
    /// Write the default dashboard configuration
    InitConfig {
        #[arg(long, default_value = "miniplay.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// Dashboard configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> Result<DashboardConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(DashboardConfig::default()),
        }
    }
}

fn load_config(path: &Path) -> Result<DashboardConfig> {
    DashboardConfig::load_from_path(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Budget(args) | Commands::Save(args) | Commands::Rank { config: args, .. } => {
            Some(args.load()?)
        }
        _ => None,
    };
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|| "info".to_string());
    init_logging(&level);
    debug!(version = miniplay_economy::VERSION, "miniplay starting");

    let config = config.unwrap_or_default();
    match cli.command {
        Commands::Budget(_) => {
            let session = DashboardSession::from_config("cli", &config);
            print_budget(&session.budget(), cli.json)?;
        }
        Commands::Save(_) => {
            let mut session = DashboardSession::from_config("cli", &config);
            let budget = session.budget();
            print_budget(&budget, cli.json)?;
            let saved = session
                .save_rewards()
                .context("reward configuration not saved")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&saved)?);
            } else {
                println!(
                    "Saved: {} custom tiers, {} achievements",
                    saved.custom_tiers.len(),
                    saved.achievements.len()
                );
            }
        }
        Commands::Charge { amount, bonus } => {
            let bonus = bonus
                .or_else(|| find_charge_option(amount).map(|o| o.bonus_percent))
                .unwrap_or(0);
            let coins = compute_credited_coins(amount, bonus);
            if cli.json {
                let json = serde_json::json!({
                    "amount_won": amount,
                    "bonus_percent": bonus,
                    "coins": coins,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                println!("{amount} won at {bonus}% bonus: {coins} coins");
            }
        }
        Commands::Catalog => {
            if cli.json {
                let entries: Vec<_> = CHARGE_CATALOG
                    .iter()
                    .map(|o| {
                        serde_json::json!({
                            "amount_won": o.amount_won,
                            "bonus_percent": o.bonus_percent,
                            "coins": o.credited_coins(),
                            "bonus_coins": o.bonus_coins(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for option in CHARGE_CATALOG {
                    println!(
                        "{:>8} won  {:>2}%  {:>6} coins (+{} bonus)",
                        option.amount_won,
                        option.bonus_percent,
                        option.credited_coins(),
                        option.bonus_coins()
                    );
                }
            }
        }
        Commands::Rank { rank, .. } => {
            if rank == 0 {
                bail!("rank must be 1 or greater");
            }
            let tier = RankTier::of(rank);
            let reward = reward_for_rank(&config.schedule, &config.custom_tiers, rank);
            if cli.json {
                let json = serde_json::json!({ "rank": rank, "tier": tier, "reward": reward });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                println!("Rank {rank} ({}): {reward} coins", tier.label());
            }
        }
        Commands::CheckIn { state, date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let mut store = JsonFileStore::open(&state)
                .with_context(|| format!("failed to open state file {}", state.display()))?;
            let outcome = check_in(&mut store, today).context("check-in failed")?;
            if cli.json {
                let json = serde_json::json!({
                    "date": today,
                    "consecutive_days": outcome.consecutive_days,
                    "reward": outcome.reward,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                match outcome.reward {
                    Some(reward) => println!(
                        "Day {} streak: +{reward} coins",
                        outcome.consecutive_days
                    ),
                    None => println!(
                        "Already checked in today (day {} streak)",
                        outcome.consecutive_days
                    ),
                }
            }
        }
        Commands::Games {
            file,
            search,
            category,
        } => {
            if !GAME_CATEGORIES.contains(&category.as_str()) {
                bail!(
                    "unknown category {category}; expected one of {}",
                    GAME_CATEGORIES.join(", ")
                );
            }
            let contents = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let games = parse_games_json(&contents)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            let shown = filter_games(&games, &search, &category);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                for (position, game) in shown.iter().enumerate() {
                    println!(
                        "{:>4}  {:<4}  {:<24} {:<8} {:>6} likes {:>6} plays",
                        game.id,
                        Shelf::for_position(position).label(),
                        game.title,
                        game.category,
                        format_count(game.likes),
                        format_count(game.plays)
                    );
                }
            }
        }
        Commands::ResetCountdown => {
            let remaining = time_until_weekly_reset(Local::now().naive_local());
            if cli.json {
                let json = serde_json::json!({ "seconds": remaining.num_seconds() });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                println!("Weekly reset in {}", format_countdown(remaining));
            }
        }
        Commands::InitConfig { output, force } => {
            if output.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", output.display());
            }
            let text = DashboardConfig::default().to_toml_string()?;
            fs::write(&output, text)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(path = %output.display(), "default configuration written");
            println!("Wrote {}", output.display());
        }
    }

    Ok(())
}

fn print_budget(budget: &BudgetState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(budget)?);
        return Ok(());
    }
    println!("Weekly rewards:      {}", budget.weekly_liability);
    println!("Achievement rewards: {}", budget.achievement_liability);
    println!("Total liability:     {}", budget.total_liability);
    println!("Available balance:   {}", budget.available_balance);
    if budget.is_over_budget {
        println!("Over budget by:      {}", budget.deficit);
    } else {
        println!("Remaining:           {}", budget.remaining());
    }
    Ok(())
}
