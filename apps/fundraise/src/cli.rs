//! # Command Line Interface
//!
//! `fundraise serve` runs the HTTP API; the other commands print the
//! engine's views of the demo data set.

use clap::{Parser, Subcommand};
use fundraise_core::types::FULL;
use fundraise_core::{Amount, InMemoryProvider, Percent, ProgressResult, UserId};
use std::error::Error;
use std::fmt::Write as _;

use crate::api::{self, Service};
use crate::config::AppConfig;

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, Parser)]
#[command(name = "fundraise")]
#[command(about = "Fundraising portal backend")]
#[command(version)]
pub struct Cli {
    /// Monthly donation goal (overrides FUNDRAISE_MONTHLY_GOAL)
    #[arg(long, global = true)]
    pub monthly_goal: Option<Amount>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the leaderboard
    Leaderboard {
        #[arg(long)]
        json: bool,
    },

    /// Print reward unlock status for a user
    Rewards {
        user_id: u64,
        #[arg(long)]
        json: bool,
    },

    /// Print dashboard statistics for a user
    Stats {
        user_id: u64,
        #[arg(long)]
        json: bool,
    },
}

/// Build the service over the demo data set.
pub fn demo_service(monthly_goal: Amount) -> CliResult<Service> {
    let provider = InMemoryProvider::demo()?;
    Ok(Service::new(provider, monthly_goal)?)
}

/// Dispatch a parsed command.
pub async fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    let config = config.with_monthly_goal(cli.monthly_goal)?;
    let service = demo_service(config.monthly_goal)?;

    match cli.command {
        Commands::Serve { host, port } => {
            api::run_server(config.with_listen(host, port), service).await
        }
        Commands::Leaderboard { json } => cmd_leaderboard(&service, json),
        Commands::Rewards { user_id, json } => cmd_rewards(&service, user_id, json),
        Commands::Stats { user_id, json } => cmd_stats(&service, user_id, json),
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

pub fn cmd_leaderboard(service: &Service, json: bool) -> CliResult<()> {
    println!("{}", render_leaderboard(service, json)?);
    Ok(())
}

pub fn cmd_rewards(service: &Service, user_id: u64, json: bool) -> CliResult<()> {
    println!("{}", render_rewards(service, UserId(user_id), json)?);
    Ok(())
}

pub fn cmd_stats(service: &Service, user_id: u64, json: bool) -> CliResult<()> {
    println!("{}", render_stats(service, UserId(user_id), json)?);
    Ok(())
}

// =============================================================================
// RENDERING
// =============================================================================

fn missing(id: UserId) -> Box<dyn Error + Send + Sync> {
    format!("user {id} not found").into()
}

pub fn render_leaderboard(service: &Service, json: bool) -> CliResult<String> {
    let entries = service.leaderboard();
    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let summary = service.leaderboard_summary();
    let mut out = String::new();
    writeln!(out, "{:>4}  {:<20} {:>10} {:>9}", "RANK", "NAME", "RAISED", "REFERRALS")?;
    for entry in &entries {
        // A trailing '*' marks a stored rank that disagrees with donation order.
        let flag = if entry.rank_diverged { "*" } else { "" };
        writeln!(
            out,
            "{:>4}  {:<20} {:>10} {:>9}{flag}",
            entry.rank, entry.user.name, entry.user.donations_raised, entry.user.total_referrals
        )?;
    }
    write!(
        out,
        "{} participants, {} raised, {} referrals",
        summary.participants, summary.total_raised, summary.total_referrals
    )?;
    Ok(out)
}

pub fn render_rewards(service: &Service, id: UserId, json: bool) -> CliResult<String> {
    let rewards = service.rewards(id).ok_or_else(|| missing(id))?;
    let summary = service.reward_summary(id).ok_or_else(|| missing(id))?;
    if json {
        return Ok(serde_json::to_string_pretty(&rewards)?);
    }

    let mut out = String::new();
    for reward in &rewards {
        let status = if reward.unlocked { "unlocked" } else { "locked" };
        writeln!(
            out,
            "{} {:<16} {:>8}  {status}",
            reward.tier.icon, reward.tier.title, reward.tier.threshold
        )?;
    }
    write!(
        out,
        "{} earned, {} remaining",
        summary.badges_earned, summary.goals_remaining
    )?;
    match summary.next_goal {
        Some(next) => write!(
            out,
            "\nNext goal: {} ({}% complete, {} to go)",
            next.tier.title,
            next.progress.percent.rounded(),
            next.progress.remaining
        )?,
        None => write!(out, "\nAll rewards unlocked")?,
    }
    Ok(out)
}

pub fn render_stats(service: &Service, id: UserId, json: bool) -> CliResult<String> {
    let stats = service.stats(id).ok_or_else(|| missing(id))?;
    if json {
        return Ok(serde_json::to_string_pretty(&stats)?);
    }

    let mut out = String::new();
    writeln!(out, "Total raised:    {}", stats.total_raised)?;
    writeln!(out, "Monthly goal:    {}", stats.monthly_goal)?;
    writeln!(out, "Total referrals: {}", stats.total_referrals)?;
    writeln!(
        out,
        "Progress:        {}%",
        stats.progress.percent.rounded()
    )?;
    for month in &stats.monthly_data {
        writeln!(out, "  {:<4} {:>8}", month.month, month.amount)?;
    }
    if stats.progress.reached {
        write!(out, "Monthly goal reached")?;
    } else {
        write!(out, "{} away from the monthly goal", goal_gap(&stats.progress))?;
    }
    Ok(out)
}

/// Distance to an unreached goal as a whole percent, or as the remaining
/// amount when that percent rounds to zero.
fn goal_gap(progress: &ProgressResult) -> String {
    let gap = Percent(
        FULL.basis_points()
            .saturating_sub(progress.percent_clamped.basis_points()),
    );
    match gap.rounded() {
        0 => progress.remaining.to_string(),
        whole => format!("{whole}%"),
    }
}
