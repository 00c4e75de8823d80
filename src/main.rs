//! BGMI Scoreboard Tool
//!
//! Parses OCR dumps of BGMI post-match result screenshots into structured
//! per-player performance stats, validated against a roster of canonical
//! player names, and keeps a running match log with per-player aggregates.

mod analysis;
mod scoreboard;
mod vision;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Logs a message to stderr and the log file with a timestamp. stderr keeps
/// stdout clean for the JSON the subcommands print.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    eprint!("{}", line);
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("bgmi_scoreboard.log")
    {
        let _ = file.write_all(line.as_bytes());
    }
}

#[derive(Parser)]
#[command(
    name = "bgmi-scoreboard",
    about = "Reconstruct BGMI match stats from OCR'd result screenshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an OCR dump into structured match stats (JSON on stdout)
    Parse {
        /// Vision text-detection JSON (response envelope or token array)
        tokens: PathBuf,
        /// Roster file: one canonical IGN per line, '#' comments allowed
        roster: PathBuf,
        /// Optional parse tolerances override (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Append the parsed performances to this match log CSV
        #[arg(long)]
        append: Option<PathBuf>,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Aggregate one player's stats from the match log (JSON on stdout)
    Stats {
        /// Match log CSV written by `parse --append`
        csv: PathBuf,
        /// Player IGN (case-insensitive)
        player: String,
        /// Also write the overview to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Parse {
            tokens,
            roster,
            config,
            append,
            compact,
        } => run_parse(&tokens, &roster, config.as_deref(), append.as_deref(), compact),
        Command::Stats { csv, player, json } => run_stats(&csv, &player, json.as_deref()),
    }
}

fn run_parse(
    tokens_path: &Path,
    roster_path: &Path,
    config_path: Option<&Path>,
    append_path: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let config = scoreboard::config::load_config(config_path);
    let tokens = vision::load_tokens(tokens_path)?;
    let roster = load_roster(roster_path)?;
    log(&format!(
        "Parsing {} tokens against a roster of {}",
        tokens.len(),
        roster.len()
    ));

    let result = scoreboard::parse_scoreboard(&tokens, &roster, &config)?;

    if let Some(csv_path) = append_path {
        analysis::match_log::init_csv(csv_path)?;
        analysis::match_log::append_match(csv_path, &result, Local::now())?;
        log(&format!(
            "Appended {} performance(s) to {}",
            result.performances.len(),
            csv_path.display()
        ));
    }

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", json);
    Ok(())
}

fn run_stats(csv_path: &Path, player_ign: &str, json_out: Option<&Path>) -> Result<()> {
    let overview = analysis::generate_overview(csv_path, player_ign, json_out)?;
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}

/// Reads the roster file: one IGN per line, blank lines and '#' comments
/// skipped. The roster is read-only input to the parser.
fn load_roster(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read roster file: {}", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
