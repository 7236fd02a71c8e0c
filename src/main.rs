use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use golf_stats::{
    compute, plays_like_distance, wind_impact, JsonFileStore, Round, RoundId, RoundRepository,
    SampleRounds, Statistics,
};

#[derive(Parser, Debug)]
#[command(name = "golf-stats")]
#[command(about = "Golf round tracker - statistics from recorded rounds", long_about = None)]
struct Args {
    /// JSON file holding the recorded rounds
    #[arg(short, long, default_value = "rounds.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show statistics over all recorded rounds
    Stats {
        /// Print as JSON instead of a summary card
        #[arg(long)]
        json: bool,
    },

    /// Create a blank round with the default par layout
    New {
        /// Number of holes (usually 9 or 18)
        #[arg(long, default_value = "18")]
        holes: u32,

        #[arg(long)]
        course: Option<String>,

        /// Round date as RFC 3339 (default: now)
        #[arg(long)]
        date: Option<String>,
    },

    /// List recorded rounds
    List,

    /// Show hole-by-hole detail for one round
    Show { id: String },

    /// Delete a round by id
    Delete { id: String },

    /// Append generated sample rounds
    Sample {
        /// Seed for reproducible sample data
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Estimate how the wind changes a shot
    Wind {
        /// Shot distance in meters
        #[arg(long)]
        distance: u32,

        /// Wind speed in m/s
        #[arg(long)]
        speed: f64,

        /// Direction the wind blows from, degrees relative to the target line
        #[arg(long, default_value = "0.0")]
        direction: f64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut store = JsonFileStore::new(args.file.clone());

    match args.command {
        Command::Stats { json } => {
            let rounds = load_rounds(&store)?;
            let statistics = compute(&rounds);
            if json {
                println!("{}", serde_json::to_string_pretty(&statistics)?);
            } else {
                print_statistics(&statistics);
            }
        }
        Command::New {
            holes,
            course,
            date,
        } => {
            let date = match date {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .with_context(|| format!("Invalid round date: {}", raw))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let mut round = Round::create_new(holes, date);
            if let Some(course) = course {
                round.course_name = course;
            }
            let id = round.id.clone();
            store
                .add(round)
                .with_context(|| format!("Failed to save to {}", store.path().display()))?;
            println!("Created {}-hole round {}", holes, id);
        }
        Command::List => {
            let mut rounds = load_rounds(&store)?;
            rounds.sort_by_key(|r| r.date);
            if rounds.is_empty() {
                println!("No rounds recorded in {}", store.path().display());
            }
            for round in &rounds {
                println!(
                    "{}  {}  {:<24} {:>2} holes  {:>3} ({})",
                    round.id,
                    round.date.format("%Y-%m-%d"),
                    round.course_name,
                    round.hole_count(),
                    round.total_score(),
                    round.relative_score_label()
                );
            }
        }
        Command::Show { id } => {
            let id = RoundId::from(id.as_str());
            let round = load_rounds(&store)?
                .into_iter()
                .find(|r| r.id == id)
                .with_context(|| format!("Round {} not found", id))?;
            print_round(&round);
        }
        Command::Delete { id } => {
            let id = RoundId::from(id.as_str());
            store
                .delete(&id)
                .with_context(|| format!("Failed to delete round {}", id))?;
            println!("Deleted round {}", id);
        }
        Command::Sample { seed } => {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut rounds = load_rounds(&store)?;
            rounds.extend(SampleRounds::new(rng).generate(Utc::now()));
            store
                .save(&rounds)
                .with_context(|| format!("Failed to save to {}", store.path().display()))?;
            println!("{} rounds now in {}", rounds.len(), store.path().display());
        }
        Command::Wind {
            distance,
            speed,
            direction,
        } => {
            let impact = wind_impact(distance, speed, direction);
            println!("  Wind impact:  {:+} m", impact);
            println!(
                "  Plays like:   {} m",
                plays_like_distance(distance, speed, direction)
            );
        }
    }

    Ok(())
}

fn load_rounds(store: &JsonFileStore) -> Result<Vec<Round>> {
    store
        .load()
        .with_context(|| format!("Failed to load rounds from {}", store.path().display()))
}

fn print_round(round: &Round) {
    println!();
    println!(
        "  {} - {} ({} holes)",
        round.course_name,
        round.date.format("%Y-%m-%d"),
        round.hole_count()
    );
    println!("{}", "-".repeat(72));
    for hole in &round.holes {
        let tee = hole
            .tee_club
            .as_ref()
            .map(|c| c.short_name())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>2}  Par {}  {:>2} {:<6}  Tee {:<3} {:<12} {:<5} {} putts",
            hole.number,
            hole.par,
            hole.score,
            hole.score_name().label(),
            tee,
            hole.fairway.description(),
            hole.green_hit_location.short_description(),
            hole.putts
        );
    }
    println!("{}", "-".repeat(72));
    println!(
        "  Total {} ({})  Putts {}  GIR {:.0}%  Fairways {:.0}%",
        round.total_score(),
        round.relative_score_label(),
        round.total_putts(),
        round.gir_percentage(),
        round.fairway_percentage()
    );
    if !round.notes.is_empty() {
        println!("  Notes: {}", round.notes);
    }
    println!();
}

fn print_statistics(stats: &Statistics) {
    println!();
    println!("{}", "-".repeat(40));
    println!("  Rounds:           {}", stats.total_rounds);
    println!("  Holes:            {}", stats.total_holes_played);
    println!("  Avg Score (18):   {:.1}", stats.average_score);
    println!(
        "  Avg Score Par 3/4/5: {:.2} / {:.2} / {:.2}",
        stats.avg_score_par3, stats.avg_score_par4, stats.avg_score_par5
    );
    println!("{}", "-".repeat(40));
    println!("  GIR:              {:.1}%", stats.gir_percentage);
    println!(
        "  GIR Par 3/4/5:    {:.1}% / {:.1}% / {:.1}%",
        stats.gir_percentage_par3, stats.gir_percentage_par4, stats.gir_percentage_par5
    );
    println!(
        "  Fairways:         {:.1}% of {}",
        stats.fairway_hit_percentage, stats.total_fairway_opportunities
    );
    println!(
        "  Missed L / R:     {:.1}% / {:.1}%",
        stats.fairways_missed_left_percentage, stats.fairways_missed_right_percentage
    );
    println!("{}", "-".repeat(40));
    println!("  Putts / Hole:     {:.2}", stats.average_putts_per_hole);
    println!("  Putts / Round:    {:.1}", stats.average_putts_per_round);
    println!(
        "  Putts on/off GIR: {:.2} / {:.2}",
        stats.avg_putts_on_gir, stats.avg_putts_off_gir
    );
    println!("  1-Putt:           {:.1}%", stats.one_putt_percentage);
    println!("  3-Putt+:          {:.1}%", stats.three_putt_percentage);
    println!("{}", "-".repeat(40));

    if !stats.rounds_with_score_by_date.is_empty() {
        println!("  Score trend:");
        for entry in &stats.rounds_with_score_by_date {
            println!(
                "    {}  {:>3} ({:+})",
                entry.date.format("%Y-%m-%d"),
                entry.score,
                entry.score_relative_to_par
            );
        }
        println!("{}", "-".repeat(40));
    }
    println!();
}
