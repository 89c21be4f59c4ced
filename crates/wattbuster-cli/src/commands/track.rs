use chrono::Local;
use clap::Args;
use serde::Serialize;
use tracing::debug;
use wattbuster_core::record::parse_date;
use wattbuster_core::stats::BADGE_STREAK;
use wattbuster_core::visualize::{daily_progress, DailyProgress};
use wattbuster_core::{AppState, Config, DailyRecord, DailyRecordBuilder, FileStore, RawDay, RawEntry};

use crate::render::{bar, BAR_WIDTH};

#[derive(Args)]
pub struct TrackArgs {
    /// Entries as activity=hours (e.g. youtube=1.5 gaming=2)
    #[arg(required = true)]
    entries: Vec<RawEntry>,
    /// Day being recorded (YYYY-MM-DD, default today)
    #[arg(long)]
    date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TrackSummary<'a> {
    record: &'a DailyRecord,
    progress: DailyProgress,
    streak: u32,
}

pub fn run(args: TrackArgs) -> Result<(), Box<dyn std::error::Error>> {
    for entry in &args.entries {
        entry.validate()?;
    }

    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let config = Config::load()?;
    let record = DailyRecordBuilder::new().build(&RawDay::new(date, args.entries));

    let mut state = AppState::new(FileStore::open()?);
    debug!(store = %state.store().path().display(), "recording day");
    state.record_day(record.date, record.total_energy)?;

    let goal = config.goal.daily_watts;
    let progress = daily_progress(record.total_energy, goal);
    let streak = state.streak(goal);

    if args.json {
        let summary = TrackSummary {
            record: &record,
            progress,
            streak,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Energy for {}", record.date);
    for (activity, energy) in &record.activities {
        println!(
            "  {:<14} {:>5.1}h  {:>7.0}W",
            activity.display_name(),
            energy.hours,
            energy.energy
        );
    }
    println!("  {:<14} {:>6}  {:>7.0}W", "Total", "", record.total_energy);

    println!(
        "\nDaily goal: {}  {:.0}% of {:.0}W",
        bar(progress.percent / 100.0, BAR_WIDTH),
        progress.percent,
        goal
    );
    println!("  {}", progress.tier.message());

    println!("\nStreak: {streak} day(s) at or under goal");
    if streak >= BADGE_STREAK {
        println!("  Badge earned: Energy Saver");
    }
    Ok(())
}
