//! Analytics dashboard over a JSON file of daily entries.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use wattbuster_core::record::{load_raw_days, validate_hours};
use wattbuster_core::stats::{
    short_name, trend_series, TrendPoint, PERFECT_MANAGEMENT_MESSAGE, PERFECT_MANAGEMENT_TITLE,
};
use wattbuster_core::{Activity, AggregationResult, Config, DailyRecordBuilder, Period};

use crate::render::{bar, rule, BAR_WIDTH};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file of `[{"date": "YYYY-MM-DD", "entries": [{"activity", "hours"}]}]`
    file: PathBuf,
    /// Period to analyze: 7d or all (default from config)
    #[arg(long)]
    period: Option<Period>,
    /// Restrict the trend chart to one activity
    #[arg(long)]
    activity: Option<Activity>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Dashboard<'a> {
    period: Period,
    #[serde(flatten)]
    result: &'a AggregationResult,
    trend_series: Vec<TrendPoint>,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let period = args.period.unwrap_or(config.analytics.default_period);

    let days = load_raw_days(&args.file)?;
    validate_hours(&days)?;
    let sequence = DailyRecordBuilder::new().build_all(&days);
    let records = sequence.window(period.window_days());
    debug!(file = %args.file.display(), days = sequence.len(), %period, "analyzing");
    let result = config.analyzer().aggregate_records(records);
    let series = trend_series(records, args.activity);

    if args.json {
        let dashboard = Dashboard {
            period,
            result: &result,
            trend_series: series,
        };
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    print_dashboard(&result, period, &series, args.activity);
    Ok(())
}

fn print_dashboard(
    result: &AggregationResult,
    period: Period,
    series: &[TrendPoint],
    activity: Option<Activity>,
) {
    let span = match period {
        Period::Last7Days => "last 7 days",
        Period::All => "all time",
    };
    println!("\nEnergy Analytics ({span})");
    println!("{}", rule());

    println!("  Days tracked:   {}", result.days_tracked);
    println!("  Total energy:   {:.0}W", result.total_energy);
    println!("  Daily average:  {:.0}W", result.daily_average);
    println!("  Trend:          {}", result.trend);
    match result.goal.goal_percentage {
        Some(pct) => println!(
            "  Goal adherence: {pct:.0}% of days at or under {:.0}W",
            result.goal.daily_goal
        ),
        None => println!("  Goal adherence: N/A"),
    }
    println!("  Current streak: {} day(s)", result.goal.current_streak);

    if let (Some(best), Some(worst)) = (&result.most_efficient_day, &result.least_efficient_day) {
        println!("  Most efficient:  {} ({:.0}W)", best.date, best.total_energy);
        println!("  Least efficient: {} ({:.0}W)", worst.date, worst.total_energy);
    }

    if !result.breakdown.is_empty() {
        println!("\nActivity breakdown:");
        for share in &result.breakdown {
            println!(
                "  {:<12} {} {:>3}%  {:.0}W",
                share.display_name,
                bar(share.percentage as f64 / 100.0, BAR_WIDTH),
                share.percentage,
                share.energy
            );
        }
    }

    println!("\nWeekly pattern:");
    let max = result.weekdays.iter().map(|w| w.average).fold(0.0, f64::max);
    for day in &result.weekdays {
        let fraction = if max > 0.0 { day.average / max } else { 0.0 };
        println!(
            "  {} {} {:>5.0}W ({} day(s))",
            short_name(day.weekday),
            bar(fraction, BAR_WIDTH),
            day.average,
            day.sessions
        );
    }
    println!("  {}", result.weekly_pattern.kind.message());

    if !series.is_empty() {
        let label = activity.map_or("all activities", |a| a.display_name());
        println!("\nEnergy over time ({label}):");
        let max = series.iter().map(|p| p.energy).fold(0.0, f64::max);
        for point in series {
            let fraction = if max > 0.0 { point.energy / max } else { 0.0 };
            println!("  {} {} {:>5.0}W", point.date, bar(fraction, BAR_WIDTH), point.energy);
        }
    }

    println!("\nRecommendations:");
    if result.recommendations.is_empty() {
        println!("  {PERFECT_MANAGEMENT_TITLE}");
        println!("  {PERFECT_MANAGEMENT_MESSAGE}");
    }
    for rec in &result.recommendations {
        println!("  [{:?}] {}", rec.severity, rec.title);
        println!("    {}", rec.description);
    }
}
