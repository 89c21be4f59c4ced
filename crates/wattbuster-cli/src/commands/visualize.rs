//! Gauge views for a single daily energy total.

use clap::Args;
use wattbuster_core::visualize::{
    self, animation, BatteryGauge, Co2Footprint, HourlySlot, ImpactLevel, Playback, REDUCTION_TIPS,
};
use wattbuster_core::{AppState, Config, FileStore, VisualizationMode};

use crate::render::{bar, play_inline, rule, BAR_WIDTH};

#[derive(Args)]
pub struct VisualizeArgs {
    /// Gauge to show: battery, co2 or graph (default from config)
    mode: Option<VisualizationMode>,
    /// Daily energy in watts instead of the stored value
    #[arg(long)]
    energy: Option<f64>,
    /// Animate the gauge
    #[arg(long)]
    animate: bool,
}

pub fn run(args: VisualizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mode = args.mode.unwrap_or(config.visualize.default_mode);
    let animate = args.animate || config.visualize.animate;

    let total = match args.energy {
        Some(watts) if !watts.is_finite() || watts < 0.0 => {
            return Err(format!("energy must be a finite, non-negative number, got {watts}").into())
        }
        Some(watts) => watts,
        None => {
            let state = AppState::new(FileStore::open()?);
            state
                .daily_energy()
                .map_or(config.visualize.fallback_energy, |w| w as f64)
        }
    };

    println!("{}", mode.title());
    println!("{}", rule());

    match mode {
        VisualizationMode::Battery => {
            let gauge = visualize::battery(total, config.visualize.battery_capacity);
            show_battery(&gauge, animate)?;
        }
        VisualizationMode::Co2 => {
            let footprint = visualize::co2(total);
            show_co2(&footprint, animate)?;
        }
        VisualizationMode::Graph => {
            let slots = visualize::hourly_distribution(total);
            show_graph(&slots, animate)?;
        }
    }

    let progress = visualize::daily_progress(total, config.goal.daily_watts);
    println!("\nTotal: {total:.0}W  ({:.0}% of daily goal)", progress.percent);
    println!("{}", progress.tier.message());
    Ok(())
}

fn battery_line(level: f64) -> String {
    format!("[{}] {level:>3.0}%", bar(level / 100.0, BAR_WIDTH))
}

fn show_battery(gauge: &BatteryGauge, animate: bool) -> std::io::Result<()> {
    if animate {
        play_inline(
            Playback::new(animation::battery_frames(gauge.level)),
            |level| battery_line(*level),
        )?;
    } else {
        println!("{}", battery_line(gauge.level));
    }
    println!("{} (drain {:.0}%)", gauge.status.label(), gauge.drain);
    Ok(())
}

fn show_co2(footprint: &Co2Footprint, animate: bool) -> std::io::Result<()> {
    if animate {
        play_inline(
            Playback::new(animation::counter_frames(footprint.grams)),
            |grams| format!("{grams:.0}g CO₂"),
        )?;
    } else {
        println!("{:.0}g CO₂", footprint.grams);
    }

    let impact = match footprint.impact {
        ImpactLevel::Low => "Low impact",
        ImpactLevel::Medium => "Medium impact",
        ImpactLevel::High => "High impact",
    };
    println!("{impact}");
    println!("  Trees needed to absorb: {}", footprint.trees);
    println!("  Equivalent miles driven: {}", footprint.miles);

    if footprint.show_tips {
        println!("\nReduction tips:");
        for tip in REDUCTION_TIPS {
            println!("  - {tip}");
        }
    }
    Ok(())
}

fn graph_line(slot: &HourlySlot, max: f64) -> String {
    let fraction = if max > 0.0 { slot.energy / max } else { 0.0 };
    format!(
        "{:>5} {} {:>5.0}W  {}",
        slot.hour,
        bar(fraction, BAR_WIDTH),
        slot.energy,
        slot.activity
    )
}

fn show_graph(slots: &[HourlySlot], animate: bool) -> std::io::Result<()> {
    let max = slots.iter().map(|s| s.energy).fold(0.0, f64::max);

    if animate {
        for (wait, shown) in Playback::new(animation::reveal_frames(slots.len())) {
            std::thread::sleep(wait);
            println!("{}", graph_line(&slots[shown - 1], max));
        }
    } else {
        for slot in slots {
            println!("{}", graph_line(slot, max));
        }
    }
    Ok(())
}
