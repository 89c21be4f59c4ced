//! Day-of-week grouping and the weekend/weekday pattern.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::record::DailyRecord;

/// Monday-first order used for every weekday listing.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Average daily energy for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAverage {
    pub weekday: Weekday,
    /// 0 when no day fell on this weekday
    pub average: f64,
    /// Number of records observed on this weekday
    pub sessions: u32,
}

/// How usage is distributed between weekends and weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Weekend average more than 20% above the weekday average
    WeekendHeavy,
    /// Weekday average more than 20% above the weekend average
    WeekdayHeavy,
    Balanced,
}

impl PatternKind {
    pub fn message(&self) -> &'static str {
        match self {
            PatternKind::WeekendHeavy => {
                "You use significantly more energy on weekends. Consider setting weekend limits!"
            }
            PatternKind::WeekdayHeavy => {
                "Your weekday usage is higher than weekends. Work-related activities might be energy-intensive."
            }
            PatternKind::Balanced => {
                "Your energy usage is fairly consistent throughout the week. Great balance!"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPattern {
    pub kind: PatternKind,
    /// Mean of the Mon-Fri averages
    pub weekday_average: f64,
    /// Mean of the Sat/Sun averages
    pub weekend_average: f64,
    /// Weekday with the highest average
    pub highest: Option<Weekday>,
    /// Weekday with the lowest non-zero average
    pub lowest: Option<Weekday>,
}

/// Group records by weekday. Always returns seven entries, Monday first.
pub fn weekday_averages(records: &[DailyRecord]) -> Vec<WeekdayAverage> {
    let mut totals = [(0.0_f64, 0_u32); 7];
    for record in records {
        let idx = record.date.weekday().num_days_from_monday() as usize;
        totals[idx].0 += record.total_energy;
        totals[idx].1 += 1;
    }

    WEEK.iter()
        .zip(totals)
        .map(|(weekday, (total, count))| WeekdayAverage {
            weekday: *weekday,
            average: if count > 0 { total / count as f64 } else { 0.0 },
            sessions: count,
        })
        .collect()
}

/// Classify the weekly distribution from [`weekday_averages`] output.
pub fn weekly_pattern(averages: &[WeekdayAverage]) -> WeeklyPattern {
    let mean_of = |days: &[Weekday]| -> f64 {
        let values: Vec<f64> = averages
            .iter()
            .filter(|a| days.contains(&a.weekday))
            .map(|a| a.average)
            .collect();
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };

    let weekday_average = mean_of(&WEEK[..5]);
    let weekend_average = mean_of(&WEEK[5..]);

    let kind = if weekend_average > weekday_average * 1.2 {
        PatternKind::WeekendHeavy
    } else if weekday_average > weekend_average * 1.2 {
        PatternKind::WeekdayHeavy
    } else {
        PatternKind::Balanced
    };

    // First maximum wins so Monday is preferred on ties.
    let highest = averages
        .iter()
        .filter(|a| a.average > 0.0)
        .fold(None::<&WeekdayAverage>, |best, a| match best {
            Some(b) if b.average >= a.average => Some(b),
            _ => Some(a),
        })
        .map(|a| a.weekday);

    let lowest = averages
        .iter()
        .filter(|a| a.average > 0.0)
        .fold(None::<&WeekdayAverage>, |best, a| match best {
            Some(b) if b.average <= a.average => Some(b),
            _ => Some(a),
        })
        .map(|a| a.weekday);

    WeeklyPattern {
        kind,
        weekday_average,
        weekend_average,
        highest,
        lowest,
    }
}

/// Three-letter English weekday label.
pub fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
