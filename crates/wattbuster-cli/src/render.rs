//! Plain-text rendering helpers shared by the commands.

use std::io::Write;
use std::thread;

use wattbuster_core::visualize::Playback;

pub const BAR_WIDTH: usize = 30;

/// Horizontal bar filled to `fraction` (clamped to 0..=1).
pub fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn rule() -> String {
    "=".repeat(50)
}

/// Play frames on a single terminal line, rewriting it in place.
pub fn play_inline<T>(playback: Playback<T>, format: impl Fn(&T) -> String) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    for (wait, value) in playback {
        thread::sleep(wait);
        write!(stdout, "\r{}", format(&value))?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
