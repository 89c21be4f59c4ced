//! Frame schedules for the animated gauges.
//!
//! Animations are described as a list of [`Frame`]s with offsets from the
//! start. A [`Playback`] walks those frames and yields the wait before each
//! one; the caller owns the clock and stops by dropping it.

use std::time::Duration;

/// Increments used by the counter animation.
pub const COUNTER_STEPS: u32 = 50;
/// Interval between counter increments.
pub const COUNTER_INTERVAL: Duration = Duration::from_millis(50);
/// Delay before the battery settles at its final level.
pub const BATTERY_DELAY: Duration = Duration::from_millis(500);
/// Delay between consecutive bars of the graph.
pub const BAR_STAGGER: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    /// Offset from the start of the animation
    pub at: Duration,
    pub value: T,
}

/// Count up to `target` in equal increments, finishing exactly on it.
pub fn counter_frames(target: f64) -> Vec<Frame<f64>> {
    if target <= 0.0 {
        return vec![Frame {
            at: COUNTER_INTERVAL,
            value: target.max(0.0),
        }];
    }

    let increment = target / COUNTER_STEPS as f64;
    let mut frames = Vec::with_capacity(COUNTER_STEPS as usize);
    let mut current = 0.0;
    let mut tick = 1;
    loop {
        current += increment;
        let at = COUNTER_INTERVAL * tick;
        if current >= target || tick >= COUNTER_STEPS {
            frames.push(Frame { at, value: target });
            break;
        }
        frames.push(Frame { at, value: current });
        tick += 1;
    }
    frames
}

/// Single transition from a full battery to `level`.
pub fn battery_frames(level: f64) -> Vec<Frame<f64>> {
    vec![
        Frame {
            at: Duration::ZERO,
            value: 100.0,
        },
        Frame {
            at: BATTERY_DELAY,
            value: level,
        },
    ]
}

/// Reveal bars one at a time. Frame `i` carries the number of bars shown.
pub fn reveal_frames(bars: usize) -> Vec<Frame<usize>> {
    (0..bars)
        .map(|i| Frame {
            at: BAR_STAGGER * i as u32,
            value: i + 1,
        })
        .collect()
}

/// Iterator over frames that yields the wait before each one.
///
/// Items are `(delay_since_previous_frame, value)`.
#[derive(Debug)]
pub struct Playback<T> {
    frames: std::vec::IntoIter<Frame<T>>,
    last: Duration,
}

impl<T> Playback<T> {
    pub fn new(frames: Vec<Frame<T>>) -> Self {
        Self {
            frames: frames.into_iter(),
            last: Duration::ZERO,
        }
    }
}

impl<T> Iterator for Playback<T> {
    type Item = (Duration, T);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next()?;
        let wait = frame.at.saturating_sub(self.last);
        self.last = frame.at;
        Some((wait, frame.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_ends_exactly_on_target() {
        let frames = counter_frames(425.0);
        assert!(frames.len() <= COUNTER_STEPS as usize);
        assert_eq!(frames.last().unwrap().value, 425.0);
        assert!(frames.windows(2).all(|w| w[0].value <= w[1].value));
        assert_eq!(frames[0].at, COUNTER_INTERVAL);
    }

    #[test]
    fn counter_for_zero_is_single_frame() {
        let frames = counter_frames(0.0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 0.0);
    }

    #[test]
    fn battery_settles_after_delay() {
        let frames = battery_frames(15.0);
        assert_eq!(frames[1].at, BATTERY_DELAY);
        assert_eq!(frames[1].value, 15.0);
    }

    #[test]
    fn reveal_is_staggered() {
        let frames = reveal_frames(8);
        assert_eq!(frames.len(), 8);
        assert_eq!(frames[0].at, Duration::ZERO);
        assert_eq!(frames[7].at, Duration::from_millis(3500));
        assert_eq!(frames[7].value, 8);
    }

    #[test]
    fn playback_yields_relative_waits() {
        let waits: Vec<_> = Playback::new(reveal_frames(3)).map(|(wait, _)| wait).collect();
        assert_eq!(waits, vec![Duration::ZERO, BAR_STAGGER, BAR_STAGGER]);
    }

    #[test]
    fn playback_stops_after_last_frame() {
        let mut playback = Playback::new(battery_frames(40.0));
        assert_eq!(playback.next(), Some((Duration::ZERO, 100.0)));
        assert_eq!(playback.next(), Some((BATTERY_DELAY, 40.0)));
        assert!(playback.next().is_none());
    }
}
