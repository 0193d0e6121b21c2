//! Landing-page behaviour that is not the field itself: the preloader bar,
//! the sticky navbar and the stat counters. The DOM wiring lives in
//! `wasm::page`; the timing and text logic is here so it runs on the host.

use crate::constants::{COUNT_UP_STEPS, NAV_SCROLL_THRESHOLD, PRELOADER_STEP_MAX, STAT_FALLBACK};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Done,
}

/// Fake progress bar that fills in random increments.
#[derive(Debug, Default)]
pub struct Preloader {
    progress: f64,
}

impl Preloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LoadState {
        self.progress += rng.gen_range(0.0..PRELOADER_STEP_MAX);
        if self.progress >= 100.0 {
            LoadState::Done
        } else {
            LoadState::Loading
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress.min(100.0)
    }
}

/// Whether the navbar should switch to its compact `scrolled` look.
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Target of a stat counter from its printed text, e.g. `"250+"` → 250.
///
/// Reads an optionally signed leading integer, so `"-5"` counts to -5. Text
/// without a leading number, a zero, or a value beyond `i64` counts to 100.
pub fn parse_stat(text: &str) -> i64 {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let end = text[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + sign);
    match text[..end].parse::<i64>() {
        Ok(0) | Err(_) => STAT_FALLBACK,
        Ok(n) => n,
    }
}

/// Labels shown while a stat counts up to its target.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / COUNT_UP_STEPS,
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(format!("{}+", self.target))
        } else {
            Some(format!("{}+", self.current.floor()))
        }
    }
}
