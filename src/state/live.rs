//! Live Sample Window
//!
//! Bounded sliding window of synthesized traffic samples feeding the
//! unsupervised histogram. Samples keep a stable id so the chart can
//! join old and new frames by identity instead of by array position.

use chrono::{DateTime, Utc};
use leptos::*;

/// Most samples kept on screen at once.
pub const LIVE_WINDOW: usize = 20;

/// One observed traffic sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficSample {
    /// Stable identity for keyed chart joins.
    pub id: u64,
    /// Wall-clock time the sample was taken.
    pub time: DateTime<Utc>,
    /// Byte volume backing the confidence reading.
    pub bytes: f64,
    /// Canonical traffic type.
    pub label: String,
    /// Whether the label belongs to the malicious set.
    pub malicious: bool,
}

/// Sliding window of live samples plus the pause switch.
#[derive(Clone, Copy)]
pub struct LiveWindow {
    pub samples: RwSignal<Vec<TrafficSample>>,
    /// Pausing freezes drawing only. Collection keeps running so the
    /// window is current the moment drawing resumes.
    pub paused: RwSignal<bool>,
    next_id: RwSignal<u64>,
}

impl LiveWindow {
    pub fn new() -> Self {
        Self {
            samples: create_rw_signal(Vec::new()),
            paused: create_rw_signal(false),
            next_id: create_rw_signal(0),
        }
    }

    /// Hand out the next sample id.
    pub fn allocate_id(&self) -> u64 {
        self.next_id
            .try_update(|id| {
                *id += 1;
                *id
            })
            .unwrap_or(0)
    }

    /// Append a sample, dropping the oldest ones beyond the window cap.
    /// A probe can land after the page is torn down; the write is then
    /// silently skipped.
    pub fn push(&self, sample: TrafficSample) {
        let _ = self.samples.try_update(|samples| {
            samples.push(sample);
            if samples.len() > LIVE_WINDOW {
                let excess = samples.len() - LIVE_WINDOW;
                samples.drain(0..excess);
            }
        });
    }

    pub fn toggle_paused(&self) {
        self.paused.update(|paused| *paused = !*paused);
    }
}

impl Default for LiveWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(window: &LiveWindow, bytes: f64) -> TrafficSample {
        TrafficSample {
            id: window.allocate_id(),
            time: Utc::now(),
            bytes,
            label: "Background".to_string(),
            malicious: false,
        }
    }

    #[test]
    fn test_window_caps_at_twenty() {
        let runtime = create_runtime();
        let window = LiveWindow::new();
        for i in 0..25 {
            let s = sample(&window, i as f64);
            window.push(s);
        }
        let samples = window.samples.get_untracked();
        assert_eq!(samples.len(), LIVE_WINDOW);
        assert_eq!(samples[0].bytes, 5.0);
        assert_eq!(samples[LIVE_WINDOW - 1].bytes, 24.0);
        runtime.dispose();
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let runtime = create_runtime();
        let window = LiveWindow::new();
        let a = window.allocate_id();
        let b = window.allocate_id();
        let c = window.allocate_id();
        assert!(a < b && b < c);
        runtime.dispose();
    }

    #[test]
    fn test_push_after_dispose_does_not_panic() {
        let runtime = create_runtime();
        let window = LiveWindow::new();
        let s = sample(&window, 1.0);
        runtime.dispose();
        window.push(s);
        assert_eq!(window.allocate_id(), 0);
    }

    #[test]
    fn test_toggle_paused_flips() {
        let runtime = create_runtime();
        let window = LiveWindow::new();
        assert!(!window.paused.get_untracked());
        window.toggle_paused();
        assert!(window.paused.get_untracked());
        window.toggle_paused();
        assert!(!window.paused.get_untracked());
        runtime.dispose();
    }
}
