//! Loading progress shown while the galaxy is built.

use serde::{Deserialize, Serialize};

static LOADING_MESSAGES: &[&str] = &[
    "Generating galaxy...",
    "Creating star systems...",
    "Populating planets...",
    "Calibrating navigation systems...",
    "Preparing for launch...",
];

/// Percent added per step.
pub const LOADING_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingProgress {
    percent: u32,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step forward, capped at 100. Returns the new percentage.
    pub fn advance(&mut self) -> u32 {
        self.percent = (self.percent + LOADING_STEP).min(100);
        self.percent
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// Message for the current stage; the last one sticks at 100%.
    pub fn message(&self) -> &'static str {
        let stage = (self.percent / 20) as usize;
        LOADING_MESSAGES[stage.min(LOADING_MESSAGES.len() - 1)]
    }
}
