//! Formatting utilities for terminal output

use crate::core::LetterStatus;

/// Format a row of statuses as an emoji string, blanks as spaces
#[must_use]
pub fn statuses_to_emoji(statuses: &[Option<LetterStatus>]) -> String {
    statuses
        .iter()
        .map(|status| status.map_or(' ', LetterStatus::to_emoji))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining swap budget as a bar
#[must_use]
pub fn swaps_bar(remaining: usize, max: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, max.max(1) as f64, width)
}
