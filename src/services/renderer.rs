// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use crate::domain::RankedEntry;

/// Rendered in place of the table when there is nothing to show.
pub const NO_DATA: &str = "No language data available.";

/// Width of the share bar, in glyphs.
pub const BAR_WIDTH: usize = 20;

const FILLED: char = '█';
const EMPTY: char = '░';

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Render the ranked languages as a Markdown table.
pub fn render_table(entries: &[RankedEntry]) -> String {
    if entries.is_empty() {
        return NO_DATA.to_string();
    }

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push("| Language | Share | Size |".to_string());
    lines.push("|----------|-------|------|".to_string());

    for entry in entries {
        lines.push(format!(
            "| {} | {:.2}% {} | {} |",
            entry.language,
            entry.percent,
            progress_bar(entry.percent),
            format_size(entry.bytes)
        ));
    }

    lines.join("\n")
}

/// Human-readable byte count: `500 bytes`, `2.00 KB`, `5.00 MB`.
pub fn format_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} bytes")
    }
}

/// Fixed-width bar with `floor(BAR_WIDTH * percent / 100)` filled glyphs.
pub fn progress_bar(percent: f64) -> String {
    let filled = (BAR_WIDTH as f64 * percent / 100.0).floor();
    // `as` saturates: NaN and negatives land on 0
    let filled = (filled as usize).min(BAR_WIDTH);

    let mut bar = String::with_capacity(BAR_WIDTH * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, BAR_WIDTH - filled));
    bar
}
