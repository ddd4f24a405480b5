// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use crate::domain::{LanguageBytes, RankedEntry};

/// Turn byte counts into percentage shares, largest first.
///
/// Equal shares keep the map's iteration order (the sort is stable).
pub fn rank(languages: &LanguageBytes) -> Vec<RankedEntry> {
    let total: u64 = languages
        .values()
        .fold(0u64, |acc, bytes| acc.saturating_add(*bytes));
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedEntry> = languages
        .iter()
        .map(|(language, &bytes)| RankedEntry {
            language: language.clone(),
            percent: bytes as f64 / total as f64 * 100.0,
            bytes,
        })
        .collect();

    ranked.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    ranked
}
